use clap::{Parser, Subcommand};
use eyre::{eyre, Result, WrapErr};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    prelude::*,
};

use base::{
    database::open_database,
    setting::{generate_default, load, Settings},
    CLI_NAME, VERSION,
};

#[derive(Parser)]
#[command(name = CLI_NAME, author, version = VERSION, about, long_about = None)]
#[command(next_line_help = true)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, name = "ADDRESS", default_value_t = String::from("127.0.0.1:4000"))]
    listen_address: String,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Prints the default configuration
    DefaultConfig,
    /// Applies pending schema migrations and exits
    Migrate,
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    // logging
    color_eyre::install()?;
    let tracing_builder = tracing_subscriber::registry().with(fmt::layer());
    if std::env::var(base::TUNA_LOGLEVEL).is_ok() {
        tracing_builder.with(EnvFilter::from_env(base::TUNA_LOGLEVEL))
    } else {
        tracing_builder.with(EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }
    .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::DefaultConfig => {
            let default = generate_default(Settings::default())?;
            let str = toml::to_string(&default)?;
            println!("{}", str);
            Ok(())
        }
        Command::Migrate => {
            let settings = load(cli.config)?;
            let db = open_database(&settings.db).await?;
            tuna::migrate(&db).await?;
            Ok(())
        }
        Command::Serve => {
            let settings = load(cli.config)?;
            let db = open_database(&settings.db).await?;
            tuna::migrate(&db).await?;

            let addr: SocketAddr = cli
                .listen_address
                .parse()
                .wrap_err(eyre!("Invalid listen address"))?;
            tracing::info! {%addr, "Listening"};
            let router = tuna::api::router(db);
            axum::Server::bind(&addr)
                .serve(router.into_make_service())
                .with_graceful_shutdown(shutdown())
                .await?;
            tracing::info!("Server stopped");
            Ok(())
        }
    }
}

async fn shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Could not listen for the shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn reports_crate_version() {
        assert_eq!(Cli::command().get_version(), Some(VERSION));
    }
}
