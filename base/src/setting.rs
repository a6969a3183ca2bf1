use directories::ProjectDirs;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::{util, CLI_NAME};

static DEFAULT_DB_FILE: &str = "tuna.db";
static CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not locate program directories")]
    Directories,
    #[error("Path is not valid UTF-8: {0:?}")]
    InvalidPath(PathBuf),
    #[error("Could not create the data directory: {0}")]
    Io(#[from] io::Error),
    #[error("Could not parse the config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub db: String,
}

fn project_dirs() -> Result<ProjectDirs, SettingsError> {
    ProjectDirs::from("com", "github", CLI_NAME).ok_or(SettingsError::Directories)
}

pub fn load(path: Option<PathBuf>) -> Result<Settings, SettingsError> {
    let path = match path {
        Some(path) => path,
        None => project_dirs()?.config_dir().join(CONFIG_FILE),
    };
    tracing::info! {?path, "Loading config file"};
    let content = fs::read_to_string(path).unwrap_or_default();
    let mut set: Settings = toml::from_str(content.as_str())?;
    set = generate_default(set)?;
    tracing::trace! {settings = ?set, "Loaded settings"};
    Ok(set)
}

pub fn generate_default(mut set: Settings) -> Result<Settings, SettingsError> {
    if set.db == String::default() {
        let data_dir = project_dirs()?.data_dir().to_path_buf();
        util::mkdirp(&data_dir)?;
        let file = data_dir.join(DEFAULT_DB_FILE);
        let file = util::path_to_str(&file).ok_or(SettingsError::InvalidPath(file))?;
        set.db = format!("sqlite://{}?mode=rwc", file);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_database_url_is_kept() {
        let set = Settings {
            db: "sqlite::memory:".to_string(),
        };
        assert_eq!(generate_default(set.clone()).unwrap(), set);
    }

    #[test]
    fn reads_database_url_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "db = \"postgres://tuna@localhost/tuna\"").unwrap();
        let set = load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(set.db, "postgres://tuna@localhost/tuna");
    }

    #[test]
    fn rejects_malformed_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "db = [").unwrap();
        assert!(matches!(
            load(Some(file.path().to_path_buf())),
            Err(SettingsError::Parse(_))
        ));
    }
}
