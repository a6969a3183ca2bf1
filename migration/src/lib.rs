use sea_orm_migration::prelude::*;

mod m20250604_000001_catalog;
mod m20250604_000002_song_genre;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250604_000001_catalog::Migration),
            Box::new(m20250604_000002_song_genre::Migration),
        ]
    }
}
