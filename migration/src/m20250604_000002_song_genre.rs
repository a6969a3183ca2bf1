use sea_orm_migration::prelude::*;

use crate::m20250604_000001_catalog::{Genre, Song};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum SongGenre {
    Table,
    Id,
    SongId,
    GenreId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SongGenre::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SongGenre::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SongGenre::SongId).big_integer().not_null())
                    .col(ColumnDef::new(SongGenre::GenreId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-song_genre-song_id")
                            .from(SongGenre::Table, SongGenre::SongId)
                            .to(Song::Table, Song::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-song_genre-genre_id")
                            .from(SongGenre::Table, SongGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SongGenre::Table).to_owned())
            .await
    }
}
