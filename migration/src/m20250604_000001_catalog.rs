use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Artist {
    Table,
    Id,
    Name,
    Age,
    Bio,
}

#[derive(Iden)]
pub enum Genre {
    Table,
    Id,
    Description,
}

#[derive(Iden)]
pub enum Song {
    Table,
    Id,
    Title,
    ArtistId,
    Album,
    Length,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artist::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artist::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Artist::Age).integer().not_null())
                    .col(ColumnDef::new(Artist::Bio).string_len(500).not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(Genre::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genre::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Genre::Description)
                            .string_len(100)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Song::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Song::Title).string_len(50).not_null())
                    .col(ColumnDef::new(Song::ArtistId).big_integer().not_null())
                    .col(ColumnDef::new(Song::Album).string_len(50).not_null())
                    .col(ColumnDef::new(Song::Length).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-song-artist_id")
                            .from(Song::Table, Song::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Song::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genre::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await
    }
}
