use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use super::Error;

const ENTITY: &str = "SongGenre";

pub async fn get<C: ConnectionTrait>(db: &C, id: i64) -> Result<entity::SongGenre, Error> {
    super::find::<entity::SongGenreEntity, _>(db, ENTITY, id).await
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<entity::SongGenre>, Error> {
    super::all::<entity::SongGenreEntity, _>(db, entity::SongGenreColumn::Id).await
}

async fn resolve<C: ConnectionTrait>(db: &C, link: &entity::SongGenreActive) -> Result<(), Error> {
    super::resolve::<entity::SongEntity, _>(db, "Song", &link.song_id).await?;
    super::resolve::<entity::GenreEntity, _>(db, "Genre", &link.genre_id).await
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    mut link: entity::SongGenreActive,
) -> Result<entity::SongGenre, Error> {
    resolve(db, &link).await?;
    link.id = ActiveValue::NotSet;
    let link = link.insert(db).await?;
    tracing::debug! {id = %link.id, song_id = %link.song_id, genre_id = %link.genre_id, "Linked song to genre"};
    Ok(link)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i64,
    mut link: entity::SongGenreActive,
) -> Result<entity::SongGenre, Error> {
    get(db, id).await?;
    resolve(db, &link).await?;
    link.id = ActiveValue::Unchanged(id);
    Ok(link.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<(), Error> {
    super::remove::<entity::SongGenreEntity, _>(db, ENTITY, id).await
}

/// The song and genre a link points at.
pub async fn expand<C: ConnectionTrait>(
    db: &C,
    link: &entity::SongGenre,
) -> Result<(entity::Song, entity::Genre), Error> {
    let song = super::songs::get(db, link.song_id).await?;
    let genre = super::genres::get(db, link.genre_id).await?;
    Ok((song, genre))
}
