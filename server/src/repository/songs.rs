use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, ModelTrait, QueryOrder};

use super::Error;

const ENTITY: &str = "Song";

pub async fn get<C: ConnectionTrait>(db: &C, id: i64) -> Result<entity::Song, Error> {
    super::find::<entity::SongEntity, _>(db, ENTITY, id).await
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<entity::Song>, Error> {
    super::all::<entity::SongEntity, _>(db, entity::SongColumn::Id).await
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    mut song: entity::SongActive,
) -> Result<entity::Song, Error> {
    super::resolve::<entity::ArtistEntity, _>(db, "Artist", &song.artist_id).await?;
    song.id = ActiveValue::NotSet;
    let song = song.insert(db).await?;
    tracing::debug! {id = %song.id, artist_id = %song.artist_id, "Created song"};
    Ok(song)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i64,
    mut song: entity::SongActive,
) -> Result<entity::Song, Error> {
    get(db, id).await?;
    super::resolve::<entity::ArtistEntity, _>(db, "Artist", &song.artist_id).await?;
    song.id = ActiveValue::Unchanged(id);
    Ok(song.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<(), Error> {
    super::remove::<entity::SongEntity, _>(db, ENTITY, id).await
}

pub async fn artist<C: ConnectionTrait>(
    db: &C,
    song: &entity::Song,
) -> Result<entity::Artist, Error> {
    song.find_related(entity::ArtistEntity)
        .one(db)
        .await?
        .ok_or(Error::MissingReference {
            entity: "Artist",
            id: song.artist_id,
        })
}

/// Genres linked to `song`, one entry per link in the order the links were
/// made.
pub async fn genres<C: ConnectionTrait>(
    db: &C,
    song: &entity::Song,
) -> Result<Vec<entity::Genre>, Error> {
    Ok(song
        .find_related(entity::GenreEntity)
        .order_by_asc(entity::SongGenreColumn::Id)
        .all(db)
        .await?)
}
