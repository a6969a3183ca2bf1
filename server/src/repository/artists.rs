use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use super::Error;

const ENTITY: &str = "Artist";

pub async fn get<C: ConnectionTrait>(db: &C, id: i64) -> Result<entity::Artist, Error> {
    super::find::<entity::ArtistEntity, _>(db, ENTITY, id).await
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<entity::Artist>, Error> {
    super::all::<entity::ArtistEntity, _>(db, entity::ArtistColumn::Id).await
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    mut artist: entity::ArtistActive,
) -> Result<entity::Artist, Error> {
    artist.id = ActiveValue::NotSet;
    let artist = artist.insert(db).await?;
    tracing::debug! {id = %artist.id, name = %artist.name, "Created artist"};
    Ok(artist)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i64,
    mut artist: entity::ArtistActive,
) -> Result<entity::Artist, Error> {
    get(db, id).await?;
    artist.id = ActiveValue::Unchanged(id);
    Ok(artist.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<(), Error> {
    super::remove::<entity::ArtistEntity, _>(db, ENTITY, id).await
}
