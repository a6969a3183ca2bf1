use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use super::Error;

const ENTITY: &str = "Genre";

pub async fn get<C: ConnectionTrait>(db: &C, id: i64) -> Result<entity::Genre, Error> {
    super::find::<entity::GenreEntity, _>(db, ENTITY, id).await
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<entity::Genre>, Error> {
    super::all::<entity::GenreEntity, _>(db, entity::GenreColumn::Id).await
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    mut genre: entity::GenreActive,
) -> Result<entity::Genre, Error> {
    genre.id = ActiveValue::NotSet;
    let genre = genre.insert(db).await?;
    tracing::debug! {id = %genre.id, "Created genre"};
    Ok(genre)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i64,
    mut genre: entity::GenreActive,
) -> Result<entity::Genre, Error> {
    get(db, id).await?;
    genre.id = ActiveValue::Unchanged(id);
    Ok(genre.update(db).await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<(), Error> {
    super::remove::<entity::GenreEntity, _>(db, ENTITY, id).await
}
