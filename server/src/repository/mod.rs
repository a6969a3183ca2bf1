//! CRUD accessors for the catalog tables.
//!
//! Every function takes the connection it runs on, usually the transaction
//! opened by the calling handler. Cascading deletes are left to the store.

pub mod artists;
pub mod genres;
pub mod song_genres;
pub mod songs;

use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, PrimaryKeyTrait, QueryOrder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Referenced {entity} {id} not found")]
    MissingReference { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

async fn find<E, C>(db: &C, entity: &'static str, id: i64) -> Result<E::Model, Error>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound { entity, id })
}

async fn all<E, C>(db: &C, order: E::Column) -> Result<Vec<E::Model>, Error>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    Ok(E::find().order_by_asc(order).all(db).await?)
}

async fn remove<E, C>(db: &C, entity: &'static str, id: i64) -> Result<(), Error>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    let res = E::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(Error::NotFound { entity, id });
    }
    tracing::debug! {%entity, %id, "Deleted"};
    Ok(())
}

/// Fails with [`Error::MissingReference`] unless the foreign key in `key`
/// points at an existing row of `E`.
async fn resolve<E, C>(db: &C, entity: &'static str, key: &ActiveValue<i64>) -> Result<(), Error>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    let id = match key {
        ActiveValue::Set(id) | ActiveValue::Unchanged(id) => *id,
        ActiveValue::NotSet => return Ok(()),
    };
    match find::<E, C>(db, entity, id).await {
        Ok(_) => Ok(()),
        Err(Error::NotFound { entity, id }) => Err(Error::MissingReference { entity, id }),
        Err(e) => Err(e),
    }
}
