use axum::{extract::State, http::StatusCode};
use sea_orm::TransactionTrait;

use crate::api::{
    documents::GenreRequest,
    extract::{Json, Path},
    AppState, Error,
};
use crate::repository::genres;

pub async fn genre(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<entity::Genre>, Error> {
    let tx = db.begin().await?;
    Ok(Json(genres::get(&tx, id).await?))
}

pub async fn genres(
    State(AppState(db)): State<AppState>,
) -> Result<Json<Vec<entity::Genre>>, Error> {
    let tx = db.begin().await?;
    Ok(Json(genres::list(&tx).await?))
}

pub async fn create_genre(
    State(AppState(db)): State<AppState>,
    Json(body): Json<GenreRequest>,
) -> Result<(StatusCode, Json<entity::Genre>), Error> {
    let tx = db.begin().await?;
    let genre = genres::create(&tx, body.into_active()).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

pub async fn update_genre(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<GenreRequest>,
) -> Result<Json<entity::Genre>, Error> {
    let tx = db.begin().await?;
    let genre = genres::update(&tx, id, body.into_active()).await?;
    tx.commit().await?;
    Ok(Json(genre))
}

pub async fn delete_genre(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    let tx = db.begin().await?;
    genres::delete(&tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
