//! `/users/{user_id}/favorites/{people,planets}/{id}` routes.

use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiResult;
use crate::http::extract::PathIds;
use crate::http::response::Message;
use crate::http::server::AppState;
use crate::models::FavoriteKind;

async fn add(
    state: AppState,
    kind: FavoriteKind,
    user_id: i64,
    target_id: i64,
) -> ApiResult<Json<Message>> {
    state.favorites.add(kind, user_id, target_id).await?;
    Ok(Json(Message::new(kind.added_msg())))
}

async fn remove(
    state: AppState,
    kind: FavoriteKind,
    user_id: i64,
    target_id: i64,
) -> ApiResult<(StatusCode, Json<Message>)> {
    state.favorites.remove(kind, user_id, target_id).await?;
    Ok((StatusCode::ACCEPTED, Json(Message::new(kind.deleted_msg()))))
}

pub async fn add_person(
    State(state): State<AppState>,
    PathIds((user_id, people_id)): PathIds<(i64, i64)>,
) -> ApiResult<Json<Message>> {
    add(state, FavoriteKind::Person, user_id, people_id).await
}

pub async fn remove_person(
    State(state): State<AppState>,
    PathIds((user_id, people_id)): PathIds<(i64, i64)>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    remove(state, FavoriteKind::Person, user_id, people_id).await
}

pub async fn add_planet(
    State(state): State<AppState>,
    PathIds((user_id, planets_id)): PathIds<(i64, i64)>,
) -> ApiResult<Json<Message>> {
    add(state, FavoriteKind::Planet, user_id, planets_id).await
}

pub async fn remove_planet(
    State(state): State<AppState>,
    PathIds((user_id, planets_id)): PathIds<(i64, i64)>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    remove(state, FavoriteKind::Planet, user_id, planets_id).await
}
