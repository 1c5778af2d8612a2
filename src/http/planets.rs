//! `/planets` routes.

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiError, ApiResult};
use crate::http::extract::{JsonBody, PathIds};
use crate::http::response::Message;
use crate::http::server::AppState;
use crate::models::{required, FavoriteKind, NewPlanet, Planet};

pub async fn list_planets(State(state): State<AppState>) -> ApiResult<Json<Vec<Planet>>> {
    Ok(Json(state.store.list_planets().await?))
}

pub async fn get_planet(
    State(state): State<AppState>,
    PathIds(id): PathIds<i64>,
) -> ApiResult<Json<Planet>> {
    state
        .store
        .get_planet(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(FavoriteKind::Planet.not_found_msg()))
}

pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewPlanet>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    let name = required("name", body.name.as_deref())?;
    let planet = state.store.create_planet(name, &body).await?;

    tracing::info!(id = planet.id, name = %planet.name, "Planet created");
    Ok((
        StatusCode::CREATED,
        Json(Message::new("New planet added").with_id(planet.id)),
    ))
}
