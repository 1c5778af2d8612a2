//! `/people` routes.

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiError, ApiResult};
use crate::http::extract::{JsonBody, PathIds};
use crate::http::response::Message;
use crate::http::server::AppState;
use crate::models::{required, FavoriteKind, NewPerson, Person};

pub async fn list_people(State(state): State<AppState>) -> ApiResult<Json<Vec<Person>>> {
    Ok(Json(state.store.list_people().await?))
}

pub async fn get_person(
    State(state): State<AppState>,
    PathIds(id): PathIds<i64>,
) -> ApiResult<Json<Person>> {
    state
        .store
        .get_person(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(FavoriteKind::Person.not_found_msg()))
}

pub async fn create_person(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewPerson>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    let name = required("name", body.name.as_deref())?;
    let person = state.store.create_person(name, &body).await?;

    tracing::info!(id = person.id, name = %person.name, "Character created");
    Ok((
        StatusCode::CREATED,
        Json(Message::new("New character added").with_id(person.id)),
    ))
}
