//! `/user` and `/users` routes.

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{is_unique_violation, ApiError, ApiResult};
use crate::http::extract::{JsonBody, PathIds};
use crate::http::response::Message;
use crate::http::server::AppState;
use crate::models::{required, NewUser, User, UserFavorites};

pub async fn hello() -> Json<Message> {
    Json(Message::new("Hello, this is your GET /user response "))
}

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.store.list_users().await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    PathIds(id): PathIds<i64>,
) -> ApiResult<Json<User>> {
    state
        .store
        .get_user(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User not found"))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    let email = required("email", body.email.as_deref())?;

    let user = match state
        .store
        .create_user(email, body.is_active.unwrap_or(true))
        .await
    {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::conflict("User already exists"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(id = user.id, "User created");
    Ok((
        StatusCode::CREATED,
        Json(Message::new("New user added").with_id(user.id)),
    ))
}

pub async fn get_favorites(
    State(state): State<AppState>,
    PathIds(user_id): PathIds<i64>,
) -> ApiResult<Json<UserFavorites>> {
    Ok(Json(state.favorites.list(user_id).await?))
}
