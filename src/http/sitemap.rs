//! `GET /`: the list of every route the service answers.

use axum::Json;
use serde::Serialize;

/// Every route, as (method, path). Kept in sync with `ApiServer::build_router`.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/user"),
    ("GET", "/people"),
    ("POST", "/people"),
    ("GET", "/people/{people_id}"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("GET", "/planets/{planets_id}"),
    ("GET", "/users"),
    ("POST", "/users"),
    ("GET", "/users/{user_id}"),
    ("GET", "/users/{user_id}/favorites"),
    ("POST", "/users/{user_id}/favorites/people/{people_id}"),
    ("DELETE", "/users/{user_id}/favorites/people/{people_id}"),
    ("POST", "/users/{user_id}/favorites/planets/{planets_id}"),
    ("DELETE", "/users/{user_id}/favorites/planets/{planets_id}"),
];

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Sitemap {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<Endpoint>,
}

pub async fn sitemap() -> Json<Sitemap> {
    Json(Sitemap {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ROUTES
            .iter()
            .map(|&(method, path)| Endpoint { method, path })
            .collect(),
    })
}
