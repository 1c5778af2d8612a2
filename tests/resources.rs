//! People, planets and users endpoints.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_people_lifecycle() {
    let app = common::spawn_app().await;

    let res = app.get("/people").await;
    assert_eq!(res.status(), 200);
    assert_eq!(res.json::<Value>().await.unwrap(), json!([]));

    let res = app
        .post_json(
            "/people",
            &json!({ "name": "Luke Skywalker", "gender": "male", "height": "172" }),
        )
        .await;
    assert_eq!(res.status(), 201);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["msg"], "New character added");
    let id = created["id"].as_i64().unwrap();

    let res = app.get(&format!("/people/{}", id)).await;
    assert_eq!(res.status(), 200);
    let person: Value = res.json().await.unwrap();
    assert_eq!(person["name"], "Luke Skywalker");
    assert_eq!(person["height"], "172");
    assert_eq!(person["eye_color"], Value::Null);

    let all: Vec<Value> = app.get("/people").await.json().await.unwrap();
    assert_eq!(all.len(), 1);

    app.shutdown.trigger();
}

#[tokio::test]
async fn test_missing_person_and_planet_are_404() {
    let app = common::spawn_app().await;

    let res = app.get("/people/42").await;
    assert_eq!(res.status(), 404);
    assert_eq!(common::msg(res).await, "Character not found");

    let res = app.get("/planets/42").await;
    assert_eq!(res.status(), 404);
    assert_eq!(common::msg(res).await, "Planet not found");

    let res = app.get("/users/42").await;
    assert_eq!(res.status(), 404);
    assert_eq!(common::msg(res).await, "User not found");

    app.shutdown.trigger();
}

#[tokio::test]
async fn test_non_integer_id_is_404() {
    let app = common::spawn_app().await;

    let res = app.get("/people/luke").await;
    assert_eq!(res.status(), 404);
    let json: Value = res.json().await.unwrap();
    assert!(json["msg"].is_string());

    let res = app.post("/users/1/favorites/planets/hoth").await;
    assert_eq!(res.status(), 404);

    app.shutdown.trigger();
}

#[tokio::test]
async fn test_create_requires_name() {
    let app = common::spawn_app().await;

    let res = app.post_json("/people", &json!({ "gender": "droid" })).await;
    assert_eq!(res.status(), 400);
    assert_eq!(common::msg(res).await, "'name' is required");

    let res = app.post_json("/planets", &json!({ "name": "   " })).await;
    assert_eq!(res.status(), 400);

    let res = app
        .client
        .post(app.url("/people"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let json: Value = res.json().await.unwrap();
    assert!(json["msg"].is_string());

    assert_eq!(app.get("/people").await.json::<Vec<Value>>().await.unwrap().len(), 0);

    app.shutdown.trigger();
}

#[tokio::test]
async fn test_planets() {
    let app = common::spawn_app().await;

    let hoth = app.create_planet("Hoth").await;
    let res = app
        .post_json("/planets", &json!({ "name": "Naboo", "climate": "temperate" }))
        .await;
    assert_eq!(res.status(), 201);

    let planets: Vec<Value> = app.get("/planets").await.json().await.unwrap();
    let names: Vec<_> = planets.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Hoth", "Naboo"]);
    assert_eq!(planets[1]["climate"], "temperate");

    let planet: Value = app.get(&format!("/planets/{}", hoth)).await.json().await.unwrap();
    assert_eq!(planet["id"], hoth);

    app.shutdown.trigger();
}

#[tokio::test]
async fn test_users() {
    let app = common::spawn_app().await;

    let res = app.get("/user").await;
    assert_eq!(res.status(), 200);
    assert_eq!(
        common::msg(res).await,
        "Hello, this is your GET /user response "
    );

    let id = app.create_user("obiwan@jedi.org").await;
    let res = app.post_json("/users", &json!({ "email": "obiwan@jedi.org" })).await;
    assert_eq!(res.status(), 409);

    let res = app.post_json("/users", &json!({})).await;
    assert_eq!(res.status(), 400);

    let users: Vec<Value> = app.get("/users").await.json().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], id);
    assert_eq!(users[0]["is_active"], true);

    app.shutdown.trigger();
}

#[tokio::test]
async fn test_sitemap_and_fallback() {
    let app = common::spawn_app().await;

    let res = app.get("/").await;
    assert_eq!(res.status(), 200);
    let sitemap: Value = res.json().await.unwrap();
    let endpoints = sitemap["endpoints"].as_array().unwrap();
    assert!(endpoints
        .iter()
        .any(|e| e["method"] == "DELETE" && e["path"] == "/users/{user_id}/favorites/people/{people_id}"));

    let res = app.get("/vehicles").await;
    assert_eq!(res.status(), 404);
    assert!(res.headers().contains_key("x-request-id"));

    app.shutdown.trigger();
}
