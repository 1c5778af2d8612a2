//! Shared utilities for integration tests.

use std::time::Duration;

use serde_json::{json, Value};
use starwars_api::config::ApiConfig;
use starwars_api::lifecycle::{start, Shutdown};

/// A running server backed by a private in-memory database.
pub struct TestApp {
    pub base: String,
    pub client: reqwest::Client,
    pub shutdown: Shutdown,
}

/// Start the API on an ephemeral port.
pub async fn spawn_app() -> TestApp {
    let mut config = ApiConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.database.url = "sqlite::memory:".into();

    let (server, listener) = start(config).await.expect("startup failed");
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    TestApp {
        base: format!("http://{}", addr),
        client,
        shutdown,
    }
}

#[allow(dead_code)]
impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.expect("server unreachable")
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.client.post(self.url(path)).send().await.expect("server unreachable")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("server unreachable")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client.delete(self.url(path)).send().await.expect("server unreachable")
    }

    /// Create a row through the API and return its id.
    pub async fn create(&self, path: &str, body: Value) -> i64 {
        let res = self.post_json(path, &body).await;
        assert_eq!(res.status(), 201, "creating {} failed", path);
        let json: Value = res.json().await.unwrap();
        json["id"].as_i64().expect("created row has an id")
    }

    pub async fn create_user(&self, email: &str) -> i64 {
        self.create("/users", json!({ "email": email })).await
    }

    pub async fn create_person(&self, name: &str) -> i64 {
        self.create("/people", json!({ "name": name })).await
    }

    pub async fn create_planet(&self, name: &str) -> i64 {
        self.create("/planets", json!({ "name": name })).await
    }
}

/// Read the `msg` field of an envelope response.
#[allow(dead_code)]
pub async fn msg(res: reqwest::Response) -> String {
    let json: Value = res.json().await.unwrap();
    json["msg"].as_str().unwrap_or_default().to_string()
}
