#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use profiles_api::auth::issue_token;
use profiles_api::config::AppConfig;
use profiles_api::AppState;

/// A server bound to an ephemeral port, backed by a fresh in-memory store
pub struct TestServer {
    pub base_url: String,
    pub config: AppConfig,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn token_for(&self, id: i64, email: &str) -> Result<String> {
        Ok(issue_token(&self.config.security, id, email)?)
    }

    /// Registers a profile and returns its id from the response body
    pub async fn create_profile(&self, email: &str, name: &str) -> Result<i64> {
        let res = self
            .client
            .post(self.url("/profile/"))
            .json(&json!({
                "email": email,
                "name": name,
                "password": "secret-password"
            }))
            .send()
            .await?;

        anyhow::ensure!(
            res.status() == StatusCode::CREATED,
            "profile create returned {}",
            res.status()
        );

        let body = res.json::<Value>().await?;
        body["user"]["id"].as_i64().context("created user has no id")
    }
}

pub async fn spawn_server() -> Result<TestServer> {
    let mut config = AppConfig::development();
    config.api.enable_request_logging = false;

    let app = profiles_api::app(AppState::in_memory(config.clone()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        config,
        client: reqwest::Client::new(),
    })
}
