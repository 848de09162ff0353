mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
    Ok(())
}

#[tokio::test]
async fn root_lists_resources() -> Result<()> {
    let server = common::spawn_server().await?;

    let body = server
        .client
        .get(server.url("/"))
        .send()
        .await?
        .json::<Value>()
        .await?;

    assert_eq!(body["endpoints"]["profile"], "/profile/");
    assert_eq!(body["endpoints"]["hello-view"], "/hello-view/");
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/nope/")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
