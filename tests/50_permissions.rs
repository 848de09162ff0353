mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn non_owner_is_forbidden_and_nothing_changes() -> Result<()> {
    let server = common::spawn_server().await?;
    let ann = server.create_profile("ann@example.com", "Ann").await?;
    let bob = server.create_profile("bob@example.com", "Bob").await?;
    let bob_token = server.token_for(bob, "bob@example.com")?;
    let ann_url = server.url(&format!("/profile/{}", ann));

    let res = server
        .client
        .patch(&ann_url)
        .bearer_auth(&bob_token)
        .json(&json!({"name": "Hacked"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = res.json::<Value>().await?;
    assert_eq!(body["detail"], "You do not have permission to perform this action.");

    let res = server
        .client
        .put(&ann_url)
        .bearer_auth(&bob_token)
        .json(&json!({"email": "x@example.com", "name": "X", "password": "pw"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = server.client.delete(&ann_url).bearer_auth(&bob_token).send().await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let body = server.client.get(&ann_url).send().await?.json::<Value>().await?;
    assert_eq!(body["user"]["name"], "Ann");
    assert_eq!(body["user"]["email"], "ann@example.com");
    Ok(())
}

#[tokio::test]
async fn ownership_is_checked_before_body_validation() -> Result<()> {
    let server = common::spawn_server().await?;
    let ann = server.create_profile("ann@example.com", "Ann").await?;
    let bob = server.create_profile("bob@example.com", "Bob").await?;
    let bob_token = server.token_for(bob, "bob@example.com")?;

    let res = server
        .client
        .put(server.url(&format!("/profile/{}", ann)))
        .bearer_auth(&bob_token)
        .json(&json!({"email": "broken"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn missing_target_is_not_found_for_authenticated_caller() -> Result<()> {
    let server = common::spawn_server().await?;
    let bob = server.create_profile("bob@example.com", "Bob").await?;
    let bob_token = server.token_for(bob, "bob@example.com")?;

    let res = server
        .client
        .delete(server.url("/profile/4040"))
        .bearer_auth(&bob_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn owner_cannot_take_an_existing_email() -> Result<()> {
    let server = common::spawn_server().await?;
    server.create_profile("ann@example.com", "Ann").await?;
    let bob = server.create_profile("bob@example.com", "Bob").await?;
    let bob_token = server.token_for(bob, "bob@example.com")?;

    let res = server
        .client
        .patch(server.url(&format!("/profile/{}", bob)))
        .bearer_auth(&bob_token)
        .json(&json!({"email": "ANN@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["email"][0], "user profile with this email already exists.");
    Ok(())
}

#[tokio::test]
async fn non_owner_is_forbidden_even_with_an_unparseable_body() -> Result<()> {
    let server = common::spawn_server().await?;
    let ann = server.create_profile("ann@example.com", "Ann").await?;
    let bob = server.create_profile("bob@example.com", "Bob").await?;
    let bob_token = server.token_for(bob, "bob@example.com")?;
    let ann_url = server.url(&format!("/profile/{}", ann));

    let res = server
        .client
        .put(&ann_url)
        .bearer_auth(&bob_token)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = server
        .client
        .patch(&ann_url)
        .bearer_auth(&bob_token)
        .json(&json!({"name": 5}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let body = server.client.get(&ann_url).send().await?.json::<Value>().await?;
    assert_eq!(body["user"]["name"], "Ann");
    Ok(())
}

#[tokio::test]
async fn missing_target_is_not_found_even_with_an_unparseable_body() -> Result<()> {
    let server = common::spawn_server().await?;
    let bob = server.create_profile("bob@example.com", "Bob").await?;
    let bob_token = server.token_for(bob, "bob@example.com")?;

    for method in [reqwest::Method::PUT, reqwest::Method::PATCH] {
        let res = server
            .client
            .request(method.clone(), server.url("/profile/4040"))
            .bearer_auth(&bob_token)
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method}");
    }
    Ok(())
}

#[tokio::test]
async fn owner_with_an_unparseable_body_gets_bad_request() -> Result<()> {
    let server = common::spawn_server().await?;
    let ann = server.create_profile("ann@example.com", "Ann").await?;
    let ann_token = server.token_for(ann, "ann@example.com")?;

    let res = server
        .client
        .put(server.url(&format!("/profile/{}", ann)))
        .bearer_auth(&ann_token)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    let detail = body["detail"].as_str().unwrap_or_default();
    assert!(detail.starts_with("JSON parse error"), "detail was {detail}");
    Ok(())
}
