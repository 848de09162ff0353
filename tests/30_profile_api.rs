mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_then_list_and_retrieve() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/profile/"))
        .json(&json!({
            "email": "ann@Example.COM",
            "name": "Ann",
            "bio": "hi",
            "password": "pw123456"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = res.json::<Value>().await?;
    assert_eq!(body["Success"], "User created successfully");
    assert_eq!(body["user"]["email"], "ann@example.com");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
    let id = body["user"]["id"].as_i64().expect("id");

    let list = server
        .client
        .get(server.url("/profile/"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let users = list["users"].as_array().expect("users array");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "Ann");

    let res = server
        .client
        .get(server.url(&format!("/profile/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["user"], json!({"id": id, "email": "ann@example.com", "name": "Ann", "bio": "hi"}));
    Ok(())
}

#[tokio::test]
async fn list_is_empty_initially() -> Result<()> {
    let server = common::spawn_server().await?;

    let body = server
        .client
        .get(server.url("/profile/"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body, json!({"users": []}));
    Ok(())
}

#[tokio::test]
async fn create_reports_every_invalid_field() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/profile/"))
        .json(&json!({"email": "not-an-email", "name": "   "}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["email"][0], "Enter a valid email address.");
    assert_eq!(body["name"][0], "This field may not be blank.");
    assert_eq!(body["password"][0], "This field is required.");

    let list = server
        .client
        .get(server.url("/profile/"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(list["users"], json!([]));
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_rejected() -> Result<()> {
    let server = common::spawn_server().await?;
    server.create_profile("dup@example.com", "First").await?;

    let res = server
        .client
        .post(server.url("/profile/"))
        .json(&json!({
            "email": "dup@EXAMPLE.com",
            "name": "Second",
            "password": "pw"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["email"][0], "user profile with this email already exists.");
    Ok(())
}

#[tokio::test]
async fn missing_and_non_numeric_ids_are_not_found() -> Result<()> {
    let server = common::spawn_server().await?;

    for path in ["/profile/99", "/profile/abc"] {
        let res = server.client.get(server.url(path)).send().await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {path}");
    }
    Ok(())
}

#[tokio::test]
async fn owner_can_replace_patch_and_delete() -> Result<()> {
    let server = common::spawn_server().await?;
    let id = server.create_profile("ann@example.com", "Ann").await?;
    let token = server.token_for(id, "ann@example.com")?;
    let url = server.url(&format!("/profile/{}", id));

    let res = server
        .client
        .put(&url)
        .bearer_auth(&token)
        .json(&json!({
            "email": "ann2@example.com",
            "name": "Ann Two",
            "password": "new-password"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["Success"], "User updated successfully");
    assert_eq!(body["user"]["email"], "ann2@example.com");
    assert_eq!(body["user"]["bio"], "");

    let res = server
        .client
        .patch(&url)
        .header("Authorization", format!("Token {}", token))
        .json(&json!({"bio": "writes rust"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["user"]["bio"], "writes rust");
    assert_eq!(body["user"]["name"], "Ann Two");

    let res = server.client.delete(&url).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({"Success": "User deleted successfully"})
    );

    let res = server.client.get(&url).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn invalid_patch_leaves_record_untouched() -> Result<()> {
    let server = common::spawn_server().await?;
    let id = server.create_profile("ann@example.com", "Ann").await?;
    let token = server.token_for(id, "ann@example.com")?;
    let url = server.url(&format!("/profile/{}", id));

    let res = server
        .client
        .patch(&url)
        .bearer_auth(&token)
        .json(&json!({"name": "", "email": "bad"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body.get("name").is_some());
    assert!(body.get("email").is_some());

    let body = server.client.get(&url).send().await?.json::<Value>().await?;
    assert_eq!(body["user"]["name"], "Ann");
    assert_eq!(body["user"]["email"], "ann@example.com");
    Ok(())
}
