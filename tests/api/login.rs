use serde_json::{json, Value};
use token_auth::modules::auth::token::verify;

use crate::helpers::{TestApp, TEST_SECRET};

#[tokio::test]
async fn should_return_200_with_token_for_admin() {
    let app = TestApp::new().await;

    let response = app
        .login(&json!({ "username": "admin", "password": "123" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let token = body["token"].as_str().expect("token missing");

    let claims = verify(token, TEST_SECRET.as_bytes()).unwrap();
    assert_eq!(claims.user_id, 1);
    assert_eq!(claims.role, "admin");
}

#[tokio::test]
async fn should_return_401_for_wrong_credentials() {
    let app = TestApp::new().await;

    let bodies = [
        json!({ "username": "admin", "password": "1234" }),
        json!({ "username": "Admin", "password": "123" }),
        json!({ "username": "user", "password": "123" }),
        json!({ "username": "", "password": "" }),
        json!({ "username": "admin" }),
        json!({ "password": "123" }),
        json!({}),
        json!({ "username": "admin", "password": 123 }),
    ];

    for body in bodies.iter() {
        let response = app.login(body).await;
        assert_eq!(response.status().as_u16(), 401, "body: {}", body);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Invalid credentials" }));
        assert!(body.get("token").is_none());
    }
}

#[tokio::test]
async fn should_return_401_without_json_content_type() {
    let app = TestApp::new().await;

    let response = app
        .login_raw("text/plain", r#"{"username":"admin","password":"123"}"#)
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .login_raw("application/json", r#"{"username": "admin","#)
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Malformed request body" }));
}

#[tokio::test]
async fn should_return_401_for_empty_json_body() {
    let app = TestApp::new().await;

    let response = app.login_raw("application/json", "").await;
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid credentials" }));
}
