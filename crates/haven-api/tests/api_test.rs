use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use haven::{Companion, CompanionConfig, Storage};
use haven_api::{build_router, AppState, Config};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }

    /// `(event name, data)` pairs of a Server-Sent Events body
    fn events(&self) -> Vec<(String, Value)> {
        let mut events = Vec::new();
        let mut name = None;
        for line in self.body.lines() {
            if let Some(n) = line.strip_prefix("event: ") {
                name = Some(n.to_string());
            } else if let Some(data) = line.strip_prefix("data: ") {
                let value = serde_json::from_str(data).unwrap();
                events.push((name.take().unwrap_or_default(), value));
            }
        }
        events
    }
}

async fn test_app() -> Router {
    let companion = Companion::open(Storage::in_memory(), CompanionConfig::immediate())
        .await
        .unwrap();
    let state = Arc::new(AppState::new(Config::default(), companion));
    build_router(state)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

async fn signed_in_app() -> Router {
    let app = test_app().await;
    let response = call(
        &app,
        Method::POST,
        "/auth/sign-in",
        Some(json!({ "email": "jane@example.com", "password": "secret" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    app
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let response = call(&app, Method::GET, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["storage:memory"], "connected");
}

#[tokio::test]
async fn test_chat_routes_require_session() {
    let app = test_app().await;

    for (method, uri, body) in [
        (Method::GET, "/chats", None),
        (Method::POST, "/chats", None),
        (Method::GET, "/chats/abc", None),
        (Method::GET, "/chats/abc/messages", None),
        (Method::POST, "/messages", Some(json!({ "text": "hello" }))),
    ] {
        let response = call(&app, method, uri, body).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn test_sign_in_and_session() {
    let app = test_app().await;

    let response = call(&app, Method::GET, "/auth/session", None).await;
    assert_eq!(response.json()["signed_in"], false);

    let response = call(
        &app,
        Method::POST,
        "/auth/sign-in",
        Some(json!({ "email": "jane@example.com", "password": "" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    let user = response.json();
    assert_eq!(user["name"], "jane");
    assert_eq!(user["email"], "jane@example.com");
    assert!(user["avatar"].as_str().unwrap().contains("jane@example.com"));

    let response = call(&app, Method::GET, "/auth/session", None).await;
    let session = response.json();
    assert_eq!(session["signed_in"], true);
    assert_eq!(session["user"]["user_id"], user["user_id"]);
}

#[tokio::test]
async fn test_sign_up_uses_given_name() {
    let app = test_app().await;
    let response = call(
        &app,
        Method::POST,
        "/auth/sign-up",
        Some(json!({ "email": "sam@example.com", "password": "pw", "name": "Sam" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["name"], "Sam");
}

#[tokio::test]
async fn test_send_message_streams_exchange() {
    let app = signed_in_app().await;

    let response = call(&app, Method::POST, "/chats", None).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let chat = response.json();
    assert_eq!(chat["title"], "New Chat");
    let chat_id = chat["chat_id"].as_str().unwrap().to_string();

    let response = call(
        &app,
        Method::POST,
        &format!("/chats/{}/messages", chat_id),
        Some(json!({ "text": "  Can we do some breathing?  ", "mood": "Anxious" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/event-stream"));

    let events = response.events();
    let names: Vec<&str> = events.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec!["user_message", "composing", "assistant_message", "done"]
    );
    assert_eq!(events[0].1["message"]["text"], "Can we do some breathing?");
    assert_eq!(events[0].1["message"]["mood"], "anxious");
    assert_eq!(events[2].1["message"]["category"], "exercise");

    let response = call(&app, Method::GET, &format!("/chats/{}", chat_id), None).await;
    let chat = response.json();
    assert_eq!(chat["title"], "Can we do some breathing?");
    let messages = chat["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["sender"], "user");
    assert_eq!(messages[1]["sender"], "assistant");

    let response = call(
        &app,
        Method::GET,
        &format!("/chats/{}/messages?limit=1", chat_id),
        None,
    )
    .await;
    let body = response.json();
    assert_eq!(body["composing"], false);
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["messages"][0]["sender"], "assistant");
}

#[tokio::test]
async fn test_unknown_mood_is_ignored() {
    let app = signed_in_app().await;
    let chat_id = call(&app, Method::POST, "/chats", None).await.json()["chat_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = call(
        &app,
        Method::POST,
        &format!("/chats/{}/messages", chat_id),
        Some(json!({ "text": "hello", "mood": "sleepy" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let events = response.events();
    assert!(events[0].1["message"].get("mood").is_none());
    assert_eq!(events[2].1["message"]["category"], "tip");
}

#[tokio::test]
async fn test_blank_and_misdirected_sends() {
    let app = signed_in_app().await;
    let chat_id = call(&app, Method::POST, "/chats", None).await.json()["chat_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = call(
        &app,
        Method::POST,
        &format!("/chats/{}/messages", chat_id),
        Some(json!({ "text": "   " })),
    )
    .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = call(
        &app,
        Method::POST,
        "/chats/missing/messages",
        Some(json!({ "text": "hello" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = call(&app, Method::POST, "/messages", Some(json!({ "text": "" }))).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let chats = call(&app, Method::GET, "/chats", None).await.json();
    assert_eq!(chats["chats"].as_array().unwrap().len(), 1);
    assert_eq!(chats["chats"][0]["message_count"], 0);
}

#[tokio::test]
async fn test_send_to_current_creates_chat() {
    let app = signed_in_app().await;

    let response = call(
        &app,
        Method::POST,
        "/messages",
        Some(json!({ "text": "Share a quote please" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    let chat_id = response.headers["x-chat-id"].to_str().unwrap().to_string();

    let events = response.events();
    assert_eq!(events[2].1["message"]["category"], "quote");

    let chats = call(&app, Method::GET, "/chats", None).await.json();
    assert_eq!(chats["current_chat_id"], chat_id.as_str());
    assert_eq!(chats["chats"][0]["title"], "Share a quote please");
    assert_eq!(chats["chats"][0]["message_count"], 2);

    // A second send lands in the same chat
    let response = call(
        &app,
        Method::POST,
        "/messages",
        Some(json!({ "text": "another one" })),
    )
    .await;
    assert_eq!(response.headers["x-chat-id"].to_str().unwrap(), chat_id);
}

#[tokio::test]
async fn test_select_and_delete() {
    let app = signed_in_app().await;
    let first = call(&app, Method::POST, "/chats", None).await.json()["chat_id"]
        .as_str()
        .unwrap()
        .to_string();
    let second = call(&app, Method::POST, "/chats", None).await.json()["chat_id"]
        .as_str()
        .unwrap()
        .to_string();

    let chats = call(&app, Method::GET, "/chats", None).await.json();
    assert_eq!(chats["chats"][0]["chat_id"], second.as_str());
    assert_eq!(chats["current_chat_id"], second.as_str());

    let response = call(
        &app,
        Method::PUT,
        "/chats/current",
        Some(json!({ "chat_id": first })),
    )
    .await;
    assert_eq!(response.json()["current_chat_id"], first.as_str());

    let response = call(
        &app,
        Method::PUT,
        "/chats/current",
        Some(json!({ "chat_id": "does-not-exist" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["current_chat_id"], first.as_str());

    let response = call(&app, Method::DELETE, &format!("/chats/{}", first), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let chats = call(&app, Method::GET, "/chats", None).await.json();
    assert_eq!(chats["chats"].as_array().unwrap().len(), 1);
    assert_eq!(chats["current_chat_id"], second.as_str());

    let response = call(&app, Method::DELETE, "/chats/does-not-exist", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = call(&app, Method::GET, &format!("/chats/{}", first), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sign_out_clears_chats() {
    let app = signed_in_app().await;
    call(&app, Method::POST, "/messages", Some(json!({ "text": "hi" }))).await;

    let response = call(&app, Method::POST, "/auth/sign-out", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = call(&app, Method::GET, "/chats", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    call(
        &app,
        Method::POST,
        "/auth/sign-in",
        Some(json!({ "email": "jane@example.com", "password": "secret" })),
    )
    .await;
    let chats = call(&app, Method::GET, "/chats", None).await.json();
    assert!(chats["chats"].as_array().unwrap().is_empty());
    assert!(chats["current_chat_id"].is_null());
}

#[tokio::test]
async fn test_content_routes() {
    let app = test_app().await;

    let exercises = call(&app, Method::GET, "/content/exercises", None).await.json();
    assert_eq!(exercises.as_array().unwrap().len(), 3);

    let response = call(&app, Method::GET, "/content/exercises/box%20breathing", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let exercise = response.json();
    assert_eq!(exercise["name"], "Box Breathing");
    assert_eq!(exercise["pattern"], json!([4, 4, 4, 4]));

    let response = call(&app, Method::GET, "/content/exercises/unknown", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    for uri in ["/content/tips", "/content/quotes", "/content/activities"] {
        let body = call(&app, Method::GET, uri, None).await.json();
        assert_eq!(body["items"].as_array().unwrap().len(), 10, "{}", uri);
    }

    let moods = call(&app, Method::GET, "/content/moods", None).await.json();
    let moods = moods.as_array().unwrap();
    assert_eq!(moods.len(), 8);
    assert!(moods.iter().all(|m| m["suggestions"].as_array().unwrap().len() == 3));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = test_app().await;
    let response = call(&app, Method::GET, "/api/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let doc = response.json();
    assert!(doc["paths"].get("/chats/{chat_id}/messages").is_some());
    assert!(doc["paths"].get("/auth/sign-in").is_some());
}
