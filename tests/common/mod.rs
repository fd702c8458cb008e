#![allow(dead_code)]

use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use std::net::TcpListener;
use tracks::configuration::{AuthSettings, Settings, StoreSettings};
use wiremock::MockServer;

pub const JWT_SECRET: &str = "integration-secret-that-is-at-least-32-chars";
pub const ISSUER: &str = "https://test-project.supabase.co/auth/v1";
pub const STORE_KEY: &str = "test-service-key";

pub struct TestApp {
    pub address: String,
    pub store_server: MockServer,
}

pub fn test_settings(store_url: &str) -> Settings {
    Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        auth: AuthSettings {
            jwt_secret: JWT_SECRET.to_string(),
            issuer: ISSUER.to_string(),
            ..AuthSettings::default()
        },
        store: StoreSettings {
            url: store_url.to_string(),
            key: STORE_KEY.to_string(),
            ..StoreSettings::default()
        },
    }
}

// the server runs on a background task, the store is a wiremock server
pub async fn spawn_app() -> TestApp {
    let store_server = MockServer::start().await;

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = tracks::startup::run(listener, test_settings(&store_server.uri()))
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        store_server,
    }
}

pub fn claims(sub: Option<&str>, expires_in: i64) -> Value {
    let now = chrono::Utc::now().timestamp();
    let mut claims = json!({
        "iss": ISSUER,
        "aud": "authenticated",
        "role": "authenticated",
        "iat": now,
        "exp": now + expires_in,
    });
    if let Some(sub) = sub {
        claims["sub"] = json!(sub);
    }
    claims
}

pub fn create_jwt(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("Failed to sign token")
}

/// A row as PostgREST returns it after `Prefer: return=representation`.
pub fn stored_row(id: i32, user_id: &str, track_name: &str, completed_id: i32) -> Value {
    json!([{
        "id": id,
        "user_id": user_id,
        "track_name": track_name,
        "completed_id": completed_id,
        "created_at": "2024-05-01T10:15:30.123456+00:00"
    }])
}
