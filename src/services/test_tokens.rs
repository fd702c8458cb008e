use crate::configuration::AuthSettings;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

pub(crate) const SECRET: &str = "test-secret-that-is-at-least-32-characters-long";
pub(crate) const ISSUER: &str = "https://test-project.supabase.co/auth/v1";

pub(crate) fn auth_settings() -> AuthSettings {
    AuthSettings {
        jwt_secret: SECRET.to_string(),
        issuer: ISSUER.to_string(),
        ..AuthSettings::default()
    }
}

/// Supabase-shaped claims expiring `expires_in` seconds from now.
pub(crate) fn claims(sub: Option<&str>, expires_in: i64) -> Value {
    let now = chrono::Utc::now().timestamp();
    let mut claims = json!({
        "iss": ISSUER,
        "aud": "authenticated",
        "role": "authenticated",
        "email": "runner@example.com",
        "iat": now,
        "exp": now + expires_in,
    });
    if let Some(sub) = sub {
        claims["sub"] = json!(sub);
    }
    claims
}

pub(crate) fn mint(claims: &Value) -> String {
    mint_with_secret(claims, SECRET)
}

pub(crate) fn mint_with_secret(claims: &Value, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}
