use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Claims this service knows how to read from a verified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClaimName {
    /// `sub`, the name identifier of the caller
    Subject,
    Issuer,
    Audience,
    Expiry,
    IssuedAt,
    Role,
    Email,
    SessionId,
}

impl ClaimName {
    pub const ALL: [ClaimName; 8] = [
        ClaimName::Subject,
        ClaimName::Issuer,
        ClaimName::Audience,
        ClaimName::Expiry,
        ClaimName::IssuedAt,
        ClaimName::Role,
        ClaimName::Email,
        ClaimName::SessionId,
    ];

    /// Registered JWT name of the claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimName::Subject => "sub",
            ClaimName::Issuer => "iss",
            ClaimName::Audience => "aud",
            ClaimName::Expiry => "exp",
            ClaimName::IssuedAt => "iat",
            ClaimName::Role => "role",
            ClaimName::Email => "email",
            ClaimName::SessionId => "session_id",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("User ID claim not found in JWT.")]
pub struct MissingIdentityClaim;

/// Claims of a token whose signature, issuer, audience and expiry were checked.
/// Lives for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifiedCredential {
    claims: BTreeMap<ClaimName, String>,
}

impl VerifiedCredential {
    /// Keeps the recognized claims of a decoded payload and drops everything else.
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        let claims = ClaimName::ALL
            .iter()
            .filter_map(|name| {
                payload
                    .get(name.as_str())
                    .and_then(claim_to_string)
                    .map(|value| (*name, value))
            })
            .collect();

        Self { claims }
    }

    pub fn get(&self, name: ClaimName) -> Option<&str> {
        self.claims.get(&name).map(String::as_str)
    }

    /// The caller's stable identifier. Blank subjects count as missing.
    pub fn subject(&self) -> Result<&str, MissingIdentityClaim> {
        self.get(ClaimName::Subject)
            .filter(|sub| !sub.trim().is_empty())
            .ok_or(MissingIdentityClaim)
    }

    pub fn claims(&self) -> &BTreeMap<ClaimName, String> {
        &self.claims
    }
}

fn claim_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // `aud` may be a list
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(claim_to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
