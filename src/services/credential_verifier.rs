//! Bearer token verification.
//!
//! Tokens are HS256 JWTs issued by Supabase Auth. A token is accepted only when
//! the signature matches the configured secret, `iss` matches the configured
//! issuer, `aud` is [`AUTHENTICATED_AUDIENCE`] and `exp` has not passed. The
//! subject claim is not required here; callers decide what to do when it is
//! absent.

use crate::configuration::AuthSettings;
use crate::models::VerifiedCredential;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

type Payload = Map<String, Value>;

/// Audience Supabase Auth puts on tokens of signed-in users.
pub const AUTHENTICATED_AUDIENCE: &str = "authenticated";

/// Why a bearer credential was rejected. All variants end up as 401.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    #[error("no bearer credential supplied")]
    MissingCredential,
    #[error("malformed token: {0}")]
    Malformed(String),
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token issuer does not match")]
    IssuerMismatch,
    #[error("token audience does not match")]
    AudienceMismatch,
    #[error("token signing algorithm is not accepted")]
    UnsupportedAlgorithm,
}

impl From<JwtError> for AuthFailure {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidIssuer => Self::IssuerMismatch,
            ErrorKind::InvalidAudience => Self::AudienceMismatch,
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => Self::UnsupportedAlgorithm,
            ErrorKind::MissingRequiredClaim(claim) => {
                Self::Malformed(format!("missing required claim `{}`", claim))
            }
            _ => Self::Malformed(err.to_string()),
        }
    }
}

/// Verifies bearer tokens against the trust parameters it was built with.
#[derive(Clone)]
pub struct CredentialVerifier {
    key: DecodingKey,
    validation: Validation,
    // same checks without the signature, used only to classify expired tokens
    expiry_probe: Validation,
    issuer: String,
}

impl CredentialVerifier {
    pub fn new(settings: &AuthSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[settings.issuer.as_str()]);
        validation.set_audience(&[AUTHENTICATED_AUDIENCE]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation.leeway = settings.leeway_secs;

        let mut expiry_probe = validation.clone();
        expiry_probe.insecure_disable_signature_validation();

        Self {
            key: DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
            validation,
            expiry_probe,
            issuer: settings.issuer.clone(),
        }
    }

    /// Checks signature, issuer, audience and expiry of a raw token.
    ///
    /// An expired token is reported as [`AuthFailure::Expired`] even when its
    /// signature is also wrong.
    pub fn verify(&self, token: &str) -> Result<VerifiedCredential, AuthFailure> {
        match decode::<Payload>(token, &self.key, &self.validation) {
            Ok(data) => Ok(VerifiedCredential::from_payload(&data.claims)),
            Err(err) => {
                let failure = AuthFailure::from(err);
                if failure == AuthFailure::InvalidSignature && self.is_expired(token) {
                    return Err(AuthFailure::Expired);
                }
                Err(failure)
            }
        }
    }

    /// Verifies the value of an `Authorization` header and emits the
    /// authentication diagnostics.
    pub fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Result<VerifiedCredential, AuthFailure> {
        let result = authorization
            .ok_or(AuthFailure::MissingCredential)
            .and_then(extract_bearer_token)
            .and_then(|token| self.verify(token));

        match &result {
            Ok(credential) => tracing::info!(
                sub = credential.subject().unwrap_or("<none>"),
                "Token validated."
            ),
            Err(AuthFailure::MissingCredential) => {
                tracing::debug!("No Authorization header on protected request")
            }
            Err(failure) => tracing::warn!(reason = %failure, "Authentication failed."),
        }

        result
    }

    fn is_expired(&self, token: &str) -> bool {
        matches!(
            decode::<Payload>(token, &self.key, &self.expiry_probe),
            Err(err) if matches!(err.kind(), ErrorKind::ExpiredSignature)
        )
    }
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("issuer", &self.issuer)
            .field("audience", &AUTHENTICATED_AUDIENCE)
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(authorization: &str) -> Result<&str, AuthFailure> {
    let mut parts = authorization.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        (Some(_), Some(_), None) => Err(AuthFailure::Malformed(
            "Expected Bearer scheme in Authorization header".to_string(),
        )),
        _ => Err(AuthFailure::Malformed(
            "Invalid Authorization header format".to_string(),
        )),
    }
}
