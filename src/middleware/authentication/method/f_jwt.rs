use crate::middleware::authentication::get_header;
use crate::models::VerifiedCredential;
use crate::services::{AuthFailure, CredentialVerifier};
use actix_web::dev::ServiceRequest;

/// Verify the `Authorization: Bearer` credential of the request.
#[tracing::instrument(name = "Authenticate with JWT.", skip(req, verifier))]
pub fn try_jwt(
    req: &ServiceRequest,
    verifier: &CredentialVerifier,
) -> Result<VerifiedCredential, AuthFailure> {
    let authorization = get_header::<String>(req, "authorization").map_err(|err| {
        tracing::warn!(reason = %err, "Authentication failed.");
        AuthFailure::Malformed(err)
    })?;

    verifier.authenticate(authorization.as_deref())
}
