pub mod credential_verifier;
pub mod progress_recorder;
#[cfg(test)]
pub(crate) mod test_tokens;

pub use credential_verifier::{
    extract_bearer_token, AuthFailure, CredentialVerifier, AUTHENTICATED_AUDIENCE,
};
pub use progress_recorder::{ProgressRecorder, RecordFailure};
