use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::{MissingIdentityClaim, VerifiedCredential};
use crate::services::{ProgressRecorder, RecordFailure};
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Add track progress.", skip(credential, recorder))]
#[post("")]
pub async fn add_handler(
    credential: web::ReqData<Arc<VerifiedCredential>>,
    form: web::Json<forms::TrackForm>,
    recorder: web::Data<ProgressRecorder>,
) -> Result<impl Responder> {
    let user_id = credential.subject().map_err(|err| {
        tracing::warn!("{}", err);
        JsonResponse::build().bad_request(err.to_string())
    })?;

    recorder
        .record(user_id, &form.track_name, form.completed_checkpoint_id)
        .await
        .map(|id| {
            JsonResponse::build()
                .set_id(id)
                .ok(format!("Added progress: (row id) {}", id))
        })
        .map_err(|err| match err {
            RecordFailure::EmptySubject => {
                JsonResponse::build().bad_request(MissingIdentityClaim.to_string())
            }
            RecordFailure::Store(err) => {
                tracing::error!("Failed to record progress: {}", err);
                JsonResponse::build().internal_server_error("Failed to record progress")
            }
        })
}
