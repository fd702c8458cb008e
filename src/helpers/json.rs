use actix_web::error::InternalError;
use actix_web::http::header::WWW_AUTHENTICATE;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde::Serialize;

/// Envelope shared by every JSON body this API returns, success or error.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct JsonResponse {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<i32>,
}

impl JsonResponse {
    pub(crate) fn build() -> JsonResponseBuilder {
        JsonResponseBuilder::default()
    }
}

#[derive(Default)]
pub(crate) struct JsonResponseBuilder {
    id: Option<i32>,
}

impl JsonResponseBuilder {
    pub(crate) fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    fn with_status(self, status: StatusCode, message: String) -> JsonResponse {
        let message = if message.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        } else {
            message
        };

        JsonResponse {
            status: if status.is_success() { "OK" } else { "Error" }.to_string(),
            message,
            code: status.as_u16(),
            id: self.id,
        }
    }

    pub(crate) fn ok(self, msg: impl Into<String>) -> web::Json<JsonResponse> {
        web::Json(self.with_status(StatusCode::OK, msg.into()))
    }

    pub(crate) fn bad_request(self, msg: impl Into<String>) -> Error {
        self.error(StatusCode::BAD_REQUEST, msg.into())
    }

    /// 401 carrying a `WWW-Authenticate: Bearer` challenge.
    pub(crate) fn unauthorized(self, msg: impl Into<String>) -> Error {
        let body = self.with_status(StatusCode::UNAUTHORIZED, msg.into());
        let response = HttpResponse::Unauthorized()
            .insert_header((WWW_AUTHENTICATE, "Bearer"))
            .json(&body);
        InternalError::from_response(body.message, response).into()
    }

    pub(crate) fn internal_server_error(self, msg: impl Into<String>) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, msg.into())
    }

    fn error(self, status: StatusCode, msg: String) -> Error {
        let body = self.with_status(status, msg);
        let response = HttpResponse::build(status).json(&body);
        InternalError::from_response(body.message, response).into()
    }
}
