use axum::{
    extract::{Json, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use api::relay::{RelayResp, ValidationError};

pub mod relay;
pub mod svc;

// relay errors
//
// every failure is reported to the page in the same {ok, error} envelope as a
// success, with the status telling the kinds apart.  nothing is retried
#[derive(Debug)]
pub enum RelayError {
    MethodNotAllowed,
    Validation(ValidationError),
    Rejected(FormRejection),
    Delivery(anyhow::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RelayError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                String::from("Method not allowed"),
            ),
            RelayError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RelayError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
            RelayError::Delivery(err) => {
                // the details stay in the log
                error!("relay failed: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, String::from("Mail failed"))
            }
        };

        (status, Json(RelayResp::err(message))).into_response()
    }
}

impl From<ValidationError> for RelayError {
    fn from(err: ValidationError) -> Self {
        RelayError::Validation(err)
    }
}

impl From<FormRejection> for RelayError {
    fn from(rejection: FormRejection) -> Self {
        RelayError::Rejected(rejection)
    }
}

impl From<anyhow::Error> for RelayError {
    fn from(err: anyhow::Error) -> Self {
        RelayError::Delivery(err)
    }
}
