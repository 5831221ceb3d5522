use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use domain::UpstreamError;

/// Failed proxy call, answered with a short plain-text body.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(UpstreamError);

impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        tracing::error!(cause = ?e, "{e}");
        Self(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            UpstreamError::Unreachable { .. } | UpstreamError::NonSuccess(_) => {
                StatusCode::BAD_GATEWAY
            }
            UpstreamError::RequestConstruction(_)
            | UpstreamError::BodyRead(_)
            | UpstreamError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
