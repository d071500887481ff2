use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum HandlerErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    Conflict,
}

impl HandlerErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerErrorKind::Validation => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            HandlerErrorKind::Forbidden => StatusCode::FORBIDDEN,
            HandlerErrorKind::Conflict => StatusCode::CONFLICT,
        }
    }
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::Unauthorized => "Unauthorized",
            HandlerErrorKind::Forbidden => "Forbidden",
            HandlerErrorKind::Conflict => "Conflict",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Serialize)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        let error = match &err {
            ServiceError::InvalidInput(_) => HandlerErrorKind::Validation,
            ServiceError::Unauthorized(_) => HandlerErrorKind::Unauthorized,
            ServiceError::Forbidden(_) => HandlerErrorKind::Forbidden,
            ServiceError::Conflict(_) => HandlerErrorKind::Conflict,
        };
        HandlerError {
            error,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        tracing::warn!(error = %self, "Request rejected");
        let body = format!(
            "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>Campus Records | Error</title></head>\n<body>\n<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to the top page</a></p>\n</body>\n</html>",
            status,
            handlebars::html_escape(&self.message)
        );
        (status, Html(body)).into_response()
    }
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    InvalidInput(String),
    Unauthorized(String),
    Forbidden(String),
    Conflict(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            ServiceError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ServiceError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::ValidationError(msg) => ServiceError::InvalidInput(msg),
            RepositoryError::AlreadyExists(msg) => ServiceError::Conflict(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::repository_error::RepositoryError;

    #[test]
    fn test_repository_error_conversion() {
        let err: ServiceError = RepositoryError::already_exists("alice").into();
        assert!(matches!(err, ServiceError::Conflict(_)));
        let err: ServiceError = RepositoryError::validation("empty").into();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn test_handler_error_status() {
        let err: HandlerError = ServiceError::Forbidden("nope".into()).into();
        assert_eq!(err.error, HandlerErrorKind::Forbidden);
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);

        let err: HandlerError = ServiceError::Conflict("<taken>".into()).into();
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
