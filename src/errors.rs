use crate::util::extractor::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use validator::ValidationErrors;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Debug)]
pub struct ErrorMessage {
    pub code: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Infrastructure failures only.
// Date validation outcomes are rendered by `DateValidationResult` itself.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),

    QueryRejection(QueryRejection),
    JsonRejection(JsonRejection),

    ValidationError(ValidationErrors),

    Sqlx(sqlx::Error),

    Anyhow(anyhow::Error),

    Any(ErrorMessage),
}

impl ApiError {
    fn code(&self) -> u16 {
        use ApiError::*;

        match self {
            BadRequest(_) => 400,
            QueryRejection(inner) => inner.status().as_u16(),
            JsonRejection(inner) => inner.status().as_u16(),
            ValidationError(_) => 400,
            Sqlx(_) | Anyhow(_) => 500,
            Any(message) => message.code,
        }
    }

    fn reason(&self) -> &str {
        StatusCode::from_u16(self.code())
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown error")
    }

    fn message(&self) -> Option<String> {
        use ApiError::*;

        match self {
            BadRequest(msg) => Some(msg.clone()),
            QueryRejection(error) => Some(error.body_text()),
            JsonRejection(error) => Some(error.body_text()),
            ValidationError(err) => Some(err.to_string().replace('\n', "; ")),
            Sqlx(_) | Anyhow(_) => None,
            Any(msg) => msg.message.clone(),
        }
    }

    fn to_json(&self) -> Response {
        let code = self.code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(ErrorMessage {
                code,
                error: self.reason().to_string(),
                message: self.message(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Sqlx(error) => tracing::error!("sqlx error: {:?}", error),
            ApiError::Anyhow(error) => tracing::error!("generic error: {:?}", error),
            _ => {}
        }
        self.to_json()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{} ({}): {}", self.reason(), self.code(), message),
            None => write!(f, "{} ({})", self.reason(), self.code()),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use ApiError::*;

        match self {
            QueryRejection(err) => Some(err),
            JsonRejection(err) => Some(err),
            ValidationError(err) => Some(err),
            Sqlx(err) => Some(err),
            Anyhow(err) => err.source(),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Sqlx(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Anyhow(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::QueryRejection(rejection)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::JsonRejection(rejection)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::ValidationError(err)
    }
}

pub fn bad_request(msg: &str) -> ApiError {
    ApiError::BadRequest(msg.to_string())
}

pub fn any_error(code: u16, error: &str, message: Option<&str>) -> ApiError {
    ApiError::Any(ErrorMessage {
        code,
        error: error.to_string(),
        message: message.map(String::from),
    })
}
