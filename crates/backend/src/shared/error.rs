use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::{Record, RecordId};
use contracts::reports::ReportError;
use contracts::shared::record::{EditorError, FilterError, TransitionError};
use contracts::system::auth::AuthError;
use contracts::system::users::Role;
use serde_json::json;

/// Error returned by every API handler, rendered as `{ "error", "code" }`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("missing or invalid session token")]
    Unauthorized,

    #[error("role '{0}' cannot open this page")]
    Forbidden(Role),

    #[error("{element} {id} not found")]
    NotFound { element: &'static str, id: RecordId },

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Report(#[from] ReportError),

    /// Malformed path segment, query string or body
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found<R: Record>(id: RecordId) -> Self {
        AppError::NotFound {
            element: R::element_name(),
            id,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(_) | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Filter(_) => StatusCode::BAD_REQUEST,
            AppError::Transition(_) => StatusCode::CONFLICT,
            AppError::Editor(EditorError::RecordGone(_)) => StatusCode::NOT_FOUND,
            AppError::Editor(EditorError::NotOpen) => StatusCode::CONFLICT,
            AppError::Report(ReportError::UnknownReport(_)) => StatusCode::NOT_FOUND,
            AppError::Rejected { status, .. } => *status,
            AppError::Report(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "invalid_credentials",
            AppError::Unauthorized => "unauthorized",
            AppError::Forbidden(_) => "forbidden",
            AppError::NotFound { .. } | AppError::Editor(EditorError::RecordGone(_)) => "not_found",
            AppError::Filter(_) => "invalid_filter",
            AppError::Transition(_) => "invalid_transition",
            AppError::Editor(EditorError::NotOpen) => "editor_closed",
            AppError::Report(ReportError::UnknownReport(_)) => "unknown_report",
            AppError::Rejected { .. } => "bad_request",
            AppError::Report(_) | AppError::Internal(_) => "internal",
        }
    }
}

macro_rules! from_rejection {
    ($($rejection:ty),*) => {$(
        impl From<$rejection> for AppError {
            fn from(rejection: $rejection) -> Self {
                AppError::Rejected {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            }
        }
    )*};
}

from_rejection!(PathRejection, QueryRejection, JsonRejection);

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{} ({})", self, status);
        }
        (status, Json(json!({ "error": self.to_string(), "code": self.code() }))).into_response()
    }
}
