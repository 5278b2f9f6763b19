//! Error types for the dashboard server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No dataset has been uploaded yet. Pages halt with this message
    /// instead of rendering.
    #[error("Dataset not uploaded. POST the CSV to /api/dataset first.")]
    DatasetMissing,

    /// A prediction request named a label outside the encoder tables.
    #[error("unknown {column} label: {label}")]
    UnknownLabel {
        column: &'static str,
        label: String,
    },

    /// The configured host/port did not parse.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] vgsales_core::Error),
}

impl From<std::io::Error> for ServerError {
    fn from(e: std::io::Error) -> Self {
        Self::Core(vgsales_core::Error::Io(e))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::DatasetMissing => StatusCode::NOT_FOUND,
            ServerError::UnknownLabel { .. } => StatusCode::BAD_REQUEST,
            // A rejected upload is the client's problem; everything else is
            // a fatal render error.
            ServerError::Core(
                vgsales_core::Error::Csv(_) | vgsales_core::Error::MissingColumn(_),
            ) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
