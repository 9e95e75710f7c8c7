use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Erreurs du kernel CoopWatch
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    #[error("Unknown feed: {0}")]
    UnknownFeed(String),
    #[error("Config read error: {0}")]
    ConfigRead(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl KernelError {
    pub fn status(&self) -> StatusCode {
        match self {
            KernelError::UnknownFeed(_) => StatusCode::NOT_FOUND,
            KernelError::ConfigRead(_) | KernelError::ConfigParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for KernelError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "ok": false, "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
