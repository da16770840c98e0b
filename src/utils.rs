use axum::{http::StatusCode, response::IntoResponse};

/// Any failure a handler cannot attribute to the caller.
pub struct InternalServerError(pub anyhow::Error);

impl From<anyhow::Error> for InternalServerError {
    fn from(value: anyhow::Error) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for InternalServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `anyhow` prints the whole `Caused by:` chain in its `Debug` output
        write!(f, "{:?}", self.0)
    }
}

impl IntoResponse for InternalServerError {
    fn into_response(self) -> axum::response::Response {
        // Log unexpected error
        tracing::error!("{:?}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong".to_string(),
        )
            .into_response()
    }
}
