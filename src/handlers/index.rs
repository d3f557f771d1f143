use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Html};
use std::io;

/// GET / handler - Static entry page
///
/// Reads `index.html` from the configured static directory on each request.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Entry page", content_type = "text/html", body = String),
        (status = 404, description = "Entry page missing from the static directory", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.config.static_dir.join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "entry page missing");
            Err(ApiError::ResourceNotFound("index.html".to_string()))
        }
        Err(err) => Err(ApiError::Internal(err.into())),
    }
}
