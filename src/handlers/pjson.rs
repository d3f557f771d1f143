use crate::error::{ApiError, ErrorResponse};
use crate::models::PjsonQuery;
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde_json::Value as JsonValue;

/// GET /pjson handler - Named JSON resource
///
/// Resolves the `name` query parameter through the resource loader and
/// returns the document, after the loader's transform hook has run.
#[utoipa::path(
    get,
    path = routes::PJSON,
    params(
        ("name" = String, Query, description = "Logical resource name, e.g. pages/helloworld")
    ),
    responses(
        (status = 200, description = "Resolved document", body = serde_json::Value),
        (status = 400, description = "Missing or invalid resource name", body = ErrorResponse),
        (status = 404, description = "No document backs the name", body = ErrorResponse),
        (status = 500, description = "Document unreadable or malformed", body = ErrorResponse)
    ),
    tag = "content"
)]
pub async fn pjson_handler(
    State(state): State<AppState>,
    Query(query): Query<PjsonQuery>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let name = query
        .name
        .ok_or_else(|| ApiError::InvalidQueryParam("name is required".to_string()))?;

    let data = state.resources.load(&name).await.inspect_err(|err| {
        tracing::warn!(%name, error = %err, "named resource lookup failed");
    })?;

    tracing::info!(%name, "served named resource");
    Ok((StatusCode::OK, Json(data)))
}
