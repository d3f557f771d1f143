use crate::error::ErrorResponse;
use crate::models::FormAck;
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value as JsonValue;

/// GET /form handler - Last stored form snapshot
///
/// Returns the most recently posted JSON body, or 204 when nothing has been
/// posted since the process started.
#[utoipa::path(
    get,
    path = routes::FORM,
    responses(
        (status = 200, description = "Last stored snapshot", body = serde_json::Value),
        (status = 204, description = "No snapshot stored yet")
    ),
    tag = "form"
)]
pub async fn form_get_handler(State(state): State<AppState>) -> Response {
    match state.store.current().await {
        Some(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// POST /form handler - Store a form snapshot
///
/// Accepts any JSON body and replaces the stored snapshot with it. No schema
/// validation; last writer wins.
#[utoipa::path(
    post,
    path = routes::FORM,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Snapshot stored", body = FormAck),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse)
    ),
    tag = "form"
)]
pub async fn form_post_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> (StatusCode, Json<FormAck>) {
    let previous = state.store.replace(body).await;

    tracing::info!(replaced_previous = previous.is_some(), "stored form snapshot");
    (StatusCode::OK, Json(FormAck { success: true }))
}
