use crate::models::{ColorRecord, ColorsResponse};
use crate::routes;
use axum::{Json, http::StatusCode};

/// The fixed color catalog, in presentation order
fn color_catalog() -> Vec<ColorRecord> {
    [
        (0, "Red"),
        (1, "Orange"),
        (2, "Yellow"),
        (3, "Green"),
        (4, "Blue"),
        (5, "Purple"),
    ]
    .into_iter()
    .map(|(value, text)| ColorRecord {
        value,
        text: text.to_string(),
    })
    .collect()
}

/// GET /colors handler - Fixed color catalog
#[utoipa::path(
    get,
    path = routes::COLORS,
    responses(
        (status = 200, description = "The six color records, in fixed order", body = ColorsResponse)
    ),
    tag = "catalog"
)]
pub async fn colors_handler() -> (StatusCode, Json<ColorsResponse>) {
    (
        StatusCode::OK,
        Json(ColorsResponse {
            data: color_catalog(),
        }),
    )
}
