use crate::models::{ThingRecord, ThingsResponse};
use crate::routes;
use axum::{Json, http::StatusCode};

/// The fixed thing catalog, in presentation order
///
/// `color` references a color catalog `value`; the reference is not
/// validated anywhere.
fn thing_catalog() -> Vec<ThingRecord> {
    [
        (0, "Apples"),
        (0, "Fire Trucks"),
        (1, "Oranges"),
        (4, "Sky"),
        (4, "Oceans"),
        (4, "BlueBerry"),
    ]
    .into_iter()
    .map(|(color, text)| ThingRecord {
        color,
        text: text.to_string(),
    })
    .collect()
}

/// GET /things handler - Fixed thing catalog
#[utoipa::path(
    get,
    path = routes::THINGS,
    responses(
        (status = 200, description = "The six thing records, in fixed order", body = ThingsResponse)
    ),
    tag = "catalog"
)]
pub async fn things_handler() -> (StatusCode, Json<ThingsResponse>) {
    (
        StatusCode::OK,
        Json(ThingsResponse {
            data: thing_catalog(),
        }),
    )
}
