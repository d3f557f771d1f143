pub mod colors;
pub mod form;
pub mod health;
pub mod index;
pub mod pjson;
pub mod things;

pub use colors::colors_handler;
pub use form::{form_get_handler, form_post_handler};
pub use health::health_handler;
pub use index::index_handler;
pub use pjson::pjson_handler;
pub use things::things_handler;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::routes;
use crate::state::AppState;

/// Assemble the application router
///
/// Named routes first, then Swagger UI, then the static-asset fallback
/// covering everything else under the configured static directory.
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.config.static_dir.clone());

    Router::new()
        .route(routes::ROOT, get(index_handler))
        .route(routes::COLORS, get(colors_handler))
        .route(routes::THINGS, get(things_handler))
        .route(
            routes::FORM,
            get(form_get_handler).post(form_post_handler),
        )
        .route(routes::PJSON, get(pjson_handler))
        .route(routes::HEALTH, get(health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
