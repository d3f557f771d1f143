use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{
    ColorRecord, ColorsResponse, FormAck, PjsonQuery, ThingRecord, ThingsResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-demo-api",
        version = "1.0.0",
        description = "A small demo JSON API: fixed catalogs, a form snapshot echo, and named JSON resources"
    ),
    paths(
        handlers::index::index_handler,
        handlers::colors::colors_handler,
        handlers::things::things_handler,
        handlers::form::form_get_handler,
        handlers::form::form_post_handler,
        handlers::pjson::pjson_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            ColorRecord,
            ColorsResponse,
            ThingRecord,
            ThingsResponse,
            FormAck,
            PjsonQuery,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "pages", description = "Static entry page"),
        (name = "catalog", description = "Fixed reference data"),
        (name = "form", description = "Form snapshot operations"),
        (name = "content", description = "Named JSON resources"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
