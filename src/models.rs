use serde::{Deserialize, Serialize};

/// A single entry in the color catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ColorRecord {
    pub value: i64,
    pub text: String,
}

/// A single entry in the thing catalog; `color` references a color's `value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ThingRecord {
    pub color: i64,
    pub text: String,
}

/// Response type for the color catalog endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ColorsResponse {
    pub data: Vec<ColorRecord>,
}

/// Response type for the thing catalog endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ThingsResponse {
    pub data: Vec<ThingRecord>,
}

/// Response type for successful form submissions
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormAck {
    pub success: bool,
}

/// Query parameters for the named-resource endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct PjsonQuery {
    pub name: Option<String>,
}
