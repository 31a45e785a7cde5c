use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Recommendation;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecommendParams {
    /// Job description, natural-language request, or an assessment product URL.
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecommendResponse {
    pub results: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReloadCatalogResponse {
    pub catalog_size: usize,
}
