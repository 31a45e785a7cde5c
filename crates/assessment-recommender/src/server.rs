/// MCP server exposing the recommender as tools.
///
/// Exposes two tools:
/// - `recommend_assessments`: Rank catalog assessments against a query
/// - `reload_catalog`: Re-read the catalog snapshot from disk
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::info;

use assessment_common::api::{RecommendParams, RecommendResponse, ReloadCatalogResponse};
use assessment_common::catalog::CatalogStore;
use assessment_common::matcher;

#[derive(Clone)]
pub struct RecommenderServer {
    catalog: Arc<CatalogStore>,
    tool_router: ToolRouter<RecommenderServer>,
}

impl RecommenderServer {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self {
            catalog,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl RecommenderServer {
    #[tool(description = "Recommend up to 10 catalogued assessments for a job description, natural language request (e.g. 'java developer under 40 minutes'), or an assessment product URL.")]
    async fn recommend_assessments(
        &self,
        Parameters(params): Parameters<RecommendParams>,
    ) -> Result<Json<RecommendResponse>, String> {
        if params.query.trim().is_empty() {
            return Err("query must not be empty".to_string());
        }

        let catalog = self.catalog.snapshot().await;
        let results = matcher::recommend(&params.query, &catalog);
        info!(results = results.len(), "recommend_assessments");

        Ok(Json(RecommendResponse { results }))
    }

    #[tool(description = "Reload the assessment catalog from its JSON snapshot. Returns the number of records now loaded.")]
    async fn reload_catalog(&self) -> Result<Json<ReloadCatalogResponse>, String> {
        info!("reload_catalog tool invoked");

        let catalog_size = self
            .catalog
            .reload()
            .await
            .map_err(|e| format!("reload failed: {e}"))?;

        Ok(Json(ReloadCatalogResponse { catalog_size }))
    }
}

#[tool_handler]
impl ServerHandler for RecommenderServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "assessment-recommender".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Assessment recommender MCP server. Matches free-text queries against a \
                 catalog of assessment products by keyword overlap, honouring limits such \
                 as '30 minutes'. Pass a product URL to look up that product directly. Use \
                 reload_catalog after the catalog snapshot has been re-crawled."
                    .to_string(),
            ),
        }
    }
}
