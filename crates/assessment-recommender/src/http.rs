/// HTTP transport: JSON recommendation API plus the interactive form page.
///
/// Routes:
/// - `GET /`: usage message
/// - `GET /recommend?query=...`: ranked recommendations as `{"results": [...]}`
/// - `GET /ui[?query=...]`: HTML form with a results table
/// - `POST /reload`: re-read the catalog snapshot
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use assessment_common::api::{RecommendResponse, ReloadCatalogResponse};
use assessment_common::catalog::CatalogStore;
use assessment_common::matcher;

use crate::error::AppError;
use crate::page;

const WELCOME: &str = "Welcome to the Assessment Recommender API. Use /recommend?query=your-query to get recommendations.";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
}

#[derive(Debug, Deserialize)]
struct QueryParams {
    query: Option<String>,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/recommend", get(recommend))
        .route("/ui", get(form))
        .route("/reload", post(reload))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(listen_addr = %addr, "HTTP server ready");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn root() -> Json<MessageBody> {
    Json(MessageBody { message: WELCOME })
}

async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let query = params
        .query
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "missing required query parameter: query"))?;

    let catalog = state.catalog.snapshot().await;
    let results = matcher::recommend(&query, &catalog);
    debug!(query = %query, results = results.len(), "recommend");

    Ok(Json(RecommendResponse { results }))
}

async fn form(State(state): State<AppState>, Query(params): Query<QueryParams>) -> Html<String> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Html(page::render(&query, None));
    }

    let catalog = state.catalog.snapshot().await;
    let results = matcher::recommend(&query, &catalog);
    debug!(query = %query, results = results.len(), "form recommend");

    Html(page::render(&query, Some(results.as_slice())))
}

async fn reload(State(state): State<AppState>) -> Result<Json<ReloadCatalogResponse>, ApiError> {
    let catalog_size = state
        .catalog
        .reload()
        .await
        .map_err(AppError::from)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(ReloadCatalogResponse { catalog_size }))
}

#[cfg(test)]
mod tests {
    use assessment_common::model::AssessmentRecord;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    fn state() -> AppState {
        let records = vec![
            AssessmentRecord {
                title: "Verify G+".to_string(),
                description: "cognitive ability test".to_string(),
                link: "https://shl.com/verify-g".to_string(),
                assessment_length: "Approximate time = 16 minutes".to_string(),
                remote_testing: true,
                ..Default::default()
            },
            AssessmentRecord {
                title: "OPQ".to_string(),
                description: "personality questionnaire".to_string(),
                link: "https://shl.com/opq".to_string(),
                assessment_length: "Approximate time = 25 minutes".to_string(),
                ..Default::default()
            },
        ];
        AppState {
            catalog: Arc::new(CatalogStore::from_records(records)),
        }
    }

    async fn call(method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router(state())
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn call_json(method: &str, uri: &str) -> (StatusCode, Value) {
        let (status, body) = call(method, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn recommend_returns_ranked_results() {
        let (status, body) = call_json("GET", "/recommend?query=personality%2020%20minutes").await;
        assert_eq!(status, StatusCode::OK);

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["title"], "Verify G+");
        assert_eq!(results[0]["duration"], 16);
        assert_eq!(results[0]["match_score"], 1);
        assert_eq!(results[0]["matched_keywords"], Value::Array(vec![]));
        assert_eq!(results[0]["remote_testing"], true);
    }

    #[tokio::test]
    async fn recommend_direct_url() {
        let (status, body) = call_json("GET", "/recommend?query=HTTPS://SHL.COM/OPQ/").await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["title"], "OPQ");
        assert_eq!(results[0]["duration"], 25);
        assert!(results[0].get("match_score").is_none());
    }

    #[tokio::test]
    async fn recommend_without_query_is_bad_request() {
        let (status, body) = call_json("GET", "/recommend").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("query"));
    }

    #[tokio::test]
    async fn recommend_with_empty_query_is_empty() {
        let (status, body) = call_json("GET", "/recommend?query=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn root_returns_usage_message() {
        let (status, body) = call_json("GET", "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains("/recommend"));
    }

    #[tokio::test]
    async fn form_renders_results_table() {
        let (status, body) = call("GET", "/ui?query=cognitive+ability").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("<td>Verify G+</td>"));
        assert!(!html.contains("<td>OPQ</td>"));
    }

    #[tokio::test]
    async fn form_without_query_renders_form_only() {
        let (status, body) = call("GET", "/ui").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("<form"));
        assert!(!html.contains("<table>"));
    }

    #[tokio::test]
    async fn reload_reports_catalog_size() {
        let (status, body) = call_json("POST", "/reload").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["catalog_size"], 2);
    }
}
