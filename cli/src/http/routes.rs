//! HTTP路由handlers

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use scout_core::api::FilterState;
use tracing::{error, info};

use crate::http::{models::*, state::AppState, HttpServerError};

/// 创建所有路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ingest", post(ingest_handler).get(ingest_handler))
        .route("/search", post(search_handler).options(preflight_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// POST|GET /ingest - 抓取固定查询并写入原始数据
async fn ingest_handler(
    State(state): State<AppState>,
) -> Result<Json<IngestResponse>, HttpServerError> {
    state.record_request("/ingest");

    match state.gateways.ingest.run().await {
        Ok(report) => {
            info!(created_at = %report.created_at, profiles = ?report.profiles, "ingest stored");
            Ok(Json(IngestResponse {
                success: true,
                message: report.message,
            }))
        }
        Err(e) => {
            state.record_error();
            error!(stage = %e.stage(), error = %e, "ingest failed");
            Err(HttpServerError::ingest(e))
        }
    }
}

/// POST /search - 将结构化查询转发到统计 API
///
/// 请求体手动解析，解析失败同样返回 `{success:false, error}` 信封。
async fn search_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QueryResponse>, HttpServerError> {
    state.record_request("/search");

    let filter: FilterState = serde_json::from_slice(&body).map_err(|e| {
        state.record_error();
        HttpServerError::Query(format!("invalid search request: {e}"))
    })?;

    match state.gateways.query.query(&filter).await {
        Ok(data) => Ok(Json(QueryResponse::ok(data))),
        Err(e) => {
            state.record_error();
            error!(stage = %e.stage(), error = %e, "query failed");
            Err(HttpServerError::query(e))
        }
    }
}

/// OPTIONS /search - 预检请求，不处理任何查询参数
async fn preflight_handler() -> &'static str {
    "ok"
}

/// GET /health - 健康检查
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let (uptime_seconds, requests_handled, errors, routes) = state
        .stats
        .read()
        .map(|s| {
            (
                s.uptime_seconds(),
                s.requests_total,
                s.errors_total,
                s.requests_by_route.clone(),
            )
        })
        .unwrap_or_default();

    Json(HealthResponse {
        status: "healthy".into(),
        session_id: state.session_id.clone(),
        uptime_seconds,
        requests_handled,
        errors,
        routes,
        timestamp: Local::now().to_rfc3339(),
    })
}
