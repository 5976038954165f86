//! HTTP错误到响应信封的映射

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scout_core::api::GatewayError;

use crate::http::models::{IngestErrorResponse, QueryResponse};

/// 两个接口的失败响应格式不同，但都返回 500
#[derive(Debug)]
pub enum HttpServerError {
    /// ingest 失败：`{"error": ...}`
    Ingest(String),
    /// query 失败：`{"success": false, "error": ...}`
    Query(String),
}

impl HttpServerError {
    pub fn ingest(e: GatewayError) -> Self {
        Self::Ingest(e.to_string())
    }

    pub fn query(e: GatewayError) -> Self {
        Self::Query(e.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Ingest(m) | Self::Query(m) => m,
        }
    }
}

impl std::fmt::Display for HttpServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        match self {
            Self::Ingest(error) => (status, Json(IngestErrorResponse { error })).into_response(),
            Self::Query(error) => (status, Json(QueryResponse::failed(error))).into_response(),
        }
    }
}
