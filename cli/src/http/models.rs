//! 请求/响应模型

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// POST /ingest 成功响应
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub success: bool,
    pub message: String,
}

/// POST /ingest 失败响应，只有 error 字段
#[derive(Debug, Serialize)]
pub struct IngestErrorResponse {
    pub error: String,
}

/// POST /search 响应
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// GET /health 响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub session_id: String,
    pub uptime_seconds: u64,
    pub requests_handled: u64,
    pub errors: u64,
    pub routes: HashMap<String, u64>,
    pub timestamp: String,
}
