use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use scout_core::api as core_api;
use scout_core::api::StoreError;

/// Inserts raw rows through the Supabase PostgREST endpoint.
pub struct SupabaseStore {
    http: reqwest::Client,
}

impl SupabaseStore {
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .context("build supabase http client")?;
        Ok(Self { http })
    }
}

fn table_url(target: &core_api::StoreTarget) -> String {
    format!(
        "{}/rest/v1/{}",
        target.url.trim_end_matches('/'),
        target.table
    )
}

/// PostgREST errors come back as `{"message": ..., "code": ..., "hint": ...}`.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl core_api::RawStore for SupabaseStore {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn insert(
        &self,
        target: &core_api::StoreTarget,
        row: core_api::RawRow,
    ) -> Result<(), StoreError> {
        let body = serde_json::to_vec(&row).map_err(StoreError::Encode)?;
        let url = table_url(target);
        tracing::debug!(%url, bytes = body.len(), "supabase insert");

        let resp = self
            .http
            .post(&url)
            .header("apikey", &target.service_key)
            .header("Authorization", format!("Bearer {}", target.service_key))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.into()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let text = resp.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&text),
        })
    }
}
