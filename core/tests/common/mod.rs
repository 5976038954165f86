#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use scout_core::api::{
    ApiCredentials, GatewaySettings, QueryParams, RawRow, RawStore, StatsApi, StoreError,
    StoreTarget, UpstreamError,
};
use scout_core::search::page_window;
use serde_json::{json, Value};

pub fn settings() -> GatewaySettings {
    GatewaySettings {
        api_key: Some("test-key".into()),
        api_host: "stats.test".into(),
        store_url: Some("https://db.test".into()),
        store_service_key: Some("service".into()),
        store_table: "influencers_raw".into(),
    }
}

/// Serves `total` numbered profiles, honouring page/perPage.
pub struct FakeApi {
    pub total: usize,
    pub fail_with: Option<u16>,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<Vec<(String, String)>>>,
}

impl FakeApi {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            fail_with: None,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::new(0)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> Vec<(String, String)> {
        self.seen.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl StatsApi for FakeApi {
    fn name(&self) -> &str {
        "fake"
    }

    async fn search(
        &self,
        creds: &ApiCredentials,
        params: &QueryParams,
    ) -> Result<Value, UpstreamError> {
        assert_eq!(creds.api_key, "test-key");
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );

        if let Some(status) = self.fail_with {
            return Err(UpstreamError::HttpStatus {
                status,
                reason: "Bad Gateway".into(),
                body_snippet: String::new(),
            });
        }

        let page: u32 = params.get("page").unwrap().parse().unwrap();
        let per_page: u32 = params.get("perPage").unwrap().parse().unwrap();
        let data: Vec<Value> = page_window(page, per_page, self.total)
            .map(|i| json!({ "cid": format!("INST:{i}"), "socialType": "INST", "name": format!("Influencer {}", i + 1) }))
            .collect();
        Ok(json!({ "data": data, "pagination": { "total": self.total } }))
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub fail: bool,
    pub rows: Mutex<Vec<(String, RawRow)>>,
}

impl FakeStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn inserted(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl RawStore for FakeStore {
    fn name(&self) -> &str {
        "fake"
    }

    async fn insert(&self, target: &StoreTarget, row: RawRow) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Rejected {
                status: 401,
                message: "Invalid API key".into(),
            });
        }
        self.rows.lock().unwrap().push((target.table.clone(), row));
        Ok(())
    }
}
