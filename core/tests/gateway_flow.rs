//! Ingest and query gateways against in-process fakes.

mod common;

use std::sync::Arc;

use common::{settings, FakeApi, FakeStore};
use scout_core::api::{
    FilterState, GatewayError, GatewaySettings, GatewayStage, IngestGateway, QueryGateway,
    SearchGateway,
};

fn ingest(settings: GatewaySettings, api: &Arc<FakeApi>, store: &Arc<FakeStore>) -> IngestGateway {
    IngestGateway::new(settings, api.clone(), store.clone())
}

#[tokio::test]
async fn ingest_without_api_key_makes_no_calls() {
    let api = Arc::new(FakeApi::new(10));
    let store = Arc::new(FakeStore::default());
    let gw = ingest(
        GatewaySettings {
            api_key: None,
            ..settings()
        },
        &api,
        &store,
    );

    let err = gw.run().await.unwrap_err();
    assert_eq!(err.stage(), GatewayStage::Config);
    assert!(err.to_string().contains("RAPIDAPI_KEY"));
    assert_eq!(api.calls(), 0);
    assert_eq!(store.inserted(), 0);
}

#[tokio::test]
async fn ingest_stores_the_raw_payload_once() {
    let api = Arc::new(FakeApi::new(3));
    let store = Arc::new(FakeStore::default());
    let report = ingest(settings(), &api, &store).run().await.unwrap();

    assert_eq!(report.message, "Data inserted successfully");
    assert_eq!(report.profiles, Some(3));
    assert_eq!(api.calls(), 1);

    let rows = store.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    let (table, row) = &rows[0];
    assert_eq!(table, "influencers_raw");
    assert_eq!(row.data["pagination"]["total"], 3);
    assert!(chrono::DateTime::parse_from_rfc3339(&row.created_at).is_ok());

    let params = api.last_params();
    let get = |k: &str| params.iter().find(|(key, _)| key == k).map(|(_, v)| v.as_str());
    assert_eq!(get("perPage"), Some("1000"));
    assert_eq!(get("locations"), Some("united-kingdom"));
    assert_eq!(get("socialTypes"), Some("INST,FB"));
    assert_eq!(get("isContactEmail"), Some("true"));
    assert_eq!(get("trackTotal"), Some("true"));
}

#[tokio::test]
async fn ingest_upstream_failure_skips_the_store() {
    let api = Arc::new(FakeApi::failing(502));
    let store = Arc::new(FakeStore::default());
    let err = ingest(settings(), &api, &store).run().await.unwrap_err();

    assert_eq!(err.stage(), GatewayStage::Upstream);
    assert_eq!(err.to_string(), "Failed to fetch data: 502 Bad Gateway");
    assert_eq!(store.inserted(), 0);
}

#[tokio::test]
async fn ingest_store_failure_is_a_persistence_error() {
    let api = Arc::new(FakeApi::new(1));
    let store = Arc::new(FakeStore::failing());
    let err = ingest(settings(), &api, &store).run().await.unwrap_err();

    assert!(matches!(err, GatewayError::Persistence(_)));
    assert_eq!(err.stage(), GatewayStage::Persistence);
    assert!(err.to_string().contains("Invalid API key"));
}

#[tokio::test]
async fn query_returns_the_raw_body() {
    let api = Arc::new(FakeApi::new(40));
    let gw = QueryGateway::new(settings(), api.clone());

    let body = gw.query(&FilterState::default()).await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 16);
    assert_eq!(body["pagination"]["total"], 40);
}

#[tokio::test]
async fn query_rejects_invalid_filter_before_calling_out() {
    let api = Arc::new(FakeApi::new(40));
    let gw = QueryGateway::new(settings(), api.clone());

    let mut f = FilterState::default();
    f.min_users_count = "1000000".into();
    f.max_users_count = "10".into();

    let err = gw.search(&f).await.unwrap_err();
    assert_eq!(err.stage(), GatewayStage::Validation);
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn query_without_key_is_a_config_error() {
    let api = Arc::new(FakeApi::new(40));
    let gw = QueryGateway::new(
        GatewaySettings {
            api_key: Some(" ".into()),
            ..settings()
        },
        api.clone(),
    );
    let err = gw.query(&FilterState::default()).await.unwrap_err();
    assert_eq!(err.stage(), GatewayStage::Config);
    assert_eq!(api.calls(), 0);
}
