use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use scout_core::api as core_api;
use scout_core::api::UpstreamError;

const BODY_SNIPPET_CHARS: usize = 300;

/// Client for the RapidAPI statistics search endpoint (`GET {base_url}/search`).
pub struct RapidApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl RapidApiClient {
    pub fn new(base_url: String, timeout_ms: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .context("build statistics api http client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl core_api::StatsApi for RapidApiClient {
    fn name(&self) -> &str {
        "rapidapi"
    }

    async fn search(
        &self,
        creds: &core_api::ApiCredentials,
        params: &core_api::QueryParams,
    ) -> Result<Value, UpstreamError> {
        let url = self.search_url();
        tracing::debug!(%url, params = params.len(), "stats api search");

        let resp = self
            .http
            .get(&url)
            .query(params.as_pairs())
            .header("X-RapidAPI-Key", &creds.api_key)
            .header("X-RapidAPI-Host", &creds.host)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body_snippet: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        let bytes = resp.bytes().await.map_err(transport_error)?;
        serde_json::from_slice::<Value>(&bytes).map_err(|e| UpstreamError::Decode(e.into()))
    }
}

fn transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Transport(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_api::{build_query, ApiCredentials, FilterState, StatsApi};
    use mockito::Matcher;

    fn creds() -> ApiCredentials {
        ApiCredentials {
            api_key: "secret".into(),
            host: "instagram-statistics-api.p.rapidapi.com".into(),
        }
    }

    #[tokio::test]
    async fn sends_credential_headers_and_query_pairs() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_header("x-rapidapi-key", "secret")
            .match_header("x-rapidapi-host", "instagram-statistics-api.p.rapidapi.com")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("perPage".into(), "16".into()),
                Matcher::UrlEncoded("sort".into(), "-score".into()),
                Matcher::UrlEncoded("socialTypes".into(), "INST,FB".into()),
                Matcher::UrlEncoded("trackTotal".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":[{"cid":"INST:1"}],"pagination":{"total":1}}"#)
            .create_async()
            .await;

        let mut filter = FilterState {
            page: 2,
            track_total: true,
            ..FilterState::default()
        };
        filter.toggle_social_type("INST");
        filter.toggle_social_type("FB");

        let client = RapidApiClient::new(format!("{}/", server.url()), 5_000).unwrap();
        let body = client.search(&creds(), &build_query(&filter)).await.unwrap();

        assert_eq!(body["pagination"]["total"], 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_carries_reason_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body("You have exceeded the rate limit per second for your plan")
            .create_async()
            .await;

        let client = RapidApiClient::new(server.url(), 5_000).unwrap();
        let err = client
            .search(&creds(), &build_query(&FilterState::default()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch data: 429 Too Many Requests");
        match err {
            UpstreamError::HttpStatus { body_snippet, .. } => {
                assert!(body_snippet.contains("rate limit"));
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = RapidApiClient::new(server.url(), 5_000).unwrap();
        let err = client
            .search(&creds(), &build_query(&FilterState::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Decode(_)));
    }
}
