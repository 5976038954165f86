//! Deterministic stand-in for the statistics API.
//!
//! Serves a fixed catalogue of `profiles` generated from their index, so the
//! same query always yields the same page. Honours `page`, `perPage`,
//! `socialTypes`, `isVerified`, `isContactEmail` and `trackTotal`; every
//! other parameter is accepted and ignored.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};

use scout_core::api as core_api;
use scout_core::api::UpstreamError;
use scout_core::filter::vocab::{AGE_BUCKETS, SOCIAL_TYPES};
use scout_core::search::page_window;

const COUNTRIES: [&str; 5] = ["United Kingdom", "Ireland", "France", "Germany", "Spain"];

pub struct FixtureStatsApi {
    profiles: usize,
    calls: AtomicUsize,
}

impl FixtureStatsApi {
    pub fn new(profiles: usize) -> Self {
        Self {
            profiles,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn profile(i: usize) -> Value {
    let (code, _) = SOCIAL_TYPES[i % SOCIAL_TYPES.len()];
    let n = i + 1;
    let users_count = 5_000 + (i as u64 * 7_919) % 2_000_000;
    let avg_likes = (users_count as f64 * 0.031).round();
    let avg_comments = (avg_likes * 0.04).round();
    let avg_views = if i % 3 == 2 {
        Value::Null
    } else {
        json!((users_count as f64 * 0.42).round())
    };
    json!({
        "cid": format!("{code}:{n}"),
        "socialType": code,
        "name": format!("Influencer {n}"),
        "screenName": format!("influencer_{n}"),
        "image": format!("https://picsum.photos/seed/{n}/200"),
        "url": format!("https://example.com/influencer_{n}"),
        "usersCount": users_count,
        "avgER": ((i * 37) % 900) as f64 / 10_000.0 + 0.005,
        "avgLikes": avg_likes,
        "avgComments": avg_comments,
        "avgViews": avg_views,
        "qualityScore": ((i * 53) % 101) as f64 / 100.0,
        "verified": i % 4 == 0,
        "country": COUNTRIES[i % COUNTRIES.len()],
        "gender": if i % 2 == 0 { "f" } else { "m" },
        "age": AGE_BUCKETS[i % AGE_BUCKETS.len()],
        "contactEmail": (i % 5 != 4).then(|| format!("influencer_{n}@example.com")),
        "pctFakeFollowers": ((i * 13) % 40) as f64 / 100.0,
        "description": format!("Creator #{n} sharing lifestyle and travel content."),
    })
}

fn bad_request(detail: String) -> UpstreamError {
    UpstreamError::HttpStatus {
        status: 400,
        reason: "Bad Request".to_string(),
        body_snippet: detail,
    }
}

fn number_param(params: &core_api::QueryParams, key: &str) -> Result<u32, UpstreamError> {
    let raw = params
        .get(key)
        .ok_or_else(|| bad_request(format!("missing {key}")))?;
    raw.parse()
        .map_err(|_| bad_request(format!("{key} is not a number: {raw}")))
}

#[async_trait]
impl core_api::StatsApi for FixtureStatsApi {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn search(
        &self,
        _creds: &core_api::ApiCredentials,
        params: &core_api::QueryParams,
    ) -> Result<Value, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let page = number_param(params, "page")?;
        let per_page = number_param(params, "perPage")?;
        let platforms: Vec<&str> = params
            .get("socialTypes")
            .map(|s| s.split(',').collect())
            .unwrap_or_default();
        let verified_only = params.get("isVerified") == Some("true");
        let contact_only = params.get("isContactEmail") == Some("true");

        let matching: Vec<Value> = (0..self.profiles)
            .map(profile)
            .filter(|p| {
                platforms.is_empty()
                    || p["socialType"]
                        .as_str()
                        .is_some_and(|code| platforms.contains(&code))
            })
            .filter(|p| !verified_only || p["verified"] == json!(true))
            .filter(|p| !contact_only || !p["contactEmail"].is_null())
            .collect();

        let window = page_window(page, per_page, matching.len());
        tracing::debug!(page, per_page, matched = matching.len(), "fixture search");

        let mut body = json!({ "data": &matching[window] });
        if params.get("trackTotal") == Some("true") {
            body["pagination"] = json!({ "total": matching.len() });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_api::{build_query, ApiCredentials, FilterState, StatsApi};
    use pretty_assertions::assert_eq;
    use scout_core::search::normalize_response;

    fn creds() -> ApiCredentials {
        ApiCredentials {
            api_key: "fixture".into(),
            host: "fixture.local".into(),
        }
    }

    fn filter(page: u32) -> FilterState {
        FilterState {
            page,
            track_total: true,
            ..FilterState::default()
        }
    }

    #[tokio::test]
    async fn last_page_holds_the_remainder() {
        let api = FixtureStatsApi::new(100);
        let body = api.search(&creds(), &build_query(&filter(7))).await.unwrap();
        let page = normalize_response(&body).unwrap();

        assert_eq!(page.total_count, 100);
        let names: Vec<_> = page.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Influencer 97", "Influencer 98", "Influencer 99", "Influencer 100"]
        );
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn same_query_same_page() {
        let api = FixtureStatsApi::new(40);
        let params = build_query(&filter(2));
        let a = api.search(&creds(), &params).await.unwrap();
        let b = api.search(&creds(), &params).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn platform_and_contact_filters_narrow_the_catalogue() {
        let api = FixtureStatsApi::new(60);
        let mut f = filter(1);
        f.per_page = 100;
        f.toggle_social_type("INST");
        f.is_contact_email = true;

        let body = api.search(&creds(), &build_query(&f)).await.unwrap();
        let page = normalize_response(&body).unwrap();

        assert!(!page.records.is_empty());
        assert!(page.records.iter().all(|r| r.social_type == "INST"));
        assert!(page.records.iter().all(|r| r.has_contact()));
        assert_eq!(page.total_count as usize, page.records.len());
    }

    #[tokio::test]
    async fn total_is_omitted_without_track_total() {
        let api = FixtureStatsApi::new(10);
        let body = api
            .search(&creds(), &build_query(&FilterState::default()))
            .await
            .unwrap();
        assert!(body.get("pagination").is_none());
    }
}
