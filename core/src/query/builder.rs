//! FilterState -> query parameters for the search endpoint.
//!
//! Emission rules:
//! - `page`, `perPage`, `sort` lead and `trackTotal` closes every query.
//! - blank scalars and empty sets are omitted, never sent as `key=`.
//! - sets are joined with `,` in selection order under a single key.
//! - the quality-score pair is always sent.
//! - other boolean flags are sent only when set, as `true`.

use crate::errors::FilterError;
use crate::filter::range::non_blank;
use crate::filter::{validate, FilterState, ToggleSet};

/// Ordered key/value pairs, ready for `reqwest::RequestBuilder::query`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn push_text(&mut self, key: &'static str, value: &str) {
        if let Some(v) = non_blank(value) {
            self.push(key, v);
        }
    }

    fn push_set(&mut self, key: &'static str, set: &ToggleSet) {
        if let Some(joined) = set.joined() {
            self.push(key, joined);
        }
    }

    fn push_flag(&mut self, key: &'static str, on: bool) {
        if on {
            self.push(key, "true");
        }
    }
}

/// Pure translation; does not validate. See [`build_validated`].
pub fn build_query(filter: &FilterState) -> QueryParams {
    let mut q = QueryParams::new();

    q.push("page", filter.page.to_string());
    q.push("perPage", filter.per_page.to_string());
    q.push("sort", filter.sort.as_str());

    q.push_text("tags", &filter.tags);
    q.push_text("locations", &filter.locations);
    q.push_text("genders", &filter.genders);
    q.push_set("ages", &filter.ages);
    q.push_set("socialTypes", &filter.social_types);

    q.push_text("minUsersCount", &filter.min_users_count);
    q.push_text("maxUsersCount", &filter.max_users_count);
    q.push_text("minER", &filter.min_er);
    q.push_text("maxER", &filter.max_er);

    let quality = filter.quality();
    q.push("minQualityScore", quality.min.to_string());
    q.push("maxQualityScore", quality.max.to_string());

    q.push_flag("isVerified", filter.is_verified);
    q.push_flag("isContactEmail", filter.is_contact_email);

    q.push_text("audienceLocations", &filter.audience_locations);
    q.push_text("audienceGenders", &filter.audience_genders);
    q.push_set("audienceAges", &filter.audience_ages);

    // The remaining pairs and thresholds follow form order.
    for range in filter.ranges().iter().skip(2) {
        q.push_text(range.min_param, range.min);
        q.push_text(range.max_param, range.max);
    }
    for threshold in filter.thresholds() {
        q.push_text(threshold.param, threshold.value);
    }

    q.push("trackTotal", filter.track_total.to_string());

    q
}

/// Validates first, so an invalid filter never produces parameters.
pub fn build_validated(filter: &FilterState) -> Result<QueryParams, FilterError> {
    validate(filter)?;
    Ok(build_query(filter))
}
