use serde::{Deserialize, Serialize};

use super::range::{QualityRange, RangeField, Threshold, QUALITY_MAX, QUALITY_MIN};
use super::sort::SortKey;
use super::toggle::ToggleSet;

/// Page size used by the result grid.
pub const DEFAULT_PER_PAGE: u32 = 16;

/// Largest page the search endpoint will serve in one call.
pub const MAX_PER_PAGE: u32 = 1000;

/// Every constraint the user can pick, as one flat record.
///
/// The serialized form uses the camelCase names of the search request body,
/// so a JSON body posted to the query gateway deserializes straight into this
/// type. Missing keys fall back to [`FilterState::default`]. Range bounds may
/// arrive as strings or numbers; both are kept as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub page: u32,
    pub per_page: u32,
    pub sort: SortKey,

    pub tags: String,
    pub locations: String,
    pub genders: String,
    pub ages: ToggleSet,
    pub social_types: ToggleSet,

    #[serde(deserialize_with = "lenient::string")]
    pub min_users_count: String,
    #[serde(deserialize_with = "lenient::string")]
    pub max_users_count: String,
    #[serde(rename = "minER", deserialize_with = "lenient::string")]
    pub min_er: String,
    #[serde(rename = "maxER", deserialize_with = "lenient::string")]
    pub max_er: String,

    pub min_quality_score: u8,
    pub max_quality_score: u8,

    pub is_verified: bool,
    pub is_contact_email: bool,

    pub audience_locations: String,
    pub audience_genders: String,
    pub audience_ages: ToggleSet,
    #[serde(deserialize_with = "lenient::string")]
    pub min_audience_age: String,
    #[serde(deserialize_with = "lenient::string")]
    pub max_audience_age: String,

    #[serde(deserialize_with = "lenient::string")]
    pub min_likes: String,
    #[serde(deserialize_with = "lenient::string")]
    pub max_likes: String,
    #[serde(deserialize_with = "lenient::string")]
    pub min_comments: String,
    #[serde(deserialize_with = "lenient::string")]
    pub max_comments: String,
    #[serde(deserialize_with = "lenient::string")]
    pub min_video_likes: String,
    #[serde(deserialize_with = "lenient::string")]
    pub max_video_likes: String,
    #[serde(deserialize_with = "lenient::string")]
    pub min_video_comments: String,
    #[serde(deserialize_with = "lenient::string")]
    pub max_video_comments: String,
    #[serde(deserialize_with = "lenient::string")]
    pub min_video_views: String,
    #[serde(deserialize_with = "lenient::string")]
    pub max_video_views: String,
    #[serde(deserialize_with = "lenient::string")]
    pub min_fake_followers: String,
    #[serde(deserialize_with = "lenient::string")]
    pub max_fake_followers: String,
    #[serde(deserialize_with = "lenient::string")]
    pub min_interactions: String,
    #[serde(deserialize_with = "lenient::string")]
    pub max_interactions: String,

    #[serde(deserialize_with = "lenient::string")]
    pub min_audience_locations_percent: String,
    #[serde(deserialize_with = "lenient::string")]
    pub min_audience_genders_percent: String,
    #[serde(deserialize_with = "lenient::string")]
    pub min_audience_age_percent: String,

    pub track_total: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            sort: SortKey::default(),
            tags: String::new(),
            locations: String::new(),
            genders: String::new(),
            ages: ToggleSet::new(),
            social_types: ToggleSet::new(),
            min_users_count: String::new(),
            max_users_count: String::new(),
            min_er: String::new(),
            max_er: String::new(),
            min_quality_score: QUALITY_MIN,
            max_quality_score: QUALITY_MAX,
            is_verified: false,
            is_contact_email: false,
            audience_locations: String::new(),
            audience_genders: String::new(),
            audience_ages: ToggleSet::new(),
            min_audience_age: String::new(),
            max_audience_age: String::new(),
            min_likes: String::new(),
            max_likes: String::new(),
            min_comments: String::new(),
            max_comments: String::new(),
            min_video_likes: String::new(),
            max_video_likes: String::new(),
            min_video_comments: String::new(),
            max_video_comments: String::new(),
            min_video_views: String::new(),
            max_video_views: String::new(),
            min_fake_followers: String::new(),
            max_fake_followers: String::new(),
            min_interactions: String::new(),
            max_interactions: String::new(),
            min_audience_locations_percent: String::new(),
            min_audience_genders_percent: String::new(),
            min_audience_age_percent: String::new(),
            track_total: false,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quality(&self) -> QualityRange {
        QualityRange::new(self.min_quality_score, self.max_quality_score)
    }

    pub fn set_quality(&mut self, range: QualityRange) {
        self.min_quality_score = range.min;
        self.max_quality_score = range.max;
    }

    pub fn toggle_age(&mut self, code: &str) -> bool {
        self.ages.toggle(code)
    }

    pub fn toggle_social_type(&mut self, code: &str) -> bool {
        self.social_types.toggle(code)
    }

    pub fn toggle_audience_age(&mut self, code: &str) -> bool {
        self.audience_ages.toggle(code)
    }

    /// Same criteria, different page.
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// All optional min/max pairs, in form order.
    pub fn ranges(&self) -> [RangeField<'_>; 10] {
        [
            pair("minUsersCount", "maxUsersCount", &self.min_users_count, &self.max_users_count),
            pair("minER", "maxER", &self.min_er, &self.max_er),
            pair("minAudienceAge", "maxAudienceAge", &self.min_audience_age, &self.max_audience_age),
            pair("minLikes", "maxLikes", &self.min_likes, &self.max_likes),
            pair("minComments", "maxComments", &self.min_comments, &self.max_comments),
            pair("minVideoLikes", "maxVideoLikes", &self.min_video_likes, &self.max_video_likes),
            pair(
                "minVideoComments",
                "maxVideoComments",
                &self.min_video_comments,
                &self.max_video_comments,
            ),
            pair("minVideoViews", "maxVideoViews", &self.min_video_views, &self.max_video_views),
            pair(
                "minFakeFollowers",
                "maxFakeFollowers",
                &self.min_fake_followers,
                &self.max_fake_followers,
            ),
            pair(
                "minInteractions",
                "maxInteractions",
                &self.min_interactions,
                &self.max_interactions,
            ),
        ]
    }

    /// Single-sided audience share thresholds.
    pub fn thresholds(&self) -> [Threshold<'_>; 3] {
        [
            Threshold {
                param: "minAudienceLocationsPercent",
                value: &self.min_audience_locations_percent,
            },
            Threshold {
                param: "minAudienceGendersPercent",
                value: &self.min_audience_genders_percent,
            },
            Threshold {
                param: "minAudienceAgePercent",
                value: &self.min_audience_age_percent,
            },
        ]
    }
}

fn pair<'a>(
    min_param: &'static str,
    max_param: &'static str,
    min: &'a str,
    max: &'a str,
) -> RangeField<'a> {
    RangeField {
        min_param,
        max_param,
        min,
        max,
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accepts `"123"`, `123`, `1.5` or `null`.
    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or number, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_form() {
        let f = FilterState::default();
        assert_eq!(f.page, 1);
        assert_eq!(f.per_page, 16);
        assert_eq!(f.sort, SortKey::Relevance);
        assert!(f.quality().is_full());
        assert!(f.ranges().iter().all(|r| r.is_unbounded()));
        assert!(!f.track_total);
    }

    #[test]
    fn deserializes_partial_request_body() {
        let body = r#"{
            "page": 3,
            "sort": "-avgER",
            "locations": "united-kingdom",
            "socialTypes": ["INST", "FB"],
            "minUsersCount": 10000,
            "maxUsersCount": "50000",
            "minER": 1.5,
            "maxER": null,
            "isVerified": true
        }"#;
        let f: FilterState = serde_json::from_str(body).unwrap();

        assert_eq!(f.page, 3);
        assert_eq!(f.per_page, DEFAULT_PER_PAGE);
        assert_eq!(f.sort, SortKey::EngagementRate);
        assert_eq!(f.social_types.joined().as_deref(), Some("INST,FB"));
        assert_eq!(f.min_users_count, "10000");
        assert_eq!(f.max_users_count, "50000");
        assert_eq!(f.min_er, "1.5");
        assert_eq!(f.max_er, "");
        assert!(f.is_verified);
        assert_eq!(f.quality(), QualityRange::default());
    }

    #[test]
    fn rejects_structured_range_bound() {
        let err = serde_json::from_str::<FilterState>(r#"{"minLikes": {"v": 1}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn at_page_keeps_criteria() {
        let mut f = FilterState::new();
        f.tags = "fitness".into();
        f.toggle_age("18_21");
        let p = f.at_page(4);
        assert_eq!(p.page, 4);
        assert_eq!(p.tags, "fitness");
        assert!(p.ages.contains("18_21"));
    }
}
