use serde::{Deserialize, Serialize};

use crate::filter::vocab::social_type_label;

/// One profile as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerRecord {
    pub cid: String,
    #[serde(default)]
    pub social_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub screen_name: String,
    #[serde(default)]
    pub users_count: u64,
    #[serde(default, rename = "avgER")]
    pub avg_er: f64,
    #[serde(default)]
    pub avg_likes: f64,
    #[serde(default)]
    pub avg_comments: f64,
    #[serde(default)]
    pub avg_views: Option<f64>,
    /// 0..=1, unlike the 0..=100 filter slider.
    #[serde(default)]
    pub quality_score: f64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub pct_fake_followers: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl InfluencerRecord {
    pub fn platform_label(&self) -> &str {
        social_type_label(&self.social_type).unwrap_or(&self.social_type)
    }

    pub fn has_contact(&self) -> bool {
        self.contact_email
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty())
    }

    pub fn quality_percent(&self) -> f64 {
        self.quality_score * 100.0
    }
}
