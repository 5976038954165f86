use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FilterError;

/// Ranking keys accepted by the search endpoint. All of them sort descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "-score")]
    Relevance,
    #[serde(rename = "-usersCount")]
    Followers,
    #[serde(rename = "-avgViews")]
    Views,
    #[serde(rename = "-avgER")]
    EngagementRate,
    #[serde(rename = "-qualityScore")]
    QualityScore,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::Followers,
        SortKey::Views,
        SortKey::EngagementRate,
        SortKey::QualityScore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "-score",
            SortKey::Followers => "-usersCount",
            SortKey::Views => "-avgViews",
            SortKey::EngagementRate => "-avgER",
            SortKey::QualityScore => "-qualityScore",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Followers => "Followers",
            SortKey::Views => "Views",
            SortKey::EngagementRate => "Engagement Rate",
            SortKey::QualityScore => "Quality Score",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s || k.as_str().trim_start_matches('-') == s)
            .ok_or_else(|| FilterError::UnknownSort(s.to_string()))
    }
}
