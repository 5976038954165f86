use crate::filter::{FilterState, SortKey};

pub const INGEST_LOCATION: &str = "united-kingdom";
pub const INGEST_PLATFORMS: [&str; 2] = ["INST", "FB"];
pub const INGEST_PER_PAGE: u32 = 1000;

/// The fixed broad crawl run by the ingest gateway.
pub fn ingest_filter() -> FilterState {
    let mut filter = FilterState {
        page: 1,
        per_page: INGEST_PER_PAGE,
        sort: SortKey::Relevance,
        locations: INGEST_LOCATION.to_string(),
        is_contact_email: true,
        track_total: true,
        ..FilterState::default()
    };
    for platform in INGEST_PLATFORMS {
        filter.social_types.insert(platform);
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::validate;
    use crate::query::build_query;

    #[test]
    fn ingest_query_is_the_broad_uk_crawl() {
        let filter = ingest_filter();
        assert_eq!(validate(&filter), Ok(()));

        let q = build_query(&filter);
        assert_eq!(q.get("page"), Some("1"));
        assert_eq!(q.get("perPage"), Some("1000"));
        assert_eq!(q.get("sort"), Some("-score"));
        assert_eq!(q.get("locations"), Some("united-kingdom"));
        assert_eq!(q.get("socialTypes"), Some("INST,FB"));
        assert_eq!(q.get("isContactEmail"), Some("true"));
        assert_eq!(q.get("trackTotal"), Some("true"));
        assert!(!q.contains("isVerified"));
    }
}
