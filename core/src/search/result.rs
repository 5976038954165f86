use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::record::InfluencerRecord;

/// One fetched page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub records: Vec<InfluencerRecord>,
    pub total_count: u64,
}

impl SearchResult {
    pub fn total_pages(&self, per_page: u32) -> u32 {
        total_pages(self.total_count, per_page)
    }
}

/// `ceil(total_count / per_page)`, with an empty result still being one page.
pub fn total_pages(total_count: u64, per_page: u32) -> u32 {
    if per_page == 0 || total_count == 0 {
        return 1;
    }
    let pages = total_count.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Index range of `page` (1-based) inside a list of `total` items.
pub fn page_window(page: u32, per_page: u32, total: usize) -> Range<usize> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
    let start = start.min(total);
    let end = start.saturating_add(per_page as usize).min(total);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(100, 16), 7);
        assert_eq!(total_pages(96, 16), 6);
        assert_eq!(total_pages(97, 16), 7);
        assert_eq!(total_pages(1, 16), 1);
    }

    #[test]
    fn empty_result_is_one_page() {
        assert_eq!(total_pages(0, 16), 1);
        assert_eq!(SearchResult::default().total_pages(16), 1);
    }

    #[test]
    fn windows_of_a_hundred() {
        assert_eq!(page_window(1, 16, 100), 0..16);
        assert_eq!(page_window(7, 16, 100), 96..100);
        assert_eq!(page_window(8, 16, 100), 100..100);
        assert_eq!(page_window(0, 16, 100), 0..16);
    }
}
