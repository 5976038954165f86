pub mod normalize;
pub mod record;
pub mod result;

pub use normalize::normalize_response;
pub use record::InfluencerRecord;
pub use result::{page_window, total_pages, SearchResult};
