pub mod builder;
pub mod ingest;

pub use builder::{build_query, build_validated, QueryParams};
pub use ingest::{ingest_filter, INGEST_LOCATION, INGEST_PER_PAGE, INGEST_PLATFORMS};
