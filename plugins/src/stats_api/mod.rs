pub mod rapid;

pub use rapid::RapidApiClient;
