pub mod cli;
pub mod http_server;
pub mod ingest;
pub mod search;
