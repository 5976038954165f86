use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub http_server: HttpServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(flatten)]
    pub provider: ApiProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum ApiProvider {
    #[serde(rename = "rapidapi")]
    RapidApi(RapidApiConfig),
    #[serde(rename = "fixture")]
    Fixture(FixtureConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RapidApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Value of the `X-RapidAPI-Host` header.
    #[serde(default = "default_api_host")]
    pub host: String,

    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureConfig {
    #[serde(default = "default_fixture_profiles")]
    pub profiles: usize,
}

fn default_api_timeout_ms() -> u64 {
    30_000
}

fn default_api_base_url() -> String {
    "https://instagram-statistics-api.p.rapidapi.com".to_string()
}

fn default_api_host() -> String {
    "instagram-statistics-api.p.rapidapi.com".to_string()
}

fn default_fixture_profiles() -> usize {
    100
}

impl Default for RapidApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            host: default_api_host(),
            api_key: None,
        }
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            profiles: default_fixture_profiles(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_api_timeout_ms(),
            provider: ApiProvider::RapidApi(RapidApiConfig::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(flatten)]
    pub provider: StoreProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum StoreProvider {
    #[serde(rename = "supabase")]
    Supabase(SupabaseConfig),
    #[serde(rename = "memory")]
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub service_key: Option<String>,

    #[serde(default = "default_store_table")]
    pub table: String,
}

fn default_store_timeout_ms() -> u64 {
    10_000
}

fn default_store_table() -> String {
    "influencers_raw".to_string()
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            service_key: None,
            table: default_store_table(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_store_timeout_ms(),
            provider: StoreProvider::Supabase(SupabaseConfig::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_http_host")]
    pub host: String,

    #[serde(default = "default_http_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    8787
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
