use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use super::types::{ApiProvider, AppConfig, StoreProvider};
use crate::errors::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// `./config.toml`, then `~/.scout/config.toml`, then defaults. Environment
/// overrides are applied last.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let mut cfg = match discover() {
        Some(path) => read_file(&path)?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok());
    Ok(cfg)
}

/// Loads an explicit file; a missing file is an error here.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let mut cfg = read_file(path)?;
    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok());
    Ok(cfg)
}

fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    let home = dirs::home_dir()?.join(".scout").join(CONFIG_FILE);
    home.exists().then_some(home)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
        .map_err(ConfigError::Parse)?;
    toml::from_str::<AppConfig>(&s)
        .with_context(|| format!("parsing {}", path.display()))
        .map_err(ConfigError::Parse)
}

/// Applies environment overrides through `lookup` so tests need not touch
/// the process environment. Blank values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let ApiProvider::RapidApi(ref mut api) = cfg.api.provider {
        if let Some(v) = get("RAPIDAPI_KEY") {
            api.api_key = Some(v);
        }
        if let Some(v) = get("SCOUT_API_BASE_URL") {
            api.base_url = v;
        }
    }

    if let StoreProvider::Supabase(ref mut store) = cfg.store.provider {
        if let Some(v) = get("SUPABASE_URL") {
            store.url = Some(v);
        }
        if let Some(v) = get("SUPABASE_SERVICE_ROLE_KEY") {
            store.service_key = Some(v);
        }
    }

    if let Some(v) = get("SCOUT_HTTP_HOST") {
        cfg.http_server.host = v;
    }
    if let Some(port) = get("SCOUT_HTTP_PORT").and_then(|v| v.parse().ok()) {
        cfg.http_server.port = port;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RapidApiConfig, SupabaseConfig};
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_have_no_credentials() {
        let cfg = AppConfig::default();
        let ApiProvider::RapidApi(api) = &cfg.api.provider else {
            panic!("expected rapidapi provider");
        };
        assert!(api.api_key.is_none());
        assert_eq!(cfg.http_server.port, 8787);
        assert!(matches!(cfg.store.provider, StoreProvider::Supabase(_)));
    }

    #[test]
    fn env_overrides_fill_credentials() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(
            &mut cfg,
            env(&[
                ("RAPIDAPI_KEY", "rk"),
                ("SUPABASE_URL", "https://db.example"),
                ("SUPABASE_SERVICE_ROLE_KEY", "  "),
                ("SCOUT_HTTP_PORT", "9000"),
            ]),
        );

        let ApiProvider::RapidApi(RapidApiConfig { api_key, .. }) = &cfg.api.provider else {
            panic!("expected rapidapi provider");
        };
        assert_eq!(api_key.as_deref(), Some("rk"));

        let StoreProvider::Supabase(SupabaseConfig {
            url, service_key, ..
        }) = &cfg.store.provider
        else {
            panic!("expected supabase provider");
        };
        assert_eq!(url.as_deref(), Some("https://db.example"));
        assert!(service_key.is_none());
        assert_eq!(cfg.http_server.port, 9000);
    }

    #[test]
    fn loads_fixture_provider_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
provider = "fixture"
profiles = 40

[store]
provider = "memory"

[http_server]
port = 9100

[logging]
level = "debug"
"#
        )
        .unwrap();

        let cfg = load_from_path(file.path()).unwrap();
        assert!(matches!(
            cfg.api.provider,
            ApiProvider::Fixture(ref f) if f.profiles == 40
        ));
        assert!(matches!(cfg.store.provider, StoreProvider::Memory));
        assert_eq!(cfg.http_server.port, 9100);
        assert_eq!(cfg.http_server.host, "127.0.0.1");
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn missing_explicit_file_is_not_found() {
        let err = load_from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn unknown_provider_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nprovider = \"carrier-pigeon\"").unwrap();
        assert!(matches!(
            load_from_path(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
