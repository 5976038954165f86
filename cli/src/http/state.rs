//! 服务器共享状态

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use scout_core::api::Gateways;
use tokio::sync::broadcast;

/// 请求统计
#[derive(Debug)]
pub struct ServerStats {
    started_at: Instant,
    pub requests_total: u64,
    pub errors_total: u64,
    pub requests_by_route: HashMap<String, u64>,
}

impl ServerStats {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            requests_total: 0,
            errors_total: 0,
            requests_by_route: HashMap::new(),
        }
    }

    pub fn increment_request(&mut self, route: &str) {
        self.requests_total += 1;
        *self.requests_by_route.entry(route.to_string()).or_insert(0) += 1;
    }

    pub fn increment_error(&mut self) {
        self.errors_total += 1;
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for ServerStats {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session_id: String,
    pub gateways: Gateways,
    pub stats: Arc<RwLock<ServerStats>>,
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(session_id: String, gateways: Gateways, shutdown_tx: broadcast::Sender<()>) -> Self {
        Self {
            session_id,
            gateways,
            stats: Arc::new(RwLock::new(ServerStats::new())),
            shutdown_tx,
        }
    }

    pub fn record_request(&self, route: &str) {
        if let Ok(mut stats) = self.stats.write() {
            stats.increment_request(route);
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut stats) = self.stats.write() {
            stats.increment_error();
        }
    }
}
