use std::sync::Mutex;

use async_trait::async_trait;

use scout_core::api as core_api;
use scout_core::api::StoreError;

/// Keeps inserted rows in process. Used with the fixture api for local runs.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<(String, core_api::RawRow)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows written to `table`, oldest first.
    pub fn rows(&self, table: &str) -> Vec<core_api::RawRow> {
        self.rows
            .lock()
            .map(|rows| {
                rows.iter()
                    .filter(|(t, _)| t == table)
                    .map(|(_, row)| row.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl core_api::RawStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn insert(
        &self,
        target: &core_api::StoreTarget,
        row: core_api::RawRow,
    ) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Transport(anyhow::anyhow!("memory store poisoned")))?;
        rows.push((target.table.clone(), row));
        tracing::debug!(table = %target.table, rows = rows.len(), "memory insert");
        Ok(())
    }
}
