//! System memory via `free -m`.

use super::command::run_command;
use super::error::CollectError;
use super::types::RamStats;
use super::MemorySource;
use crate::config::TelemetryConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Parse the `Mem:` row of `free -m` (total and used, in MB).
pub fn parse_free_output(raw: &str) -> Result<RamStats, CollectError> {
    let fields: Vec<&str> = raw
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .find(|fields| fields.first() == Some(&"Mem:"))
        .ok_or_else(|| CollectError::parse("no 'Mem:' line"))?;

    let number = |idx: usize| -> Result<u64, CollectError> {
        fields
            .get(idx)
            .and_then(|f| f.parse().ok())
            .ok_or_else(|| CollectError::parse(format!("bad 'Mem:' column {}", idx)))
    };
    let total = number(1)?;
    let used = number(2)?;

    if total == 0 {
        return Err(CollectError::parse("total memory is zero"));
    }

    Ok(RamStats::from_mb(total, used))
}

/// `MemorySource` backed by `free -m`.
pub struct FreeCommand {
    program: String,
    timeout: Duration,
}

impl FreeCommand {
    pub fn new(config: &TelemetryConfig) -> Self {
        Self {
            program: config.free.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    async fn query(&self) -> Result<RamStats, CollectError> {
        let raw = run_command(&self.program, &["-m".to_string()], self.timeout).await?;
        parse_free_output(&raw)
    }
}

#[async_trait]
impl MemorySource for FreeCommand {
    async fn ram_stats(&self) -> Option<RamStats> {
        self.query()
            .await
            .map_err(|e| tracing::debug!(error = %e, "Memory stats unavailable"))
            .ok()
    }
}
