//! Disk usage via `df`.

use super::command::run_command;
use super::error::CollectError;
use super::types::DiskStats;
use super::DiskSource;
use crate::config::TelemetryConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Parse the last line of `df -BG --output=size,used,avail,pcent`.
///
/// Values are kept exactly as `df` printed them.
pub fn parse_df_output(raw: &str) -> Result<DiskStats, CollectError> {
    let line = raw.trim().lines().last().unwrap_or_default();
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [total, used, avail, pct, ..] => Ok(DiskStats {
            total: total.to_string(),
            used: used.to_string(),
            avail: avail.to_string(),
            pct: pct.to_string(),
        }),
        _ => Err(CollectError::parse(format!(
            "expected 4 fields, got {}",
            fields.len()
        ))),
    }
}

/// `DiskSource` backed by `df`.
pub struct DfCommand {
    program: String,
    mount: String,
    timeout: Duration,
}

impl DfCommand {
    pub fn new(config: &TelemetryConfig) -> Self {
        Self {
            program: config.df.clone(),
            mount: config.disk_mount.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    fn args(&self) -> Vec<String> {
        vec![
            "-BG".to_string(),
            self.mount.clone(),
            "--output=size,used,avail,pcent".to_string(),
        ]
    }

    async fn query(&self) -> Result<DiskStats, CollectError> {
        let raw = run_command(&self.program, &self.args(), self.timeout).await?;
        parse_df_output(&raw)
    }
}

#[async_trait]
impl DiskSource for DfCommand {
    async fn disk_stats(&self) -> Option<DiskStats> {
        self.query()
            .await
            .map_err(|e| tracing::debug!(mount = %self.mount, error = %e, "Disk stats unavailable"))
            .ok()
    }
}
