//! GPU telemetry via `nvidia-smi`.

use super::command::run_command;
use super::error::CollectError;
use super::types::GpuStats;
use super::GpuTelemetrySource;
use crate::config::TelemetryConfig;
use async_trait::async_trait;
use std::time::Duration;

const QUERY_FIELDS: &str = "name,memory.used,memory.total,utilization.gpu,temperature.gpu";
const EXPECTED_FIELDS: usize = 5;

/// Parse `name, used, total, util, temp` (csv, no header, no units).
///
/// Only the first GPU line is used.
pub fn parse_gpu_stats(raw: &str) -> Result<GpuStats, CollectError> {
    let line = raw.trim().lines().next().unwrap_or_default();
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < EXPECTED_FIELDS {
        return Err(CollectError::parse(format!(
            "expected {} fields, got {}",
            EXPECTED_FIELDS,
            fields.len()
        )));
    }

    let number = |idx: usize| -> Result<u64, CollectError> {
        fields[idx]
            .parse()
            .map_err(|_| CollectError::parse(format!("non-numeric field '{}'", fields[idx])))
    };

    Ok(GpuStats::new(
        fields[0],
        number(1)?,
        number(2)?,
        number(3)?,
        number(4)?,
    ))
}

/// `GpuTelemetrySource` backed by `nvidia-smi`.
pub struct NvidiaSmi {
    program: String,
    timeout: Duration,
}

impl NvidiaSmi {
    pub fn new(config: &TelemetryConfig) -> Self {
        Self {
            program: config.nvidia_smi.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    fn args() -> Vec<String> {
        vec![
            format!("--query-gpu={}", QUERY_FIELDS),
            "--format=csv,noheader,nounits".to_string(),
        ]
    }

    async fn query(&self) -> Result<GpuStats, CollectError> {
        let raw = run_command(&self.program, &Self::args(), self.timeout).await?;
        parse_gpu_stats(&raw)
    }
}

#[async_trait]
impl GpuTelemetrySource for NvidiaSmi {
    async fn gpu_stats(&self) -> Option<GpuStats> {
        self.query()
            .await
            .map_err(|e| tracing::debug!(error = %e, "GPU telemetry unavailable"))
            .ok()
    }
}
