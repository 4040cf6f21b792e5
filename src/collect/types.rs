//! Records produced by the collectors.
//!
//! All of them are rebuilt on every request and never stored.

use serde::Serialize;
use std::collections::HashSet;

/// Status text shown when the container query yields nothing.
pub const NOT_RUNNING: &str = "Not running";

/// Round to one decimal place.
///
/// Rounds the exact stored binary value, ties to even: `2.25` becomes `2.2`,
/// while `4.45` (stored slightly above) becomes `4.5` and `0.15` (stored
/// slightly below) becomes `0.1`. Scaling by ten first would round twice.
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// State of the watched container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerStatus {
    pub running: bool,
    /// Runtime status column, e.g. `Up 3 hours (healthy)`
    pub status_text: String,
    /// Port mapping column, may be empty
    pub ports: String,
}

impl ContainerStatus {
    pub fn running(status_text: impl Into<String>, ports: impl Into<String>) -> Self {
        Self {
            running: true,
            status_text: status_text.into(),
            ports: ports.into(),
        }
    }

    pub fn not_running() -> Self {
        Self {
            running: false,
            status_text: NOT_RUNNING.to_string(),
            ports: String::new(),
        }
    }
}

/// A model resident in accelerator memory (`/api/ps`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedModel {
    pub name: String,
    pub param_size: String,
    pub vram_gb: f64,
    pub context_length: u64,
    pub quantization: String,
}

/// A model present on disk (`/api/tags`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogModel {
    pub name: String,
    pub param_size: String,
    pub size_gb: f64,
    pub quantization: String,
}

/// First GPU reported by `nvidia-smi`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpuStats {
    pub name: String,
    pub vram_used_mib: u64,
    pub vram_total_mib: u64,
    pub vram_pct: f64,
    pub gpu_util_pct: u64,
    pub temp_c: u64,
}

impl GpuStats {
    /// Build from raw readings, deriving `vram_pct`.
    pub fn new(
        name: impl Into<String>,
        vram_used_mib: u64,
        vram_total_mib: u64,
        gpu_util_pct: u64,
        temp_c: u64,
    ) -> Self {
        let vram_pct = if vram_total_mib == 0 {
            0.0
        } else {
            round1(vram_used_mib as f64 / vram_total_mib as f64 * 100.0)
        };
        Self {
            name: name.into(),
            vram_used_mib,
            vram_total_mib,
            vram_pct,
            gpu_util_pct,
            temp_c,
        }
    }
}

/// System memory in GiB
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RamStats {
    pub total_gb: f64,
    pub used_gb: f64,
    pub pct: f64,
}

impl RamStats {
    /// Derive from `free -m` megabyte readings. `total_mb` must be non-zero.
    pub fn from_mb(total_mb: u64, used_mb: u64) -> Self {
        Self {
            total_gb: round1(total_mb as f64 / 1024.0),
            used_gb: round1(used_mb as f64 / 1024.0),
            pct: round1(used_mb as f64 / total_mb as f64 * 100.0),
        }
    }
}

/// Disk usage as printed by `df`, e.g. `916G`, `41%`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskStats {
    pub total: String,
    pub used: String,
    pub avail: String,
    pub pct: String,
}

/// Everything one collection pass produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub container: ContainerStatus,
    pub loaded: Vec<LoadedModel>,
    pub catalog: Vec<CatalogModel>,
    pub gpu: Option<GpuStats>,
    pub ram: Option<RamStats>,
    pub disk: Option<DiskStats>,
}

impl Snapshot {
    /// Names of the currently loaded models
    pub fn loaded_names(&self) -> HashSet<&str> {
        self.loaded.iter().map(|m| m.name.as_str()).collect()
    }

    /// Snapshot where every source came back unavailable
    pub fn unavailable() -> Self {
        Self {
            container: ContainerStatus::not_running(),
            loaded: Vec::new(),
            catalog: Vec::new(),
            gpu: None,
            ram: None,
            disk: None,
        }
    }
}
