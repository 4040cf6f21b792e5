//! Display-ready values handed to the page template.
//!
//! Everything here is plain text; the template escapes it on output.

use super::theme::{usage_color, GREEN, RED};
use crate::collect::{CatalogModel, DiskStats, GpuStats, LoadedModel, RamStats};
use std::collections::HashSet;

/// Color of the container status dot.
pub fn dot_color(running: bool) -> &'static str {
    if running {
        GREEN
    } else {
        RED
    }
}

/// Horizontal percentage bar with a label drawn over it.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageBar {
    /// Fill width in percent, clamped to `0..=100`, one decimal
    pub width: String,
    pub color: &'static str,
    pub label: String,
}

impl UsageBar {
    pub fn new(pct: f64, label: impl Into<String>) -> Self {
        Self {
            width: format!("{:.1}", pct.clamp(0.0, 100.0)),
            color: usage_color(pct),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRow {
    pub name: String,
    pub param_size: String,
    pub vram: String,
    pub quantization: String,
    pub context_length: u64,
}

impl From<&LoadedModel> for LoadedRow {
    fn from(model: &LoadedModel) -> Self {
        Self {
            name: model.name.clone(),
            param_size: model.param_size.clone(),
            vram: format!("{:.1} GB", model.vram_gb),
            quantization: model.quantization.clone(),
            context_length: model.context_length,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub name: String,
    pub param_size: String,
    pub size: String,
    pub quantization: String,
    /// Exact name match against the loaded set
    pub loaded: bool,
}

impl CatalogRow {
    pub fn new(model: &CatalogModel, loaded_names: &HashSet<&str>) -> Self {
        Self {
            name: model.name.clone(),
            param_size: model.param_size.clone(),
            size: format!("{:.1} GB", model.size_gb),
            quantization: model.quantization.clone(),
            loaded: loaded_names.contains(model.name.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GpuCard {
    pub name: String,
    /// `used / total MiB (pct%)`
    pub vram: String,
    pub vram_bar: UsageBar,
    pub util_bar: UsageBar,
    pub temp_c: u64,
}

impl From<&GpuStats> for GpuCard {
    fn from(gpu: &GpuStats) -> Self {
        let vram = format!("{} / {} MiB", gpu.vram_used_mib, gpu.vram_total_mib);
        Self {
            name: gpu.name.clone(),
            vram: format!("{} ({:.1}%)", vram, gpu.vram_pct),
            vram_bar: UsageBar::new(gpu.vram_pct, vram),
            util_bar: UsageBar::new(gpu.gpu_util_pct as f64, format!("{}%", gpu.gpu_util_pct)),
            temp_c: gpu.temp_c,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RamCard {
    /// `used / total GB (pct%)`
    pub used: String,
    pub bar: UsageBar,
}

impl From<&RamStats> for RamCard {
    fn from(ram: &RamStats) -> Self {
        let used = format!("{:.1} / {:.1} GB", ram.used_gb, ram.total_gb);
        Self {
            used: format!("{} ({:.1}%)", used, ram.pct),
            bar: UsageBar::new(ram.pct, used),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskCard {
    /// `used / total (pct)`
    pub used: String,
    pub avail: String,
}

impl From<&DiskStats> for DiskCard {
    fn from(disk: &DiskStats) -> Self {
        Self {
            used: format!("{} / {} ({})", disk.used, disk.total, disk.pct),
            avail: disk.avail.clone(),
        }
    }
}
