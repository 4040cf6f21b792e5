//! Shared test utilities: fixed-value sources and sample snapshots.

#![allow(dead_code)]

use async_trait::async_trait;
use statusboard::api::AppState;
use statusboard::collect::{
    CatalogModel, Collectors, ContainerStatus, ContainerStatusSource, DiskSource, DiskStats,
    GpuStats, GpuTelemetrySource, LoadedModel, MemorySource, ModelSource, RamStats, Snapshot,
};
use statusboard::render::PageOptions;
use std::sync::Arc;

/// Every source answers from one fixed snapshot.
pub struct FixedSources(pub Snapshot);

#[async_trait]
impl ContainerStatusSource for FixedSources {
    async fn container_status(&self) -> ContainerStatus {
        self.0.container.clone()
    }
}

#[async_trait]
impl ModelSource for FixedSources {
    async fn loaded_models(&self) -> Vec<LoadedModel> {
        self.0.loaded.clone()
    }

    async fn catalog_models(&self) -> Vec<CatalogModel> {
        self.0.catalog.clone()
    }
}

#[async_trait]
impl GpuTelemetrySource for FixedSources {
    async fn gpu_stats(&self) -> Option<GpuStats> {
        self.0.gpu.clone()
    }
}

#[async_trait]
impl MemorySource for FixedSources {
    async fn ram_stats(&self) -> Option<RamStats> {
        self.0.ram.clone()
    }
}

#[async_trait]
impl DiskSource for FixedSources {
    async fn disk_stats(&self) -> Option<DiskStats> {
        self.0.disk.clone()
    }
}

pub fn fixed_collectors(snapshot: Snapshot) -> Collectors {
    let sources = Arc::new(FixedSources(snapshot));
    Collectors::new(
        sources.clone(),
        sources.clone(),
        sources.clone(),
        sources.clone(),
        sources,
    )
}

pub fn fixed_state(snapshot: Snapshot) -> Arc<AppState> {
    Arc::new(AppState::new(
        fixed_collectors(snapshot),
        PageOptions::default(),
    ))
}

pub fn make_loaded(name: &str, vram_gb: f64) -> LoadedModel {
    LoadedModel {
        name: name.to_string(),
        param_size: "8B".to_string(),
        vram_gb,
        context_length: 8192,
        quantization: "Q4_K_M".to_string(),
    }
}

pub fn make_catalog(name: &str, size_gb: f64) -> CatalogModel {
    CatalogModel {
        name: name.to_string(),
        param_size: "8B".to_string(),
        size_gb,
        quantization: "Q4_K_M".to_string(),
    }
}

/// A host where every source reports data.
pub fn healthy_snapshot() -> Snapshot {
    Snapshot {
        container: ContainerStatus::running("Up 3 hours (healthy)", "0.0.0.0:50080->80/tcp"),
        loaded: vec![make_loaded("llama3:8b", 4.5)],
        catalog: vec![
            make_catalog("llama3:8b", 4.7),
            make_catalog("qwen2.5:14b", 9.0),
        ],
        gpu: Some(GpuStats::new("NVIDIA GeForce RTX 4090", 6100, 24564, 12, 48)),
        ram: Some(RamStats::from_mb(64000, 12000)),
        disk: Some(DiskStats {
            total: "916G".to_string(),
            used: "372G".to_string(),
            avail: "498G".to_string(),
            pct: "43%".to_string(),
        }),
    }
}

/// Replace the `Updated: <timestamp>` value so pages can be compared.
pub fn mask_timestamp(page: &str) -> String {
    const MARKER: &str = "Updated: ";
    match page.find(MARKER) {
        Some(start) => {
            let value_start = start + MARKER.len();
            let value_end = page[value_start..]
                .find('<')
                .map(|i| value_start + i)
                .unwrap_or(page.len());
            format!("{}{}TIMESTAMP{}", &page[..start], MARKER, &page[value_end..])
        }
        None => page.to_string(),
    }
}
