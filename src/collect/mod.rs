//! Collectors for host and service telemetry.
//!
//! Each data source sits behind a narrow trait so the page can be rendered
//! from fakes in tests. Sources never fail: a broken or missing tool yields
//! the source's "unavailable" value (`None`, an empty list, or the
//! not-running container record) and the rest of the page still renders.

mod command;
mod container;
mod disk;
mod error;
mod gpu;
mod memory;
mod ollama;
mod types;

pub use command::run_command;
pub use container::{parse_container_status, DockerCli};
pub use disk::{parse_df_output, DfCommand};
pub use error::CollectError;
pub use gpu::{parse_gpu_stats, NvidiaSmi};
pub use memory::{parse_free_output, FreeCommand};
pub use ollama::{parse_catalog_models, parse_loaded_models, OllamaClient};
pub use types::*;

use crate::config::StatusConfig;
use async_trait::async_trait;
use std::sync::Arc;

/// State of the watched container.
#[async_trait]
pub trait ContainerStatusSource: Send + Sync {
    async fn container_status(&self) -> ContainerStatus;
}

/// Loaded and on-disk models of the inference server.
#[async_trait]
pub trait ModelSource: Send + Sync {
    async fn loaded_models(&self) -> Vec<LoadedModel>;
    async fn catalog_models(&self) -> Vec<CatalogModel>;
}

/// Accelerator telemetry; `None` when no GPU tooling is present.
#[async_trait]
pub trait GpuTelemetrySource: Send + Sync {
    async fn gpu_stats(&self) -> Option<GpuStats>;
}

#[async_trait]
pub trait MemorySource: Send + Sync {
    async fn ram_stats(&self) -> Option<RamStats>;
}

#[async_trait]
pub trait DiskSource: Send + Sync {
    async fn disk_stats(&self) -> Option<DiskStats>;
}

/// The full set of sources queried for every page.
#[derive(Clone)]
pub struct Collectors {
    container: Arc<dyn ContainerStatusSource>,
    models: Arc<dyn ModelSource>,
    gpu: Arc<dyn GpuTelemetrySource>,
    memory: Arc<dyn MemorySource>,
    disk: Arc<dyn DiskSource>,
}

impl Collectors {
    pub fn new(
        container: Arc<dyn ContainerStatusSource>,
        models: Arc<dyn ModelSource>,
        gpu: Arc<dyn GpuTelemetrySource>,
        memory: Arc<dyn MemorySource>,
        disk: Arc<dyn DiskSource>,
    ) -> Self {
        Self {
            container,
            models,
            gpu,
            memory,
            disk,
        }
    }

    /// Real sources: container CLI, Ollama API, nvidia-smi, free, df.
    pub fn from_config(config: &StatusConfig) -> Self {
        Self::new(
            Arc::new(DockerCli::new(&config.container)),
            Arc::new(OllamaClient::new(&config.ollama)),
            Arc::new(NvidiaSmi::new(&config.telemetry)),
            Arc::new(FreeCommand::new(&config.telemetry)),
            Arc::new(DfCommand::new(&config.telemetry)),
        )
    }

    pub fn with_container(mut self, source: Arc<dyn ContainerStatusSource>) -> Self {
        self.container = source;
        self
    }

    pub fn with_models(mut self, source: Arc<dyn ModelSource>) -> Self {
        self.models = source;
        self
    }

    pub fn with_gpu(mut self, source: Arc<dyn GpuTelemetrySource>) -> Self {
        self.gpu = source;
        self
    }

    pub fn with_memory(mut self, source: Arc<dyn MemorySource>) -> Self {
        self.memory = source;
        self
    }

    pub fn with_disk(mut self, source: Arc<dyn DiskSource>) -> Self {
        self.disk = source;
        self
    }

    /// Query every source once, concurrently. Nothing is cached.
    pub async fn collect(&self) -> Snapshot {
        let (container, loaded, catalog, gpu, ram, disk) = tokio::join!(
            self.container.container_status(),
            self.models.loaded_models(),
            self.models.catalog_models(),
            self.gpu.gpu_stats(),
            self.memory.ram_stats(),
            self.disk.disk_stats(),
        );

        tracing::debug!(
            container_running = container.running,
            loaded = loaded.len(),
            catalog = catalog.len(),
            gpu = gpu.is_some(),
            ram = ram.is_some(),
            disk = disk.is_some(),
            "Collected snapshot"
        );

        Snapshot {
            container,
            loaded,
            catalog,
            gpu,
            ram,
            disk,
        }
    }
}
