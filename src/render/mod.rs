//! HTML rendering of a collected [`Snapshot`].
//!
//! Rendering is a pure formatting stage: no source is queried here. The
//! page comes from the `dashboard.html` askama template, which escapes every
//! interpolated value. The GPU, memory and disk cards are `None` when their
//! data is missing and the template leaves them out.

pub mod theme;
pub mod view;

use crate::collect::Snapshot;
use crate::config::{DashboardConfig, TelemetryConfig};
use askama::Template;
use theme::MUTED;
use view::{dot_color, CatalogRow, DiskCard, GpuCard, LoadedRow, RamCard};

/// strftime format of the "Updated" stamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Presentation settings that do not come from the collectors.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    pub refresh_seconds: u32,
    /// Mount point named in the disk card heading
    pub disk_mount: String,
}

impl PageOptions {
    pub fn new(dashboard: &DashboardConfig, telemetry: &TelemetryConfig) -> Self {
        Self {
            title: dashboard.title.clone(),
            refresh_seconds: dashboard.refresh_seconds,
            disk_mount: telemetry.disk_mount.clone(),
        }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self::new(&DashboardConfig::default(), &TelemetryConfig::default())
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate<'a> {
    title: &'a str,
    refresh_seconds: u32,
    timestamp: &'a str,
    container_running: bool,
    container_status: &'a str,
    dot_color: &'static str,
    muted: &'static str,
    loaded: Vec<LoadedRow>,
    gpu: Option<GpuCard>,
    ram: Option<RamCard>,
    disk: Option<DiskCard>,
    disk_mount: &'a str,
    catalog: Vec<CatalogRow>,
}

/// Render the full HTML document.
pub fn render_page(
    snapshot: &Snapshot,
    options: &PageOptions,
    timestamp: &str,
) -> Result<String, askama::Error> {
    let loaded_names = snapshot.loaded_names();

    DashboardTemplate {
        title: &options.title,
        refresh_seconds: options.refresh_seconds,
        timestamp,
        container_running: snapshot.container.running,
        container_status: &snapshot.container.status_text,
        dot_color: dot_color(snapshot.container.running),
        muted: MUTED,
        loaded: snapshot.loaded.iter().map(LoadedRow::from).collect(),
        gpu: snapshot.gpu.as_ref().map(GpuCard::from),
        ram: snapshot.ram.as_ref().map(RamCard::from),
        disk: snapshot.disk.as_ref().map(DiskCard::from),
        disk_mount: &options.disk_mount,
        catalog: snapshot
            .catalog
            .iter()
            .map(|m| CatalogRow::new(m, &loaded_names))
            .collect(),
    }
    .render()
}
