//! Output formatting helpers for the `check` command

use crate::collect::Snapshot;
use crate::render::theme::{UsageLevel, CRITICAL_THRESHOLD_PCT};
use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

const UNAVAILABLE: &str = "unavailable";

fn colored_pct(pct: f64) -> ColoredString {
    let text = format!("{:.1}%", pct);
    match UsageLevel::for_pct(pct) {
        UsageLevel::Normal => text.green(),
        UsageLevel::Warning => text.yellow(),
        UsageLevel::Critical => text.red(),
    }
}

/// One row per source with its headline reading
pub fn format_snapshot_table(snapshot: &Snapshot) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Source", "Status", "Details"]);

    let container_status = if snapshot.container.running {
        "Running".green()
    } else {
        "Down".red()
    };
    table.add_row(vec![
        Cell::new("Container"),
        Cell::new(container_status),
        Cell::new(format!(
            "{} {}",
            snapshot.container.status_text, snapshot.container.ports
        )),
    ]);

    let loaded: Vec<&str> = snapshot.loaded.iter().map(|m| m.name.as_str()).collect();
    table.add_row(vec![
        Cell::new("Loaded models"),
        Cell::new(loaded.len()),
        Cell::new(loaded.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("Catalog"),
        Cell::new(snapshot.catalog.len()),
        Cell::new(format!("{} models on disk", snapshot.catalog.len())),
    ]);

    match &snapshot.gpu {
        Some(gpu) => table.add_row(vec![
            Cell::new("GPU"),
            Cell::new(colored_pct(gpu.vram_pct)),
            Cell::new(format!(
                "{}: {} / {} MiB, util {}%, {}°C",
                gpu.name, gpu.vram_used_mib, gpu.vram_total_mib, gpu.gpu_util_pct, gpu.temp_c
            )),
        ]),
        None => table.add_row(vec![
            Cell::new("GPU"),
            Cell::new(UNAVAILABLE.dimmed()),
            Cell::new(""),
        ]),
    };

    match &snapshot.ram {
        Some(ram) => table.add_row(vec![
            Cell::new("RAM"),
            Cell::new(colored_pct(ram.pct)),
            Cell::new(format!("{:.1} / {:.1} GB", ram.used_gb, ram.total_gb)),
        ]),
        None => table.add_row(vec![
            Cell::new("RAM"),
            Cell::new(UNAVAILABLE.dimmed()),
            Cell::new(""),
        ]),
    };

    match &snapshot.disk {
        Some(disk) => table.add_row(vec![
            Cell::new("Disk"),
            Cell::new(&disk.pct),
            Cell::new(format!("{} / {}, {} free", disk.used, disk.total, disk.avail)),
        ]),
        None => table.add_row(vec![
            Cell::new("Disk"),
            Cell::new(UNAVAILABLE.dimmed()),
            Cell::new(""),
        ]),
    };

    table.to_string()
}

/// Snapshot as pretty JSON
pub fn format_snapshot_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// True when any reading is at or above the critical threshold
pub fn has_critical_usage(snapshot: &Snapshot) -> bool {
    let gpu = snapshot
        .gpu
        .as_ref()
        .map(|g| [g.vram_pct, g.gpu_util_pct as f64]);
    let ram = snapshot.ram.as_ref().map(|r| r.pct);

    gpu.into_iter()
        .flatten()
        .chain(ram)
        .any(|pct| pct >= CRITICAL_THRESHOLD_PCT)
}
