//! Benchmark for page rendering

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use statusboard::collect::{
    CatalogModel, ContainerStatus, DiskStats, GpuStats, LoadedModel, RamStats, Snapshot,
};
use statusboard::render::{render_page, PageOptions};

fn busy_snapshot() -> Snapshot {
    let catalog: Vec<CatalogModel> = (0..50)
        .map(|i| CatalogModel {
            name: format!("model-{}:latest", i),
            param_size: "7B".to_string(),
            size_gb: 4.1,
            quantization: "Q4_K_M".to_string(),
        })
        .collect();
    let loaded = (0..3)
        .map(|i| LoadedModel {
            name: format!("model-{}:latest", i),
            param_size: "7B".to_string(),
            vram_gb: 5.2,
            context_length: 8192,
            quantization: "Q4_K_M".to_string(),
        })
        .collect();

    Snapshot {
        container: ContainerStatus::running("Up 4 days", "0.0.0.0:50080->80/tcp"),
        loaded,
        catalog,
        gpu: Some(GpuStats::new("NVIDIA RTX A6000", 30000, 49140, 64, 71)),
        ram: Some(RamStats::from_mb(128000, 70000)),
        disk: Some(DiskStats {
            total: "1832G".to_string(),
            used: "1200G".to_string(),
            avail: "632G".to_string(),
            pct: "66%".to_string(),
        }),
    }
}

fn bench_render_full_page(c: &mut Criterion) {
    let snapshot = busy_snapshot();
    let options = PageOptions::default();

    c.bench_function("render_full_page", |b| {
        b.iter(|| {
            black_box(render_page(
                black_box(&snapshot),
                &options,
                "2026-01-01 00:00:00",
            ))
        });
    });
}

fn bench_render_unavailable(c: &mut Criterion) {
    let snapshot = Snapshot::unavailable();
    let options = PageOptions::default();

    c.bench_function("render_unavailable_page", |b| {
        b.iter(|| black_box(render_page(black_box(&snapshot), &options, "x")));
    });
}

criterion_group!(benches, bench_render_full_page, bench_render_unavailable);
criterion_main!(benches);
