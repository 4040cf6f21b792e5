//! HTTP handler for the dashboard page

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::api::AppState;
use crate::render::{render_page, TIMESTAMP_FORMAT};

/// Collect all sources and render the page stamped with the local time.
pub async fn render_now(state: &AppState) -> Result<String, askama::Error> {
    let snapshot = state.collectors.collect().await;
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    render_page(&snapshot, &state.page, &timestamp)
}

/// Serves the dashboard for any path and method.
///
/// `200 OK` even when every source is down: unavailable sources only remove
/// their section. A template failure is the only `500`.
pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Response {
    match render_now(&state).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render dashboard");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render dashboard").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::{
        CatalogModel, Collectors, ContainerStatus, ContainerStatusSource, DiskSource, DiskStats,
        GpuStats, GpuTelemetrySource, LoadedModel, MemorySource, ModelSource, RamStats,
    };
    use crate::render::PageOptions;
    use async_trait::async_trait;

    struct Down;

    #[async_trait]
    impl ContainerStatusSource for Down {
        async fn container_status(&self) -> ContainerStatus {
            ContainerStatus::not_running()
        }
    }

    #[async_trait]
    impl ModelSource for Down {
        async fn loaded_models(&self) -> Vec<LoadedModel> {
            Vec::new()
        }

        async fn catalog_models(&self) -> Vec<CatalogModel> {
            Vec::new()
        }
    }

    #[async_trait]
    impl GpuTelemetrySource for Down {
        async fn gpu_stats(&self) -> Option<GpuStats> {
            None
        }
    }

    #[async_trait]
    impl MemorySource for Down {
        async fn ram_stats(&self) -> Option<RamStats> {
            None
        }
    }

    #[async_trait]
    impl DiskSource for Down {
        async fn disk_stats(&self) -> Option<DiskStats> {
            None
        }
    }

    fn all_down() -> Arc<AppState> {
        let down = Arc::new(Down);
        let collectors = Collectors::new(
            down.clone(),
            down.clone(),
            down.clone(),
            down.clone(),
            down,
        );
        Arc::new(AppState::new(collectors, PageOptions::default()))
    }

    #[tokio::test]
    async fn test_handler_ok_when_everything_is_down() {
        let response = dashboard_handler(State(all_down())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_render_now_stamps_local_time() {
        let before = chrono::Local::now().format("%Y-%m-%d").to_string();
        let page = render_now(&all_down()).await.unwrap();
        let after = chrono::Local::now().format("%Y-%m-%d").to_string();
        assert!(
            page.contains(&format!("Updated: {}", before))
                || page.contains(&format!("Updated: {}", after))
        );
        assert!(page.contains("Container: Not running"));
    }
}
