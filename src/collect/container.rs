//! Container status via the runtime CLI (`docker ps`).

use super::command::run_command;
use super::error::CollectError;
use super::types::ContainerStatus;
use super::ContainerStatusSource;
use crate::config::ContainerConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Go template giving `status<TAB>ports`
const PS_FORMAT: &str = "{{.Status}}\t{{.Ports}}";

/// Parse the first line of `docker ps --format` output.
///
/// Splits on the first tab: everything before is the status text,
/// everything after is the port mapping. Empty output means the
/// container is not running.
pub fn parse_container_status(raw: &str) -> Result<ContainerStatus, CollectError> {
    let line = raw
        .trim()
        .lines()
        .next()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| CollectError::parse("no matching container"))?;

    Ok(match line.split_once('\t') {
        Some((status, ports)) => ContainerStatus::running(status, ports),
        None => ContainerStatus::running(line, ""),
    })
}

/// `ContainerStatusSource` backed by `docker ps` (or a compatible CLI).
pub struct DockerCli {
    runtime: String,
    name_filter: String,
    timeout: Duration,
}

impl DockerCli {
    pub fn new(config: &ContainerConfig) -> Self {
        Self {
            runtime: config.runtime.clone(),
            name_filter: config.name_filter.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    fn args(&self) -> Vec<String> {
        vec![
            "ps".to_string(),
            "--filter".to_string(),
            format!("name={}", self.name_filter),
            "--format".to_string(),
            PS_FORMAT.to_string(),
        ]
    }

    async fn query(&self) -> Result<ContainerStatus, CollectError> {
        let raw = run_command(&self.runtime, &self.args(), self.timeout).await?;
        parse_container_status(&raw)
    }
}

#[async_trait]
impl ContainerStatusSource for DockerCli {
    async fn container_status(&self) -> ContainerStatus {
        self.query().await.unwrap_or_else(|e| {
            tracing::debug!(
                runtime = %self.runtime,
                filter = %self.name_filter,
                error = %e,
                "Container status unavailable"
            );
            ContainerStatus::not_running()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_running_with_ports() {
        let status =
            parse_container_status("Up 3 hours (healthy)\t0.0.0.0:50080->80/tcp").unwrap();
        assert!(status.running);
        assert_eq!(status.status_text, "Up 3 hours (healthy)");
        assert_eq!(status.ports, "0.0.0.0:50080->80/tcp");
    }

    #[test]
    fn test_parse_splits_on_first_tab_only() {
        let status = parse_container_status("Up 5 minutes\t80/tcp\textra").unwrap();
        assert_eq!(status.status_text, "Up 5 minutes");
        assert_eq!(status.ports, "80/tcp\textra");
    }

    #[test]
    fn test_parse_running_without_ports() {
        let status = parse_container_status("Up 2 days\t\n").unwrap();
        assert!(status.running);
        assert_eq!(status.status_text, "Up 2 days");
        assert_eq!(status.ports, "");
    }

    #[test]
    fn test_parse_only_first_line() {
        let status = parse_container_status("Up 1 hour\t8080/tcp\nUp 2 hours\t9090/tcp").unwrap();
        assert_eq!(status.status_text, "Up 1 hour");
        assert_eq!(status.ports, "8080/tcp");
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_container_status("").is_err());
        assert!(parse_container_status("  \n ").is_err());
    }

    #[test]
    fn test_docker_args() {
        let cli = DockerCli::new(&ContainerConfig::default());
        assert_eq!(
            cli.args(),
            vec![
                "ps",
                "--filter",
                "name=agent-zero",
                "--format",
                "{{.Status}}\t{{.Ports}}"
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_runtime_is_not_running() {
        let config = ContainerConfig {
            runtime: "no-such-container-runtime".to_string(),
            ..ContainerConfig::default()
        };
        let status = DockerCli::new(&config).container_status().await;
        assert_eq!(status, ContainerStatus::not_running());
    }
}
