//! Data source configuration: container runtime, Ollama API and the
//! telemetry commands.

use serde::{Deserialize, Serialize};

/// Container runtime status query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Runtime CLI binary (`docker`, `podman`)
    pub runtime: String,
    /// Value passed as `--filter name=<filter>`
    pub name_filter: String,
    pub timeout_seconds: u64,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            runtime: "docker".to_string(),
            name_filter: "agent-zero".to_string(),
            timeout_seconds: 5,
        }
    }
}

/// Local Ollama server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    pub url: String,
    pub timeout_seconds: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:11434".to_string(),
            timeout_seconds: 3,
        }
    }
}

/// Host telemetry commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub nvidia_smi: String,
    pub free: String,
    pub df: String,
    /// Filesystem reported in the disk card
    pub disk_mount: String,
    pub timeout_seconds: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            nvidia_smi: "nvidia-smi".to_string(),
            free: "free".to_string(),
            df: "df".to_string(),
            disk_mount: "/home".to_string(),
            timeout_seconds: 5,
        }
    }
}

/// Page presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    /// Value of the `<meta http-equiv="refresh">` tag
    pub refresh_seconds: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Agent Zero Status".to_string(),
            refresh_seconds: 30,
        }
    }
}
