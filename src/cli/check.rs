//! Check command implementation

use crate::cli::output::{format_snapshot_json, format_snapshot_table, has_critical_usage};
use crate::cli::CheckArgs;
use crate::collect::Collectors;
use crate::config::StatusConfig;
use colored::Colorize;

/// Handle `statusboard check`: one collection pass, printed.
pub async fn handle_check(args: &CheckArgs) -> anyhow::Result<String> {
    let config = if args.config.exists() {
        StatusConfig::load(Some(&args.config))?
    } else {
        StatusConfig::default()
    };
    let config = config.with_env_overrides();
    config.validate()?;

    let snapshot = Collectors::from_config(&config).collect().await;

    if args.json {
        return Ok(format_snapshot_json(&snapshot)?);
    }

    let mut output = format_snapshot_table(&snapshot);
    if has_critical_usage(&snapshot) {
        output.push_str(&format!("\n{}", "⚠ usage above critical threshold".red()));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_check_json_with_unreachable_sources() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            temp.path(),
            r#"
            [container]
            runtime = "no-such-runtime"
            [ollama]
            url = "http://127.0.0.1:9"
            timeout_seconds = 1
            [telemetry]
            nvidia_smi = "no-such-nvidia-smi"
            free = "no-such-free"
            df = "no-such-df"
            "#,
        )
        .unwrap();

        let args = CheckArgs {
            json: true,
            config: temp.path().to_path_buf(),
        };
        let output = handle_check(&args).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["container"]["running"], false);
        assert_eq!(value["loaded"].as_array().unwrap().len(), 0);
        assert!(value["gpu"].is_null());
        assert!(value["ram"].is_null());
        assert!(value["disk"].is_null());
    }

    #[tokio::test]
    async fn test_check_rejects_invalid_config() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[dashboard]\nrefresh_seconds = 0").unwrap();

        let args = CheckArgs {
            json: false,
            config: PathBuf::from(temp.path()),
        };
        assert!(handle_check(&args).await.is_err());
    }
}
