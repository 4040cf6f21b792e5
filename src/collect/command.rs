//! Bounded execution of external telemetry commands.

use super::error::CollectError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Run `program args..` and return its trimmed stdout.
///
/// The child is spawned with `kill_on_drop`, so a timeout or a dropped
/// request future kills it instead of leaving it behind.
pub async fn run_command(
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<String, CollectError> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(result) => result.map_err(|e| CollectError::Spawn {
            program: program.to_string(),
            message: e.to_string(),
        })?,
        Err(_) => {
            return Err(CollectError::Timeout {
                program: program.to_string(),
                seconds: timeout.as_secs(),
            })
        }
    };

    if !output.status.success() {
        return Err(CollectError::ExitStatus {
            program: program.to_string(),
            code: output.status.code(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_run_command_trims_stdout() {
        let out = run_command("echo", &args(&["  hello  "]), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn test_run_command_missing_binary() {
        let err = run_command("definitely-not-a-real-binary-xyz", &[], Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_run_command_nonzero_exit() {
        let err = run_command("sh", &args(&["-c", "exit 3"]), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectError::ExitStatus { code: Some(3), .. }));
    }

    #[tokio::test]
    async fn test_run_command_timeout() {
        let start = std::time::Instant::now();
        let err = run_command("sleep", &args(&["10"]), Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, CollectError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
