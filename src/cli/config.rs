//! Config command handlers

use crate::cli::ConfigInitArgs;
use anyhow::bail;
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../statusboard.example.toml");

/// Handle `statusboard config init` command
pub fn handle_config_init(args: &ConfigInitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        );
    }

    fs::write(&args.output, EXAMPLE_CONFIG)?;

    println!("✓ Configuration file created: {}", args.output.display());
    println!("  Edit this file to point statusboard at your container and Ollama server.");

    Ok(())
}
