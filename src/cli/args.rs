//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Policy, RoundingMode};

/// Parse and validate image dimensions (WIDTHxHEIGHT format)
pub fn parse_dimensions(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split(['x', 'X', ':']).collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid dimensions '{}'. Use WIDTHxHEIGHT (e.g., 1920x1080)",
            s
        ));
    }
    let width: u32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| format!("Invalid width '{}' in dimensions", parts[0]))?;
    let height: u32 = parts[1]
        .trim()
        .parse()
        .map_err(|_| format!("Invalid height '{}' in dimensions", parts[1]))?;
    if width == 0 || height == 0 {
        return Err("Width and height must be greater than 0".to_string());
    }
    Ok((width, height))
}

/// Resolve image dimensions into canonical ratios and placeholder styles
#[derive(Parser, Debug)]
#[command(name = "ratio-placeholder")]
#[command(version, about = "Canonical aspect ratios and placeholder geometry", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Match image dimensions to a canonical ratio and print placeholder data
    Resolve {
        /// Image dimensions, e.g. 1920x1080
        #[arg(value_parser = parse_dimensions)]
        dimensions: (u32, u32),

        /// Catalog policy (overrides config)
        #[arg(long, short)]
        policy: Option<Policy>,

        /// Component count rounding (overrides config)
        #[arg(long, short)]
        rounding: Option<RoundingMode>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the catalog entries in match order
    Catalog {
        /// Catalog policy (overrides config)
        #[arg(long, short)]
        policy: Option<Policy>,
    },
    /// Print the blank SVG placeholder for a ratio
    Svg {
        /// Ratio or image dimensions, e.g. 4x3
        #[arg(value_parser = parse_dimensions)]
        dimensions: (u32, u32),

        /// Print as a percent-encoded data URI
        #[arg(long)]
        data_uri: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
