//! CLI definition using clap

use crate::domain::ExtractionPolicy;
use crate::infrastructure::ListFormat;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "plate-gate")]
#[command(version)]
#[command(about = "License plate access control: OCR text to gate decision with audit logging")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Extraction policy override (structural-pattern, length-threshold)
    #[arg(long, global = true)]
    pub policy: Option<ExtractionPolicy>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run OCR on an image and decide access
    Check {
        /// Path to image file
        image: PathBuf,

        /// Name recorded in the audit log (defaults to the file name)
        #[arg(long)]
        image_name: Option<String>,
    },

    /// Decide access from already-detected text fragments (no OCR)
    ScanText {
        /// Detected text fragments, in scan order
        #[arg(required = true)]
        fragments: Vec<String>,

        /// Name recorded in the audit log
        #[arg(long, default_value = "-")]
        image_name: String,
    },

    /// Show recent audit log entries
    Log {
        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Show the loaded allow and deny lists
    Lists,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default extraction policy
        #[arg(long)]
        set_policy: Option<ExtractionPolicy>,

        /// Set list source format
        #[arg(long)]
        set_list_format: Option<ListFormat>,

        /// Set allow-list source file
        #[arg(long)]
        set_allow_list: Option<PathBuf>,

        /// Set deny-list source file
        #[arg(long)]
        set_deny_list: Option<PathBuf>,

        /// Set audit log destination
        #[arg(long)]
        set_log: Option<PathBuf>,

        /// Set external OCR command
        #[arg(long)]
        set_ocr_command: Option<String>,

        /// Set OCR minimum confidence (0.0-1.0)
        #[arg(long)]
        set_ocr_min_conf: Option<f32>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
