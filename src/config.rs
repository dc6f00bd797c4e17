//! Configuration management for plate-gate
//!
//! Config stored at: ~/.config/plate-gate/config.json

use crate::cli::OutputFormat;
use crate::domain::ExtractionPolicy;
use crate::error::{Error, Result};
use crate::infrastructure::ListFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Plate extraction policy (structural-pattern, length-threshold)
    #[serde(default)]
    pub policy: ExtractionPolicy,

    /// On-disk shape of the list sources (csv-with-header, plain-lines)
    #[serde(default)]
    pub list_format: ListFormat,

    /// Allow-list source file
    #[serde(default = "default_allow_list_path")]
    pub allow_list_path: PathBuf,

    /// Deny-list source file
    #[serde(default = "default_deny_list_path")]
    pub deny_list_path: PathBuf,

    /// Audit log destination
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,

    /// External OCR command, e.g. "python3 recognizer.py"
    #[serde(default)]
    pub ocr_command: Option<String>,

    /// Detections below this confidence are dropped (0.0 keeps everything)
    #[serde(default)]
    pub ocr_min_confidence: f32,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_allow_list_path() -> PathBuf {
    PathBuf::from("whitelist.csv")
}

fn default_deny_list_path() -> PathBuf {
    PathBuf::from("blacklist.csv")
}

fn default_log_path() -> PathBuf {
    PathBuf::from("vehicle_log.csv")
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: ExtractionPolicy::default(),
            list_format: ListFormat::default(),
            allow_list_path: default_allow_list_path(),
            deny_list_path: default_deny_list_path(),
            log_path: default_log_path(),
            ocr_command: None,
            ocr_min_confidence: 0.0,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("no config directory on this platform".to_string()))?
            .join("plate-gate");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Plate Gate Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Policy:          {}", self.policy)?;
        writeln!(f, "List format:     {}", self.list_format)?;
        writeln!(f, "Allow list:      {}", self.allow_list_path.display())?;
        writeln!(f, "Deny list:       {}", self.deny_list_path.display())?;
        writeln!(f, "Audit log:       {}", self.log_path.display())?;
        writeln!(
            f,
            "OCR command:     {}",
            self.ocr_command.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(f, "OCR min conf:    {:.2}", self.ocr_min_confidence)?;
        writeln!(f, "Output format:   {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_deployment() {
        let config = Config::default();
        assert_eq!(config.policy, ExtractionPolicy::StructuralPattern);
        assert_eq!(config.list_format, ListFormat::CsvWithHeader);
        assert_eq!(config.allow_list_path, PathBuf::from("whitelist.csv"));
        assert_eq!(config.deny_list_path, PathBuf::from("blacklist.csv"));
        assert_eq!(config.log_path, PathBuf::from("vehicle_log.csv"));
        assert!(config.ocr_command.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"policy":"length-threshold"}"#).unwrap();
        assert_eq!(config.policy, ExtractionPolicy::LengthThreshold);
        assert_eq!(config.log_path, PathBuf::from("vehicle_log.csv"));
        assert_eq!(config.ocr_min_confidence, 0.0);
    }
}
