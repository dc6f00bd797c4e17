//! OCR via an external recognizer command.
//!
//! The configured command is invoked as `<command> --image <path>` and must
//! print a JSON array of `{"text": ..., "confidence": ...}` objects on
//! stdout (a markdown-fenced block is tolerated). Keeping the recognizer
//! out of process lets deployments swap engines without rebuilding.

use crate::error::{Error, Result};
use crate::types::Detection;
use crate::vision::{extract_json_from_output, OcrEngine};
use std::path::Path;
use std::process::Command;

pub struct CommandOcr {
    command: String,
    min_confidence: f32,
    verbose: bool,
}

impl CommandOcr {
    pub fn new(command: impl Into<String>, min_confidence: f32, verbose: bool) -> Self {
        Self {
            command: command.into(),
            min_confidence,
            verbose,
        }
    }
}

impl OcrEngine for CommandOcr {
    fn read_text(&self, image: &Path) -> Result<Vec<Detection>> {
        let mut parts = match shell_words::split(&self.command) {
            Ok(parts) if !parts.is_empty() => parts,
            _ => {
                return Err(Error::Config(format!(
                    "ocr_command is invalid: {}",
                    self.command
                )))
            }
        };

        let program = parts.remove(0);
        let mut cmd = Command::new(&program);
        cmd.args(&parts);
        cmd.arg("--image");
        cmd.arg(image);

        if self.verbose {
            eprintln!("Running: {} {:?} --image {:?}", program, parts, image);
        }

        let output = cmd
            .output()
            .map_err(|err| Error::Ocr(format!("failed to run {}: {}", program, err)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let kept = parse_detections(&stdout, self.min_confidence)?;

        if self.verbose {
            eprintln!("OCR: {} detection(s) above confidence floor", kept.len());
        }

        Ok(kept)
    }
}

/// Parse recognizer stdout and drop detections below the confidence floor.
fn parse_detections(stdout: &str, min_confidence: f32) -> Result<Vec<Detection>> {
    let json_str = extract_json_from_output(stdout);
    if json_str.is_empty() {
        return Ok(Vec::new());
    }

    let detections: Vec<Detection> = serde_json::from_str(json_str)
        .map_err(|err| Error::Ocr(format!("bad recognizer output: {}", err)))?;

    Ok(detections
        .into_iter()
        .filter(|d| d.confidence >= min_confidence)
        .collect())
}
