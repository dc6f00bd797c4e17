//! Plate extraction policies
//!
//! Two deployments of this system evolved different ideas of what counts as
//! a plate, so both are kept as selectable policies rather than merged:
//!
//! - `StructuralPattern` matches a fixed regional grammar (2 digits, 1-3
//!   letters, 4 digits) against the normalized concatenation of all
//!   fragments.
//! - `LengthThreshold` looks at raw fragments one by one and accepts the
//!   first whose space-stripped length reaches 6. No glyph substitution, no
//!   hyphen stripping.
//!
//! Neither policy raises: every miss is a sentinel (fail-soft).

use crate::types::{Detection, PlateCandidate};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 2 digits, 1-3 uppercase letters, 4 digits
static PLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{2}[A-Z]{1,3}[0-9]{4}").unwrap());

/// Minimum stripped length accepted by the length-threshold policy
const MIN_PLATE_LEN: usize = 6;

/// Which extraction policy is active. Deployment config, never merged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionPolicy {
    /// First substring of the normalized text matching the plate grammar
    #[default]
    StructuralPattern,
    /// First raw fragment at least 6 characters long after space stripping
    LengthThreshold,
}

impl ExtractionPolicy {
    /// Sentinel label rendered when no plate is found under this policy.
    /// The two variants froze different wording; both are kept verbatim.
    pub fn miss_label(&self) -> &'static str {
        match self {
            ExtractionPolicy::StructuralPattern => "No Valid Plate Found",
            ExtractionPolicy::LengthThreshold => "NO PLATE FOUND",
        }
    }

    /// Sentinel label for an internal fault during detection
    pub fn fault_label(&self) -> &'static str {
        "PROCESSING ERROR"
    }

    /// Render a candidate as the string surfaced to callers and the log.
    pub fn display_plate(&self, candidate: &PlateCandidate) -> String {
        match candidate {
            PlateCandidate::Plate(p) => p.clone(),
            PlateCandidate::NotFound => self.miss_label().to_string(),
            PlateCandidate::ProcessingError => self.fault_label().to_string(),
        }
    }
}

impl std::fmt::Display for ExtractionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionPolicy::StructuralPattern => write!(f, "structural-pattern"),
            ExtractionPolicy::LengthThreshold => write!(f, "length-threshold"),
        }
    }
}

/// Find the first plate-grammar match in normalized text, left to right.
pub fn extract_structural(text: &str) -> PlateCandidate {
    match PLATE_PATTERN.find(text) {
        Some(m) => PlateCandidate::Plate(m.as_str().to_string()),
        None => PlateCandidate::NotFound,
    }
}

/// Accept the first raw fragment whose space-stripped, upper-cased form is
/// at least [`MIN_PLATE_LEN`] characters. Fragments are NOT concatenated and
/// NOT glyph-corrected under this policy.
pub fn extract_by_length(detections: &[Detection]) -> PlateCandidate {
    for detection in detections {
        let stripped: String = detection
            .text
            .to_uppercase()
            .chars()
            .filter(|c| *c != ' ')
            .collect();
        if stripped.len() >= MIN_PLATE_LEN {
            return PlateCandidate::Plate(stripped);
        }
    }
    PlateCandidate::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_first_match_wins() {
        assert_eq!(
            extract_structural("12AB3456EXTRA"),
            PlateCandidate::Plate("12AB3456".to_string())
        );
    }

    #[test]
    fn test_structural_embedded_match() {
        // Leading noise before the plate run; the match starts at the first
        // digit pair, so a letter-prefixed registration yields its tail
        assert_eq!(
            extract_structural("XYZ12AB3456TAIL"),
            PlateCandidate::Plate("12AB3456".to_string())
        );
        assert_eq!(
            extract_structural("KA01AB1234"),
            PlateCandidate::Plate("01AB1234".to_string())
        );
    }

    #[test]
    fn test_structural_three_letter_block() {
        assert_eq!(
            extract_structural("21BH2345"),
            PlateCandidate::Plate("21BH2345".to_string())
        );
        assert_eq!(
            extract_structural("21ABC2345"),
            PlateCandidate::Plate("21ABC2345".to_string())
        );
    }

    #[test]
    fn test_structural_no_match() {
        assert_eq!(extract_structural("HELLOWORLD"), PlateCandidate::NotFound);
        assert_eq!(extract_structural(""), PlateCandidate::NotFound);
    }

    #[test]
    fn test_length_threshold_first_long_fragment() {
        let detections = vec![
            Detection::new("KA 1", 0.9),
            Detection::new("ka01 ab1234", 0.8),
            Detection::new("ANOTHERLONG", 0.7),
        ];
        assert_eq!(
            extract_by_length(&detections),
            PlateCandidate::Plate("KA01AB1234".to_string())
        );
    }

    #[test]
    fn test_length_threshold_keeps_hyphens_and_glyphs() {
        // Only spaces are stripped; O and I pass through untouched
        let detections = vec![Detection::new("o1-io2", 0.9)];
        assert_eq!(
            extract_by_length(&detections),
            PlateCandidate::Plate("O1-IO2".to_string())
        );
    }

    #[test]
    fn test_length_threshold_all_short() {
        let detections = vec![Detection::new("AB 12", 0.9), Detection::new("x", 0.5)];
        assert_eq!(extract_by_length(&detections), PlateCandidate::NotFound);
    }

    #[test]
    fn test_sentinel_labels() {
        let policy = ExtractionPolicy::StructuralPattern;
        assert_eq!(
            policy.display_plate(&PlateCandidate::NotFound),
            "No Valid Plate Found"
        );
        let policy = ExtractionPolicy::LengthThreshold;
        assert_eq!(
            policy.display_plate(&PlateCandidate::NotFound),
            "NO PLATE FOUND"
        );
        assert_eq!(
            policy.display_plate(&PlateCandidate::ProcessingError),
            "PROCESSING ERROR"
        );
    }
}
