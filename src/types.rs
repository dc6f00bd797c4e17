//! Core types for the plate gate pipeline

use crate::error::Error;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// One text fragment produced by the OCR capability.
///
/// Fragments arrive in the detector's internal scan order; the order carries
/// no meaning beyond concatenation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub text: String,
    /// Detector confidence in [0.0, 1.0]
    #[serde(default)]
    pub confidence: f32,
}

impl Detection {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Result of plate extraction. At most one candidate per image; the first
/// match in scan order wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlateCandidate {
    /// A plate string accepted by the active extraction policy
    Plate(String),
    /// No fragment satisfied the policy (or the image could not be decoded)
    NotFound,
    /// The detection step itself faulted
    ProcessingError,
}

impl PlateCandidate {
    pub fn is_plate(&self) -> bool {
        matches!(self, PlateCandidate::Plate(_))
    }

    pub fn as_plate(&self) -> Option<&str> {
        match self {
            PlateCandidate::Plate(p) => Some(p),
            _ => None,
        }
    }
}

/// Access decision for a plate. Deny-list membership always wins over
/// allow-list membership; anything else is Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessStatus {
    Granted,
    Denied,
    Unknown,
}

impl AccessStatus {
    /// Display label for human-facing output
    pub fn label(&self) -> &'static str {
        match self {
            AccessStatus::Granted => "GRANTED",
            AccessStatus::Denied => "DENIED",
            AccessStatus::Unknown => "UNKNOWN",
        }
    }

    /// Label for machine-facing responses. Same decision, different wording:
    /// headless callers see DENIED as BLOCKED.
    pub fn api_label(&self) -> &'static str {
        match self {
            AccessStatus::Denied => "BLOCKED",
            other => other.label(),
        }
    }
}

impl std::fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the audit log. Immutable once captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub plate: String,
    /// DD-MM-YYYY, local wall-clock
    pub date: String,
    /// HH:MM:SS, local wall-clock
    pub time: String,
    pub image: String,
    pub status: String,
}

impl LogRecord {
    /// Build a record stamped with the current local date and time.
    pub fn capture(plate: &str, image: &str, status: AccessStatus) -> Self {
        let now = Local::now();
        Self {
            plate: plate.to_string(),
            date: now.format("%d-%m-%Y").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            image: image.to_string(),
            status: status.label().to_string(),
        }
    }
}

/// Final pipeline result handed back to the caller.
///
/// `log_error` carries an audit-log write failure without blocking the
/// decision: the caller still gets plate and status, and reports the failure
/// on its own operator channel.
#[derive(Debug)]
pub struct GateOutcome {
    pub plate: String,
    pub status: AccessStatus,
    pub log_error: Option<Error>,
}
