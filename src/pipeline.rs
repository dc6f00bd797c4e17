//! Plate pipeline - the shared decision path for every caller
//!
//! Both entry points (human browser upload, headless device upload) funnel
//! into [`PlatePipeline::process`]: normalize OCR fragments, extract a plate
//! under the configured policy, decide access against freshly loaded
//! deny/allow lists, and append an audit record.
//!
//! Fail-soft contract: no OCR or extraction irregularity crosses this
//! boundary as an error. Misses and upstream faults become sentinel plates
//! that decide as Unknown. The only genuine error in the core is an audit
//! log write failure, and even that is carried in the outcome rather than
//! replacing it - the caller always gets its decision.

use crate::config::Config;
use crate::domain::{self, ExtractionPolicy};
use crate::error::Result;
use crate::infrastructure::{AccessList, AuditLog, ListFormat};
use crate::scanner;
use crate::types::{AccessStatus, Detection, GateOutcome, LogRecord, PlateCandidate};
use crate::vision::OcrEngine;
use std::path::{Path, PathBuf};

pub struct PlatePipeline {
    policy: ExtractionPolicy,
    list_format: ListFormat,
    allow_list_path: PathBuf,
    deny_list_path: PathBuf,
    audit_log: AuditLog,
}

impl PlatePipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            policy: config.policy,
            list_format: config.list_format,
            allow_list_path: config.allow_list_path.clone(),
            deny_list_path: config.deny_list_path.clone(),
            audit_log: AuditLog::new(&config.log_path),
        }
    }

    pub fn policy(&self) -> ExtractionPolicy {
        self.policy
    }

    /// Run the full decision path on pre-detected OCR fragments.
    ///
    /// Lists are re-read from their sources on every call; an operator edit
    /// is visible on the next request. A record is appended to the audit log
    /// only when extraction produced a real plate.
    pub fn process(&self, detections: &[Detection], image_name: &str) -> GateOutcome {
        let candidate = self.extract(detections);
        self.conclude(candidate, image_name)
    }

    /// Validate and OCR an image, then run the decision path.
    ///
    /// Recognizer faults never escape: an undecodable image decides as a
    /// plate miss, an engine fault as a processing error (under the
    /// length-threshold policy, which distinguishes the two).
    pub fn process_image(
        &self,
        ocr: &dyn OcrEngine,
        image_path: &Path,
        image_name: &str,
    ) -> GateOutcome {
        if scanner::validate_image(image_path).is_err() {
            return self.conclude(PlateCandidate::NotFound, image_name);
        }

        match ocr.read_text(image_path) {
            Ok(detections) => self.process(&detections, image_name),
            Err(_) => {
                let candidate = match self.policy {
                    ExtractionPolicy::LengthThreshold => PlateCandidate::ProcessingError,
                    ExtractionPolicy::StructuralPattern => PlateCandidate::NotFound,
                };
                self.conclude(candidate, image_name)
            }
        }
    }

    fn extract(&self, detections: &[Detection]) -> PlateCandidate {
        match self.policy {
            ExtractionPolicy::StructuralPattern => {
                let fragments: Vec<&str> =
                    detections.iter().map(|d| d.text.as_str()).collect();
                let normalized = domain::normalize(&fragments);
                domain::extract_structural(&normalized)
            }
            ExtractionPolicy::LengthThreshold => domain::extract_by_length(detections),
        }
    }

    fn conclude(&self, candidate: PlateCandidate, image_name: &str) -> GateOutcome {
        let deny_list = AccessList::load(&self.deny_list_path, self.list_format);
        let allow_list = AccessList::load(&self.allow_list_path, self.list_format);
        let status = domain::decide(&candidate, &deny_list, &allow_list);

        let plate = self.policy.display_plate(&candidate);

        // Log trigger: only successful extractions produce a record
        let log_error = if candidate.is_plate() {
            self.append_record(&plate, image_name, status).err()
        } else {
            None
        };

        GateOutcome {
            plate,
            status,
            log_error,
        }
    }

    fn append_record(
        &self,
        plate: &str,
        image_name: &str,
        status: AccessStatus,
    ) -> Result<()> {
        let record = LogRecord::capture(plate, image_name, status);
        self.audit_log.append(&record)
    }
}
