//! Vision module - the OCR capability seam
//!
//! The pipeline never talks to an OCR engine directly; it receives text
//! detections through the [`OcrEngine`] trait. The engine is constructed
//! once at startup and passed in explicitly, never held as ambient global
//! state. The shipped implementation shells out to an external recognizer
//! command ([`command_ocr::CommandOcr`]).

pub mod command_ocr;

pub use command_ocr::CommandOcr;

use crate::error::Result;
use crate::types::Detection;
use std::path::Path;

/// Opaque text-recognition capability: pixels in, (text, confidence) out.
pub trait OcrEngine {
    fn read_text(&self, image: &Path) -> Result<Vec<Detection>>;
}

/// Strip a markdown code fence if the recognizer wrapped its JSON in one.
pub(crate) fn extract_json_from_output(output: &str) -> &str {
    let output = output.trim();

    if let Some(rest) = output.strip_prefix("```json").or_else(|| output.strip_prefix("```")) {
        if let Some(end) = rest.rfind("```") {
            return rest[..end].trim();
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_plain() {
        assert_eq!(extract_json_from_output(" [1,2] \n"), "[1,2]");
    }

    #[test]
    fn test_extract_json_fenced() {
        assert_eq!(
            extract_json_from_output("```json\n[{\"text\":\"KA\"}]\n```"),
            "[{\"text\":\"KA\"}]"
        );
        assert_eq!(extract_json_from_output("```\n[]\n```"), "[]");
    }
}
