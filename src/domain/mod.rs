//! Domain layer: pure decision logic
//!
//! Everything here is a pure in-memory transform. File-backed concerns
//! (list sources, the audit log) live in `infrastructure`.

pub mod decider;
pub mod extractor;
pub mod normalizer;

pub use decider::decide;
pub use extractor::{extract_by_length, extract_structural, ExtractionPolicy};
pub use normalizer::normalize;
