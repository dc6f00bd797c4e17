//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::GateOutcome;
use serde_json::json;

pub fn output_outcome(output_format: OutputFormat, outcome: &GateOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        // Machine callers get the API label (DENIED renders as BLOCKED)
        let content = serde_json::to_string_pretty(&json!({
            "plate": outcome.plate,
            "status": outcome.status.api_label(),
        }))?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nGate Decision");
        println!("=============");
        println!("Plate:  {}", outcome.plate);
        println!("Status: {}", outcome.status.label());
    }

    Ok(())
}
