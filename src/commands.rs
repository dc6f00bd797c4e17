//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::domain::ExtractionPolicy;
use crate::error::Result;
use crate::infrastructure::{AccessList, AuditLog, ListFormat};
use crate::output::output_outcome;
use crate::pipeline::PlatePipeline;
use crate::types::{Detection, GateOutcome};
use crate::vision::CommandOcr;
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }

    match &cli.command {
        Commands::Check { image, image_name } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_check(
                &cli,
                &config,
                image.clone(),
                image_name.clone(),
                output_format,
            )
        }

        Commands::ScanText {
            fragments,
            image_name,
        } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_scan_text(&config, fragments, image_name, output_format)
        }

        Commands::Log { limit } => cmd_log(&config, *limit),

        Commands::Lists => cmd_lists(&config),

        Commands::Config {
            show,
            set_policy,
            set_list_format,
            set_allow_list,
            set_deny_list,
            set_log,
            set_ocr_command,
            set_ocr_min_conf,
            set_output,
            reset,
        } => cmd_config(
            *show,
            *set_policy,
            *set_list_format,
            set_allow_list.clone(),
            set_deny_list.clone(),
            set_log.clone(),
            set_ocr_command.clone(),
            *set_ocr_min_conf,
            *set_output,
            *reset,
        ),
    }
}

fn cmd_check(
    cli: &Cli,
    config: &Config,
    image: PathBuf,
    image_name: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let command = config.ocr_command.as_deref().ok_or_else(|| {
        crate::error::Error::Config(
            "no OCR command configured; set one with: plate-gate config --set-ocr-command"
                .to_string(),
        )
    })?;

    // The recognizer lives for the process, constructed once up front
    let ocr = CommandOcr::new(command, config.ocr_min_confidence, cli.verbose);

    let image_name = image_name.unwrap_or_else(|| {
        image
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| image.display().to_string())
    });

    let pipeline = PlatePipeline::new(config);
    let outcome = pipeline.process_image(&ocr, &image, &image_name);

    report_outcome(output_format, &outcome)
}

fn cmd_scan_text(
    config: &Config,
    fragments: &[String],
    image_name: &str,
    output_format: OutputFormat,
) -> Result<()> {
    let detections: Vec<Detection> = fragments
        .iter()
        .map(|text| Detection::new(text.clone(), 1.0))
        .collect();

    let pipeline = PlatePipeline::new(config);
    let outcome = pipeline.process(&detections, image_name);

    report_outcome(output_format, &outcome)
}

/// Print the decision, then surface any audit-log failure on stderr.
/// The decision itself is never withheld because logging failed.
fn report_outcome(output_format: OutputFormat, outcome: &GateOutcome) -> Result<()> {
    output_outcome(output_format, outcome)?;

    if let Some(ref err) = outcome.log_error {
        eprintln!("Warning: audit log write failed: {}", err);
    }

    Ok(())
}

fn cmd_log(config: &Config, limit: usize) -> Result<()> {
    let log = AuditLog::new(&config.log_path);
    let entries = log.entries()?;

    if entries.is_empty() {
        println!("Audit log is empty: {}", config.log_path.display());
        return Ok(());
    }

    println!(
        "{:<14} {:<12} {:<10} {:<24} {}",
        "Plate", "Date", "Time", "Image", "Status"
    );
    for entry in entries.iter().rev().take(limit) {
        println!(
            "{:<14} {:<12} {:<10} {:<24} {}",
            entry.plate, entry.date, entry.time, entry.image, entry.status
        );
    }

    Ok(())
}

fn cmd_lists(config: &Config) -> Result<()> {
    let deny = AccessList::load(&config.deny_list_path, config.list_format);
    let allow = AccessList::load(&config.allow_list_path, config.list_format);

    println!(
        "Deny list ({}): {} entries",
        config.deny_list_path.display(),
        deny.len()
    );
    for plate in deny.iter() {
        println!("  {}", plate);
    }

    println!(
        "Allow list ({}): {} entries",
        config.allow_list_path.display(),
        allow.len()
    );
    for plate in allow.iter() {
        println!("  {}", plate);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_policy: Option<ExtractionPolicy>,
    set_list_format: Option<ListFormat>,
    set_allow_list: Option<PathBuf>,
    set_deny_list: Option<PathBuf>,
    set_log: Option<PathBuf>,
    set_ocr_command: Option<String>,
    set_ocr_min_conf: Option<f32>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(policy) = set_policy {
        config.policy = policy;
        changed = true;
    }
    if let Some(format) = set_list_format {
        config.list_format = format;
        changed = true;
    }
    if let Some(path) = set_allow_list {
        config.allow_list_path = path;
        changed = true;
    }
    if let Some(path) = set_deny_list {
        config.deny_list_path = path;
        changed = true;
    }
    if let Some(path) = set_log {
        config.log_path = path;
        changed = true;
    }
    if let Some(command) = set_ocr_command {
        config.ocr_command = if command.is_empty() {
            None
        } else {
            Some(command)
        };
        changed = true;
    }
    if let Some(conf) = set_ocr_min_conf {
        if !(0.0..=1.0).contains(&conf) {
            return Err(crate::error::Error::Config(format!(
                "ocr_min_confidence must be in 0.0-1.0, got {}",
                conf
            )));
        }
        config.ocr_min_confidence = conf;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
