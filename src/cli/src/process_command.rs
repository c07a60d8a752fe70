use crate::commands::{Cli, Commands, ReportOptions};
use anyhow::{bail, Context, Result};
use clap::Parser;
use exlog_client::config_manager::{Config, ConfigLoader};
use exlog_client::exporters::LogWriterEnum;
use exlog_client::logging::setup_logging;
use exlog_client::{ErrorReporter, ReporterSettings};
use exlog_common::{ErrorPayload, NativeError, Severity};
use serde_json::Value;
use std::io::Read;
use tracing::debug;

const MASKED_SECRET: &str = "***";

pub fn process_cli() -> Result<()> {
    let cli = Cli::parse();
    // Use the --config flag, if provided, when loading the configuration
    let mut config = ConfigLoader::load_config(cli.config.as_deref())?;
    if cli.dry_run {
        config.dry_run = true;
    }

    let (payload, options) = match cli.command {
        Commands::Config => return print_config_info(&config),
        Commands::Report {
            message,
            name,
            stack,
            options,
        } => {
            let mut error = NativeError::new(&name, &message);
            if let Some(stack) = stack {
                error = error.with_stack(stack);
            }
            (ErrorPayload::from(error), options)
        }
        Commands::ReportJson { file, options } => (read_payload(&file)?, options),
    };

    setup_logging(&config)?;

    tokio::runtime::Runtime::new()?.block_on(report(&config, payload, options))
}

async fn report(config: &Config, payload: ErrorPayload, options: ReportOptions) -> Result<()> {
    let writer = LogWriterEnum::from_config(config)?;
    debug!("Reporting through {}", writer.variant_name());

    let reporter = ErrorReporter::new(writer, ReporterSettings::from_config(config));
    let kind = payload.kind();
    let object_type = options.object_type.as_deref();
    let severity = if options.high {
        reporter.log_error_high(payload, &options.context_type, object_type);
        Severity::High
    } else {
        reporter.log_error(payload, &options.context_type, object_type);
        Severity::Med
    };

    // the runtime is dropped right after, so wait for the report and any fallback
    reporter.close().await;

    println!("{} {} error report dispatched", severity, kind);
    Ok(())
}

/// Read a JSON error from a file, or stdin for `-`, and make sure it has a
/// shape the reporter can log.
fn read_payload(file: &str) -> Result<ErrorPayload> {
    let raw = if file == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read error JSON from stdin")?;
        raw
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?
    };

    let value: Value = serde_json::from_str(&raw).context("Error input is not valid JSON")?;
    match ErrorPayload::classify(value) {
        ErrorPayload::Unclassified(_) => bail!(
            "Unrecognized error shape: expected a `body` object, or a `message` with a `name` or `stack`"
        ),
        payload => Ok(payload),
    }
}

fn print_config_info(config: &Config) -> Result<()> {
    let mut shown = config.clone();
    if shown.api_key.is_some() {
        shown.api_key = Some(MASKED_SECRET.to_string());
    }
    println!("{}", serde_json::to_string_pretty(&shown)?);
    Ok(())
}
