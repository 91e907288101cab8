use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{info, info_span, warn};

use drr_cli::config::{DrrConfig, config_path, render_config, save_config};
use drr_cli::pipeline::{
    CycleOutcome, StandardizeOptions, run_cycle, standardize, validate_stage,
};
use drr_cli::summary::{
    TableConsumer, batch_table, print_receipt, print_sample_list, print_standardize_summary,
};
use drr_cli::types::{BatchEntry, BatchStats, BatchStatus};
use drr_ingest::{
    FallbackSource, FileSource, HeaderMode, InlineSource, RawTextSource, SampleDataset,
    SampleSource, UnavailableProvider, list_csv_files,
};
use drr_model::ReportConsumer;
use drr_report::{render_json, render_json_pretty};
use drr_transmit::{FixedOutcomeTransmitter, SimulatedTransmitter, Transmitter};
use drr_validate::{write_results_csv, write_results_json};

use crate::cli::{
    BatchArgs, ConfigArgs, HeaderArg, InputArgs, ResultsFormatArg, RunArgs, SampleArgs,
    SourceArgs, StandardizeArgs, ValidateArgs,
};

/// Settings shared by every command.
pub struct CommandContext {
    pub config: DrrConfig,
    /// Explicit `--config` path, if any.
    pub config_path: Option<PathBuf>,
    pub as_of: NaiveDate,
}

impl CommandContext {
    fn standardize_options(&self, header: Option<HeaderArg>) -> Result<StandardizeOptions> {
        Ok(StandardizeOptions {
            header: header.map_or(self.config.ingest.header, HeaderMode::from),
            profile: self.config.reporting.profile()?,
        })
    }
}

/// Full cycle. Returns true when the report was transmitted and approved.
pub async fn run_full_cycle(args: &RunArgs, ctx: &CommandContext) -> Result<bool> {
    let (source_name, text) = read_input(&args.input, ctx)?;
    let options = ctx.standardize_options(args.input.header)?;
    let transmitter = build_transmitter(args, ctx)?;

    info!(source = %source_name, as_of = %ctx.as_of, "starting reporting cycle");
    let mut consumer = TableConsumer;
    let outcome = run_cycle(&text, &options, ctx.as_of, transmitter.as_ref(), &mut consumer).await;

    let standardized = outcome.standardized();
    print_standardize_summary(&standardized.stats, standardized.report_stats());
    match &outcome {
        CycleOutcome::Validated { receipt, .. } => print_receipt(receipt),
        CycleOutcome::TransmissionFailed { error, .. } => {
            eprintln!("Transmission failed: {error}. Validation was not run; retry the cycle.");
        }
    }
    Ok(outcome.is_approved())
}

fn build_transmitter(args: &RunArgs, ctx: &CommandContext) -> Result<Box<dyn Transmitter>> {
    if args.offline {
        return Ok(Box::new(FixedOutcomeTransmitter::accepting()));
    }
    let mut config = ctx.config.transmission;
    if let Some(latency_ms) = args.latency_ms {
        config.latency_ms = latency_ms;
    }
    if let Some(success_rate) = args.success_rate {
        config.success_rate = success_rate;
    }
    let transmitter = SimulatedTransmitter::new(config).context("invalid transmission settings")?;
    Ok(Box::new(transmitter))
}

pub fn run_standardize(args: &StandardizeArgs, ctx: &CommandContext) -> Result<bool> {
    let (_, text) = read_input(&args.input, ctx)?;
    let options = ctx.standardize_options(args.input.header)?;
    let result = standardize(&text, &options, ctx.as_of);

    let json = if args.compact {
        render_json(&result.report)?
    } else {
        render_json_pretty(&result.report)?
    };
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write report {}", path.display()))?;
            print_standardize_summary(&result.stats, result.report_stats());
            println!("Report written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(true)
}

/// Standardize and validate. Returns true when every rule passed.
pub fn run_validate(args: &ValidateArgs, ctx: &CommandContext) -> Result<bool> {
    let (_, text) = read_input(&args.input, ctx)?;
    let options = ctx.standardize_options(args.input.header)?;
    let result = standardize(&text, &options, ctx.as_of);
    print_standardize_summary(&result.stats, result.report_stats());

    let outcome = validate_stage(&result.report, ctx.as_of);
    TableConsumer.consume(&result.report, &outcome.results);

    if let Some(path) = &args.results {
        export_results(path, args.results_format, &outcome.results)?;
        println!("Results written to {}", path.display());
    }
    Ok(outcome.is_approved())
}

fn export_results(
    path: &Path,
    format: ResultsFormatArg,
    results: &[drr_model::ValidationRuleResult],
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let writer = BufWriter::new(file);
    match format {
        ResultsFormatArg::Csv => write_results_csv(writer, results),
        ResultsFormatArg::Json => write_results_json(writer, results),
    }
    .with_context(|| format!("write results {}", path.display()))
}

pub fn run_sample(args: &SampleArgs) -> Result<bool> {
    if args.list {
        print_sample_list();
    } else {
        println!("{}", SampleDataset::from(args.dataset).text());
    }
    Ok(true)
}

/// Check every CSV file in a folder. Returns true when all files were read
/// and approved.
pub fn run_batch(args: &BatchArgs, ctx: &CommandContext) -> Result<bool> {
    let files = list_csv_files(&args.dir)
        .with_context(|| format!("list CSV files in {}", args.dir.display()))?;
    if files.is_empty() {
        println!("No CSV files found in {}", args.dir.display());
        return Ok(true);
    }
    let options = ctx.standardize_options(args.header)?;
    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let source = FileSource::new(&path).with_max_size(ctx.config.ingest.max_file_size);
        let span = info_span!("batch_file", file = %source.name());
        let _guard = span.enter();
        let status = match source.read_text() {
            Ok(text) => {
                let result = standardize(&text, &options, ctx.as_of);
                let outcome = validate_stage(&result.report, ctx.as_of);
                BatchStatus::Checked(BatchStats {
                    records: result.stats.accepted,
                    dropped: result.stats.dropped,
                    facts: result.report.facts.fact_count(),
                    failed: outcome.summary.failed,
                })
            }
            Err(error) => {
                warn!(%error, "skipping unreadable file");
                BatchStatus::Error(error.to_string())
            }
        };
        entries.push(BatchEntry {
            name: source.name().to_string(),
            status,
        });
    }
    println!("{}", batch_table(&entries));
    Ok(entries.iter().all(BatchEntry::is_approved))
}

pub fn run_config(args: &ConfigArgs, ctx: &CommandContext) -> Result<bool> {
    let path = ctx.config_path.clone().or_else(config_path);
    match &path {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no config location available on this platform"),
    }
    println!("{}", render_config(&ctx.config)?);
    if args.write {
        let Some(path) = path else {
            bail!("no config path; pass --config <PATH>");
        };
        save_config(&ctx.config, &path)?;
        println!("Configuration written to {}", path.display());
    }
    Ok(true)
}

/// Resolve the input flags to a source and read it.
fn read_input(input: &InputArgs, ctx: &CommandContext) -> Result<(String, String)> {
    let source = input_source(&input.source, ctx.config.ingest.max_file_size);
    let text = source
        .read_text()
        .with_context(|| format!("read input from {}", source.name()))?;
    Ok((source.name().to_string(), text))
}

fn input_source(source: &SourceArgs, max_file_size: u64) -> Box<dyn RawTextSource> {
    if let Some(path) = &source.input {
        Box::new(FileSource::new(path).with_max_size(max_file_size))
    } else if let Some(text) = &source.text {
        Box::new(InlineSource::new(text.as_str()))
    } else if let Some(scenario) = source.generate {
        Box::new(FallbackSource::new(UnavailableProvider, scenario.into()))
    } else {
        let dataset = source.sample.map_or(SampleDataset::Default, SampleDataset::from);
        Box::new(SampleSource::new(dataset))
    }
}
