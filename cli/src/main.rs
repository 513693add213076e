use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use disk_report_extract::{PipelineConfig, ReportFormat, Result, RunSummary, pipeline};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "disk-report")]
#[command(version)]
#[command(about = "Consolidate CrystalDiskInfo and HD Sentinel reports into one CSV")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Process a directory of CrystalDiskInfo_*.txt exports.
    CrystalDiskInfo(RunArgs),
    /// Process a directory of HD Sentinel "Disk report*.txt" exports.
    HdSentinel(RunArgs),
    /// Parse one report file and print its records as JSON.
    ParseFile(ParseFileArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Directory holding the report files (default: the format's built-in location).
    #[arg(long)]
    dir: Option<PathBuf>,
    /// CSV file to write (default: output_data.csv inside the report directory).
    #[arg(long)]
    output: Option<PathBuf>,
    /// YAML configuration file; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log every file read and every record added or replaced.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Report format of the input file.
    #[arg(long)]
    format: ReportFormat,
    /// Report file to parse.
    #[arg(long)]
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::CrystalDiskInfo(args) => run_pipeline(ReportFormat::CrystalDiskInfo, args),
        Command::HdSentinel(args) => run_pipeline(ReportFormat::HdSentinel, args),
        Command::ParseFile(args) => run_parse_file(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Installs the stderr subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(trace: bool) {
    let default_filter = if trace { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Flags override the config file, which overrides the built-in defaults.
fn resolve_config(format: ReportFormat, args: &RunArgs) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::for_format(format),
    };

    if let Some(dir) = &args.dir {
        config = PipelineConfig::new(dir).with_trace(config.trace);
    }
    if let Some(output) = &args.output {
        config = config.with_output_path(output);
    }
    if args.trace {
        config = config.with_trace(true);
    }
    Ok(config)
}

fn run_pipeline(format: ReportFormat, args: RunArgs) -> Result<()> {
    let config = resolve_config(format, &args)?;
    init_tracing(config.trace);
    debug!(?config, %format, "Resolved pipeline configuration");

    let summary = pipeline::run(format, &config)?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!(
        "Wrote {} row(s) from {} report file(s) to {}.",
        summary.rows_written,
        summary.files,
        summary.output_path.display()
    );
    if summary.duplicates_replaced > 0 {
        println!(
            "Replaced {} older record(s) with newer reports of the same disk.",
            summary.duplicates_replaced
        );
    }
}

fn run_parse_file(args: ParseFileArgs) -> Result<()> {
    init_tracing(false);
    let report = pipeline::parse_file(&args.input, args.format)?;
    debug!(
        path = %args.input.display(),
        diagnostics = ?report.diagnostics,
        "Parsed report"
    );
    println!("{}", serde_json::to_string_pretty(&report.records)?);
    Ok(())
}
