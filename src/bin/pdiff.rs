//! pdiff - Pipeline Diff CLI tool
//!
//! Shows what changed between two versions of a pipeline configuration.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use pipeline_diff::{diff_pipelines, PipelineConfig, RenderOptions, Renderer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    Always,
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "pdiff", version)]
#[command(about = "Show the differences between two pipeline configurations")]
struct Cli {
    /// Current pipeline configuration (YAML or JSON)
    old: PathBuf,

    /// Proposed pipeline configuration (YAML or JSON)
    new: PathBuf,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Number of spaces diff lines are indented by
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Exit with status 1 when the pipelines differ
    #[arg(long)]
    exit_code: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "pipeline_diff=debug,pdiff=debug"
    } else {
        "pipeline_diff=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(changed) if changed && cli.exit_code => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let old = PipelineConfig::load(&cli.old)?;
    let new = PipelineConfig::load(&cli.new)?;

    let stdout = io::stdout();
    let color = match cli.color {
        ColorChoice::Auto => stdout.is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    let options = RenderOptions::default()
        .with_color(color)
        .with_indent(" ".repeat(cli.indent));

    let mut renderer = Renderer::with_options(stdout.lock(), options);
    let report = diff_pipelines(&old, &new, &mut renderer)?;

    let mut out = renderer.into_inner();
    if !report.has_changes() {
        writeln!(out, "no changes")?;
    }
    out.flush()?;

    tracing::debug!(summary = %report.summary(), "done");
    // Each skipped diff was already logged as a warning by the renderer.
    if !report.render.is_complete() {
        return Err(format!("{} diff(s) could not be rendered", report.render.failures.len()).into());
    }

    Ok(report.has_changes())
}
