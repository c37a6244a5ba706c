use clap::{Parser, Subcommand};
use fittrack_core::*;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Workout summaries from fitness tracker sensor data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report label language (en, ru)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Output format (text, json)
    #[arg(long, global = true)]
    format: Option<ReportFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summaries for a batch of packages (default)
    Report {
        /// Batch file (.toml or .json); the built-in readings are used if omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Stop at the first invalid package instead of skipping it
        #[arg(long)]
        fail_fast: bool,
    },

    /// Summarize a single package given on the command line
    Calc {
        /// Workout code (RUN, WLK, SWM)
        code: String,

        /// Parameters in positional order
        #[arg(allow_negative_numbers = true, required = true)]
        params: Vec<f64>,
    },

    /// List registered workout codes and their parameters
    Codes,
}

fn main() -> Result<()> {
    // Initialize logging
    fittrack_core::logging::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(lang) = cli.lang {
        config.report.language = lang;
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }

    match cli.command {
        Some(Commands::Report { input, fail_fast }) => cmd_report(input, fail_fast, &config),
        Some(Commands::Calc { code, params }) => cmd_calc(&code, &params, &config),
        Some(Commands::Codes) => cmd_codes(),
        None => {
            // Default to "report" command
            cmd_report(None, false, &config)
        }
    }
}

fn stdout_sink(config: &Config) -> WriterSink<io::StdoutLock<'static>> {
    WriterSink::new(
        io::stdout().lock(),
        config.report.format,
        config.report.language,
    )
}

fn cmd_report(input: Option<PathBuf>, fail_fast: bool, config: &Config) -> Result<()> {
    let packages = match input {
        Some(path) => load_packages(&path)?,
        None => default_packages(),
    };

    let policy = if fail_fast {
        ErrorPolicy::Abort
    } else {
        config.batch.on_error
    };

    let mut sink = stdout_sink(config);
    run_batch(&packages, &mut sink, policy)?;
    Ok(())
}

fn cmd_calc(code: &str, params: &[f64], config: &Config) -> Result<()> {
    let package = Package::new(code, params.to_vec());
    let message = process_package(&package)?;

    let mut sink = stdout_sink(config);
    sink.emit(&message)
}

fn cmd_codes() -> Result<()> {
    for code in known_codes() {
        let entry = registry::lookup(code)?;
        println!("{}  {:<14} {}", code, entry.kind.name(), entry.params.join(", "));
    }
    Ok(())
}
