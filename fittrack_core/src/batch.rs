//! Batch driver: packages in, report lines out.
//!
//! Each package is dispatched, computed and emitted in input order. A failing
//! package never produces a partial record; the error policy decides whether
//! the rest of the batch still runs.

use crate::{
    read_package, Error, InfoMessage, Language, Package, ReportFormat, Result,
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// What to do when one package fails
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log the failure and continue with the next package
    #[default]
    Skip,
    /// Stop at the first failure and return it
    Abort,
}

/// Report sink trait for emitting computed records
pub trait ReportSink {
    fn emit(&mut self, message: &InfoMessage) -> Result<()>;
}

/// Sink that writes one rendered line per record
pub struct WriterSink<W: Write> {
    writer: W,
    format: ReportFormat,
    language: Language,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: ReportFormat, language: Language) -> Self {
        Self {
            writer,
            format,
            language,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit(&mut self, message: &InfoMessage) -> Result<()> {
        let line = message.render(self.format, self.language)?;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

/// A package that could not be turned into a record
#[derive(Clone, Debug, PartialEq)]
pub struct Failure {
    /// Position in the input, counting from 1
    pub position: usize,
    pub workout_type: String,
    pub error: String,
}

/// Outcome of a batch run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub emitted: usize,
    pub failures: Vec<Failure>,
}

/// The reference sensor readings
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Compute the summary record for one package
pub fn process_package(package: &Package) -> Result<InfoMessage> {
    let training = read_package(&package.workout_type, &package.data)?;
    Ok(training.show_training_info())
}

/// Process packages in order, emitting one record per successful package
///
/// Sink errors always abort the run; package errors follow `policy`.
pub fn run_batch<'a, I, S>(packages: I, sink: &mut S, policy: ErrorPolicy) -> Result<BatchSummary>
where
    I: IntoIterator<Item = &'a Package>,
    S: ReportSink + ?Sized,
{
    let mut summary = BatchSummary::default();

    for (index, package) in packages.into_iter().enumerate() {
        let position = index + 1;
        match process_package(package) {
            Ok(message) => {
                sink.emit(&message)?;
                summary.emitted += 1;
            }
            Err(e) => {
                if policy == ErrorPolicy::Abort {
                    tracing::error!(
                        "Package #{} ({}) failed: {}",
                        position,
                        package.workout_type,
                        e
                    );
                    return Err(e);
                }
                tracing::warn!(
                    "Skipping package #{} ({}): {}",
                    position,
                    package.workout_type,
                    e
                );
                summary.failures.push(Failure {
                    position,
                    workout_type: package.workout_type.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Batch finished: {} emitted, {} failed",
        summary.emitted,
        summary.failures.len()
    );
    Ok(summary)
}

/// TOML batch file layout
#[derive(Debug, Deserialize)]
struct PackageFile {
    #[serde(default)]
    package: Vec<Package>,
}

/// Load packages from a batch file
///
/// `.toml` files hold `[[package]]` tables; `.json` files hold an array of
/// packages.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let contents = std::fs::read_to_string(path)?;

    let packages = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str::<PackageFile>(&contents)?.package,
        Some("json") => serde_json::from_str::<Vec<Package>>(&contents)?,
        _ => {
            return Err(Error::UnsupportedInput(format!(
                "{} (expected .toml or .json)",
                path.display()
            )))
        }
    };

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}
