#![forbid(unsafe_code)]

//! Core calculations for the Fittrack workout summary tool.
//!
//! This crate provides:
//! - Workout calculators (running, sports walking, swimming)
//! - The workout code registry used to build calculators from sensor packages
//! - Report rendering (text and JSON)
//! - The batch driver that turns packages into report lines

pub mod types;
pub mod error;
pub mod training;
pub mod registry;
pub mod message;
pub mod config;
pub mod logging;
pub mod batch;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use training::{Calculation, Running, SportsWalking, Swimming, Training};
pub use registry::{known_codes, read_package};
pub use message::{InfoMessage, Language, ReportFormat};
pub use config::Config;
pub use batch::{
    default_packages, load_packages, process_package, run_batch, BatchSummary, ErrorPolicy,
    ReportSink, WriterSink,
};
