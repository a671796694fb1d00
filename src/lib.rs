pub mod models;
pub mod services;
pub mod cli;
pub mod utils;

pub use anyhow::{Error, Result};
pub use services::{compute, compute_and_report, compute_and_report_to, deliver, CostError, ReportMode};
