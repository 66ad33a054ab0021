pub mod cli;
pub mod config;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod report;
pub mod utils;
pub mod warehouse;

pub use error::{ReportError, Result};
