pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use application::{CleanedDataset, RecordCleaner, SummaryReporter};
pub use domain::error::{AppError, Result};
pub use domain::table::{Cell, CleaningConfig, SummaryReport, Table};
pub use infrastructure::csv::{CsvReader, CsvWriter};
