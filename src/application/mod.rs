pub mod use_cases;

pub use use_cases::record_cleaner::{CleanedDataset, RecordCleaner};
pub use use_cases::summary_reporter::SummaryReporter;
