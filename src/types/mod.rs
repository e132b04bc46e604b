pub mod config;
pub mod judgment;
pub mod record;
pub mod report;
pub mod thresholds;
