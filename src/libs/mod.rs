pub mod config;
pub mod units;
pub mod writing;
