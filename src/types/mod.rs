pub mod config;
pub mod level;
pub mod report;
pub mod scoring;
