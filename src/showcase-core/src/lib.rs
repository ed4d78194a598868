pub mod card;
pub mod config;
pub mod error;
pub mod fs;
pub mod json;
pub mod report;
pub mod workflow;
