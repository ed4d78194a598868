pub mod card;
pub mod config;
pub mod export;
pub mod fs;
pub mod structured_file;
pub mod workflow;
