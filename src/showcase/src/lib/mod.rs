pub mod environment;
pub mod error;
pub mod logger;
pub mod page;
pub mod reporter;
