pub mod aggregator;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;

pub use error::GpaError;
