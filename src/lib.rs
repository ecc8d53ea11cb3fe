pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod runner;
pub mod store;
pub mod table;
