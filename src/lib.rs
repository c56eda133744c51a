pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod logging;
pub mod merge;
pub mod models;
pub mod registry;
pub mod sample_data;
pub mod sources;
pub mod time_utils;
