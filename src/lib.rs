pub mod config;
pub mod logging;
pub mod output;
pub mod runner;
pub mod version;
