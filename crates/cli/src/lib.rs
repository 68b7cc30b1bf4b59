//! `tallygen` binary support: environment configuration and the run pipeline.

pub mod config;
pub mod run;

pub use config::{Config, ConfigError, ProfileSource};
pub use run::{RunReport, run};
