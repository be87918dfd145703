pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::RosterConfig;
pub use crate::core::{etl::EtlEngine, pipeline::RosterPipeline};
pub use utils::error::{EtlError, Result};
