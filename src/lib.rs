pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{storage::LocalStorage, CliConfig};
pub use crate::core::{etl::EnrichEngine, lookup::WikipediaClient, pipeline::EnrichPipeline};
pub use crate::utils::error::{EnrichError, LookupFailure, Result};
