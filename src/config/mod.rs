pub mod storage;

use crate::core::lookup::WikipediaClient;
use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{
    validate_language_code, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wiki-enrich")]
#[command(about = "Enrich a JSON collection with Wikipedia page images")]
pub struct CliConfig {
    #[arg(long, default_value = "data.json")]
    pub input: String,

    #[arg(long, default_value = "data_with_images.json")]
    pub output: String,

    /// Wikipedia language edition to query (subdomain of wikipedia.org).
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Requested thumbnail width in pixels.
    #[arg(long, default_value = "500")]
    pub thumb_size: u32,

    /// Pause between consecutive lookups, to stay polite with the API.
    #[arg(long, default_value = "100")]
    pub delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_language_code("language", &self.language)?;
        // The language code ends up in a hostname; reject it if the
        // endpoint it expands into is not a usable URL.
        validate_url("language", &WikipediaClient::endpoint_for(&self.language))?;
        validate_positive_number("thumb_size", self.thumb_size as u64, 1)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn thumb_size(&self) -> u32 {
        self.thumb_size
    }

    fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}
