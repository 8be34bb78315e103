use crate::core::{ConfigProvider, EnrichResult, ImageLookup, Pipeline, Record, Storage};
use crate::utils::error::{EnrichError, LookupFailure, Result};
use serde_json::Value;
use std::time::Duration;

pub struct EnrichPipeline<S: Storage, C: ConfigProvider, L: ImageLookup> {
    storage: S,
    config: C,
    lookup: L,
}

impl<S: Storage, C: ConfigProvider, L: ImageLookup> EnrichPipeline<S, C, L> {
    pub fn new(storage: S, config: C, lookup: L) -> Self {
        Self {
            storage,
            config,
            lookup,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, L: ImageLookup> Pipeline for EnrichPipeline<S, C, L> {
    /// Reads and validates the whole input collection. Every record must
    /// carry a string `name`; checking that here means a bad collection
    /// aborts the run before a single network call is made.
    async fn extract(&self) -> Result<Vec<Record>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading input file: {}", input_path);

        let bytes = self
            .storage
            .read_file(input_path)
            .await
            .map_err(|e| EnrichError::DataFormat {
                message: format!("cannot read {}: {}", input_path, e),
            })?;

        let parsed: Value =
            serde_json::from_slice(&bytes).map_err(|e| EnrichError::DataFormat {
                message: format!("{} is not valid JSON: {}", input_path, e),
            })?;

        let items = match parsed {
            Value::Array(items) => items,
            other => {
                return Err(EnrichError::DataFormat {
                    message: format!(
                        "{}: expected a top-level array, got {}",
                        input_path,
                        json_type_name(&other)
                    ),
                })
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(data) => records.push(Record { data }),
                other => {
                    return Err(EnrichError::DataFormat {
                        message: format!(
                            "record {} is not an object, got {}",
                            index,
                            json_type_name(&other)
                        ),
                    })
                }
            }
        }

        for (index, record) in records.iter().enumerate() {
            if record.name().is_none() {
                return Err(EnrichError::DataFormat {
                    message: format!("record {} has no string `name` field", index),
                });
            }
        }

        Ok(records)
    }

    /// One lookup per record, strictly in input order. Lookup failures of
    /// any kind turn into a null `image` and a log line; they never stop
    /// the batch.
    async fn enrich(&self, mut records: Vec<Record>) -> Result<EnrichResult> {
        let total = records.len();
        let mut found = 0;
        let mut missing = 0;

        for (index, record) in records.iter_mut().enumerate() {
            let name = match record.name() {
                Some(name) => name.to_string(),
                None => {
                    return Err(EnrichError::DataFormat {
                        message: format!("record {} has no string `name` field", index),
                    })
                }
            };

            match self.lookup.lookup(&name).await {
                Ok(url) => {
                    tracing::info!("[{}/{}] {} ✅ found", index + 1, total, name);
                    record.set_image(Some(url));
                    found += 1;
                }
                Err(failure @ (LookupFailure::NotFound | LookupFailure::NoThumbnail)) => {
                    tracing::info!("[{}/{}] {} ❌ {}", index + 1, total, name, failure);
                    record.set_image(None);
                    missing += 1;
                }
                Err(failure) => {
                    tracing::warn!(
                        "[{}/{}] {} lookup failed: {}",
                        index + 1,
                        total,
                        name,
                        failure
                    );
                    record.set_image(None);
                    missing += 1;
                }
            }

            // Fixed pacing between requests, skipped after the last record.
            if index + 1 < total && self.config.delay_ms() > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.delay_ms())).await;
            }
        }

        Ok(EnrichResult {
            records,
            found,
            missing,
        })
    }

    /// Pretty-printed with 2-space indentation; serde_json leaves
    /// non-ASCII text unescaped, matching the input encoding.
    async fn load(&self, result: EnrichResult) -> Result<String> {
        let output_path = self.config.output_path();
        let json = serde_json::to_string_pretty(&result.records)?;

        tracing::debug!("Writing {} bytes to {}", json.len(), output_path);
        self.storage
            .write_file(output_path, json.as_bytes())
            .await?;

        Ok(output_path.to_string())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
