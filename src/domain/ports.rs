use crate::domain::model::{EnrichResult, Record};
use crate::utils::error::{LookupFailure, Result};
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn language(&self) -> &str;
    fn thumb_size(&self) -> u32;
    fn delay_ms(&self) -> u64;
}

/// Resolves an entity name to a representative image URL. Failure is
/// per-name and never fatal to the batch.
#[async_trait]
pub trait ImageLookup: Send + Sync {
    async fn lookup(&self, name: &str) -> std::result::Result<String, LookupFailure>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn enrich(&self, records: Vec<Record>) -> Result<EnrichResult>;
    async fn load(&self, result: EnrichResult) -> Result<String>;
}
