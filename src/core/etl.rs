use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EnrichEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EnrichEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting enrichment...");

        // Extract
        println!("Reading input collection...");
        let records = self.pipeline.extract().await?;
        println!("{} records to process", records.len());

        // Enrich
        let result = self.pipeline.enrich(records).await?;
        println!(
            "Images found for {} of {} records",
            result.found,
            result.found + result.missing
        );

        // Load
        println!("Writing output collection...");
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
