pub mod etl;
pub mod lookup;
pub mod pipeline;

pub use crate::domain::model::{EnrichResult, Record};
pub use crate::domain::ports::{ConfigProvider, ImageLookup, Pipeline, Storage};
pub use crate::utils::error::Result;
