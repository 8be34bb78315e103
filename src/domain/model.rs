use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity of the input collection. Every field rides along in `data`
/// untouched (serde_json's `preserve_order` keeps the input field order);
/// only `name` is interpreted, and `image` is the one field we add.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Record {
    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(|v| v.as_str())
    }

    /// Overwrites any existing `image` field. `None` becomes an explicit
    /// JSON null, never an absent field.
    pub fn set_image(&mut self, image: Option<String>) {
        let value = match image {
            Some(url) => Value::String(url),
            None => Value::Null,
        };
        self.data.insert("image".to_string(), value);
    }
}

#[derive(Debug, Clone)]
pub struct EnrichResult {
    pub records: Vec<Record>,
    pub found: usize,
    pub missing: usize,
}
