pub mod cache;
pub mod catalog;
pub mod rates;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A region's savings plan pricing document, kept whole so that the cache holds
/// exactly what was downloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavingsPlanDocument(Value);

impl SavingsPlanDocument {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn field(&self, key: &str) -> Result<&Value> {
        self.0
            .get(key)
            .ok_or_else(|| Error::MissingKey(key.to_owned()))
    }
}

impl From<Value> for SavingsPlanDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
