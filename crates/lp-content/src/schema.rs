//! Records appended to a language's section of the learning path.

use serde::{Deserialize, Serialize};

/// One level of a language's learning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningModule {
    /// CEFR-style level label, e.g. `A2`.
    pub level: String,
    pub theme: String,
    pub description: String,
    /// Rendered in order.
    #[serde(default)]
    pub units: Vec<Unit>,
}

/// A unit inside a module. Rendered with an empty `words` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "unitId")]
    pub unit_id: String,
    pub title: String,
    pub emoji: String,
}

impl Unit {
    pub fn new(
        unit_id: impl Into<String>,
        title: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            unit_id: unit_id.into(),
            title: title.into(),
            emoji: emoji.into(),
        }
    }
}
