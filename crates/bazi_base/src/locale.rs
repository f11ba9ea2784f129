//! Output language for generated text.

use serde::{Deserialize, Serialize};

/// Language used for narratives, descriptions and readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Simplified Chinese (the traditional register of the readings).
    #[default]
    Zh,
    /// English rendering of the same templates.
    En,
}
