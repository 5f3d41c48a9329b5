//! Options that shape generated text.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_TAG: &str = "THIS_FILE";
pub const DEFAULT_CONFLICT_NOTE: &str = "TODO: verify";

/// Options controlling artifact generation and merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Tag passed to `android.util.Log.w` for unknown cursor columns.
    pub log_tag: String,

    /// Comment attached to conflict-annotated declarations.
    pub conflict_note: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            log_tag: DEFAULT_LOG_TAG.to_string(),
            conflict_note: DEFAULT_CONFLICT_NOTE.to_string(),
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_tag(mut self, tag: impl Into<String>) -> Self {
        self.log_tag = tag.into();
        self
    }

    pub fn with_conflict_note(mut self, note: impl Into<String>) -> Self {
        self.conflict_note = note.into();
        self
    }
}
