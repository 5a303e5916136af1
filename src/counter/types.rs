use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Result pair of a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBreaks {
    pub max_breaks: u32,
    pub min_breaks: u32,
}

impl RecordBreaks {
    pub fn total(&self) -> u32 {
        self.max_breaks + self.min_breaks
    }
}

impl From<RecordBreaks> for (u32, u32) {
    fn from(b: RecordBreaks) -> Self {
        (b.max_breaks, b.min_breaks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
    Max,
    Min,
}

/// A single record break observed during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEvent {
    pub index: usize,
    pub score: i32,
    pub kind: RecordKind,
    /// Value of the matching counter after this break.
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTrace {
    pub breaks: RecordBreaks,
    pub events: Vec<RecordEvent>,
}
