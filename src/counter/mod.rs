pub mod engine;
pub mod types;

pub use self::types::{RecordBreaks, RecordEvent, RecordKind, RecordTrace};
use crate::error::RbResult;

/// Counts how often the running maximum and running minimum are broken
/// while scanning `scores` left to right.
///
/// Fails with `RecordError::InvalidArgument` when `scores` is empty.
pub fn count_record_breaks(scores: &[i32]) -> RbResult<RecordBreaks> {
    engine::scan(scores, |_| {})
}

/// Same scan as [`count_record_breaks`], keeping every break as an event.
pub fn trace_record_breaks(scores: &[i32]) -> RbResult<RecordTrace> {
    let mut events = Vec::new();
    let breaks = engine::scan(scores, |e| events.push(e))?;
    Ok(RecordTrace { breaks, events })
}

/// True iff no element of `scores` is strictly greater than `value`.
pub fn is_global_max(scores: &[i32], value: i32) -> bool {
    !scores.iter().any(|&s| s > value)
}

/// True iff no element of `scores` is strictly less than `value`.
pub fn is_global_min(scores: &[i32], value: i32) -> bool {
    !scores.iter().any(|&s| s < value)
}
