use super::types::{RecordBreaks, RecordEvent, RecordKind};
use super::{is_global_max, is_global_min};
use crate::error::{RbResult, RecordError};

/// Left-to-right scan shared by the counting and tracing entry points.
/// `on_break` fires once per record break, in scan order.
pub fn scan<F>(scores: &[i32], mut on_break: F) -> RbResult<RecordBreaks>
where
    F: FnMut(RecordEvent),
{
    let first = *scores.first().ok_or_else(|| {
        RecordError::InvalidArgument("score sequence must contain at least one element".into())
    })?;

    let mut running_max = first;
    let mut running_min = first;
    let mut breaks = RecordBreaks::default();

    for (index, &score) in scores.iter().enumerate() {
        // Index 0 is checked against the whole sequence, not the prefix.
        if index == 0 && is_global_max(scores, running_max) {
            breaks.max_breaks = 0;
        } else if index == 0 && is_global_min(scores, running_min) {
            breaks.min_breaks = 0;
        } else if score > running_max {
            running_max = score;
            breaks.max_breaks += 1;
            on_break(RecordEvent {
                index,
                score,
                kind: RecordKind::Max,
                count: breaks.max_breaks,
            });
        } else if score < running_min {
            running_min = score;
            breaks.min_breaks += 1;
            on_break(RecordEvent {
                index,
                score,
                kind: RecordKind::Min,
                count: breaks.min_breaks,
            });
        }

        debug_assert!(running_min <= score && score <= running_max);
    }

    Ok(breaks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_arrive_in_scan_order() {
        let mut seen = Vec::new();
        let breaks = scan(&[10, 5, 20, 20, 4, 5, 2, 25, 1], |e| seen.push(e)).unwrap();

        let indices: Vec<usize> = seen.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 2, 4, 6, 7, 8]);
        assert_eq!(seen.len() as u32, breaks.total());
    }

    #[test]
    fn event_counts_track_their_counter() {
        let mut seen = Vec::new();
        scan(&[3, 1, 0, -4], |e| seen.push(e)).unwrap();

        let counts: Vec<u32> = seen.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![1, 2, 3]);
        assert!(seen.iter().all(|e| e.kind == RecordKind::Min));
    }

    #[test]
    fn empty_never_calls_back() {
        let mut called = false;
        let res = scan(&[], |_| called = true);
        assert!(matches!(res, Err(RecordError::InvalidArgument(_))));
        assert!(!called);
    }
}
