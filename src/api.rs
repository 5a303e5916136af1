use crate::counter::{count_record_breaks, RecordBreaks};
use crate::loader::ScoreSequence;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub label: String,
    pub len: usize,
    /// Failures are kept per sequence so one bad record doesn't sink a batch.
    pub outcome: Result<RecordBreaks, String>,
}

impl Evaluation {
    pub fn breaks(&self) -> Option<RecordBreaks> {
        self.outcome.as_ref().ok().copied()
    }
}

pub fn evaluate(seq: &ScoreSequence) -> Evaluation {
    let outcome = count_record_breaks(&seq.scores).map_err(|e| e.to_string());
    if let Err(ref e) = outcome {
        debug!("{}: {}", seq.label, e);
    }
    Evaluation {
        label: seq.label.clone(),
        len: seq.scores.len(),
        outcome,
    }
}

/// Evaluates every sequence in parallel. Output order matches input order.
pub fn evaluate_batch(sequences: &[ScoreSequence]) -> Vec<Evaluation> {
    info!("Evaluating {} sequences", sequences.len());
    sequences.par_iter().map(evaluate).collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub sequences: usize,
    pub failed: usize,
    pub total_max_breaks: u64,
    pub total_min_breaks: u64,
}

impl From<&[Evaluation]> for BatchSummary {
    fn from(evals: &[Evaluation]) -> Self {
        evals.iter().fold(
            BatchSummary {
                sequences: evals.len(),
                ..Default::default()
            },
            |mut acc, e| {
                match e.breaks() {
                    Some(b) => {
                        acc.total_max_breaks += u64::from(b.max_breaks);
                        acc.total_min_breaks += u64::from(b.min_breaks);
                    }
                    None => acc.failed += 1,
                }
                acc
            },
        )
    }
}
