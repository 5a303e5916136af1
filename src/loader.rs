use crate::config::LoaderParams;
use crate::error::{RbResult, RecordError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSequence {
    pub label: String,
    pub scores: Vec<i32>,
}

impl ScoreSequence {
    pub fn new(label: impl Into<String>, scores: Vec<i32>) -> Self {
        Self {
            label: label.into(),
            scores,
        }
    }
}

fn parse_token(token: &str, line: usize) -> RbResult<i32> {
    token.parse().map_err(|_| RecordError::Parse {
        line,
        token: token.to_string(),
    })
}

/// Parses a single sequence such as `"3, 4 21,36"`. Commas and whitespace
/// both separate values.
pub fn parse_scores(input: &str) -> RbResult<Vec<i32>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| parse_token(t, 1))
        .collect()
}

pub fn load_sequences<P: AsRef<Path>>(
    path: P,
    params: &LoaderParams,
) -> RbResult<Vec<ScoreSequence>> {
    let path = path.as_ref();
    info!("Loading score sequences from: {}", path.display());
    let file = File::open(path)?;
    load_sequences_from_reader(file, params)
}

/// One sequence per record. Empty fields are ignored, so a record of only
/// separators yields an empty sequence rather than an error here.
pub fn load_sequences_from_reader<R: Read>(
    reader: R,
    params: &LoaderParams,
) -> RbResult<Vec<ScoreSequence>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(params.delimiter_byte()?)
        .has_headers(params.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut sequences = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) if params.skip_invalid => {
                warn!("Skipping unreadable record: {}", e);
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let line = rec.position().map(|p| p.line() as usize).unwrap_or(0);
        let parsed: RbResult<Vec<i32>> = rec
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| parse_token(f, line))
            .collect();

        match parsed {
            Ok(scores) => sequences.push(ScoreSequence::new(format!("line {}", line), scores)),
            Err(e) if params.skip_invalid => {
                warn!("{}", e);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Loaded {} sequences, skipped {} invalid records",
        sequences.len(),
        skipped
    );
    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scores_mixed_separators() {
        assert_eq!(parse_scores("3, 4 21,36\t-5").unwrap(), vec![3, 4, 21, 36, -5]);
    }

    #[test]
    fn parse_scores_rejects_overflow() {
        let err = parse_scores("1,2147483648").unwrap_err();
        assert!(matches!(err, RecordError::Parse { ref token, .. } if token == "2147483648"));
    }

    #[test]
    fn parse_scores_blank_is_empty() {
        assert!(parse_scores("  , ").unwrap().is_empty());
    }
}
