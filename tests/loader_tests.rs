use recordbreak::config::LoaderParams;
use recordbreak::loader::{load_sequences, load_sequences_from_reader, ScoreSequence};
use recordbreak::RecordError;
use std::fs::File;
use std::io::{Cursor, Write};

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scores.csv");

    let mut file = File::create(&path).unwrap();
    writeln!(file, "3,4,21,36,10,28,35,5,24,42").unwrap();
    writeln!(file, "10, 5, 20, 20, 4, 5, 2, 25, 1").unwrap();

    let seqs = load_sequences(&path, &LoaderParams::default()).unwrap();
    assert_eq!(seqs.len(), 2);
    assert_eq!(seqs[0].label, "line 1");
    assert_eq!(seqs[1].scores, vec![10, 5, 20, 20, 4, 5, 2, 25, 1]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let res = load_sequences(dir.path().join("nope.csv"), &LoaderParams::default());
    assert!(matches!(res, Err(RecordError::Io(_))));
}

#[test]
fn test_headers_and_custom_delimiter() {
    let data = "game1\tgame2\tgame3\n1\t-2\t3\n";
    let params = LoaderParams {
        delimiter: '\t',
        has_headers: true,
        ..Default::default()
    };

    let seqs = load_sequences_from_reader(Cursor::new(data), &params).unwrap();
    assert_eq!(seqs, vec![ScoreSequence::new("line 2", vec![1, -2, 3])]);
}

#[test]
fn test_ragged_rows_are_accepted() {
    let data = "1,2\n3,4,5,6\n7\n";
    let seqs = load_sequences_from_reader(Cursor::new(data), &LoaderParams::default()).unwrap();
    let lens: Vec<usize> = seqs.iter().map(|s| s.scores.len()).collect();
    assert_eq!(lens, vec![2, 4, 1]);
}

#[test]
fn test_separator_only_row_is_empty_sequence() {
    let data = "1,2\n,,\n";
    let seqs = load_sequences_from_reader(Cursor::new(data), &LoaderParams::default()).unwrap();
    assert_eq!(seqs.len(), 2);
    assert!(seqs[1].scores.is_empty());
}

#[test]
fn test_bad_token_reports_line() {
    let data = "1,2\n3,four,5\n";
    let err = load_sequences_from_reader(Cursor::new(data), &LoaderParams::default()).unwrap_err();
    match err {
        RecordError::Parse { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "four");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_skip_invalid_keeps_good_rows() {
    let data = "1,2\n3,four,5\n6,7\n";
    let params = LoaderParams {
        skip_invalid: true,
        ..Default::default()
    };
    let seqs = load_sequences_from_reader(Cursor::new(data), &params).unwrap();
    let labels: Vec<&str> = seqs.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["line 1", "line 3"]);
}
