use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse Error on line {line}: '{token}' is not a 32-bit integer")]
    Parse { line: usize, token: String },

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type RbResult<T> = Result<T, RecordError>;
