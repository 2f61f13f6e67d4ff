use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Malformed record on line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("Student ID {0} already exists")]
    DuplicateId(i64),

    #[error("Student with ID {0} not found")]
    NotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl RosterError {
    /// Attach a line number to a format error raised while parsing a single line.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            RosterError::Format { reason, .. } => RosterError::Format { line, reason },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
