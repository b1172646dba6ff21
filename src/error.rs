//! Error types for procedure analysis.

use thiserror::Error;

/// Structural error in procedure text.
///
/// Expression-level problems are never errors: they resolve to
/// [`Sign::Unknown`](crate::sign::Sign::Unknown) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcedureError {
    /// A non-blank line without `=`.
    #[error("line {line}: expected `name = expression`, found {text:?}")]
    MissingAssignment { line: usize, text: String },

    /// An assignment with nothing left of `=`.
    #[error("line {line}: assignment has no target variable: {text:?}")]
    EmptyTarget { line: usize, text: String },
}

impl ProcedureError {
    /// The 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            ProcedureError::MissingAssignment { line, .. } | ProcedureError::EmptyTarget { line, .. } => *line,
        }
    }
}

/// Result type for procedure analysis.
pub type Result<T> = std::result::Result<T, ProcedureError>;
