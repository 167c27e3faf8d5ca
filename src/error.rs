use thiserror::Error;

use crate::memory::{BindingError, LabelError};
use crate::types::{Label, LineNumber, Var};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Unrecognized statement.")]
    Syntax,

    #[error("The label {0} is already defined.")]
    DuplicateLabel(Label),

    #[error("The variable {0} is already defined.")]
    DuplicateDeclaration(Var),

    #[error("The variable {name} must have an integer value.")]
    InvalidLiteral { name: Var, literal: String },
}

impl From<BindingError> for ErrorKind {
    fn from(e: BindingError) -> Self {
        match e {
            BindingError::AlreadyDeclared { name } => ErrorKind::DuplicateDeclaration(name),
        }
    }
}

impl From<LabelError> for ErrorKind {
    fn from(e: LabelError) -> Self {
        match e {
            LabelError::AlreadyDefined { label, .. } => ErrorKind::DuplicateLabel(label),
        }
    }
}

/// A fatal condition, tied to the line that raised it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Error on line {line}\n  {text}\n  {kind}")]
pub struct Error {
    pub line: LineNumber,
    pub text: String,
    pub kind: ErrorKind,
}

impl Error {
    pub fn new(line: LineNumber, text: impl Into<String>, kind: impl Into<ErrorKind>) -> Self {
        Error {
            line,
            text: text.into(),
            kind: kind.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
