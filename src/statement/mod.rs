mod execution;
mod registry;

use std::fmt;

use crate::syntax::Declaration;
use crate::types::LineNumber;

pub use self::registry::{classify, kind_of, StatementKind, KINDS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Blank,
    Comment,
    Declaration(Declaration),
}

impl Statement {
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Blank => "blank",
            Statement::Comment => "comment",
            Statement::Declaration(_) => "declaration",
        }
    }
}

/// One source line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: LineNumber,
    /// Uppercased source text, label included
    pub raw: String,
    /// `raw` without its label, trimmed
    pub body: String,
    pub statement: Statement,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t| {}", self.number, self.raw)
    }
}
