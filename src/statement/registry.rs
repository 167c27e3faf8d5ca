use tracing::debug;

use super::{Line, Statement};
use crate::error::{Error, Result};
use crate::memory::Labels;
use crate::syntax::{self, split_label};
use crate::types::LineNumber;

/// A recognizable kind of statement: a predicate over the statement body and
/// the constructor used once the predicate accepts it.
pub struct StatementKind {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    build: fn(&str) -> Option<Statement>,
}

/// Known statement kinds in priority order.
///
/// Predicates may overlap; the first one to accept a body decides its kind
/// and the rest are never consulted. New kinds go at the end unless they must
/// shadow an existing one.
pub static KINDS: &[StatementKind] = &[
    StatementKind {
        name: "blank",
        matches: is_blank,
        build: blank,
    },
    StatementKind {
        name: "comment",
        matches: is_comment,
        build: comment,
    },
    StatementKind {
        name: "declaration",
        matches: is_declaration,
        build: declaration,
    },
];

fn is_blank(body: &str) -> bool {
    body.is_empty()
}

fn blank(_: &str) -> Option<Statement> {
    Some(Statement::Blank)
}

fn is_comment(body: &str) -> bool {
    body.starts_with('#')
}

fn comment(_: &str) -> Option<Statement> {
    Some(Statement::Comment)
}

fn is_declaration(body: &str) -> bool {
    body.starts_with("LET")
}

fn declaration(body: &str) -> Option<Statement> {
    match syntax::parse("declaration", syntax::declaration, body) {
        Ok(d) => Some(Statement::Declaration(d)),
        Err(e) => {
            debug!("{}", e);
            None
        }
    }
}

/// The kind a label-free, trimmed body belongs to.
pub fn kind_of(body: &str) -> Option<&'static StatementKind> {
    KINDS.iter().find(|kind| (kind.matches)(body))
}

/// Turns one (already uppercased) source line into a `Line`.
///
/// A label is registered before the body is looked at, so a duplicate label
/// is reported even on a line that would not classify. `Ok(None)` means no
/// kind accepted the body.
pub fn classify(number: LineNumber, raw: &str, labels: &mut Labels) -> Result<Option<Line>> {
    let (label, body) = split_label(raw);

    if let Some(label) = label {
        labels
            .define(label, number)
            .map_err(|e| Error::new(number, raw, e))?;
        debug!(label, line = number, "registered label");
    }

    let statement = match kind_of(body).and_then(|kind| (kind.build)(body)) {
        Some(statement) => statement,
        None => return Ok(None),
    };

    Ok(Some(Line {
        number,
        raw: raw.to_string(),
        body: body.to_string(),
        statement,
    }))
}
