// Line ::= [Label ':'] Body
// Declaration ::= 'LET' Identifier '=' Literal

use nom::sequence::preceded;

use super::types::{identifier, literal};
use super::{key, spaces, spaces1, Input, Parsed};
use crate::types::Var;

/// Splits a line at its first `:` into a trimmed label and a trimmed body.
pub fn split_label(line: &str) -> (Option<&str>, &str) {
    match line.find(':') {
        Some(at) => (Some(line[..at].trim()), line[at + 1..].trim()),
        None => (None, line.trim()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: Var,
    pub literal: String,
}

pub fn declaration(input: Input) -> Parsed<Declaration> {
    let (input, _) = key("LET")(input)?;
    let (input, name) = preceded(spaces1, identifier)(input)?;
    let (input, _) = key("=")(input)?;
    let (input, literal) = preceded(spaces, literal)(input)?;

    Ok((
        input,
        Declaration {
            name,
            literal: literal.to_string(),
        },
    ))
}
