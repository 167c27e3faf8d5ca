use nom::bytes::complete::{take_while, take_while1};

use super::{Input, ParseError, Parsed};
use crate::types::Var;

pub fn identifier(input: Input) -> Parsed<Var> {
    let (input, first) = take_while1::<_, Input, ParseError>(|c: char| c.is_alphabetic())(input)?;
    let (input, second) =
        take_while::<_, Input, ParseError>(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let name = [first, second].concat();
    Ok((input, name))
}

/// Raw literal text; whether it is a valid integer is decided when it runs.
pub fn literal(input: Input) -> Parsed<Input> {
    take_while1(|c: char| !c.is_whitespace())(input)
}
