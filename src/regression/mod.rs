mod bad_programs;
mod good_programs;

use crate::session::Session;
use crate::types::{Int, Label, LineNumber};
use crate::Result;

pub fn run(program: &str) -> (Result<()>, Session) {
    let mut session = Session::new();
    let result = session.run(program.trim()).map(|_| ());
    (result, session)
}

pub fn vars(session: &Session) -> Vec<(&str, Int)> {
    session
        .bindings()
        .iter()
        .map(|(name, value)| (name.as_str(), value))
        .collect()
}

pub fn labels(session: &Session) -> Vec<(&Label, LineNumber)> {
    session.labels().iter().collect()
}
