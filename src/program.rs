use std::fmt;

use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::memory::Labels;
use crate::statement::{self, Line, Statement};
use crate::types::LineNumber;

/// Loaded program. Index 0 is a filler that never runs, so `lines[n]` is
/// source line `n`.
#[derive(Debug, Clone)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    /// Classifies every line of `source`, registering labels on the way.
    /// Stops at the first line that fails; nothing is returned in that case.
    pub fn load(source: &str, labels: &mut Labels) -> Result<Program> {
        let mut lines = vec![filler()];

        for (number, text) in (1..).zip(source.lines()) {
            let raw = text.to_uppercase();
            match statement::classify(number, &raw, labels)? {
                Some(line) => lines.push(line),
                None => return Err(Error::new(number, raw, ErrorKind::Syntax)),
            }
        }

        debug!(lines = lines.len() - 1, labels = labels.len(), "program loaded");
        Ok(Program { lines })
    }

    /// Statement at `number` if it is an executable line.
    pub fn at(&self, number: LineNumber) -> Option<&Line> {
        if number == 0 {
            return None;
        }
        self.lines.get(number)
    }

    /// Number of executable lines.
    pub fn len(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().skip(1)
    }
}

fn filler() -> Line {
    Line {
        number: 0,
        raw: "# FILLER".into(),
        body: "# FILLER".into(),
        statement: Statement::Comment,
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
