use super::{Line, Statement};
use crate::error::{Error, ErrorKind, Result};
use crate::memory::Bindings;
use crate::syntax::Declaration;
use crate::types::{Int, LineNumber};

impl Line {
    /// Runs the statement and returns the line to continue at.
    pub fn execute(&self, bindings: &mut Bindings) -> Result<LineNumber> {
        match &self.statement {
            Statement::Blank | Statement::Comment => { /* nothing to do */ }
            Statement::Declaration(d) => self.declare(d, bindings)?,
        }

        Ok(self.number + 1)
    }

    fn declare(&self, d: &Declaration, bindings: &mut Bindings) -> Result<()> {
        if bindings.contains(&d.name) {
            return Err(self.error(ErrorKind::DuplicateDeclaration(d.name.clone())));
        }

        let value = d.literal.parse::<Int>().map_err(|_| {
            self.error(ErrorKind::InvalidLiteral {
                name: d.name.clone(),
                literal: d.literal.clone(),
            })
        })?;

        bindings
            .declare(&d.name, value)
            .map_err(|e| self.error(e.into()))
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(self.number, self.raw.as_str(), kind)
    }
}
