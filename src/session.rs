use crate::error::Result;
use crate::machine::Machine;
use crate::memory::{Bindings, Labels};
use crate::program::Program;

/// State of a single program run: its label table and variable bindings.
///
/// Both tables live exactly as long as the session; load and execute
/// borrow them in turn. Use a fresh session for every program.
#[derive(Debug, Default)]
pub struct Session {
    labels: Labels,
    bindings: Bindings,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, source: &str) -> Result<Program> {
        Program::load(source, &mut self.labels)
    }

    pub fn execute(&mut self, program: &Program) -> Result<()> {
        Machine::new(&mut self.bindings).run(program)
    }

    /// Loads then executes `source`. Nothing runs unless every line loads.
    pub fn run(&mut self, source: &str) -> Result<Program> {
        let program = self.load(source)?;
        self.execute(&program)?;
        Ok(program)
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }
}
