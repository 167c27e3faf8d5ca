use tracing::{debug, trace};

use crate::error::Result;
use crate::memory::Bindings;
use crate::program::Program;
use crate::types::LineNumber;

/// First line executed by every run.
pub const ENTRY: LineNumber = 1;

pub struct Machine<'a> {
    bindings: &'a mut Bindings,
}

impl Machine<'_> {
    pub fn new(bindings: &mut Bindings) -> Machine {
        Machine { bindings }
    }

    /// Executes from `ENTRY` until the instruction pointer leaves the program.
    ///
    /// Targets returned by statements are not validated here: any line
    /// number outside the program ends the run.
    pub fn run(&mut self, program: &Program) -> Result<()> {
        let mut pc = ENTRY;
        let mut steps = 0usize;

        while let Some(line) = program.at(pc) {
            trace!(pc, kind = line.statement.kind(), text = %line.raw, "execute");
            pc = line.execute(self.bindings)?;
            steps += 1;
        }

        debug!(steps, exit = pc, "program finished");
        Ok(())
    }
}
