//! Interpreter for SILLI, a line-oriented teaching language.
//!
//! Every source line is `[LABEL:] BODY`. Bodies are matched against an
//! ordered registry of statement kinds, the loaded program is indexed by line
//! number and executed by a single instruction pointer.
//!
//! ```
//! let mut session = silli::Session::new();
//! session.run("LET A = 5\nX: LET B = 3").unwrap();
//!
//! assert_eq!(session.bindings().load("B"), Some(3));
//! assert_eq!(session.labels().get("X"), Some(2));
//! ```

mod error;
mod interpreter;
mod machine;
mod memory;
mod program;
#[cfg(test)]
mod regression;
mod session;
mod statement;
mod syntax;
mod types;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::interpreter::{CommandError, Flow, Interpreter};
pub use crate::machine::{Machine, ENTRY};
pub use crate::memory::{BindingError, Bindings, LabelError, Labels};
pub use crate::program::Program;
pub use crate::session::Session;
pub use crate::statement::{classify, kind_of, Line, Statement, StatementKind, KINDS};
pub use crate::syntax::{Command, Declaration};
pub use crate::types::{Int, Label, LineNumber, Var};
