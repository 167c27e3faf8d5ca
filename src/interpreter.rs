use std::fs;
use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::Editor;
use thiserror::Error;
use tracing::debug;

use crate::session::Session;
use crate::syntax::{self, Command};

const HISTORY: &str = "history.txt";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Parse error: {0}")]
    Parse(#[from] syntax::Error),

    #[error("{0}")]
    Program(#[from] crate::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session: lines are collected into a buffer and run on demand.
pub struct Interpreter {
    buffer: Vec<String>,
    last: Option<Session>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            buffer: Vec::new(),
            last: None,
        }
    }

    pub fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<Flow, CommandError> {
        match command {
            Command::Append(line) => self.buffer.push(line),
            Command::List => {
                for (number, line) in (1..).zip(self.buffer.iter()) {
                    writeln!(out, "{}\t| {}", number, line.to_uppercase())?;
                }
            }
            Command::Run => {
                let mut session = Session::new();
                let result = session.run(&self.buffer.join("\n"));
                if result.is_ok() {
                    write!(out, "{}", session.bindings())?;
                }
                self.last = Some(session);
                result?;
            }
            Command::ShowLabels => match &self.last {
                Some(session) => write!(out, "{}", session.labels())?,
                None => writeln!(out, "No program has run yet.")?,
            },
            Command::ShowVars => match &self.last {
                Some(session) => write!(out, "{}", session.bindings())?,
                None => writeln!(out, "No program has run yet.")?,
            },
            Command::Load(path) => {
                let source = fs::read_to_string(&path)?;
                self.buffer = source.lines().map(String::from).collect();
                self.last = None;
                writeln!(out, "Loaded {} lines from {}", self.buffer.len(), path.display())?;
            }
            Command::Clear => {
                self.buffer.clear();
                self.last = None;
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut rl = Editor::<()>::new();
        if rl.load_history(HISTORY).is_err() {
            println!("No previous history.");
        }

        let stdout = io::stdout();
        loop {
            let readline = rl.readline(">> ");
            match readline {
                Ok(line) => {
                    rl.add_history_entry(line.as_str());

                    let result = Command::parse(line.as_str())
                        .map_err(CommandError::from)
                        .and_then(|command| self.execute(command, &mut stdout.lock()));

                    match result {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => println!("{}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Err(e) = rl.save_history(HISTORY) {
            debug!("could not save history: {}", e);
        }

        Ok(())
    }
}
