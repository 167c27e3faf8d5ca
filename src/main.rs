use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use silli::{Interpreter, Session};

#[derive(Parser)]
#[command(author, version, about = "Interpreter for the SILLI teaching language")]
struct Args {
    /// Print the program listing and label table before running and the
    /// variable table afterwards
    #[arg(short, long)]
    debug: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Program to run; starts an interactive session when omitted
    source: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let path = match args.source {
        Some(path) => path,
        None => {
            return match Interpreter::new().run() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Failure: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match run(&path, &source, args.debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, source: &str, debug: bool) -> silli::Result<()> {
    let mut session = Session::new();
    let program = session.load(source)?;

    if debug {
        println!();
        println!("Interpreting Program: {}", path.display());
        println!();
        println!("Program Source Code:");
        print!("{}", program);

        if !session.labels().is_empty() {
            println!();
            println!("Line Labels:");
            println!();
            print!("{}", session.labels());
        }

        println!();
        println!("Output from Program Execution:");
        println!();
    }

    session.execute(&program)?;

    if debug {
        println!();
        println!("Final Variable Map:");
        println!();
        print!("{}", session.bindings());
    }

    Ok(())
}
