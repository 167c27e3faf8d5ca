// Input ::= List | Run | Labels | Vars | Load | Clear | Quit | Line
// List ::= ':list'
// Run ::= ':run'
// Labels ::= ':labels'
// Vars ::= ':vars'
// Load ::= ':load' Path
// Clear ::= ':clear'
// Quit ::= ':quit'
// Line ::= any text not starting with ':'

use std::path::PathBuf;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{map, not, rest};
use nom::sequence::preceded;

use super::{spaces, spaces1, Input, Parsed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Run,
    ShowLabels,
    ShowVars,
    Load(PathBuf),
    Clear,
    Quit,
    Append(String),
}

impl Command {
    pub fn parse(line: &str) -> super::Result<Command> {
        super::parse("command", command, line)
    }
}

pub fn command(input: Input) -> Parsed<Command> {
    alt((
        keyword(":list", Command::List),
        keyword(":run", Command::Run),
        keyword(":labels", Command::ShowLabels),
        keyword(":vars", Command::ShowVars),
        keyword(":clear", Command::Clear),
        keyword(":quit", Command::Quit),
        load,
        append,
    ))(input)
}

fn keyword<'a>(name: &'a str, command: Command) -> impl Fn(Input<'a>) -> Parsed<Command> {
    map(preceded(tag(name), spaces), move |_| command.clone())
}

fn load(input: Input) -> Parsed<Command> {
    map(preceded(tag(":load"), preceded(spaces1, rest)), |path: Input| {
        Command::Load(PathBuf::from(path.trim()))
    })(input)
}

fn append(input: Input) -> Parsed<Command> {
    map(preceded(not(tag(":")), rest), |line: Input| {
        Command::Append(line.to_string())
    })(input)
}
