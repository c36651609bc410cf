//! The shell's input grammar.
//!
//! One command per line. Positions (`edit 2`) are 1-based into the currently
//! filtered list; resolving them to record ids is the shell's job, the
//! controller never sees positions.

use roster::app::Page;
use roster::error::{Result, RosterError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Go(Page),
    Add,
    Edit(usize),
    View(usize),
    Delete(usize),
    Yes,
    No,
    Search(String),
    Set(String, String),
    Save,
    Back,
    Toggle(String),
    Help,
    Quit,
}

pub fn parse_input(line: &str) -> Result<Input> {
    let (cmd, rest) = split_command(line.trim());

    match cmd {
        "dashboard" | "d" => Ok(Input::Go(Page::Dashboard)),
        "users" | "u" => Ok(Input::Go(Page::Users)),
        "settings" => Ok(Input::Go(Page::Settings)),
        "add" | "a" => Ok(Input::Add),
        "edit" | "e" => Ok(Input::Edit(parse_position(rest)?)),
        "view" | "v" => Ok(Input::View(parse_position(rest)?)),
        "delete" | "rm" => Ok(Input::Delete(parse_position(rest)?)),
        "yes" | "y" => Ok(Input::Yes),
        "no" | "n" => Ok(Input::No),
        "search" | "/" => Ok(Input::Search(rest.to_string())),
        "set" => {
            let (field, value) = split_command(rest);
            if field.is_empty() {
                return Err(RosterError::Api("set needs a field name".into()));
            }
            Ok(Input::Set(field.to_string(), value.to_string()))
        }
        "save" => Ok(Input::Save),
        "back" | "b" => Ok(Input::Back),
        "toggle" | "t" => {
            if rest.is_empty() {
                return Err(RosterError::Api("toggle needs a setting key".into()));
            }
            Ok(Input::Toggle(rest.to_string()))
        }
        "help" | "h" | "?" => Ok(Input::Help),
        "quit" | "q" | "exit" => Ok(Input::Quit),
        other => Err(RosterError::Api(format!("Unknown command: {}", other))),
    }
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line, ""),
    }
}

fn parse_position(s: &str) -> Result<usize> {
    let n: usize = s
        .parse()
        .map_err(|_| RosterError::Api(format!("Invalid position: {}", s)))?;
    if n == 0 {
        return Err(RosterError::Api("Positions start at 1".into()));
    }
    Ok(n)
}
