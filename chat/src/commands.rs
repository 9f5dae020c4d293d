use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Upload(PathBuf),
    Ask(String),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  /upload <path>   upload a PDF for this session
  /help            show this help
  /quit            leave the chat
Anything else is sent as a question.";

pub fn parse_line(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Ask(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "upload" if !arg.is_empty() => Command::Upload(PathBuf::from(arg)),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
