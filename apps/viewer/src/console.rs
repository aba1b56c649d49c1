//! Line commands for driving the viewer from a terminal.

use crate::app::{App, Event};
use crate::components::{Key, KeyPress};
use crate::page::MemoryPage;

pub const HELP: &str = "\
commands:
  type <text>        set the search box
  search [id]        search for a question id
  browse <folder>    open the question list of a folder
  pick <id>          choose a question from the open list
  answer <letter>    click an answer option
  toggle <n>         click the n-th category header
  close | esc        close the question
  find               Ctrl+F
  dismiss            close the error banner
  backdrop           click outside the question list
  resize <width>     change the viewport width
  reload             fetch the folders again
  help | quit";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),

    #[error("Invalid argument for {command}: {value}")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Search(Option<String>),
    Browse(String),
    Pick(String),
    /// Zero-based option index.
    Answer(usize),
    /// Zero-based category index.
    Toggle(usize),
    Close,
    Escape,
    Find,
    Dismiss,
    Backdrop,
    Resize(u32),
    Reload,
    Help,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match word.to_ascii_lowercase().as_str() {
            "type" => Ok(Self::Type(rest.to_string())),
            "search" => Ok(Self::Search(arg)),
            "browse" => arg.map(Self::Browse).ok_or(CommandError::MissingArgument("browse")),
            "pick" => arg.map(Self::Pick).ok_or(CommandError::MissingArgument("pick")),
            "answer" => parse_letter(rest).map(Self::Answer),
            "toggle" => {
                let n: usize = parse_number("toggle", rest)?;
                match n.checked_sub(1) {
                    Some(index) => Ok(Self::Toggle(index)),
                    None => Err(CommandError::InvalidArgument {
                        command: "toggle",
                        value: rest.to_string(),
                    }),
                }
            }
            "close" => Ok(Self::Close),
            "esc" | "escape" => Ok(Self::Escape),
            "find" => Ok(Self::Find),
            "dismiss" => Ok(Self::Dismiss),
            "backdrop" => Ok(Self::Backdrop),
            "resize" => parse_number("resize", rest).map(Self::Resize),
            "reload" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn parse_letter(arg: &str) -> Result<usize, CommandError> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Ok((c.to_ascii_uppercase() as u8 - b'A') as usize)
        }
        (None, _) => Err(CommandError::MissingArgument("answer")),
        _ => Err(CommandError::InvalidArgument {
            command: "answer",
            value: arg.to_string(),
        }),
    }
}

fn parse_number<T: std::str::FromStr>(command: &'static str, arg: &str) -> Result<T, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    arg.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: arg.to_string(),
    })
}

/// Turn a command into page events and dispatch them.
///
/// Returns `false` when the session should end.
pub fn apply(app: &mut App<MemoryPage>, command: Command) -> bool {
    match command {
        Command::Type(text) => app.dispatch(Event::InputChanged(text)),
        Command::Search(id) => {
            if let Some(id) = id {
                app.dispatch(Event::InputChanged(id));
            }
            app.dispatch(Event::SearchSubmitted);
        }
        Command::Browse(folder) => app.dispatch(Event::FolderClicked(folder)),
        Command::Pick(id) => {
            if app.browser().folder().is_none() {
                eprintln!("no question list is open");
            } else if !app.browser().questions().contains(&id) {
                eprintln!("{id} is not in the open list");
            } else {
                app.dispatch(Event::QuestionPicked(id));
            }
        }
        Command::Answer(index) => app.dispatch(Event::OptionClicked(index)),
        Command::Toggle(index) => app.dispatch(Event::CategoryHeaderClicked(index)),
        Command::Close => app.dispatch(Event::CloseClicked),
        Command::Escape => press(app, KeyPress::plain(Key::Escape)),
        Command::Find => press(app, KeyPress::ctrl(Key::Char('f'))),
        Command::Dismiss => app.dispatch(Event::ErrorCloseClicked),
        Command::Backdrop => app.dispatch(Event::ModalBackdropClicked),
        Command::Resize(width) => {
            app.page_mut().set_viewport_width(width);
            app.dispatch(Event::Resized);
        }
        Command::Reload => app.dispatch(Event::Init),
        Command::Help => println!("{HELP}"),
        Command::Quit => return false,
    }
    true
}

fn press(app: &mut App<MemoryPage>, key: KeyPress) {
    if app.press_key(key) {
        tracing::debug!(?key, "default key handling suppressed");
    }
}
