use feedcard_ui::{event::PostEvent, post::PostCard};
use std::{
    num::{NonZeroUsize, ParseIntError},
    str::FromStr,
};
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0:?}")]
    Unknown(String),
    #[error("Command {0:?} needs a comment position")]
    MissingPosition(&'static str),
    #[error("Invalid comment position: {0}")]
    InvalidPosition(#[from] ParseIntError),
    #[error("There is no comment at position {0}")]
    NoCommentAt(NonZeroUsize),
}

/// One line of host input. Positions count rendered comments from 1.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Command {
    Type(String),
    Submit,
    Like(NonZeroUsize),
    Delete(NonZeroUsize),
    Render,
    Quit,
}

/// What the host loop does with a parsed command.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Step {
    Dispatch(PostEvent),
    Render,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim_end_matches(['\r', '\n']);
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));

        let position = |name: &'static str| -> Result<NonZeroUsize, CommandError> {
            let rest = rest.trim();
            if rest.is_empty() {
                return Err(CommandError::MissingPosition(name));
            }
            Ok(rest.parse::<NonZeroUsize>()?)
        };

        match name {
            "" => Err(CommandError::Empty),
            "type" => Ok(Command::Type(rest.to_owned())),
            "clear" => Ok(Command::Type(String::new())),
            "submit" => Ok(Command::Submit),
            "like" => Ok(Command::Like(position("like")?)),
            "delete" => Ok(Command::Delete(position("delete")?)),
            "render" => Ok(Command::Render),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name.to_owned())),
        }
    }
}

impl Command {
    pub fn into_step(self, card: &PostCard) -> Result<Step, CommandError> {
        let comment_at = |position: NonZeroUsize| {
            card.comments()
                .get(position.get() - 1)
                .map(|comment| comment.id())
                .ok_or(CommandError::NoCommentAt(position))
        };

        let step = match self {
            Command::Type(text) => Step::Dispatch(PostEvent::DraftChanged(text)),
            Command::Submit => Step::Dispatch(PostEvent::Submit),
            Command::Like(position) => Step::Dispatch(PostEvent::Like(comment_at(position)?)),
            Command::Delete(position) => Step::Dispatch(PostEvent::Delete(comment_at(position)?)),
            Command::Render => Step::Render,
            Command::Quit => Step::Quit,
        };
        Ok(step)
    }
}
