//! Edit-script parsing.
//!
//! One command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! pick photos/cat.jpg     # choose from the library (no path = cancelled)
//! camera photos/dog.jpg   # take a photo (no path = cancelled)
//! placeholder             # "use this photo"
//! sticker emoji3
//! filter sepia
//! undo
//! redo
//! reset
//! status
//! export [out.jpeg]
//! ```

use std::fmt;
use std::path::PathBuf;

use ss_common::FilterKind;
use thiserror::Error;

/// One editor action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pick from the library; None means the picker was dismissed.
    Pick { path: Option<PathBuf> },
    /// Take a photo; None means the camera was dismissed.
    Camera { path: Option<PathBuf> },
    Placeholder,
    Sticker { id: String },
    Filter { kind: FilterKind },
    Undo,
    Redo,
    Reset,
    Status,
    Export { path: Option<PathBuf> },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pick { path: Some(p) } => write!(f, "pick {}", p.display()),
            Self::Pick { path: None } => f.write_str("pick"),
            Self::Camera { path: Some(p) } => write!(f, "camera {}", p.display()),
            Self::Camera { path: None } => f.write_str("camera"),
            Self::Placeholder => f.write_str("placeholder"),
            Self::Sticker { id } => write!(f, "sticker {id}"),
            Self::Filter { kind } => write!(f, "filter {kind}"),
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
            Self::Reset => f.write_str("reset"),
            Self::Status => f.write_str("status"),
            Self::Export { path: Some(p) } => write!(f, "export {}", p.display()),
            Self::Export { path: None } => f.write_str("export"),
        }
    }
}

/// A parsed command with its 1-based source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: {reason}")]
    Syntax { line: usize, reason: String },
}

/// Parse a whole script.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        match parse_line(raw) {
            Ok(Some(command)) => lines.push(ScriptLine { line, command }),
            Ok(None) => {}
            Err(reason) => return Err(ScriptError::Syntax { line, reason }),
        }
    }
    Ok(lines)
}

/// Parse a single line. `Ok(None)` for blanks and comments.
pub fn parse_line(raw: &str) -> Result<Option<Command>, String> {
    let text = strip_comment(raw).trim();
    if text.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match text.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (text, ""),
    };
    let arg = (!rest.is_empty()).then_some(rest);

    let command = match verb.to_ascii_lowercase().as_str() {
        "pick" => Command::Pick {
            path: arg.map(PathBuf::from),
        },
        "camera" => Command::Camera {
            path: arg.map(PathBuf::from),
        },
        "placeholder" => no_arg(verb, arg, Command::Placeholder)?,
        "sticker" => Command::Sticker {
            id: required(verb, arg)?.to_string(),
        },
        "filter" => Command::Filter {
            kind: required(verb, arg)?
                .parse()
                .map_err(|e: ss_common::ParseFilterError| e.to_string())?,
        },
        "undo" => no_arg(verb, arg, Command::Undo)?,
        "redo" => no_arg(verb, arg, Command::Redo)?,
        "reset" => no_arg(verb, arg, Command::Reset)?,
        "status" => no_arg(verb, arg, Command::Status)?,
        "export" => Command::Export {
            path: arg.map(PathBuf::from),
        },
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(Some(command))
}

/// `#` opens a comment at the start of a line or after whitespace; elsewhere
/// it is part of the argument (`pick photos/#1.jpg`).
fn strip_comment(raw: &str) -> &str {
    let mut prev_is_space = true;
    for (idx, ch) in raw.char_indices() {
        if ch == '#' && prev_is_space {
            return &raw[..idx];
        }
        prev_is_space = ch.is_whitespace();
    }
    raw
}

fn required<'a>(verb: &str, arg: Option<&'a str>) -> Result<&'a str, String> {
    arg.ok_or_else(|| format!("'{verb}' needs an argument"))
}

fn no_arg(verb: &str, arg: Option<&str>, command: Command) -> Result<Command, String> {
    match arg {
        Some(extra) => Err(format!("'{verb}' takes no argument, got '{extra}'")),
        None => Ok(command),
    }
}
