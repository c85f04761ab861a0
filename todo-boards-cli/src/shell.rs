//! Line-oriented editing session
//!
//! Each input line is parsed into a [`ShellCommand`] and run against a
//! [`BoardSession`]. The shell plays the part of the gesture collaborator: it
//! resolves the owners of dragged and target items before handing a
//! [`DragDescriptor`] to the engine.

use crate::cli::OutputFormat;
use crate::render::render;
use std::io::{BufRead, Write};
use todo_boards::{
    board::{AddBoard, DeleteBoard, UpdateBoard},
    item::{AddItem, DeleteItem, UpdateItem},
    BoardSession, BoardStore, DragDescriptor, Mutation, Stamper,
};
use tracing::debug;

const HELP: &str = "\
commands:
  board add <title>              board rename <id> <title>     board rm <id>
  item add <board-id> <text>     item edit <id> <text>         item rm <id>
  drag board <id> <target|->     drag item <id> <target|->
  undo   redo   list   help   quit";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    AddBoard { title: String },
    RenameBoard { id: String, title: String },
    DeleteBoard { id: String },
    AddItem { board_id: String, text: String },
    EditItem { id: String, text: String },
    DeleteItem { id: String },
    DragBoard { id: String, target: Option<String> },
    DragItem { id: String, target: Option<String> },
    Undo,
    Redo,
    List,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (head, rest) = split_word(line);
        let command = match head {
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "board" => Self::parse_board(rest)?,
            "item" => Self::parse_item(rest)?,
            "drag" => Self::parse_drag(rest)?,
            other => return Err(format!("unknown command '{other}', try 'help'")),
        };
        Ok(Some(command))
    }

    fn parse_board(rest: &str) -> Result<Self, String> {
        let (verb, rest) = split_word(rest);
        match verb {
            "add" => Ok(Self::AddBoard {
                title: required(rest, "title")?,
            }),
            "rename" => {
                let (id, title) = split_word(rest);
                Ok(Self::RenameBoard {
                    id: required(id, "board id")?,
                    title: title.to_string(),
                })
            }
            "rm" | "delete" => Ok(Self::DeleteBoard {
                id: required(rest, "board id")?,
            }),
            other => Err(format!("unknown board command '{other}'")),
        }
    }

    fn parse_item(rest: &str) -> Result<Self, String> {
        let (verb, rest) = split_word(rest);
        match verb {
            "add" => {
                let (board_id, text) = split_word(rest);
                Ok(Self::AddItem {
                    board_id: required(board_id, "board id")?,
                    text: required(text, "text")?,
                })
            }
            "edit" => {
                let (id, text) = split_word(rest);
                Ok(Self::EditItem {
                    id: required(id, "item id")?,
                    text: text.to_string(),
                })
            }
            "rm" | "delete" => Ok(Self::DeleteItem {
                id: required(rest, "item id")?,
            }),
            other => Err(format!("unknown item command '{other}'")),
        }
    }

    fn parse_drag(rest: &str) -> Result<Self, String> {
        let (kind, rest) = split_word(rest);
        let (id, target) = split_word(rest);
        let id = required(id, "dragged id")?;
        let target = match target.trim() {
            "" | "-" => None,
            t => Some(t.to_string()),
        };
        match kind {
            "board" => Ok(Self::DragBoard { id, target }),
            "item" => Ok(Self::DragItem { id, target }),
            other => Err(format!("can only drag 'board' or 'item', not '{other}'")),
        }
    }
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(at) => (&s[..at], s[at..].trim_start()),
        None => (s, ""),
    }
}

fn required(value: &str, what: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("missing {what}"))
    } else {
        Ok(value.to_string())
    }
}

/// Run commands from `input` until EOF or `quit`
pub fn run<S, T, R, W>(
    session: &mut BoardSession<S, T>,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    S: BoardStore,
    T: Stamper,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        match ShellCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => execute(session, command, output, format)?,
            Err(message) => writeln!(output, "error: {message}")?,
        }
    }
    Ok(())
}

fn execute<S, T, W>(
    session: &mut BoardSession<S, T>,
    command: ShellCommand,
    output: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    S: BoardStore,
    T: Stamper,
    W: Write,
{
    debug!(?command, "shell command");
    let outcome = match command {
        ShellCommand::AddBoard { title } => mutate(session, &AddBoard::new(title)),
        ShellCommand::RenameBoard { id, title } => mutate(session, &UpdateBoard::new(id, title)),
        ShellCommand::DeleteBoard { id } => mutate(session, &DeleteBoard::new(id)),
        ShellCommand::AddItem { board_id, text } => mutate(session, &AddItem::new(board_id, text)),
        ShellCommand::EditItem { id, text } => mutate(session, &UpdateItem::new(id, text)),
        ShellCommand::DeleteItem { id } => mutate(session, &DeleteItem::new(id)),
        ShellCommand::DragBoard { id, target } => {
            mutate(session, &DragDescriptor::board(id, target))
        }
        ShellCommand::DragItem { id, target } => {
            let descriptor = resolve_item_drag(session, id, target);
            mutate(session, &descriptor)
        }
        ShellCommand::Undo => Ok(if session.undo() {
            "undone".to_string()
        } else {
            "nothing to undo".to_string()
        }),
        ShellCommand::Redo => Ok(if session.redo() {
            "redone".to_string()
        } else {
            "nothing to redo".to_string()
        }),
        ShellCommand::List => Ok(render(session.boards(), format)?),
        ShellCommand::Help => Ok(HELP.to_string()),
        ShellCommand::Quit => Ok(String::new()),
    };

    match outcome {
        Ok(message) => writeln!(output, "{message}")?,
        Err(message) => writeln!(output, "error: {message}")?,
    }
    Ok(())
}

fn mutate<S: BoardStore, T: Stamper>(
    session: &mut BoardSession<S, T>,
    mutation: &dyn Mutation,
) -> Result<String, String> {
    let before = session.boards().clone();
    let after = session.apply(mutation).map_err(|e| e.to_string())?;
    if *after == before {
        Ok(format!("{}: no change", mutation.op_string()))
    } else {
        Ok(format!("{}: ok", mutation.op_string()))
    }
}

/// Fill in the owners the way a drag-and-drop layer would: the dragged
/// item's board, and the target's board when the target is an item.
fn resolve_item_drag<S: BoardStore, T: Stamper>(
    session: &BoardSession<S, T>,
    id: String,
    target: Option<String>,
) -> DragDescriptor {
    let boards = session.boards();
    let owner = boards.owner_of_item(&id).cloned().unwrap_or_default();
    let descriptor = DragDescriptor::item(id, owner);

    match target {
        None => descriptor,
        Some(target) => match boards.owner_of_item(&target).cloned() {
            Some(target_owner) => descriptor.over_item(target, target_owner),
            None => descriptor.over(target),
        },
    }
}
