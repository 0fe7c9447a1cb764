mod commands;
mod context;
mod history;

use thiserror::Error;

use crate::element::ElementId;
use crate::surface::SurfaceError;

pub use commands::{Change, DeletedObject};
pub use context::CommandContext;
pub use history::CommandHistory;

/// Result type for applying a change in either direction
pub type CommandResult = Result<(), CommandError>;

/// Errors raised while applying or reverting a [`Change`]
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    #[error("No object with id {0} in the scene")]
    ObjectNotFound(ElementId),

    #[error("No stroke group with id {0} in the scene")]
    GroupNotFound(ElementId),

    #[error("Stroke group {group} has no member at position {position}")]
    MemberNotFound { group: ElementId, position: usize },

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
