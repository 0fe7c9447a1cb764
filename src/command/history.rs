use log::warn;

use super::{Change, CommandContext, CommandError, CommandResult};

/// Linear undo/redo log of committed changes
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<Change>,
    redo_stack: Vec<Change>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change that has already been applied. Clears the redo stack.
    pub fn push(&mut self, change: Change) {
        self.redo_stack.clear();
        self.undo_stack.push(change);
    }

    /// Revert the most recent change and move it to the redo stack.
    ///
    /// A change that fails to revert is dropped so the stacks never point at
    /// state the scene no longer has.
    pub fn undo(&mut self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let change = self.undo_stack.pop().ok_or(CommandError::NothingToUndo)?;
        if let Err(err) = change.undo(ctx) {
            warn!("Dropping {} from history: {err}", change.name());
            return Err(err);
        }
        self.redo_stack.push(change);
        Ok(())
    }

    /// Re-apply the most recently undone change
    pub fn redo(&mut self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let change = self.redo_stack.pop().ok_or(CommandError::NothingToRedo)?;
        if let Err(err) = change.redo(ctx) {
            warn!("Dropping {} from history: {err}", change.name());
            return Err(err);
        }
        self.undo_stack.push(change);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// `(undo available, redo available)`
    pub fn status(&self) -> (bool, bool) {
        (self.can_undo(), self.can_redo())
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::surface::{CanvasSurface, RenderSurface};

    fn background(previous: &str, new: &str) -> Change {
        Change::Background {
            previous: previous.to_owned(),
            new: new.to_owned(),
        }
    }

    #[test]
    fn test_push_clears_redo() {
        let mut document = Document::new();
        let mut surface = CanvasSurface::new("white");
        let mut history = CommandHistory::new();

        surface.set_background("red").unwrap();
        history.push(background("white", "red"));
        {
            let mut ctx = CommandContext::new(&mut document, &mut surface);
            history.undo(&mut ctx).unwrap();
        }
        assert_eq!(surface.background(), "white");
        assert_eq!(history.status(), (false, true));

        history.push(background("white", "blue"));
        assert_eq!(history.status(), (true, false));
    }

    #[test]
    fn test_empty_stacks_report_errors() {
        let mut document = Document::new();
        let mut surface = CanvasSurface::new("white");
        let mut history = CommandHistory::new();
        let mut ctx = CommandContext::new(&mut document, &mut surface);

        assert_eq!(history.undo(&mut ctx), Err(CommandError::NothingToUndo));
        assert_eq!(history.redo(&mut ctx), Err(CommandError::NothingToRedo));
    }

    #[test]
    fn test_failed_undo_drops_record() {
        let mut document = Document::new();
        let mut surface = CanvasSurface::new("white");
        let mut history = CommandHistory::new();
        history.push(background("not-a-color", "white"));

        let mut ctx = CommandContext::new(&mut document, &mut surface);
        assert!(history.undo(&mut ctx).is_err());
        assert_eq!(history.status(), (false, false));
    }
}
