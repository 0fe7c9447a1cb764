use log::debug;

use super::{CommandContext, CommandError, CommandResult};
use crate::element::{Drawable, Element, ElementId, Stroke};

/// What an eraser or a remove command took out of the scene
#[derive(Debug, Clone, PartialEq)]
pub enum DeletedObject {
    /// A whole top-level object and the list index it occupied
    Object { object: Drawable, index: usize },
    /// A single stroke and its slot inside the owning group
    Member {
        stroke: Stroke,
        group: ElementId,
        position: usize,
    },
}

/// One undoable step of the drawing history.
///
/// Objects stored here are snapshots taken at commit time. They are never
/// shared with the live scene; re-inserting one renders a fresh copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// A drawable committed by a tool
    Added { object: Drawable, index: usize },
    Background { previous: String, new: String },
    Deleted(DeletedObject),
    /// An in-place edit. `from` and `to` are the list indices before and after.
    Replaced {
        before: Drawable,
        after: Drawable,
        from: usize,
        to: usize,
    },
}

impl Change {
    pub fn name(&self) -> &'static str {
        match self {
            Change::Added { .. } => "add",
            Change::Background { .. } => "background change",
            Change::Deleted(DeletedObject::Object { .. }) => "delete",
            Change::Deleted(DeletedObject::Member { .. }) => "stroke erase",
            Change::Replaced { .. } => "replace",
        }
    }

    /// Revert the change
    pub fn undo(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        debug!("Undoing {}", self.name());
        match self {
            Change::Added { object, .. } => take_out(ctx, object.id()),
            Change::Background { previous, .. } => Ok(ctx.surface.set_background(previous)?),
            Change::Deleted(DeletedObject::Object { object, index }) => {
                put_back(ctx, object, *index);
                Ok(())
            }
            Change::Deleted(DeletedObject::Member {
                stroke,
                group,
                position,
            }) => {
                let owner = ctx
                    .document
                    .stroke_group_mut(*group)
                    .ok_or(CommandError::GroupNotFound(*group))?;
                let mut stroke = stroke.clone();
                stroke.render(ctx.surface);
                owner.insert_member(*position, stroke);
                ctx.document.restack(ctx.surface);
                Ok(())
            }
            Change::Replaced { before, after, from, .. } => {
                take_out(ctx, after.id())?;
                put_back(ctx, before, *from);
                Ok(())
            }
        }
    }

    /// Apply the change again after it was undone
    pub fn redo(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        debug!("Redoing {}", self.name());
        match self {
            Change::Added { object, index } => {
                put_back(ctx, object, *index);
                Ok(())
            }
            Change::Background { new, .. } => Ok(ctx.surface.set_background(new)?),
            Change::Deleted(DeletedObject::Object { object, .. }) => take_out(ctx, object.id()),
            Change::Deleted(DeletedObject::Member { group, position, .. }) => {
                let owner = ctx
                    .document
                    .stroke_group_mut(*group)
                    .ok_or(CommandError::GroupNotFound(*group))?;
                let mut stroke = owner
                    .take_member_at(*position)
                    .ok_or(CommandError::MemberNotFound {
                        group: *group,
                        position: *position,
                    })?;
                stroke.erase(ctx.surface);
                Ok(())
            }
            Change::Replaced { before, after, to, .. } => {
                take_out(ctx, before.id())?;
                put_back(ctx, after, *to);
                Ok(())
            }
        }
    }
}

/// Remove the live object from the scene and the surface
fn take_out(ctx: &mut CommandContext<'_>, id: ElementId) -> CommandResult {
    let (_, mut object) = ctx
        .document
        .remove_by_id(id)
        .ok_or(CommandError::ObjectNotFound(id))?;
    object.erase(ctx.surface);
    Ok(())
}

/// Render a fresh copy of `snapshot` at `index` and bring the surface stacking in line
fn put_back(ctx: &mut CommandContext<'_>, snapshot: &Drawable, index: usize) {
    let mut object = snapshot.clone();
    object.render(ctx.surface);
    ctx.document.insert(index, object);
    ctx.document.restack(ctx.surface);
}
