//! Gesture state of the scene.
//!
//! At most one gesture is in progress at a time. Every gesture starts from
//! and returns to `Idle`:
//!
//! ```text
//!            pointer down                 pointer up
//!   Idle ──────────────────► Painting ─────────────────► Idle
//!     │                      Erasing
//!     │                      DrawingShape
//!     │                      Moving
//!     │   click (polygon)                 secondary click
//!     ├────────────────────► BuildingPolygon ───────────► Idle
//!     │   click (text) / edit text        submit / cancel
//!     └────────────────────► AwaitingText ──────────────► Idle
//! ```
//!
//! While `AwaitingText` is active pointer input is ignored until the text is
//! submitted or cancelled.

use egui::Pos2;

use crate::element::{Drawable, ElementId, Figure, Label, StrokeGroup};

#[derive(Debug, Clone, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Freehand strokes accumulated since pointer down
    Painting { group: StrokeGroup },
    Erasing,
    /// Line or two-anchor figure; `shape` appears on the first drag
    DrawingShape { anchor: Pos2, shape: Option<Drawable> },
    /// Polygon under construction. The last vertex trails the pointer.
    BuildingPolygon { figure: Figure },
    /// Dragging the selected object. `before` is its state at pointer down.
    Moving {
        id: ElementId,
        before: Drawable,
        index: usize,
        last: Pos2,
        moved: bool,
    },
    AwaitingText { target: TextTarget },
}

/// The label whose text is being asked for
#[derive(Debug, Clone)]
pub enum TextTarget {
    /// Shown on the surface but not committed yet
    NewLabel(Label),
    /// A committed label; `before` is its state before the edit
    EditLabel {
        id: ElementId,
        before: Label,
        index: usize,
    },
}

impl TextTarget {
    /// Prompt title and the text to prefill it with
    pub fn prompt(&self) -> (&'static str, &str) {
        match self {
            TextTarget::NewLabel(label) => ("Add text", label.text()),
            TextTarget::EditLabel { before, .. } => ("Edit text", before.text()),
        }
    }
}

impl Interaction {
    pub fn name(&self) -> &'static str {
        match self {
            Interaction::Idle => "Idle",
            Interaction::Painting { .. } => "Painting",
            Interaction::Erasing => "Erasing",
            Interaction::DrawingShape { .. } => "DrawingShape",
            Interaction::BuildingPolygon { .. } => "BuildingPolygon",
            Interaction::Moving { .. } => "Moving",
            Interaction::AwaitingText { .. } => "AwaitingText",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn text_target(&self) -> Option<&TextTarget> {
        match self {
            Interaction::AwaitingText { target } => Some(target),
            _ => None,
        }
    }
}

/// Something that can ask the user for a line of text.
///
/// `None` means the prompt was dismissed.
pub trait TextPrompt {
    fn ask(&mut self, title: &str, initial: &str) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: FnMut(&str, &str) -> Option<String>,
{
    fn ask(&mut self, title: &str, initial: &str) -> Option<String> {
        self(title, initial)
    }
}
