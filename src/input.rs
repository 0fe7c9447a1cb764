use egui::{PointerButton, Pos2, Response};

/// Pointer input in canvas coordinates, as consumed by the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed
    PointerDown { pos: Pos2 },
    /// Pointer moved with the primary button held
    PointerDrag { pos: Pos2 },
    /// Primary button released
    PointerUp { pos: Pos2 },
    /// Pointer moved with no button held
    PointerMove { pos: Pos2 },
    /// Secondary button clicked
    SecondaryClick,
}

impl InputEvent {
    pub fn position(&self) -> Option<Pos2> {
        match self {
            InputEvent::PointerDown { pos }
            | InputEvent::PointerDrag { pos }
            | InputEvent::PointerUp { pos }
            | InputEvent::PointerMove { pos } => Some(*pos),
            InputEvent::SecondaryClick => None,
        }
    }
}

/// Translate this frame's interaction with the canvas widget into scene events.
///
/// `origin` is the screen position of the canvas' top-left corner. A quick
/// click that never turns into a drag is reported as a down/up pair.
pub fn canvas_events(response: &Response, origin: Pos2) -> Vec<InputEvent> {
    let to_canvas = |pos: Pos2| (pos - origin).to_pos2();
    let mut events = Vec::new();

    if response.drag_started_by(PointerButton::Primary) {
        let press = response
            .ctx
            .input(|i| i.pointer.press_origin())
            .or(response.interact_pointer_pos());
        if let Some(pos) = press {
            events.push(InputEvent::PointerDown { pos: to_canvas(pos) });
        }
    }
    if response.dragged_by(PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(InputEvent::PointerDrag { pos: to_canvas(pos) });
        }
    }
    if response.drag_stopped_by(PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(InputEvent::PointerUp { pos: to_canvas(pos) });
        }
    }
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(InputEvent::PointerDown { pos: to_canvas(pos) });
            events.push(InputEvent::PointerUp { pos: to_canvas(pos) });
        }
    }
    if response.secondary_clicked() {
        events.push(InputEvent::SecondaryClick);
    }
    if events.is_empty() {
        if let Some(pos) = response.hover_pos() {
            events.push(InputEvent::PointerMove { pos: to_canvas(pos) });
        }
    }
    events
}
