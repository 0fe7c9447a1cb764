use egui::Vec2;
use log::{debug, warn};

use crate::surface::{RenderSurface, ShapeHandle};

pub mod figure;
pub mod label;
pub mod line;
pub mod stroke;

pub use figure::{Figure, FigureKind};
pub use label::Label;
pub use line::Line;
pub use stroke::{Stroke, StrokeGroup};

/// Scene-assigned identity of a top-level drawable, stable across copies
pub type ElementId = usize;

/// Common behaviour of everything the scene can hold.
///
/// A drawable with at least one handle is currently rendered. `erase` clears
/// the handles it removes, so a drawable taken off the surface never keeps a
/// dangling reference.
pub trait Element {
    fn id(&self) -> ElementId;

    fn element_type(&self) -> &'static str;

    /// Surface handles currently owned by this drawable
    fn handles(&self) -> Vec<ShapeHandle>;

    fn is_rendered(&self) -> bool {
        !self.handles().is_empty()
    }

    /// Create the shape(s) on the surface with the current geometry and style
    fn render(&mut self, surface: &mut dyn RenderSurface);

    /// Remove the shape(s) from the surface. Erasing something that was never
    /// rendered is a logged no-op.
    fn erase(&mut self, surface: &mut dyn RenderSurface);

    fn redraw(&mut self, surface: &mut dyn RenderSurface) {
        self.erase(surface);
        self.render(surface);
    }

    /// Translate all geometry and move the rendered shape(s) along with it
    fn move_by(&mut self, delta: Vec2, surface: &mut dyn RenderSurface);
}

/// Delete the shape behind `handle` and clear it
pub(crate) fn erase_handle(handle: &mut Option<ShapeHandle>, surface: &mut dyn RenderSurface, what: &str) {
    match handle.take() {
        Some(h) => {
            if let Err(err) = surface.delete_shape(h) {
                warn!("Could not erase {what}: {err}");
            }
        }
        None => debug!("{what} is not on the canvas, nothing to erase"),
    }
}

/// Move the shape behind `handle`, if any
pub(crate) fn move_handle(handle: Option<ShapeHandle>, delta: Vec2, surface: &mut dyn RenderSurface, what: &str) {
    match handle {
        Some(h) => {
            if let Err(err) = surface.move_shape(h, delta) {
                warn!("Could not move {what}: {err}");
            }
        }
        None => debug!("{what} is not on the canvas, nothing to move"),
    }
}

/// Discriminant of a [`Drawable`], handy for the chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawableKind {
    StrokeGroup,
    Line,
    Figure,
    Label,
}

/// Every committed top-level entity of a drawing.
///
/// Equality compares geometry and style only; handles are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    StrokeGroup(StrokeGroup),
    Line(Line),
    Figure(Figure),
    Label(Label),
}

impl Drawable {
    pub fn kind(&self) -> DrawableKind {
        match self {
            Drawable::StrokeGroup(_) => DrawableKind::StrokeGroup,
            Drawable::Line(_) => DrawableKind::Line,
            Drawable::Figure(_) => DrawableKind::Figure,
            Drawable::Label(_) => DrawableKind::Label,
        }
    }

    /// Whether `handle` belongs to this drawable (any member, for groups)
    pub fn owns_handle(&self, handle: ShapeHandle) -> bool {
        match self {
            Drawable::StrokeGroup(group) => group.contains(handle),
            Drawable::Line(line) => line.handle() == Some(handle),
            Drawable::Figure(figure) => figure.handle() == Some(handle),
            Drawable::Label(label) => label.handle() == Some(handle),
        }
    }

    /// Raise every owned shape to the top, rendering unrendered parts first
    pub fn bring_to_front(&mut self, surface: &mut dyn RenderSurface) {
        if let Drawable::StrokeGroup(group) = self {
            group.bring_to_front(surface);
            return;
        }
        if !self.is_rendered() {
            self.render(surface);
        }
        for handle in self.handles() {
            if let Err(err) = surface.raise(handle) {
                warn!("Could not raise {}: {err}", self.element_type());
            }
        }
    }

    /// Lower every owned shape to the bottom, rendering unrendered parts first
    pub fn send_to_back(&mut self, surface: &mut dyn RenderSurface) {
        if let Drawable::StrokeGroup(group) = self {
            group.send_to_back(surface);
            return;
        }
        if !self.is_rendered() {
            self.render(surface);
        }
        for handle in self.handles() {
            if let Err(err) = surface.lower(handle) {
                warn!("Could not lower {}: {err}", self.element_type());
            }
        }
    }

    pub fn as_stroke_group(&self) -> Option<&StrokeGroup> {
        match self {
            Drawable::StrokeGroup(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_stroke_group_mut(&mut self) -> Option<&mut StrokeGroup> {
        match self {
            Drawable::StrokeGroup(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Drawable::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_figure(&self) -> Option<&Figure> {
        match self {
            Drawable::Figure(figure) => Some(figure),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Drawable::Label(label) => Some(label),
            _ => None,
        }
    }
}

impl Element for Drawable {
    fn id(&self) -> ElementId {
        match self {
            Drawable::StrokeGroup(group) => group.id(),
            Drawable::Line(line) => line.id(),
            Drawable::Figure(figure) => figure.id(),
            Drawable::Label(label) => label.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            Drawable::StrokeGroup(group) => group.element_type(),
            Drawable::Line(line) => line.element_type(),
            Drawable::Figure(figure) => figure.element_type(),
            Drawable::Label(label) => label.element_type(),
        }
    }

    fn handles(&self) -> Vec<ShapeHandle> {
        match self {
            Drawable::StrokeGroup(group) => group.handles(),
            Drawable::Line(line) => line.handles(),
            Drawable::Figure(figure) => figure.handles(),
            Drawable::Label(label) => label.handles(),
        }
    }

    fn render(&mut self, surface: &mut dyn RenderSurface) {
        match self {
            Drawable::StrokeGroup(group) => group.render(surface),
            Drawable::Line(line) => line.render(surface),
            Drawable::Figure(figure) => figure.render(surface),
            Drawable::Label(label) => label.render(surface),
        }
    }

    fn erase(&mut self, surface: &mut dyn RenderSurface) {
        match self {
            Drawable::StrokeGroup(group) => group.erase(surface),
            Drawable::Line(line) => line.erase(surface),
            Drawable::Figure(figure) => figure.erase(surface),
            Drawable::Label(label) => label.erase(surface),
        }
    }

    fn move_by(&mut self, delta: Vec2, surface: &mut dyn RenderSurface) {
        match self {
            Drawable::StrokeGroup(group) => group.move_by(delta, surface),
            Drawable::Line(line) => line.move_by(delta, surface),
            Drawable::Figure(figure) => figure.move_by(delta, surface),
            Drawable::Label(label) => label.move_by(delta, surface),
        }
    }
}

impl From<StrokeGroup> for Drawable {
    fn from(group: StrokeGroup) -> Self {
        Drawable::StrokeGroup(group)
    }
}

impl From<Line> for Drawable {
    fn from(line: Line) -> Self {
        Drawable::Line(line)
    }
}

impl From<Figure> for Drawable {
    fn from(figure: Figure) -> Self {
        Drawable::Figure(figure)
    }
}

impl From<Label> for Drawable {
    fn from(label: Label) -> Self {
        Drawable::Label(label)
    }
}
