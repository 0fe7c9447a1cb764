use egui::{Pos2, Vec2};

use super::{Element, ElementId, erase_handle, move_handle};
use crate::state::persistence::LineRecord;
use crate::style::Outline;
use crate::surface::{RenderSurface, ShapeHandle, ShapeSpec};

/// A straight segment between two points
#[derive(Debug, Clone)]
pub struct Line {
    id: ElementId,
    outline: Outline,
    start: Pos2,
    end: Pos2,
    handle: Option<ShapeHandle>,
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.outline == other.outline
            && self.start == other.start
            && self.end == other.end
    }
}

impl Line {
    /// A line without an end point collapses onto its start
    pub fn new(id: ElementId, outline: Outline, start: Pos2, end: Option<Pos2>) -> Self {
        Self {
            id,
            outline,
            start,
            end: end.unwrap_or(start),
            handle: None,
        }
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn handle(&self) -> Option<ShapeHandle> {
        self.handle
    }

    pub fn shape_spec(&self) -> ShapeSpec {
        ShapeSpec::Line {
            start: self.start,
            end: self.end,
            color: self.outline.color().to_owned(),
            width: self.outline.width(),
        }
    }

    /// Move the end point and replace the rendered shape
    pub fn redraw_to(&mut self, end: Pos2, surface: &mut dyn RenderSurface) {
        self.end = end;
        self.redraw(surface);
    }

    pub fn set_color(&mut self, color: &str, surface: &mut dyn RenderSurface) {
        self.outline.set_color(color);
        if self.is_rendered() {
            self.redraw(surface);
        }
    }

    pub fn set_width(&mut self, width: f32, surface: &mut dyn RenderSurface) {
        self.outline.set_width(width);
        if self.is_rendered() {
            self.redraw(surface);
        }
    }

    pub fn to_record(&self) -> LineRecord {
        LineRecord {
            outline_color: self.outline.color().to_owned(),
            outline_width: self.outline.width(),
            start_x: self.start.x,
            start_y: self.start.y,
            end_x: self.end.x,
            end_y: self.end.y,
        }
    }

    pub fn from_record(record: LineRecord, id: ElementId) -> Self {
        Self::new(
            id,
            Outline::new(record.outline_color, record.outline_width),
            Pos2::new(record.start_x, record.start_y),
            Some(Pos2::new(record.end_x, record.end_y)),
        )
    }
}

impl Element for Line {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "line"
    }

    fn handles(&self) -> Vec<ShapeHandle> {
        self.handle.into_iter().collect()
    }

    fn render(&mut self, surface: &mut dyn RenderSurface) {
        self.handle = Some(surface.create_shape(self.shape_spec()));
    }

    fn erase(&mut self, surface: &mut dyn RenderSurface) {
        erase_handle(&mut self.handle, surface, "line");
    }

    fn move_by(&mut self, delta: Vec2, surface: &mut dyn RenderSurface) {
        self.start += delta;
        self.end += delta;
        move_handle(self.handle, delta, surface, "line");
    }
}
