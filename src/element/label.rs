use egui::{Pos2, Vec2};

use super::{Element, ElementId, erase_handle, move_handle};
use crate::state::persistence::LabelRecord;
use crate::surface::{RenderSurface, ShapeHandle, ShapeSpec};

/// Placeholder shown until the user types something
pub const DEFAULT_LABEL_TEXT: &str = "Add text";

/// Positioned text with its font attributes
#[derive(Debug, Clone)]
pub struct Label {
    id: ElementId,
    pos: Pos2,
    family: String,
    size: f32,
    color: String,
    text: String,
    handle: Option<ShapeHandle>,
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.pos == other.pos
            && self.family == other.family
            && self.size == other.size
            && self.color == other.color
            && self.text == other.text
    }
}

impl Label {
    pub fn new(
        id: ElementId,
        pos: Pos2,
        family: impl Into<String>,
        size: f32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            pos,
            family: family.into(),
            size,
            color: color.into(),
            text: DEFAULT_LABEL_TEXT.to_owned(),
            handle: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn font_family(&self) -> &str {
        &self.family
    }

    pub fn font_size(&self) -> f32 {
        self.size
    }

    pub fn font_color(&self) -> &str {
        &self.color
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle(&self) -> Option<ShapeHandle> {
        self.handle
    }

    pub fn shape_spec(&self) -> ShapeSpec {
        ShapeSpec::Text {
            pos: self.pos,
            text: self.text.clone(),
            family: self.family.clone(),
            size: self.size,
            color: self.color.clone(),
        }
    }

    fn refresh(&mut self, surface: &mut dyn RenderSurface) {
        if self.is_rendered() {
            self.redraw(surface);
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>, surface: &mut dyn RenderSurface) {
        self.text = text.into();
        self.refresh(surface);
    }

    pub fn set_font_family(&mut self, family: impl Into<String>, surface: &mut dyn RenderSurface) {
        self.family = family.into();
        self.refresh(surface);
    }

    pub fn set_font_size(&mut self, size: f32, surface: &mut dyn RenderSurface) {
        self.size = size;
        self.refresh(surface);
    }

    pub fn set_font_color(&mut self, color: impl Into<String>, surface: &mut dyn RenderSurface) {
        self.color = color.into();
        self.refresh(surface);
    }

    pub fn to_record(&self) -> LabelRecord {
        LabelRecord {
            font_family: self.family.clone(),
            font_color: self.color.clone(),
            font_size: self.size,
            text: self.text.clone(),
            x: self.pos.x,
            y: self.pos.y,
        }
    }

    pub fn from_record(record: LabelRecord, id: ElementId) -> Self {
        Self::new(
            id,
            Pos2::new(record.x, record.y),
            record.font_family,
            record.font_size,
            record.font_color,
        )
        .with_text(record.text)
    }
}

impl Element for Label {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "label"
    }

    fn handles(&self) -> Vec<ShapeHandle> {
        self.handle.into_iter().collect()
    }

    fn render(&mut self, surface: &mut dyn RenderSurface) {
        self.handle = Some(surface.create_shape(self.shape_spec()));
    }

    fn erase(&mut self, surface: &mut dyn RenderSurface) {
        erase_handle(&mut self.handle, surface, "label");
    }

    fn move_by(&mut self, delta: Vec2, surface: &mut dyn RenderSurface) {
        self.pos += delta;
        move_handle(self.handle, delta, surface, "label");
    }
}
