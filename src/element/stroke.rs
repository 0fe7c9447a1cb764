use egui::{Pos2, Rect, Vec2};
use log::warn;

use super::{Element, ElementId, erase_handle, move_handle};
use crate::config::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_SIZE};
use crate::state::persistence::{StrokeGroupRecord, StrokeRecord};
use crate::surface::{RenderSurface, ShapeHandle, ShapeSpec};

/// One dot of freehand paint, centered on the pointer position
#[derive(Debug, Clone)]
pub struct Stroke {
    center: Pos2,
    width: f32,
    color: String,
    handle: Option<ShapeHandle>,
}

// Handles are transient, two strokes are equal if they paint the same dot
impl PartialEq for Stroke {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.width == other.width && self.color == other.color
    }
}

impl Stroke {
    pub fn new(center: Pos2, width: f32, color: impl Into<String>) -> Self {
        Self {
            center,
            width,
            color: color.into(),
            handle: None,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn handle(&self) -> Option<ShapeHandle> {
        self.handle
    }

    pub fn shape_spec(&self) -> ShapeSpec {
        ShapeSpec::Oval {
            rect: Rect::from_center_size(self.center, Vec2::splat(self.width * 2.0)),
            fill: Some(self.color.clone()),
            outline: self.color.clone(),
            width: self.width,
        }
    }

    pub fn render(&mut self, surface: &mut dyn RenderSurface) {
        self.handle = Some(surface.create_shape(self.shape_spec()));
    }

    pub fn erase(&mut self, surface: &mut dyn RenderSurface) {
        erase_handle(&mut self.handle, surface, "stroke");
    }

    fn refresh(&mut self, surface: &mut dyn RenderSurface) {
        if self.handle.is_some() {
            self.erase(surface);
            self.render(surface);
        }
    }

    pub fn set_color(&mut self, color: impl Into<String>, surface: &mut dyn RenderSurface) {
        self.color = color.into();
        self.refresh(surface);
    }

    pub fn set_width(&mut self, width: f32, surface: &mut dyn RenderSurface) {
        self.width = width;
        self.refresh(surface);
    }

    pub fn move_by(&mut self, delta: Vec2, surface: &mut dyn RenderSurface) {
        self.center += delta;
        move_handle(self.handle, delta, surface, "stroke");
    }

    pub fn to_record(&self) -> StrokeRecord {
        StrokeRecord {
            coords: [self.center.x, self.center.y],
            width: self.width,
            color: self.color.clone(),
        }
    }

    pub fn from_record(record: StrokeRecord) -> Self {
        Self::new(Pos2::new(record.coords[0], record.coords[1]), record.width, record.color)
    }
}

/// All the strokes painted by one pointer-down to pointer-up gesture
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeGroup {
    id: ElementId,
    strokes: Vec<Stroke>,
}

impl StrokeGroup {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            strokes: Vec::new(),
        }
    }

    pub fn with_strokes(id: ElementId, strokes: Vec<Stroke>) -> Self {
        Self { id, strokes }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn contains(&self, handle: ShapeHandle) -> bool {
        self.member_position(handle).is_some()
    }

    pub fn member_position(&self, handle: ShapeHandle) -> Option<usize> {
        self.strokes.iter().position(|s| s.handle == Some(handle))
    }

    pub fn member(&self, handle: ShapeHandle) -> Option<&Stroke> {
        self.strokes.iter().find(|s| s.handle == Some(handle))
    }

    /// Detach the member rendered as `handle`, returning where it sat in the group.
    /// The stroke keeps its handle; erasing it is up to the caller.
    pub fn remove_member(&mut self, handle: ShapeHandle) -> Option<(usize, Stroke)> {
        let position = self.member_position(handle)?;
        Some((position, self.strokes.remove(position)))
    }

    pub fn take_member_at(&mut self, position: usize) -> Option<Stroke> {
        if position < self.strokes.len() {
            Some(self.strokes.remove(position))
        } else {
            None
        }
    }

    /// Insert a member at `position` (clamped to the group length), returning the slot used
    pub fn insert_member(&mut self, position: usize, stroke: Stroke) -> usize {
        let position = position.min(self.strokes.len());
        self.strokes.insert(position, stroke);
        position
    }

    pub fn member_at_mut(&mut self, position: usize) -> Option<&mut Stroke> {
        self.strokes.get_mut(position)
    }

    /// Color of the group, taken from its first stroke
    pub fn color(&self) -> &str {
        self.strokes.first().map_or(DEFAULT_BRUSH_COLOR, |s| s.color())
    }

    /// Width of the group, taken from its first stroke
    pub fn width(&self) -> f32 {
        self.strokes.first().map_or(DEFAULT_BRUSH_SIZE, |s| s.width())
    }

    pub fn set_color(&mut self, color: &str, surface: &mut dyn RenderSurface) {
        for stroke in &mut self.strokes {
            stroke.set_color(color, surface);
        }
    }

    pub fn set_width(&mut self, width: f32, surface: &mut dyn RenderSurface) {
        for stroke in &mut self.strokes {
            stroke.set_width(width, surface);
        }
    }

    /// Members restored by undo may not be on the surface yet; those are
    /// rendered before re-stacking.
    pub fn bring_to_front(&mut self, surface: &mut dyn RenderSurface) {
        for stroke in &mut self.strokes {
            if stroke.handle.is_none() {
                stroke.render(surface);
            }
            if let Some(handle) = stroke.handle {
                if let Err(err) = surface.raise(handle) {
                    warn!("Could not raise stroke of group {}: {err}", self.id);
                }
            }
        }
    }

    pub fn send_to_back(&mut self, surface: &mut dyn RenderSurface) {
        // Lower in reverse so the members keep their relative order
        for stroke in self.strokes.iter_mut().rev() {
            if stroke.handle.is_none() {
                stroke.render(surface);
            }
            if let Some(handle) = stroke.handle {
                if let Err(err) = surface.lower(handle) {
                    warn!("Could not lower stroke of group {}: {err}", self.id);
                }
            }
        }
    }

    pub fn to_record(&self) -> StrokeGroupRecord {
        StrokeGroupRecord {
            id: self.id,
            strokes: self.strokes.iter().map(Stroke::to_record).collect(),
        }
    }

    pub fn from_record(record: StrokeGroupRecord) -> Self {
        Self::with_strokes(record.id, record.strokes.into_iter().map(Stroke::from_record).collect())
    }
}

impl Element for StrokeGroup {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "stroke group"
    }

    fn handles(&self) -> Vec<ShapeHandle> {
        self.strokes.iter().filter_map(|s| s.handle).collect()
    }

    fn render(&mut self, surface: &mut dyn RenderSurface) {
        for stroke in &mut self.strokes {
            stroke.render(surface);
        }
    }

    fn erase(&mut self, surface: &mut dyn RenderSurface) {
        for stroke in &mut self.strokes {
            stroke.erase(surface);
        }
    }

    fn move_by(&mut self, delta: Vec2, surface: &mut dyn RenderSurface) {
        for stroke in &mut self.strokes {
            stroke.move_by(delta, surface);
        }
    }
}
