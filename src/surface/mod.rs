//! The render surface is everything the scene needs from the outside world
//! to get shapes on screen: create a shape and get a handle back, delete it,
//! ask which handles overlap a region, re-stack and move by handle.

pub mod canvas;

use egui::{Pos2, Rect, Vec2};
use std::fmt;
use thiserror::Error;

pub use canvas::CanvasSurface;

/// Opaque identity of a shape on a render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeHandle(pub u64);

impl ShapeHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors reported by a render surface
#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("invalid color value: {0:?}")]
    InvalidColor(String),

    #[error("no shape with handle {0} on the surface")]
    UnknownHandle(ShapeHandle),
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Geometry and style of one primitive shape, in canvas coordinates.
///
/// Colors are kept textual; `fill: None` draws an outline only.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSpec {
    Oval {
        rect: Rect,
        fill: Option<String>,
        outline: String,
        width: f32,
    },
    Rectangle {
        rect: Rect,
        fill: Option<String>,
        outline: String,
        width: f32,
    },
    Polygon {
        points: Vec<Pos2>,
        fill: Option<String>,
        outline: String,
        width: f32,
    },
    Line {
        start: Pos2,
        end: Pos2,
        color: String,
        width: f32,
    },
    Text {
        pos: Pos2,
        text: String,
        family: String,
        size: f32,
        color: String,
    },
}

impl ShapeSpec {
    /// Axis-aligned box covering everything the shape paints
    pub fn bounds(&self) -> Rect {
        match self {
            ShapeSpec::Oval { rect, width, .. } | ShapeSpec::Rectangle { rect, width, .. } => {
                rect.expand(width / 2.0)
            }
            ShapeSpec::Polygon { points, width, .. } => {
                if points.is_empty() {
                    Rect::NOTHING
                } else {
                    Rect::from_points(points).expand(width / 2.0)
                }
            }
            ShapeSpec::Line { start, end, width, .. } => {
                Rect::from_two_pos(*start, *end).expand(width / 2.0)
            }
            ShapeSpec::Text { pos, text, size, .. } => {
                // Rough metrics, text is anchored at its center
                let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                let lines = text.lines().count().max(1);
                let half = Vec2::new(
                    longest as f32 * size * 0.3,
                    lines as f32 * size * 0.65,
                );
                Rect::from_center_size(*pos, half * 2.0)
            }
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            ShapeSpec::Oval { rect, .. } | ShapeSpec::Rectangle { rect, .. } => {
                *rect = rect.translate(delta);
            }
            ShapeSpec::Polygon { points, .. } => {
                for point in points {
                    *point += delta;
                }
            }
            ShapeSpec::Line { start, end, .. } => {
                *start += delta;
                *end += delta;
            }
            ShapeSpec::Text { pos, .. } => *pos += delta,
        }
    }
}

/// The interface the scene calls into to display drawables.
///
/// Handles returned by [`RenderSurface::query_overlapping`] are ordered
/// topmost first.
pub trait RenderSurface {
    fn create_shape(&mut self, shape: ShapeSpec) -> ShapeHandle;

    fn delete_shape(&mut self, handle: ShapeHandle) -> SurfaceResult<()>;

    fn query_overlapping(&self, region: Rect) -> Vec<ShapeHandle>;

    /// Put the shape on top of every other shape
    fn raise(&mut self, handle: ShapeHandle) -> SurfaceResult<()>;

    /// Put the shape below every other shape
    fn lower(&mut self, handle: ShapeHandle) -> SurfaceResult<()>;

    fn move_shape(&mut self, handle: ShapeHandle, delta: Vec2) -> SurfaceResult<()>;

    fn set_background(&mut self, color: &str) -> SurfaceResult<()>;

    fn background(&self) -> &str;

    /// Flush pending shape creations to the screen
    fn update(&mut self);
}
