use egui::{Align2, Color32, FontFamily, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};
use log::debug;

use super::{RenderSurface, ShapeHandle, ShapeSpec, SurfaceError, SurfaceResult};
use crate::color::{is_valid_color, parse_color};

const OVAL_SEGMENTS: usize = 48;

/// Retained-mode surface: keeps every shape in draw order (bottom first)
/// and paints them with an egui [`Painter`] each frame.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    shapes: Vec<(ShapeHandle, ShapeSpec)>,
    next_handle: u64,
    background: String,
    needs_repaint: bool,
}

impl CanvasSurface {
    pub fn new(background: impl Into<String>) -> Self {
        Self {
            shapes: Vec::new(),
            next_handle: 1,
            background: background.into(),
            needs_repaint: true,
        }
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn contains(&self, handle: ShapeHandle) -> bool {
        self.position(handle).is_some()
    }

    pub fn shape(&self, handle: ShapeHandle) -> Option<&ShapeSpec> {
        self.shapes.iter().find(|(h, _)| *h == handle).map(|(_, s)| s)
    }

    /// Handles bottom to top
    pub fn handles(&self) -> Vec<ShapeHandle> {
        self.shapes.iter().map(|(h, _)| *h).collect()
    }

    /// Returns true once after any change, for the host to request a repaint
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    fn position(&self, handle: ShapeHandle) -> Option<usize> {
        self.shapes.iter().position(|(h, _)| *h == handle)
    }

    /// Paint the background and every shape, offsetting canvas coordinates by `origin`
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let background = parse_color(&self.background).unwrap_or(Color32::WHITE);
        painter.rect_filled(painter.clip_rect(), 0.0, background);

        let offset = origin.to_vec2();
        for (_, spec) in &self.shapes {
            let mut spec = spec.clone();
            spec.translate(offset);
            paint_shape(painter, &spec);
        }
    }
}

fn paint_color(text: &str) -> Color32 {
    parse_color(text).unwrap_or(Color32::BLACK)
}

fn fill_color(fill: &Option<String>) -> Color32 {
    fill.as_deref()
        .and_then(parse_color)
        .unwrap_or(Color32::TRANSPARENT)
}

fn oval_points(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..OVAL_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / OVAL_SEGMENTS as f32 * std::f32::consts::TAU;
            center + Vec2::new(radius.x * angle.cos(), radius.y * angle.sin())
        })
        .collect()
}

fn paint_shape(painter: &Painter, spec: &ShapeSpec) {
    match spec {
        ShapeSpec::Oval { rect, fill, outline, width } => {
            let stroke = Stroke::new(*width, paint_color(outline));
            painter.add(Shape::convex_polygon(oval_points(*rect), fill_color(fill), stroke));
        }
        ShapeSpec::Rectangle { rect, fill, outline, width } => {
            let stroke = Stroke::new(*width, paint_color(outline));
            let corners = vec![rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()];
            painter.add(Shape::convex_polygon(corners, fill_color(fill), stroke));
        }
        ShapeSpec::Polygon { points, fill, outline, width } => {
            if points.len() < 2 {
                return;
            }
            let stroke = Stroke::new(*width, paint_color(outline));
            if points.len() >= 3 {
                painter.add(Shape::convex_polygon(points.clone(), fill_color(fill), Stroke::NONE));
            }
            painter.add(Shape::closed_line(points.clone(), stroke));
        }
        ShapeSpec::Line { start, end, color, width } => {
            painter.add(Shape::line_segment([*start, *end], Stroke::new(*width, paint_color(color))));
        }
        ShapeSpec::Text { pos, text, family, size, color } => {
            let family = match family.as_str() {
                "Courier" | "Courier New" => FontFamily::Monospace,
                _ => FontFamily::Proportional,
            };
            painter.text(*pos, Align2::CENTER_CENTER, text, FontId::new(*size, family), paint_color(color));
        }
    }
}

impl RenderSurface for CanvasSurface {
    fn create_shape(&mut self, shape: ShapeSpec) -> ShapeHandle {
        let handle = ShapeHandle::new(self.next_handle);
        self.next_handle += 1;
        self.shapes.push((handle, shape));
        self.needs_repaint = true;
        handle
    }

    fn delete_shape(&mut self, handle: ShapeHandle) -> SurfaceResult<()> {
        let index = self.position(handle).ok_or(SurfaceError::UnknownHandle(handle))?;
        self.shapes.remove(index);
        self.needs_repaint = true;
        Ok(())
    }

    fn query_overlapping(&self, region: Rect) -> Vec<ShapeHandle> {
        self.shapes
            .iter()
            .rev()
            .filter(|(_, spec)| spec.bounds().intersects(region))
            .map(|(handle, _)| *handle)
            .collect()
    }

    fn raise(&mut self, handle: ShapeHandle) -> SurfaceResult<()> {
        let index = self.position(handle).ok_or(SurfaceError::UnknownHandle(handle))?;
        let entry = self.shapes.remove(index);
        self.shapes.push(entry);
        self.needs_repaint = true;
        Ok(())
    }

    fn lower(&mut self, handle: ShapeHandle) -> SurfaceResult<()> {
        let index = self.position(handle).ok_or(SurfaceError::UnknownHandle(handle))?;
        let entry = self.shapes.remove(index);
        self.shapes.insert(0, entry);
        self.needs_repaint = true;
        Ok(())
    }

    fn move_shape(&mut self, handle: ShapeHandle, delta: Vec2) -> SurfaceResult<()> {
        let index = self.position(handle).ok_or(SurfaceError::UnknownHandle(handle))?;
        self.shapes[index].1.translate(delta);
        self.needs_repaint = true;
        Ok(())
    }

    fn set_background(&mut self, color: &str) -> SurfaceResult<()> {
        if !is_valid_color(color) {
            return Err(SurfaceError::InvalidColor(color.to_owned()));
        }
        debug!("Canvas background {} -> {}", self.background, color);
        self.background = color.to_owned();
        self.needs_repaint = true;
        Ok(())
    }

    fn background(&self) -> &str {
        &self.background
    }

    fn update(&mut self) {
        self.needs_repaint = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(x: f32, y: f32) -> ShapeSpec {
        ShapeSpec::Oval {
            rect: Rect::from_center_size(Pos2::new(x, y), Vec2::splat(4.0)),
            fill: Some("black".into()),
            outline: "black".into(),
            width: 1.0,
        }
    }

    #[test]
    fn overlap_query_is_topmost_first() {
        let mut surface = CanvasSurface::new("white");
        let bottom = surface.create_shape(dot(10.0, 10.0));
        let top = surface.create_shape(dot(11.0, 11.0));
        let region = Rect::from_center_size(Pos2::new(10.0, 10.0), Vec2::splat(2.0));
        assert_eq!(surface.query_overlapping(region), vec![top, bottom]);

        surface.raise(bottom).unwrap();
        assert_eq!(surface.query_overlapping(region), vec![bottom, top]);
    }

    #[test]
    fn deleting_an_unknown_handle_is_an_error() {
        let mut surface = CanvasSurface::new("white");
        let handle = surface.create_shape(dot(0.0, 0.0));
        assert!(surface.delete_shape(handle).is_ok());
        assert_eq!(
            surface.delete_shape(handle),
            Err(SurfaceError::UnknownHandle(handle))
        );
    }

    #[test]
    fn invalid_background_is_rejected() {
        let mut surface = CanvasSurface::new("white");
        assert!(surface.set_background("nope").is_err());
        assert_eq!(surface.background(), "white");
        surface.set_background("#336699").unwrap();
        assert_eq!(surface.background(), "#336699");
    }

    #[test]
    fn moving_keeps_handle_and_order() {
        let mut surface = CanvasSurface::new("white");
        let a = surface.create_shape(dot(0.0, 0.0));
        let b = surface.create_shape(dot(50.0, 50.0));
        surface.move_shape(a, Vec2::new(100.0, 0.0)).unwrap();
        assert_eq!(surface.handles(), vec![a, b]);
        let far = Rect::from_center_size(Pos2::new(100.0, 0.0), Vec2::splat(2.0));
        assert_eq!(surface.query_overlapping(far), vec![a]);
    }
}
