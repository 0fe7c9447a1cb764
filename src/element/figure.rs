use egui::{Pos2, Rect, Vec2, vec2};
use serde::{Deserialize, Serialize};

use super::{Element, ElementId, erase_handle, move_handle};
use crate::state::persistence::{FigureRecord, RecordError};
use crate::style::{Fill, Outline};
use crate::surface::{RenderSurface, ShapeHandle, ShapeSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    Rectangle,
    Oval,
    Triangle,
    Polygon,
}

/// A closed shape with an outline and an optional fill.
///
/// Rectangles, ovals and triangles are spanned by `start` and `end`. Polygons
/// keep their own vertex list, which always holds at least one point.
#[derive(Debug, Clone)]
pub struct Figure {
    id: ElementId,
    outline: Outline,
    fill: Option<Fill>,
    kind: FigureKind,
    start: Pos2,
    end: Pos2,
    vertices: Vec<Pos2>,
    handle: Option<ShapeHandle>,
}

impl PartialEq for Figure {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.outline == other.outline
            && self.fill == other.fill
            && self.kind == other.kind
            && self.start == other.start
            && self.end == other.end
            && self.vertices == other.vertices
    }
}

impl Figure {
    pub fn new(id: ElementId, kind: FigureKind, outline: Outline, fill: Option<Fill>, start: Pos2) -> Self {
        Self {
            id,
            outline,
            fill,
            kind,
            start,
            end: start + vec2(1.0, 1.0),
            vertices: vec![start],
            handle: None,
        }
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
    }

    pub fn handle(&self) -> Option<ShapeHandle> {
        self.handle
    }

    /// Polygon vertices as a flat `[x0, y0, x1, y1, ...]` list
    pub fn polygon_coords(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Third corner of the isosceles triangle: `end` mirrored across `start.x`
    pub fn triangle_apex(&self) -> Pos2 {
        Pos2::new(2.0 * self.start.x - self.end.x, self.end.y)
    }

    pub fn shape_spec(&self) -> ShapeSpec {
        let fill = self.fill.as_ref().map(|f| f.color().to_owned());
        let outline = self.outline.color().to_owned();
        let width = self.outline.width();
        match self.kind {
            FigureKind::Rectangle => ShapeSpec::Rectangle {
                rect: Rect::from_two_pos(self.start, self.end),
                fill,
                outline,
                width,
            },
            FigureKind::Oval => ShapeSpec::Oval {
                rect: Rect::from_two_pos(self.start, self.end),
                fill,
                outline,
                width,
            },
            FigureKind::Triangle => ShapeSpec::Polygon {
                points: vec![self.start, self.end, self.triangle_apex()],
                fill,
                outline,
                width,
            },
            FigureKind::Polygon => ShapeSpec::Polygon {
                points: self.vertices.clone(),
                fill,
                outline,
                width,
            },
        }
    }

    /// Move the `end` anchor and replace the rendered shape
    pub fn redraw_to(&mut self, end: Pos2, surface: &mut dyn RenderSurface) {
        self.end = end;
        self.redraw(surface);
    }

    /// Append a polygon vertex, or overwrite the trailing one when `replace_last` is set
    pub fn add_vertex(&mut self, pos: Pos2, surface: &mut dyn RenderSurface, replace_last: bool) {
        match self.vertices.last_mut() {
            Some(last) if replace_last => *last = pos,
            _ => self.vertices.push(pos),
        }
        self.redraw(surface);
    }

    /// Drop the trailing vertex. A polygon never goes below one point.
    pub fn delete_last_vertex(&mut self, surface: &mut dyn RenderSurface) {
        if self.vertices.len() < 2 {
            return;
        }
        self.vertices.pop();
        self.redraw(surface);
    }

    fn refresh(&mut self, surface: &mut dyn RenderSurface) {
        if self.is_rendered() {
            self.redraw(surface);
        }
    }

    pub fn set_fill(&mut self, color: &str, surface: &mut dyn RenderSurface) {
        self.fill = Some(Fill::new(color));
        self.refresh(surface);
    }

    pub fn remove_fill(&mut self, surface: &mut dyn RenderSurface) {
        self.fill = None;
        self.refresh(surface);
    }

    pub fn set_outline_color(&mut self, color: &str, surface: &mut dyn RenderSurface) {
        self.outline.set_color(color);
        self.refresh(surface);
    }

    pub fn set_outline_width(&mut self, width: f32, surface: &mut dyn RenderSurface) {
        self.outline.set_width(width);
        self.refresh(surface);
    }

    pub fn to_record(&self) -> FigureRecord {
        FigureRecord {
            fill_color: self.fill.as_ref().map(|f| f.color().to_owned()).unwrap_or_default(),
            outline_color: self.outline.color().to_owned(),
            outline_width: self.outline.width(),
            start_x: self.start.x,
            start_y: self.start.y,
            end_x: self.end.x,
            end_y: self.end.y,
            figure_name: self.kind,
            vertices_of_polygon: self.polygon_coords(),
        }
    }

    pub fn from_record(record: FigureRecord, id: ElementId) -> Result<Self, RecordError> {
        let coords = &record.vertices_of_polygon;
        if coords.len() % 2 != 0 {
            return Err(RecordError::InvalidPolygon(coords.len()));
        }
        if record.figure_name == FigureKind::Polygon && coords.len() < 6 {
            return Err(RecordError::InvalidPolygon(coords.len()));
        }
        let start = Pos2::new(record.start_x, record.start_y);
        let mut vertices: Vec<Pos2> = coords.chunks_exact(2).map(|c| Pos2::new(c[0], c[1])).collect();
        if vertices.is_empty() {
            vertices.push(start);
        }
        Ok(Self {
            id,
            outline: Outline::new(record.outline_color, record.outline_width),
            fill: Fill::from_persisted(&record.fill_color),
            kind: record.figure_name,
            start,
            end: Pos2::new(record.end_x, record.end_y),
            vertices,
            handle: None,
        })
    }
}

impl Element for Figure {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        match self.kind {
            FigureKind::Rectangle => "rectangle",
            FigureKind::Oval => "oval",
            FigureKind::Triangle => "triangle",
            FigureKind::Polygon => "polygon",
        }
    }

    fn handles(&self) -> Vec<ShapeHandle> {
        self.handle.into_iter().collect()
    }

    fn render(&mut self, surface: &mut dyn RenderSurface) {
        self.handle = Some(surface.create_shape(self.shape_spec()));
    }

    fn erase(&mut self, surface: &mut dyn RenderSurface) {
        let what = self.element_type();
        erase_handle(&mut self.handle, surface, what);
    }

    fn move_by(&mut self, delta: Vec2, surface: &mut dyn RenderSurface) {
        self.start += delta;
        self.end += delta;
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
        move_handle(self.handle, delta, surface, self.element_type());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CanvasSurface;

    fn polygon_at(start: Pos2) -> Figure {
        Figure::new(1, FigureKind::Polygon, Outline::new("black", 2.0), None, start)
    }

    #[test]
    fn test_new_figure_defaults() {
        let figure = Figure::new(
            3,
            FigureKind::Rectangle,
            Outline::new("black", 5.0),
            Some(Fill::new("red")),
            Pos2::new(20.0, 20.0),
        );
        assert_eq!(figure.end(), Pos2::new(21.0, 21.0));
        assert_eq!(figure.vertices(), &[Pos2::new(20.0, 20.0)]);
        assert!(!figure.is_rendered());
    }

    #[test]
    fn test_add_and_delete_vertices() {
        let mut surface = CanvasSurface::new("white");
        let mut figure = polygon_at(Pos2::ZERO);
        figure.render(&mut surface);

        figure.add_vertex(Pos2::new(5.0, 5.0), &mut surface, false);
        figure.add_vertex(Pos2::new(10.0, 0.0), &mut surface, true);
        assert_eq!(figure.polygon_coords(), vec![0.0, 0.0, 10.0, 0.0]);
        assert_eq!(surface.shape_count(), 1);

        figure.delete_last_vertex(&mut surface);
        figure.delete_last_vertex(&mut surface);
        assert_eq!(figure.polygon_coords(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_triangle_apex_mirrors_end() {
        let mut figure = Figure::new(
            1,
            FigureKind::Triangle,
            Outline::new("black", 1.0),
            None,
            Pos2::new(10.0, 0.0),
        );
        figure.end = Pos2::new(15.0, 20.0);
        assert_eq!(figure.triangle_apex(), Pos2::new(5.0, 20.0));
    }

    #[test]
    fn test_record_rejects_short_polygon() {
        let mut record = polygon_at(Pos2::ZERO).to_record();
        record.vertices_of_polygon = vec![0.0, 0.0, 1.0, 1.0];
        assert!(matches!(
            Figure::from_record(record, 1),
            Err(RecordError::InvalidPolygon(4))
        ));
    }
}
