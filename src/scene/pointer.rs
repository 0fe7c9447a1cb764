use egui::{Pos2, Rect, Vec2};
use log::debug;

use super::Scene;
use crate::command::{Change, DeletedObject};
use crate::element::{Drawable, Element, ElementId, Figure, FigureKind, Label, Line, Stroke, StrokeGroup};
use crate::id_generator::IdGenerator;
use crate::input::InputEvent;
use crate::state::{Interaction, TextTarget};
use crate::style::{Fill, Outline};
use crate::surface::RenderSurface;
use crate::tools::{ShapeChoice, ToolKind, ToolParameters};

impl<S: RenderSurface> Scene<S> {
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerDrag { pos } => self.pointer_drag(pos),
            InputEvent::PointerUp { pos } => self.pointer_up(pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::SecondaryClick => self.secondary_click(),
        }
    }

    fn awaiting_text(&self) -> bool {
        if matches!(self.interaction, Interaction::AwaitingText { .. }) {
            debug!("Ignoring pointer input while waiting for text");
            true
        } else {
            false
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.awaiting_text() {
            return;
        }
        // A gesture whose release was never delivered
        if !matches!(self.interaction, Interaction::Idle | Interaction::BuildingPolygon { .. }) {
            self.finish_gesture();
        }
        match self.tool {
            ToolKind::Brush => {
                let group = StrokeGroup::new(self.ids.generate_id());
                self.interaction = Interaction::Painting { group };
            }
            ToolKind::Eraser => {
                self.interaction = Interaction::Erasing;
                self.erase_at(pos);
            }
            ToolKind::Select => {
                if self.select(pos).is_some() {
                    self.begin_move(pos);
                }
            }
            ToolKind::Figures if self.params.figure.kind != ShapeChoice::Polygon => {
                self.interaction = Interaction::DrawingShape {
                    anchor: pos,
                    shape: None,
                };
            }
            // Polygons and labels react to the release
            ToolKind::Figures | ToolKind::Text => {}
        }
    }

    pub fn pointer_drag(&mut self, pos: Pos2) {
        if matches!(self.interaction, Interaction::Erasing) {
            self.erase_at(pos);
            return;
        }
        match &mut self.interaction {
            Interaction::Painting { group } => {
                let mut stroke = Stroke::new(pos, self.params.brush.width, self.params.brush.color.clone());
                stroke.render(&mut self.surface);
                group.push(stroke);
                self.surface.update();
            }
            Interaction::DrawingShape { anchor, shape } => {
                let anchor = *anchor;
                let shape = shape.get_or_insert_with(|| {
                    let mut created = new_shape(&mut self.ids, &self.params, anchor);
                    created.render(&mut self.surface);
                    created
                });
                redraw_shape_to(shape, pos, &mut self.surface);
            }
            Interaction::BuildingPolygon { figure } => figure.add_vertex(pos, &mut self.surface, true),
            Interaction::Moving { id, last, moved, .. } => {
                let delta = pos - *last;
                if delta == Vec2::ZERO {
                    return;
                }
                if let Some(object) = self.document.get_mut(*id) {
                    object.move_by(delta, &mut self.surface);
                    *last = pos;
                    *moved = true;
                }
            }
            Interaction::Idle | Interaction::Erasing | Interaction::AwaitingText { .. } => {}
        }
    }

    /// Hover without a pressed button; only the polygon preview follows it
    pub fn pointer_move(&mut self, pos: Pos2) {
        if let Interaction::BuildingPolygon { figure } = &mut self.interaction {
            figure.add_vertex(pos, &mut self.surface, true);
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        if self.awaiting_text() {
            return;
        }
        match std::mem::take(&mut self.interaction) {
            Interaction::Painting { group } => self.commit_stroke_group(group),
            Interaction::Erasing => {}
            Interaction::DrawingShape { shape, .. } => match shape {
                Some(mut shape) => {
                    redraw_shape_to(&mut shape, pos, &mut self.surface);
                    self.commit_new(shape);
                }
                None => debug!("Click without drag, no shape drawn"),
            },
            Interaction::Moving {
                id,
                before,
                index,
                moved,
                ..
            } => self.commit_move(id, before, index, moved),
            Interaction::BuildingPolygon { figure } => self.polygon_click(Some(figure), pos),
            Interaction::Idle => match self.tool {
                ToolKind::Figures if self.params.figure.kind == ShapeChoice::Polygon => {
                    self.polygon_click(None, pos)
                }
                ToolKind::Text => self.place_label(pos),
                _ => {}
            },
            Interaction::AwaitingText { .. } => {}
        }
    }

    /// Ends polygon construction
    pub fn secondary_click(&mut self) {
        if matches!(self.interaction, Interaction::BuildingPolygon { .. }) {
            self.finish_gesture();
        }
    }

    pub(super) fn commit_stroke_group(&mut self, group: StrokeGroup) {
        if group.is_empty() {
            debug!("Empty brush gesture, nothing to commit");
            return;
        }
        debug!("Committing stroke group {} with {} strokes", group.id(), group.len());
        self.commit_new(group.into());
    }

    /// The first click starts a polygon with a trailing vertex; later clicks
    /// pin the trailing vertex and start a new one.
    fn polygon_click(&mut self, figure: Option<Figure>, pos: Pos2) {
        let figure = match figure {
            Some(mut figure) => {
                figure.add_vertex(pos, &mut self.surface, true);
                figure.add_vertex(pos, &mut self.surface, false);
                figure
            }
            None => {
                let params = &self.params.figure;
                let mut figure = Figure::new(
                    self.ids.generate_id(),
                    FigureKind::Polygon,
                    Outline::new(params.outline_color.clone(), params.outline_width),
                    Fill::from_persisted(&params.fill_color),
                    pos,
                );
                figure.render(&mut self.surface);
                figure.add_vertex(pos, &mut self.surface, false);
                figure
            }
        };
        self.interaction = Interaction::BuildingPolygon { figure };
    }

    /// Drop the trailing vertex and keep the polygon if it has at least three points
    pub(super) fn commit_polygon(&mut self, mut figure: Figure) {
        figure.delete_last_vertex(&mut self.surface);
        if figure.vertices().len() < 3 {
            debug!("Discarding polygon with {} vertices", figure.vertices().len());
            figure.erase(&mut self.surface);
            return;
        }
        self.commit_new(figure.into());
    }

    fn begin_move(&mut self, pos: Pos2) {
        let Some(id) = self.selection else { return };
        let Some(index) = self.document.index_of(id) else { return };
        let Some(before) = self.document.get_at(index).cloned() else { return };
        self.interaction = Interaction::Moving {
            id,
            before,
            index,
            last: pos,
            moved: false,
        };
    }

    /// A whole drag becomes one replace record
    pub(super) fn commit_move(&mut self, id: ElementId, before: Drawable, index: usize, moved: bool) {
        if !moved {
            return;
        }
        let Some(after) = self.document.get(id).cloned() else { return };
        self.commit(Change::Replaced {
            before,
            after,
            from: index,
            to: index,
        });
    }

    fn place_label(&mut self, pos: Pos2) {
        let params = &self.params.label;
        let mut label = Label::new(
            self.ids.generate_id(),
            pos,
            params.family.clone(),
            params.size,
            params.color.clone(),
        );
        label.render(&mut self.surface);
        self.interaction = Interaction::AwaitingText {
            target: TextTarget::NewLabel(label),
        };
    }

    /// Remove whatever overlaps the eraser square around `pos`. Strokes are
    /// erased one by one, other objects as a whole.
    fn erase_at(&mut self, pos: Pos2) {
        let half = self.params.eraser.width;
        let region = Rect::from_center_size(pos, Vec2::splat(half * 2.0));
        for handle in self.surface.query_overlapping(region) {
            let Some(index) = self.document.find_owner(handle) else {
                continue;
            };
            let change = match self.document.get_at_mut(index) {
                Some(Drawable::StrokeGroup(group)) => {
                    let group_id = group.id();
                    let Some((position, mut stroke)) = group.remove_member(handle) else {
                        continue;
                    };
                    stroke.erase(&mut self.surface);
                    DeletedObject::Member {
                        stroke,
                        group: group_id,
                        position,
                    }
                }
                Some(_) => {
                    let Some(mut object) = self.document.remove_at(index) else {
                        continue;
                    };
                    object.erase(&mut self.surface);
                    if self.selection == Some(object.id()) {
                        self.selection = None;
                    }
                    DeletedObject::Object { object, index }
                }
                None => continue,
            };
            self.commit(Change::Deleted(change));
        }
    }
}

fn new_shape(ids: &mut IdGenerator, params: &ToolParameters, anchor: Pos2) -> Drawable {
    let params = &params.figure;
    let outline = Outline::new(params.outline_color.clone(), params.outline_width);
    match params.kind.figure_kind() {
        None => Line::new(ids.generate_id(), outline, anchor, None).into(),
        Some(kind) => Figure::new(
            ids.generate_id(),
            kind,
            outline,
            Fill::from_persisted(&params.fill_color),
            anchor,
        )
        .into(),
    }
}

fn redraw_shape_to(shape: &mut Drawable, end: Pos2, surface: &mut dyn RenderSurface) {
    match shape {
        Drawable::Line(line) => line.redraw_to(end, surface),
        Drawable::Figure(figure) => figure.redraw_to(end, surface),
        Drawable::StrokeGroup(_) | Drawable::Label(_) => {}
    }
}
