//! The scene owns everything that makes up a drawing session: the committed
//! objects, the surface showing them, the undo history, the active tool with
//! its parameters, the gesture in progress and the selection.

mod io;
mod pointer;
mod selection;
mod text;

use log::{debug, info, warn};

use crate::color::is_valid_color;
use crate::command::{Change, CommandContext, CommandError, CommandHistory};
use crate::config::PaintConfig;
use crate::document::Document;
use crate::element::{Drawable, Element, ElementId};
use crate::id_generator::IdGenerator;
use crate::state::Interaction;
use crate::surface::RenderSurface;
use crate::tools::{BrushParams, EraserParams, FigureParams, LabelParams, ShapeChoice, ToolKind, ToolParameters};

pub struct Scene<S: RenderSurface> {
    surface: S,
    document: Document,
    history: CommandHistory,
    ids: IdGenerator,
    tool: ToolKind,
    params: ToolParameters,
    interaction: Interaction,
    selection: Option<ElementId>,
    config: PaintConfig,
}

impl<S: RenderSurface> Scene<S> {
    pub fn new(mut surface: S, config: PaintConfig) -> Self {
        if let Err(err) = surface.set_background(&config.canvas_color) {
            warn!("Keeping surface background {}: {err}", surface.background());
        }
        Self {
            surface,
            document: Document::new(),
            history: CommandHistory::new(),
            ids: IdGenerator::new(),
            tool: ToolKind::default(),
            params: ToolParameters::from_config(&config),
            interaction: Interaction::Idle,
            selection: None,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn selected(&self) -> Option<&Drawable> {
        self.selection.and_then(|id| self.document.get(id))
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch tools. Any gesture in progress is finished first and the
    /// selection does not survive leaving the select tool.
    pub fn select_tool(&mut self, tool: ToolKind) {
        if tool == self.tool {
            return;
        }
        self.finish_gesture();
        if tool != ToolKind::Select {
            self.selection = None;
        }
        debug!("Tool {} -> {}", self.tool, tool);
        self.tool = tool;
    }

    pub fn brush_parameters(&self) -> &BrushParams {
        &self.params.brush
    }

    pub fn eraser_parameters(&self) -> &EraserParams {
        &self.params.eraser
    }

    pub fn label_parameters(&self) -> &LabelParams {
        &self.params.label
    }

    pub fn figure_parameters(&self) -> &FigureParams {
        &self.params.figure
    }

    pub fn set_brush_width(&mut self, width: f32) {
        self.params.brush.width = width;
    }

    pub fn set_brush_color(&mut self, color: &str) -> bool {
        match accept_color(color, "brush") {
            Some(color) => {
                self.params.brush.color = color;
                true
            }
            None => false,
        }
    }

    pub fn set_eraser_width(&mut self, width: f32) {
        self.params.eraser.width = width;
    }

    /// Change what the figures tool draws, finishing a polygon in progress
    pub fn set_figure_kind(&mut self, kind: ShapeChoice) {
        self.finish_gesture();
        self.params.figure.kind = kind;
    }

    pub fn set_figure_fill_color(&mut self, color: &str) -> bool {
        match accept_color(color, "fill") {
            Some(color) => {
                self.params.figure.fill_color = color;
                true
            }
            None => false,
        }
    }

    pub fn set_figure_outline_color(&mut self, color: &str) -> bool {
        match accept_color(color, "outline") {
            Some(color) => {
                self.params.figure.outline_color = color;
                true
            }
            None => false,
        }
    }

    pub fn set_figure_outline_width(&mut self, width: f32) {
        self.params.figure.outline_width = width;
    }

    pub fn set_label_font_family(&mut self, family: &str) {
        self.params.label.family = family.to_owned();
    }

    pub fn set_label_font_size(&mut self, size: f32) {
        self.params.label.size = size;
    }

    pub fn set_label_font_color(&mut self, color: &str) -> bool {
        match accept_color(color, "font") {
            Some(color) => {
                self.params.label.color = color;
                true
            }
            None => false,
        }
    }

    /// `(undo available, redo available)`
    pub fn history_status(&self) -> (bool, bool) {
        self.history.status()
    }

    pub fn undo(&mut self) -> (bool, bool) {
        self.finish_gesture();
        let mut ctx = CommandContext::new(&mut self.document, &mut self.surface);
        match self.history.undo(&mut ctx) {
            Ok(()) | Err(CommandError::NothingToUndo) => {}
            Err(err) => warn!("Undo failed: {err}"),
        }
        self.prune_selection();
        self.history.status()
    }

    pub fn redo(&mut self) -> (bool, bool) {
        self.finish_gesture();
        let mut ctx = CommandContext::new(&mut self.document, &mut self.surface);
        match self.history.redo(&mut ctx) {
            Ok(()) | Err(CommandError::NothingToRedo) => {}
            Err(err) => warn!("Redo failed: {err}"),
        }
        self.prune_selection();
        self.history.status()
    }

    /// Remove everything, forget the history and reset the background
    pub fn clear_all(&mut self) -> (bool, bool) {
        self.cancel_gesture();
        for mut object in self.document.take_all() {
            object.erase(&mut self.surface);
        }
        self.history.clear();
        self.selection = None;
        if let Err(err) = self.surface.set_background(&self.config.canvas_color) {
            warn!("Could not reset background: {err}");
        }
        info!("Cleared the canvas");
        self.history.status()
    }

    /// Change the background color. `None` is a cancelled color pick.
    pub fn change_background(&mut self, color: Option<&str>) -> bool {
        let Some(color) = color else {
            debug!("Background change cancelled");
            return false;
        };
        let previous = self.surface.background().to_owned();
        if previous == color {
            return false;
        }
        if let Err(err) = self.surface.set_background(color) {
            warn!("Background unchanged: {err}");
            return false;
        }
        self.commit(Change::Background {
            previous,
            new: color.to_owned(),
        });
        true
    }

    fn commit(&mut self, change: Change) {
        debug!("Committing {}", change.name());
        self.history.push(change);
    }

    /// Commit `object` on top of the scene
    fn commit_new(&mut self, object: Drawable) {
        let index = self.document.push(object.clone());
        self.commit(Change::Added { object, index });
    }

    fn prune_selection(&mut self) {
        if let Some(id) = self.selection {
            if self.document.get(id).is_none() {
                self.selection = None;
            }
        }
    }

    /// Bring the gesture in progress to an end: strokes, shapes, polygons
    /// and moves are committed, a pending text prompt counts as cancelled.
    pub fn finish_gesture(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle | Interaction::Erasing => {}
            Interaction::Painting { group } => self.commit_stroke_group(group),
            Interaction::DrawingShape { shape, .. } => {
                if let Some(shape) = shape {
                    self.commit_new(shape);
                }
            }
            Interaction::BuildingPolygon { figure } => self.commit_polygon(figure),
            Interaction::Moving {
                id,
                before,
                index,
                moved,
                ..
            } => self.commit_move(id, before, index, moved),
            Interaction::AwaitingText { target } => {
                self.settle_text(target, None);
            }
        }
    }

    /// Drop the gesture in progress without committing anything
    fn cancel_gesture(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Painting { mut group } => group.erase(&mut self.surface),
            Interaction::DrawingShape {
                shape: Some(mut shape),
                ..
            } => shape.erase(&mut self.surface),
            Interaction::BuildingPolygon { mut figure } => figure.erase(&mut self.surface),
            Interaction::AwaitingText { target } => {
                self.settle_text(target, None);
            }
            _ => {}
        }
    }
}

fn accept_color(color: &str, what: &str) -> Option<String> {
    if is_valid_color(color) {
        Some(color.to_owned())
    } else {
        warn!("Ignoring invalid {what} color {color:?}");
        None
    }
}
