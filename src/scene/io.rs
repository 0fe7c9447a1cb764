use log::{info, warn};

use super::Scene;
use crate::config::PaintConfig;
use crate::element::{Drawable, Element, Figure, Label, Line, StrokeGroup};
use crate::state::SavedDrawing;
use crate::surface::RenderSurface;

impl<S: RenderSurface> Scene<S> {
    /// Snapshot the committed drawing, one list per kind in stacking order
    pub fn save(&self) -> SavedDrawing {
        SavedDrawing {
            canvas_color: self.surface.background().to_owned(),
            stroke_groups: self.document.stroke_groups().map(StrokeGroup::to_record).collect(),
            lines: self.document.lines().map(Line::to_record).collect(),
            figures: self.document.figures().map(Figure::to_record).collect(),
            labels: self.document.labels().map(Label::to_record).collect(),
        }
    }

    /// Build a scene showing `saved` on `surface`
    pub fn from_saved(saved: &SavedDrawing, surface: S, config: PaintConfig) -> Self {
        let mut scene = Self::new(surface, config);
        scene.load(saved);
        scene
    }

    /// Replace the current drawing with `saved`.
    ///
    /// Objects are rendered kind by kind: stroke groups, lines, figures, then
    /// labels. Group ids are kept and the id generator is moved past them;
    /// duplicate or out-of-range group ids are replaced by fresh ones.
    /// Entries that cannot be restored are skipped. The history starts empty.
    pub fn load(&mut self, saved: &SavedDrawing) {
        self.clear_all();
        if let Err(err) = self.surface.set_background(&saved.canvas_color) {
            warn!("Keeping background {}: {err}", self.surface.background());
        }

        for record in &saved.stroke_groups {
            let mut group = StrokeGroup::from_record(record.clone());
            if self.document.get(group.id()).is_some() {
                warn!("Duplicate stroke group id {}, assigning a new one", group.id());
                group = StrokeGroup::with_strokes(self.ids.generate_id(), group.strokes().to_vec());
            } else if let Err(err) = self.ids.seed_past(group.id()) {
                warn!("Stroke group {err}, assigning a new one");
                group = StrokeGroup::with_strokes(self.ids.generate_id(), group.strokes().to_vec());
            }
            self.restore(group.into());
        }
        for record in &saved.lines {
            let line = Line::from_record(record.clone(), self.ids.generate_id());
            self.restore(line.into());
        }
        for record in &saved.figures {
            match Figure::from_record(record.clone(), self.ids.generate_id()) {
                Ok(figure) => self.restore(figure.into()),
                Err(err) => warn!("Skipping figure: {err}"),
            }
        }
        for record in &saved.labels {
            let label = Label::from_record(record.clone(), self.ids.generate_id());
            self.restore(label.into());
        }
        info!("Loaded {} objects", self.document.len());
    }

    fn restore(&mut self, mut object: Drawable) {
        object.render(&mut self.surface);
        self.document.push(object);
    }
}
