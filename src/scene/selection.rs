use egui::{Pos2, Rect, Vec2};
use log::debug;

use super::{Scene, accept_color};
use crate::command::{Change, DeletedObject};
use crate::element::{Drawable, DrawableKind, Element};
use crate::state::{Interaction, TextTarget};
use crate::surface::RenderSurface;

impl<S: RenderSurface> Scene<S> {
    /// Hit-test a small box around `pos` and select the topmost object found.
    /// Returns the kind of the new selection, or `None` after clearing it.
    pub fn select(&mut self, pos: Pos2) -> Option<DrawableKind> {
        let tolerance = self.config.selection_tolerance;
        let region = Rect::from_center_size(pos, Vec2::splat(tolerance * 2.0));
        let hit = self
            .surface
            .query_overlapping(region)
            .into_iter()
            .find_map(|handle| self.document.find_owner(handle))
            .and_then(|index| self.document.get_at(index));
        match hit {
            Some(object) => {
                debug!("Selected {} {}", object.element_type(), object.id());
                self.selection = Some(object.id());
                Some(object.kind())
            }
            None => {
                self.selection = None;
                None
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Copy the selection, let `edit` mutate the live object and record the
    /// pair as one replace. `edit` returns false when it does not apply.
    fn edit_selected<F>(&mut self, what: &str, edit: F) -> bool
    where
        F: FnOnce(&mut Drawable, &mut dyn RenderSurface) -> bool,
    {
        self.finish_gesture();
        let Some(id) = self.selection else {
            debug!("Nothing selected to {what}");
            return false;
        };
        let Some(index) = self.document.index_of(id) else {
            self.selection = None;
            return false;
        };
        let Some(object) = self.document.get_at_mut(index) else {
            return false;
        };
        let before = object.clone();
        if !edit(object, &mut self.surface) {
            debug!("Cannot {what} a {}", before.element_type());
            return false;
        }
        let after = object.clone();
        if after == before {
            return false;
        }
        self.document.restack(&mut self.surface);
        self.commit(Change::Replaced {
            before,
            after,
            from: index,
            to: index,
        });
        true
    }

    pub fn change_selected_fill_color(&mut self, color: &str) -> bool {
        let Some(color) = accept_color(color, "fill") else {
            return false;
        };
        self.edit_selected("fill", |object, surface| match object {
            Drawable::Figure(figure) => {
                figure.set_fill(&color, surface);
                true
            }
            _ => false,
        })
    }

    pub fn remove_selected_fill(&mut self) -> bool {
        self.edit_selected("remove the fill of", |object, surface| match object {
            Drawable::Figure(figure) => {
                figure.remove_fill(surface);
                true
            }
            _ => false,
        })
    }

    /// Stroke color, outline color or font color depending on the selection
    pub fn change_selected_color(&mut self, color: &str) -> bool {
        let Some(color) = accept_color(color, "selection") else {
            return false;
        };
        self.edit_selected("recolor", |object, surface| {
            match object {
                Drawable::StrokeGroup(group) => group.set_color(&color, surface),
                Drawable::Line(line) => line.set_color(&color, surface),
                Drawable::Figure(figure) => figure.set_outline_color(&color, surface),
                Drawable::Label(label) => label.set_font_color(color.as_str(), surface),
            }
            true
        })
    }

    /// Stroke width, outline width or font size depending on the selection
    pub fn change_selected_width(&mut self, width: f32) -> bool {
        self.edit_selected("resize", |object, surface| {
            match object {
                Drawable::StrokeGroup(group) => group.set_width(width, surface),
                Drawable::Line(line) => line.set_width(width, surface),
                Drawable::Figure(figure) => figure.set_outline_width(width, surface),
                Drawable::Label(label) => label.set_font_size(width, surface),
            }
            true
        })
    }

    pub fn change_selected_font_family(&mut self, family: &str) -> bool {
        self.edit_selected("change the font of", |object, surface| match object {
            Drawable::Label(label) => {
                label.set_font_family(family, surface);
                true
            }
            _ => false,
        })
    }

    /// Ask for new text for the selected label
    pub fn edit_selected_text(&mut self) -> bool {
        self.finish_gesture();
        let Some(id) = self.selection else { return false };
        let Some(index) = self.document.index_of(id) else { return false };
        let Some(Drawable::Label(label)) = self.document.get_at(index) else {
            debug!("Only labels have text to edit");
            return false;
        };
        self.interaction = Interaction::AwaitingText {
            target: TextTarget::EditLabel {
                id,
                before: label.clone(),
                index,
            },
        };
        true
    }

    /// Move the selection to the top of the stacking order
    pub fn bring_selected_forward(&mut self) -> bool {
        self.restack_selected(true)
    }

    /// Move the selection to the bottom of the stacking order
    pub fn send_selected_backward(&mut self) -> bool {
        self.restack_selected(false)
    }

    fn restack_selected(&mut self, to_front: bool) -> bool {
        self.finish_gesture();
        let Some(id) = self.selection else { return false };
        let Some((from, mut object)) = self.document.remove_by_id(id) else {
            return false;
        };
        let before = object.clone();
        let to = if to_front {
            object.bring_to_front(&mut self.surface);
            self.document.push(object.clone())
        } else {
            object.send_to_back(&mut self.surface);
            self.document.insert(0, object.clone())
        };
        if from == to {
            return false;
        }
        self.commit(Change::Replaced {
            before,
            after: object,
            from,
            to,
        });
        true
    }

    /// Delete the selected object
    pub fn remove_selected(&mut self) -> bool {
        self.finish_gesture();
        let Some(id) = self.selection.take() else { return false };
        let Some((index, mut object)) = self.document.remove_by_id(id) else {
            return false;
        };
        object.erase(&mut self.surface);
        self.commit(Change::Deleted(DeletedObject::Object { object, index }));
        true
    }
}
