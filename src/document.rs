use log::debug;

use crate::element::{Drawable, Element, ElementId, Figure, Label, Line, StrokeGroup};
use crate::surface::{RenderSurface, ShapeHandle};

/// The committed scene objects. List order is paint order, bottom first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    objects: Vec<Drawable>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Drawable] {
        &self.objects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Drawable> {
        self.objects.iter()
    }

    /// Append on top, returning the list index
    pub fn push(&mut self, object: Drawable) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Insert at `index`, clamped to the list length. Returns the index used.
    pub fn insert(&mut self, index: usize, object: Drawable) -> usize {
        let index = index.min(self.objects.len());
        self.objects.insert(index, object);
        index
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.objects.iter().position(|o| o.id() == id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Drawable> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Drawable> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn remove_by_id(&mut self, id: ElementId) -> Option<(usize, Drawable)> {
        let index = self.index_of(id)?;
        Some((index, self.objects.remove(index)))
    }

    /// Index of the first object owning `handle`
    pub fn find_owner(&self, handle: ShapeHandle) -> Option<usize> {
        self.objects.iter().position(|o| o.owns_handle(handle))
    }

    pub fn get_at(&self, index: usize) -> Option<&Drawable> {
        self.objects.get(index)
    }

    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut Drawable> {
        self.objects.get_mut(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Drawable> {
        if index < self.objects.len() {
            Some(self.objects.remove(index))
        } else {
            None
        }
    }

    pub fn stroke_group_mut(&mut self, id: ElementId) -> Option<&mut StrokeGroup> {
        self.get_mut(id).and_then(Drawable::as_stroke_group_mut)
    }

    pub fn stroke_groups(&self) -> impl Iterator<Item = &StrokeGroup> {
        self.objects.iter().filter_map(Drawable::as_stroke_group)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.objects.iter().filter_map(Drawable::as_line)
    }

    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.objects.iter().filter_map(Drawable::as_figure)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.objects.iter().filter_map(Drawable::as_label)
    }

    /// Remove every object, handing them back bottom first
    pub fn take_all(&mut self) -> Vec<Drawable> {
        std::mem::take(&mut self.objects)
    }

    /// Raise every object in list order so the surface stacking matches the list
    pub fn restack(&mut self, surface: &mut dyn RenderSurface) {
        debug!("Restacking {} objects", self.objects.len());
        for object in &mut self.objects {
            object.bring_to_front(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Stroke;
    use crate::style::Outline;
    use crate::surface::CanvasSurface;
    use egui::Pos2;

    #[test]
    fn test_find_owner_resolves_group_members() {
        let mut surface = CanvasSurface::new("white");
        let mut group = StrokeGroup::new(1);
        group.push(Stroke::new(Pos2::new(1.0, 1.0), 2.0, "black"));
        group.push(Stroke::new(Pos2::new(3.0, 1.0), 2.0, "black"));
        group.render(&mut surface);
        let member = group.handles()[1];

        let mut line = Line::new(2, Outline::new("red", 1.0), Pos2::ZERO, Some(Pos2::new(5.0, 5.0)));
        line.render(&mut surface);
        let line_handle = line.handles()[0];

        let mut document = Document::new();
        document.push(group.into());
        document.push(line.into());

        assert_eq!(document.find_owner(member), Some(0));
        assert_eq!(document.find_owner(line_handle), Some(1));
        assert_eq!(document.find_owner(ShapeHandle::new(999)), None);
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut document = Document::new();
        let line = Line::new(7, Outline::new("red", 1.0), Pos2::ZERO, None);
        assert_eq!(document.insert(10, line.into()), 0);
        assert_eq!(document.index_of(7), Some(0));
    }
}
