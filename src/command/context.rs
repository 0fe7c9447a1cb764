use crate::document::Document;
use crate::surface::RenderSurface;

/// What a change needs to be applied: the scene objects and the surface showing them
pub struct CommandContext<'a> {
    pub document: &'a mut Document,
    pub surface: &'a mut dyn RenderSurface,
}

impl<'a> CommandContext<'a> {
    pub fn new(document: &'a mut Document, surface: &'a mut dyn RenderSurface) -> Self {
        Self { document, surface }
    }
}
