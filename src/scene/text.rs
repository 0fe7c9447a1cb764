use log::debug;

use super::Scene;
use crate::command::Change;
use crate::element::{Drawable, Element};
use crate::state::{Interaction, TextPrompt, TextTarget};
use crate::surface::RenderSurface;

impl<S: RenderSurface> Scene<S> {
    /// Title and prefilled text of the prompt the scene is waiting on
    pub fn pending_text_prompt(&self) -> Option<(&'static str, &str)> {
        self.interaction.text_target().map(TextTarget::prompt)
    }

    /// Resolve the pending text prompt. `None` means the prompt was cancelled.
    ///
    /// A new label is committed only with non-empty text. An edit records a
    /// replace when the text actually changed. Returns whether anything was
    /// committed.
    pub fn submit_text(&mut self, text: Option<String>) -> bool {
        match std::mem::take(&mut self.interaction) {
            Interaction::AwaitingText { target } => self.settle_text(target, text),
            other => {
                debug!("No text prompt pending in {}", other.name());
                self.interaction = other;
                false
            }
        }
    }

    /// Run the pending prompt synchronously through `prompt`
    pub fn resolve_text_input(&mut self, prompt: &mut impl TextPrompt) -> bool {
        let Some((title, initial)) = self.pending_text_prompt() else {
            return false;
        };
        let answer = prompt.ask(title, initial);
        self.submit_text(answer)
    }

    pub(super) fn settle_text(&mut self, target: TextTarget, text: Option<String>) -> bool {
        match (target, text) {
            (TextTarget::NewLabel(mut label), Some(text)) if !text.is_empty() => {
                label.set_text(text, &mut self.surface);
                self.commit_new(label.into());
                true
            }
            (TextTarget::NewLabel(mut label), _) => {
                debug!("Label cancelled");
                label.erase(&mut self.surface);
                false
            }
            (TextTarget::EditLabel { id, before, index }, Some(text)) => {
                let Some(Drawable::Label(label)) = self.document.get_mut(id) else {
                    return false;
                };
                if label.text() == text {
                    return false;
                }
                label.set_text(text, &mut self.surface);
                let after = Drawable::Label(label.clone());
                self.document.restack(&mut self.surface);
                self.commit(Change::Replaced {
                    before: before.into(),
                    after,
                    from: index,
                    to: index,
                });
                true
            }
            (TextTarget::EditLabel { .. }, None) => {
                debug!("Text edit cancelled");
                false
            }
        }
    }
}
