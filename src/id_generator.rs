use thiserror::Error;

use crate::element::ElementId;

#[derive(Debug, Error, PartialEq)]
#[error("id {0} leaves no room for new ids")]
pub struct IdExhausted(pub ElementId);

/// Hands out element ids for one scene. Ids are never reused.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: ElementId,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_id(&mut self) -> ElementId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Make sure every id handed out from now on is greater than `id`.
    /// Fails without moving the generator when `id` is too large to step past.
    pub fn seed_past(&mut self, id: ElementId) -> Result<(), IdExhausted> {
        let next = id
            .checked_add(1)
            .filter(|next| *next < ElementId::MAX)
            .ok_or(IdExhausted(id))?;
        if next > self.next {
            self.next = next;
        }
        Ok(())
    }

    /// The id the next call to `generate_id` will return
    pub fn peek(&self) -> ElementId {
        self.next
    }
}
