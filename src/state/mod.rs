pub mod interaction;
pub mod persistence;

pub use interaction::{Interaction, TextPrompt, TextTarget};
pub use persistence::{PersistenceError, PersistenceResult, Project, SavedDrawing};
