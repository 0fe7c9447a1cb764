#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod element;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod scene;
pub mod state;
pub mod style;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use command::{Change, CommandHistory};
pub use config::PaintConfig;
pub use document::Document;
pub use element::{Drawable, DrawableKind, Element, ElementId};
pub use input::InputEvent;
pub use scene::Scene;
pub use state::{Interaction, Project, SavedDrawing, TextPrompt};
pub use surface::{CanvasSurface, RenderSurface, ShapeHandle, ShapeSpec};
pub use tools::{ShapeChoice, ToolKind};
