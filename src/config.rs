use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::tools::ShapeChoice;

pub const DEFAULT_CANVAS_COLOR: &str = "white";
pub const DEFAULT_BRUSH_SIZE: f32 = 5.0;
pub const DEFAULT_BRUSH_COLOR: &str = "black";
pub const DEFAULT_ERASER_SIZE: f32 = 5.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: f32 = 12.0;
pub const DEFAULT_FONT_COLOR: &str = "black";
pub const DEFAULT_FILL_COLOR: &str = "black";
pub const DEFAULT_OUTLINE_COLOR: &str = "black";
pub const DEFAULT_OUTLINE_WIDTH: f32 = 5.0;

/// Font families offered by the label tool
pub const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Courier",
    "Times",
    "Helvetica",
    "Symbol",
    "Courier New",
    "Times New Roman",
    "Verdana",
    "Comic Sans MS",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Start-up defaults for the canvas and every tool.
///
/// Missing keys in a config file fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub canvas_color: String,
    pub brush_width: f32,
    pub brush_color: String,
    pub eraser_width: f32,
    pub font_family: String,
    pub font_size: f32,
    pub font_color: String,
    pub figure_fill_color: String,
    pub figure_outline_color: String,
    pub figure_outline_width: f32,
    pub figure_kind: ShapeChoice,
    /// Half-width of the box used to hit-test a click
    pub selection_tolerance: f32,
    pub project_dir: PathBuf,
    pub project_file: String,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_color: DEFAULT_CANVAS_COLOR.to_owned(),
            brush_width: DEFAULT_BRUSH_SIZE,
            brush_color: DEFAULT_BRUSH_COLOR.to_owned(),
            eraser_width: DEFAULT_ERASER_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            font_size: DEFAULT_FONT_SIZE,
            font_color: DEFAULT_FONT_COLOR.to_owned(),
            figure_fill_color: DEFAULT_FILL_COLOR.to_owned(),
            figure_outline_color: DEFAULT_OUTLINE_COLOR.to_owned(),
            figure_outline_width: DEFAULT_OUTLINE_WIDTH,
            figure_kind: ShapeChoice::Line,
            selection_tolerance: DEFAULT_BRUSH_SIZE,
            project_dir: PathBuf::from("."),
            project_file: "project.json".to_owned(),
        }
    }
}

impl PaintConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load `path` if it exists, otherwise use the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring config {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn project_path(&self) -> PathBuf {
        self.project_dir.join(&self.project_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: PaintConfig =
            serde_json::from_str(r#"{ "brush_width": 9, "figure_kind": "polygon" }"#).unwrap();
        assert_eq!(config.brush_width, 9.0);
        assert_eq!(config.figure_kind, ShapeChoice::Polygon);
        assert_eq!(config.canvas_color, "white");
        assert_eq!(config.selection_tolerance, 5.0);
    }

    #[test]
    fn test_project_path() {
        let config = PaintConfig {
            project_dir: PathBuf::from("drawings"),
            ..PaintConfig::default()
        };
        assert_eq!(config.project_path(), PathBuf::from("drawings").join("project.json"));
    }
}
