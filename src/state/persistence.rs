use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{DEFAULT_CANVAS_COLOR, PaintConfig};
use crate::element::{ElementId, FigureKind};

/// Errors that can occur while reading or writing a project file
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize drawing: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to access project file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid drawing data: {0}")]
    InvalidDocument(String),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Why a single saved entry could not be restored
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Malformed entry: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Polygon vertex list has {0} numbers")]
    InvalidPolygon(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeRecord {
    pub coords: [f32; 2],
    pub width: f32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeGroupRecord {
    pub id: ElementId,
    pub strokes: Vec<StrokeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub outline_color: String,
    pub outline_width: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

/// `fill_color` is `""` for a figure without fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureRecord {
    pub fill_color: String,
    pub outline_color: String,
    pub outline_width: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
    pub figure_name: FigureKind,
    pub vertices_of_polygon: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub font_family: String,
    pub font_color: String,
    pub font_size: f32,
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// A whole drawing as written to disk: one list per kind plus the background
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedDrawing {
    pub canvas_color: String,
    #[serde(rename = "StrokeGroup")]
    pub stroke_groups: Vec<StrokeGroupRecord>,
    #[serde(rename = "Line")]
    pub lines: Vec<LineRecord>,
    #[serde(rename = "Figure")]
    pub figures: Vec<FigureRecord>,
    #[serde(rename = "Label")]
    pub labels: Vec<LabelRecord>,
}

impl Default for SavedDrawing {
    fn default() -> Self {
        Self {
            canvas_color: DEFAULT_CANVAS_COLOR.to_owned(),
            stroke_groups: Vec::new(),
            lines: Vec::new(),
            figures: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl SavedDrawing {
    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a saved drawing. Entries that fail to decode are logged and
    /// skipped; only a document that is not a JSON object is rejected.
    pub fn from_json(text: &str) -> PersistenceResult<Self> {
        let root: Value = serde_json::from_str(text)?;
        Self::from_value(&root)
    }

    pub fn from_value(root: &Value) -> PersistenceResult<Self> {
        let object = root
            .as_object()
            .ok_or_else(|| PersistenceError::InvalidDocument("top level is not an object".to_owned()))?;

        let canvas_color = match object.get("canvas_color").and_then(Value::as_str) {
            Some(color) => color.to_owned(),
            None => {
                warn!("Saved drawing has no canvas_color, using {DEFAULT_CANVAS_COLOR}");
                DEFAULT_CANVAS_COLOR.to_owned()
            }
        };

        Ok(Self {
            canvas_color,
            stroke_groups: decode_entries(object.get("StrokeGroup"), "StrokeGroup"),
            lines: decode_entries(object.get("Line"), "Line"),
            figures: decode_entries(object.get("Figure"), "Figure"),
            labels: decode_entries(object.get("Label"), "Label"),
        })
    }

    pub fn object_count(&self) -> usize {
        self.stroke_groups.len() + self.lines.len() + self.figures.len() + self.labels.len()
    }
}

fn decode_entries<R: DeserializeOwned>(list: Option<&Value>, kind: &str) -> Vec<R> {
    let entries = match list {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            warn!("Saved {kind} list is not an array, skipping it");
            return Vec::new();
        }
        None => return Vec::new(),
    };
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| match R::deserialize(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("Skipping {kind} entry {i}: {}", RecordError::from(err));
                None
            }
        })
        .collect()
}

/// The project file a drawing is opened from and saved to
#[derive(Debug, Clone)]
pub struct Project {
    path: PathBuf,
}

impl Project {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &PaintConfig) -> Self {
        Self::new(config.project_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the project, or `None` when there is no file yet
    pub fn open(&self) -> PersistenceResult<Option<SavedDrawing>> {
        if !self.path.exists() {
            info!("No project at {}, creating new", self.path.display());
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let drawing = SavedDrawing::from_json(&text)?;
        info!(
            "Opened {} with {} objects",
            self.path.display(),
            drawing.object_count()
        );
        Ok(Some(drawing))
    }

    pub fn save(&self, drawing: &SavedDrawing) -> PersistenceResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, drawing.to_json()?)?;
        info!("Saved project to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_field_names() {
        let drawing = SavedDrawing {
            canvas_color: "white".to_owned(),
            lines: vec![LineRecord {
                outline_color: "red".to_owned(),
                outline_width: 2.0,
                start_x: 0.0,
                start_y: 0.0,
                end_x: 5.0,
                end_y: 5.0,
            }],
            ..SavedDrawing::default()
        };
        let value: Value = serde_json::from_str(&drawing.to_json().unwrap()).unwrap();
        assert!(value.get("StrokeGroup").unwrap().is_array());
        assert_eq!(value["Line"][0]["outline_color"], "red");
        assert_eq!(value["canvas_color"], "white");
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        assert!(matches!(
            SavedDrawing::from_json("[1, 2, 3]"),
            Err(PersistenceError::InvalidDocument(_))
        ));
    }
}
