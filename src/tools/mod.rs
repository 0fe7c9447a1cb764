//! Tool selection and the per-tool parameter bags read when a gesture commits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PaintConfig;
use crate::element::FigureKind;

/// The tool currently routing pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Text,
    Select,
    Figures,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Brush,
        ToolKind::Eraser,
        ToolKind::Text,
        ToolKind::Select,
        ToolKind::Figures,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Brush => "Brush",
            ToolKind::Eraser => "Eraser",
            ToolKind::Text => "Text",
            ToolKind::Select => "Select",
            ToolKind::Figures => "Figures",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the figures tool draws. A line is a figure tool choice but not a [`FigureKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeChoice {
    Line,
    Rectangle,
    Triangle,
    Oval,
    Polygon,
}

impl ShapeChoice {
    pub const ALL: [ShapeChoice; 5] = [
        ShapeChoice::Line,
        ShapeChoice::Rectangle,
        ShapeChoice::Triangle,
        ShapeChoice::Oval,
        ShapeChoice::Polygon,
    ];

    pub fn figure_kind(&self) -> Option<FigureKind> {
        match self {
            ShapeChoice::Line => None,
            ShapeChoice::Rectangle => Some(FigureKind::Rectangle),
            ShapeChoice::Triangle => Some(FigureKind::Triangle),
            ShapeChoice::Oval => Some(FigureKind::Oval),
            ShapeChoice::Polygon => Some(FigureKind::Polygon),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeChoice::Line => "line",
            ShapeChoice::Rectangle => "rectangle",
            ShapeChoice::Triangle => "triangle",
            ShapeChoice::Oval => "oval",
            ShapeChoice::Polygon => "polygon",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrushParams {
    pub width: f32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EraserParams {
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelParams {
    pub family: String,
    pub size: f32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FigureParams {
    pub fill_color: String,
    pub outline_color: String,
    pub outline_width: f32,
    pub kind: ShapeChoice,
}

/// Current value of every tool's parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ToolParameters {
    pub brush: BrushParams,
    pub eraser: EraserParams,
    pub label: LabelParams,
    pub figure: FigureParams,
}

impl ToolParameters {
    pub fn from_config(config: &PaintConfig) -> Self {
        Self {
            brush: BrushParams {
                width: config.brush_width,
                color: config.brush_color.clone(),
            },
            eraser: EraserParams {
                width: config.eraser_width,
            },
            label: LabelParams {
                family: config.font_family.clone(),
                size: config.font_size,
                color: config.font_color.clone(),
            },
            figure: FigureParams {
                fill_color: config.figure_fill_color.clone(),
                outline_color: config.figure_outline_color.clone(),
                outline_width: config.figure_outline_width,
                kind: config.figure_kind,
            },
        }
    }
}

impl Default for ToolParameters {
    fn default() -> Self {
        Self::from_config(&PaintConfig::default())
    }
}
