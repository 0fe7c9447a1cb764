/// Outline color and width shared by lines and figures
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    color: String,
    width: f32,
}

impl Outline {
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

/// Interior color of a closed figure
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    color: String,
}

impl Fill {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    /// Reads a persisted fill value, where an empty string means "no fill"
    pub fn from_persisted(color: &str) -> Option<Self> {
        if color.is_empty() {
            None
        } else {
            Some(Self::new(color))
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
