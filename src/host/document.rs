//! JSON scene document
//!
//! A flat list of named items, each with an optional fill. This stands in for
//! a design tool's scene graph when running outside the host, and implements
//! the [`SceneItem`] and [`Fill`] capabilities.
//!
//! ```json
//! {
//!   "items": [
//!     { "name": "header", "fill": { "type": "linear-gradient", "stops": [
//!         { "position": 0.0, "color": "#ff0000" },
//!         { "position": 1.0, "color": 4278190335 }
//!     ] } },
//!     { "name": "caption", "fill": null }
//!   ]
//! }
//! ```
//!
//! Colors accept either the packed ARGB integer or any CSS color string and
//! are written back as CSS hex.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Fill, SceneItem};
use crate::gradient::{Argb, ColorStop};
use crate::{ChromaticError, Result};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub items: Vec<DocumentItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub name: String,
    #[serde(default)]
    pub fill: Option<DocumentFill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DocumentFill {
    Solid { color: Argb },
    LinearGradient { stops: Vec<ColorStop> },
    RadialGradient { stops: Vec<ColorStop> },
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ChromaticError::DocumentError(format!("Failed to parse document: {}", e)))
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| {
            ChromaticError::DocumentError(format!("Failed to serialize document: {}", e))
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ChromaticError::DocumentError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path, pretty: bool) -> Result<()> {
        let json = self.to_json(pretty)?;
        std::fs::write(path, json).map_err(|e| {
            ChromaticError::DocumentError(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

impl Fill for DocumentFill {
    fn color_stops(&self) -> Option<Vec<ColorStop>> {
        match self {
            DocumentFill::Solid { .. } => None,
            DocumentFill::LinearGradient { stops } | DocumentFill::RadialGradient { stops } => {
                Some(stops.clone())
            }
        }
    }

    fn set_color_stops(&mut self, new_stops: Vec<ColorStop>) -> Result<()> {
        if let Some(w) = new_stops.windows(2).find(|w| w[0].position > w[1].position) {
            return Err(ChromaticError::DocumentError(format!(
                "Color stops must be in ascending order ({} before {})",
                w[0].position, w[1].position
            )));
        }

        match self {
            DocumentFill::Solid { .. } => Err(ChromaticError::IneligibleItem(
                "solid fills have no color stops".to_string(),
            )),
            DocumentFill::LinearGradient { stops } | DocumentFill::RadialGradient { stops } => {
                *stops = new_stops;
                Ok(())
            }
        }
    }
}

impl SceneItem for DocumentItem {
    type Fill = DocumentFill;

    fn name(&self) -> &str {
        &self.name
    }

    fn fill(&self) -> Option<&DocumentFill> {
        self.fill.as_ref()
    }

    fn set_fill(&mut self, fill: DocumentFill) -> Result<()> {
        self.fill = Some(fill);
        Ok(())
    }
}
