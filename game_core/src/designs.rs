//! JSON persistence for paddle designs and settings, the save/load half of
//! the paddle editor.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::grid::PaddleGrid;

/// A named paddle design, as exported from the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleDesign {
    pub name: String,
    pub grid: PaddleGrid,
}

impl PaddleDesign {
    pub fn new(name: impl Into<String>, grid: PaddleGrid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

pub fn settings_to_json(settings: &Settings) -> Result<String, serde_json::Error> {
    serde_json::to_string(settings)
}

pub fn settings_from_json(json: &str) -> Result<Settings, serde_json::Error> {
    serde_json::from_str(json)
}
