//! Print-run configuration.

use std::collections::BTreeMap;

use badge_layout::{FontScale, PositionAdjustment, RecordOverride, TypographyTuning};
use badge_sheet::{LayoutMode, Template};

use crate::types::Result;
#[cfg(feature = "serde")]
use crate::types::BadgeError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the renderer needs beyond the roster itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BadgeOptions {
    /// Physical card size; the standard template stock is 100×100mm.
    pub card_width_mm: f32,
    pub card_height_mm: f32,
    pub layout_mode: LayoutMode,
    pub template: Template,
    /// Share the batch minimum sizes / maximum width across every card.
    pub uniform_scaling: bool,
    pub adjustments: PositionAdjustment,
    pub font_scale: FontScale,
    /// Per-record tweaks, keyed by roster index.
    pub overrides: BTreeMap<usize, RecordOverride>,
    pub tuning: TypographyTuning,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            card_width_mm: 100.0,
            card_height_mm: 100.0,
            layout_mode: LayoutMode::Mirror,
            template: Template::single(),
            uniform_scaling: false,
            adjustments: PositionAdjustment::default(),
            font_scale: FontScale::default(),
            overrides: BTreeMap::new(),
            tuning: TypographyTuning::default(),
        }
    }
}

impl BadgeOptions {
    /// Load options from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BadgeError::Config(format!("Failed to parse options: {e}")))?;
        Ok(options)
    }

    /// Save options to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BadgeError::Config(format!("Failed to serialize options: {e}")))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(self.card_width_mm > 0.0) || !(self.card_height_mm > 0.0) {
            return Err(crate::types::BadgeError::Config(format!(
                "card dimensions must be positive, got {}x{}mm",
                self.card_width_mm, self.card_height_mm
            )));
        }
        self.template.validate()?;
        Ok(())
    }
}
