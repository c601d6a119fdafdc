//! Core data model: attendee records, faces, the configuration surface
//! (adjustments, scales, per-record overrides) and the resolved metrics.

use crate::fontsize::resolve_font_sizes;
use crate::spacing::resolve_spacing;
use crate::tuning::{TypographyTuning, round_tenth};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text rendered for a record whose name fields are all blank.
pub const PLACEHOLDER_NAME: &str = "Nombre Apellido";
/// Text rendered for a record whose company field is blank.
pub const PLACEHOLDER_COMPANY: &str = "Empresa";

/// One printable side of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Face {
    #[default]
    Front,
    Back,
}

/// One person on the roster.
///
/// `full_name` is derived from the name fields at construction time:
/// the two parts joined by a single space, only when both are non-empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attendee {
    pub company: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl Attendee {
    /// Build an attendee from raw field values, trimming each one.
    ///
    /// Returns `None` when all three fields are blank — such rows do not
    /// exist as records and are dropped at the ingestion boundary.
    pub fn from_fields(company: &str, last_name: &str, first_name: &str) -> Option<Self> {
        let company = company.trim();
        let last_name = last_name.trim();
        let first_name = first_name.trim();

        if company.is_empty() && last_name.is_empty() && first_name.is_empty() {
            return None;
        }

        let full_name = match (first_name.is_empty(), last_name.is_empty()) {
            (false, false) => format!("{first_name} {last_name}"),
            _ => format!("{first_name}{last_name}"),
        };

        Some(Self {
            company: company.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            full_name,
        })
    }

    /// Name as it should appear on the card, placeholder for blank records.
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            PLACEHOLDER_NAME
        } else {
            &self.full_name
        }
    }

    /// Company as it should appear on the card, placeholder when blank.
    pub fn display_company(&self) -> &str {
        if self.company.is_empty() {
            PLACEHOLDER_COMPANY
        } else {
            &self.company
        }
    }
}

/// Millimeter deltas applied uniformly on top of the computed metrics.
///
/// Each component may be negative; values are clamped to the documented
/// ranges before use rather than rejected, so a wild manual tweak can
/// never force an invalid layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionAdjustment {
    pub vertical_mm: f32,
    pub gap_mm: f32,
    pub width_mm: f32,
    pub horizontal_mm: f32,
}

impl PositionAdjustment {
    /// Allowed range for the vertical/width/horizontal deltas.
    pub const SHIFT_RANGE_MM: (f32, f32) = (-10.0, 10.0);
    /// Allowed range for the gap delta.
    pub const GAP_RANGE_MM: (f32, f32) = (-5.0, 10.0);

    /// Copy with every component clamped to its allowed range.
    pub fn clamped(&self) -> Self {
        let (lo, hi) = Self::SHIFT_RANGE_MM;
        let (gap_lo, gap_hi) = Self::GAP_RANGE_MM;
        Self {
            vertical_mm: self.vertical_mm.clamp(lo, hi),
            gap_mm: self.gap_mm.clamp(gap_lo, gap_hi),
            width_mm: self.width_mm.clamp(lo, hi),
            horizontal_mm: self.horizontal_mm.clamp(lo, hi),
        }
    }
}

/// Allowed range for every font-scale multiplier.
pub const FONT_SCALE_RANGE: (f32, f32) = (0.6, 1.6);

fn clamp_scale(value: f32) -> f32 {
    value.clamp(FONT_SCALE_RANGE.0, FONT_SCALE_RANGE.1)
}

/// Per-face font-size multipliers for a whole print run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontScale {
    pub front: f32,
    pub back: f32,
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            front: 1.0,
            back: 1.0,
        }
    }
}

impl FontScale {
    /// Effective multiplier for one face of one record.
    ///
    /// The face scale and the optional per-record override are each
    /// clamped to [0.6, 1.6] before being multiplied together.
    pub fn factor(&self, face: Face, record: Option<&RecordOverride>) -> f32 {
        let base = match face {
            Face::Front => self.front,
            Face::Back => self.back,
        };
        let record_scale = record.and_then(|r| r.scale_for(face)).unwrap_or(1.0);
        clamp_scale(base) * clamp_scale(record_scale)
    }
}

/// Per-record tweaks applied on top of the batch-wide settings.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordOverride {
    pub name: Option<String>,
    pub company: Option<String>,
    pub font_scale_front: Option<f32>,
    pub font_scale_back: Option<f32>,
}

impl RecordOverride {
    /// Name to render for `attendee` once this override is applied.
    pub fn effective_name<'a>(&'a self, attendee: &'a Attendee) -> &'a str {
        self.name.as_deref().unwrap_or(&attendee.full_name)
    }

    /// Company to render for `attendee` once this override is applied.
    pub fn effective_company<'a>(&'a self, attendee: &'a Attendee) -> &'a str {
        self.company.as_deref().unwrap_or(&attendee.company)
    }

    /// Override multiplier for one face, if set.
    pub fn scale_for(&self, face: Face) -> Option<f32> {
        match face {
            Face::Front => self.font_scale_front,
            Face::Back => self.font_scale_back,
        }
    }
}

/// Resolved typography for one card: two font sizes in points and the
/// three block measurements in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypographyMetrics {
    pub name_size_pt: f32,
    pub company_size_pt: f32,
    pub names_gap_mm: f32,
    pub names_offset_mm: f32,
    pub names_width_mm: f32,
}

impl TypographyMetrics {
    /// Resolve the full metric set for one name/company pair.
    pub fn resolve(name: &str, company: &str, tuning: &TypographyTuning) -> Self {
        let sizes = resolve_font_sizes(name, company, tuning);
        let spacing = resolve_spacing(company, &sizes, tuning);
        Self {
            name_size_pt: sizes.name_size_pt,
            company_size_pt: sizes.company_size_pt,
            names_gap_mm: spacing.gap_mm,
            names_offset_mm: spacing.offset_mm,
            names_width_mm: spacing.width_mm,
        }
    }

    /// Copy with both font sizes multiplied by an already-resolved scale
    /// factor. Spacing is unaffected.
    pub fn with_font_scale(&self, factor: f32) -> Self {
        Self {
            name_size_pt: round_tenth(self.name_size_pt * factor),
            company_size_pt: round_tenth(self.company_size_pt * factor),
            ..*self
        }
    }
}

/// Batch-wide typography bounds for uniform scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformMetrics {
    pub name_size_pt: f32,
    pub company_size_pt: f32,
    pub names_width_mm: f32,
}

impl UniformMetrics {
    /// Replace the batch-bounded components of an individual metric set,
    /// keeping the per-card gap and offset.
    pub fn override_onto(&self, metrics: &TypographyMetrics) -> TypographyMetrics {
        TypographyMetrics {
            name_size_pt: self.name_size_pt,
            company_size_pt: self.company_size_pt,
            names_width_mm: self.names_width_mm,
            ..*metrics
        }
    }
}
