//! Vertical gap, block offset and block width for one card, plus the
//! per-face resolution that folds in caller adjustments.

use crate::fontsize::{FontSizeBreakdown, longest_word_chars, non_blank};
use crate::tuning::{TypographyTuning, round_tenth, step_scale};
use crate::types::{Face, PLACEHOLDER_COMPANY, PositionAdjustment, TypographyMetrics};

/// Computed block measurements before any caller adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingMetrics {
    pub gap_mm: f32,
    pub offset_mm: f32,
    pub width_mm: f32,
}

/// Final placement for one face of one card: adjustments applied, face
/// deltas folded in, derived anchors for paired/mirrored layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePlacement {
    pub gap_mm: f32,
    pub offset_mm: f32,
    pub top_offset_mm: f32,
    pub bottom_offset_mm: f32,
    pub width_mm: f32,
    pub horizontal_mm: f32,
}

/// Compute the gap between the two text blocks, the block offset from
/// the card-top anchor, and the block width budget.
///
/// Reuses the line estimates from [`crate::resolve_font_sizes`] so both
/// resolvers agree on how the text wraps.
pub fn resolve_spacing(
    company: &str,
    sizes: &FontSizeBreakdown,
    tuning: &TypographyTuning,
) -> SpacingMetrics {
    let company = non_blank(company, PLACEHOLDER_COMPANY);
    let company_len = company.chars().count();
    let company_longest = longest_word_chars(company);
    let rules = &tuning.spacing;

    let name_lines_boost = if sizes.name_lines >= 3 {
        rules.gap_name_three_lines
    } else if sizes.name_lines == 2 {
        rules.gap_name_two_lines
    } else {
        1.0
    };
    let company_lines_boost = if sizes.company_lines >= 2 {
        rules.gap_company_lines_base
            + rules
                .gap_company_lines_cap
                .min((sizes.company_lines as f32 - 2.0) * rules.gap_company_lines_step)
    } else {
        1.0
    };
    let length_boost = step_scale(&rules.gap_long_company, company_len);
    let short_relax = if company_len <= rules.gap_short_company_chars && sizes.company_lines == 1 {
        rules.gap_short_company_relax
    } else {
        1.0
    };
    let gap_mm = (rules.gap_base_mm * name_lines_boost * company_lines_boost * length_boost
        * short_relax)
        .max(rules.gap_floor_mm);

    let name_reduction = if sizes.name_lines > 1 {
        rules
            .offset_name_cap_mm
            .min((sizes.name_lines as f32 - 1.0) * rules.offset_name_step_mm)
    } else {
        0.0
    };
    let company_reduction = if sizes.company_lines > 1 {
        rules
            .offset_company_cap_mm
            .min((sizes.company_lines as f32 - 1.0) * rules.offset_company_step_mm)
    } else {
        0.0
    };
    let offset_mm =
        (rules.offset_base_mm - name_reduction - company_reduction).max(rules.offset_floor_mm);

    let width_penalty = 0.0f32
        .max((company_len as f32 - rules.width_len_threshold as f32) * rules.width_len_rate)
        .max((company_longest as f32 - rules.width_word_threshold as f32) * rules.width_word_rate)
        .max(if sizes.company_lines >= 2 {
            rules.width_multiline_penalty
        } else {
            0.0
        });
    let width_mm = round_tenth(rules.width_base_mm - width_penalty).max(rules.width_floor_mm);

    SpacingMetrics {
        gap_mm,
        offset_mm,
        width_mm,
    }
}

/// Apply caller adjustments and face deltas to a resolved metric set.
///
/// Adjustments are clamped to their documented ranges first, and the
/// width floor is re-applied afterwards, so a manual tweak can never
/// force a sub-minimum layout.
pub fn resolve_face_placement(
    metrics: &TypographyMetrics,
    adjustment: &PositionAdjustment,
    face: Face,
    tuning: &TypographyTuning,
) -> FacePlacement {
    let adjustment = adjustment.clamped();
    let rules = &tuning.spacing;
    let back = face == Face::Back;

    let gap_mm = metrics.names_gap_mm + adjustment.gap_mm;
    let offset_mm = metrics.names_offset_mm
        + adjustment.vertical_mm
        + if back { rules.back_offset_mm } else { 0.0 };
    let width_mm = (metrics.names_width_mm + adjustment.width_mm
        - if back { rules.back_width_mm } else { 0.0 })
    .max(rules.width_min_mm);

    FacePlacement {
        gap_mm,
        offset_mm,
        top_offset_mm: (offset_mm - rules.top_anchor_delta_mm).max(rules.top_anchor_floor_mm),
        bottom_offset_mm: (offset_mm - rules.bottom_anchor_delta_mm)
            .max(rules.bottom_anchor_floor_mm),
        width_mm,
        horizontal_mm: adjustment.horizontal_mm,
    }
}
