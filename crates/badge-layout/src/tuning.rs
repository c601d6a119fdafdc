//! Named tuning table for the text-fitting heuristic.
//!
//! Every threshold, penalty and boost the resolvers apply lives here as a
//! named field, so each rule can be tested and retuned without touching
//! the resolver control flow. The `Default` table is the production set,
//! tuned against real attendee rosters; `heavy_ink()` is the variant for
//! template stock whose company line prints visually lighter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Round to one decimal place, the resolution every published size and
/// width is quoted at.
pub(crate) fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Length-bucketed base sizing: `base_pt` up to `max_chars` characters,
/// then proportional shrink floored at `min_pt`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SizeRule {
    pub base_pt: f32,
    pub min_pt: f32,
    pub max_chars: usize,
}

impl SizeRule {
    pub fn size_for(&self, char_count: usize) -> f32 {
        if char_count == 0 || char_count <= self.max_chars {
            return self.base_pt;
        }
        let scaled = self.max_chars as f32 / char_count as f32 * self.base_pt;
        self.min_pt.max(round_tenth(scaled))
    }
}

/// A shrink step that fires once a character count reaches `at`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    pub at: usize,
    pub scale: f32,
}

/// First step whose threshold the value reaches wins; steps are ordered
/// highest threshold first.
pub(crate) fn step_scale(steps: &[Step], value: usize) -> f32 {
    steps
        .iter()
        .find(|step| value >= step.at)
        .map(|step| step.scale)
        .unwrap_or(1.0)
}

/// Shared crowding score over both fields.
///
/// Penalizes cards where name and company are long *together* even when
/// neither crosses its own threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DensityRule {
    pub name_chars: f32,
    pub company_chars: f32,
    pub joint_chars: f32,
    pub floor: f32,
}

impl DensityRule {
    pub fn scale(&self, name_chars: usize, company_chars: usize) -> f32 {
        let name_chars = name_chars as f32;
        let company_chars = company_chars as f32;
        let density = (name_chars / self.name_chars)
            .max(company_chars / self.company_chars)
            .max((name_chars + company_chars) / self.joint_chars);
        if density > 1.0 {
            (1.0 / density).max(self.floor)
        } else {
            1.0
        }
    }
}

/// Sizing rules for the name block.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NameTuning {
    pub rule: SizeRule,
    pub floor_pt: f32,

    /// Word count at which a name counts as crowded, and its shrink.
    pub crowded_word_count: usize,
    pub crowded_scale: f32,
    /// Single-word length that triggers the milder crowding shrink; also
    /// the point where line estimation switches to the narrow ideal.
    pub long_word_chars: usize,
    pub long_word_scale: f32,
    /// Extra shrink for five- and six-plus-word names.
    pub five_word_scale: f32,
    pub many_word_count: usize,
    pub many_word_scale: f32,
    /// Very long single words shrink again on top of the crowding rule.
    pub very_long_word_chars: usize,
    pub very_long_word_scale: f32,

    /// Per-extra-line shrink beyond the second estimated line, capped.
    pub multiline_step: f32,
    pub multiline_cap: f32,

    /// Ideal line lengths fed to the wrap estimator.
    pub wrap_ideal: usize,
    pub wrap_ideal_long_word: usize,
}

/// Sizing rules for the company block.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompanyTuning {
    /// Strict variant: shrinks aggressively with length.
    pub rule: SizeRule,
    /// Roomy variant: larger wrap budget, used as a lower bound so the
    /// strict rule never makes short-to-middling company text too small.
    pub roomy_rule: SizeRule,
    /// Whether the roomy variant participates as a lower bound.
    pub use_roomy_floor: bool,
    pub floor_pt: f32,

    /// Shrink when the *name* is crowded or wraps (keeps the pair balanced).
    pub crowding_scale: f32,
    /// Long-single-word shrink steps, checked longest-first.
    pub long_word_steps: [Step; 3],
    /// Overall-length shrink steps, checked longest-first.
    pub length_steps: [Step; 3],

    /// Multi-line shrink: `multiline_base` at two lines, then
    /// `multiline_step` per further line up to `multiline_cap` extra.
    pub multiline_base: f32,
    pub multiline_step: f32,
    pub multiline_cap: f32,

    /// Boosts that counteract over-shrinking short strings.
    pub short_boost_chars: usize,
    pub short_boost: f32,
    pub mid_boost_chars: usize,
    pub mid_boost: f32,
    pub tiny_word_chars: usize,
    pub tiny_total_chars: usize,
    pub tiny_word_boost: f32,

    /// Balance bound: keeps the company size proportionate to the name
    /// size regardless of company string length.
    pub balance_name_ratio: f32,
    pub balance_round_ratio: f32,
    pub balance_base_ratio: f32,

    /// Uniform multiplier applied to the finished company size for
    /// template stock with a visually lighter company line. 1.0 disables
    /// it; nothing assumes any particular value generalizes across
    /// templates.
    pub weight_boost: f32,

    /// Wrap-ideal window: `clamp(wrap_ideal_base - longest_word, min, max)`.
    pub wrap_ideal_base: usize,
    pub wrap_ideal_min: usize,
    pub wrap_ideal_max: usize,
}

impl CompanyTuning {
    /// Ideal line length for wrapping company text.
    pub fn wrap_ideal(&self, longest_word_chars: usize) -> usize {
        self.wrap_ideal_base
            .saturating_sub(longest_word_chars)
            .clamp(self.wrap_ideal_min, self.wrap_ideal_max)
    }
}

/// Rules for the vertical gap, block offset and block width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpacingTuning {
    pub gap_base_mm: f32,
    pub gap_floor_mm: f32,
    pub gap_name_two_lines: f32,
    pub gap_name_three_lines: f32,
    pub gap_company_lines_base: f32,
    pub gap_company_lines_step: f32,
    pub gap_company_lines_cap: f32,
    /// Gap boost steps by company length, checked longest-first.
    pub gap_long_company: [Step; 2],
    pub gap_short_company_chars: usize,
    pub gap_short_company_relax: f32,

    pub offset_base_mm: f32,
    pub offset_floor_mm: f32,
    pub offset_name_step_mm: f32,
    pub offset_name_cap_mm: f32,
    pub offset_company_step_mm: f32,
    pub offset_company_cap_mm: f32,

    /// Face deltas: the back face sits 1.4mm lower and 2mm narrower so
    /// the duplex registration tolerance never clips the block.
    pub back_offset_mm: f32,
    pub back_width_mm: f32,

    /// Derived anchors for paired and mirrored layouts.
    pub top_anchor_delta_mm: f32,
    pub top_anchor_floor_mm: f32,
    pub bottom_anchor_delta_mm: f32,
    pub bottom_anchor_floor_mm: f32,

    pub width_base_mm: f32,
    pub width_floor_mm: f32,
    /// Hard width floor re-applied after caller adjustments.
    pub width_min_mm: f32,
    pub width_len_threshold: usize,
    pub width_len_rate: f32,
    pub width_word_threshold: usize,
    pub width_word_rate: f32,
    pub width_multiline_penalty: f32,
}

/// The complete tuning table passed into the resolvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypographyTuning {
    pub name: NameTuning,
    pub company: CompanyTuning,
    pub density: DensityRule,
    pub spacing: SpacingTuning,
}

impl Default for TypographyTuning {
    fn default() -> Self {
        Self {
            name: NameTuning {
                rule: SizeRule {
                    base_pt: 27.0,
                    min_pt: 17.0,
                    max_chars: 18,
                },
                floor_pt: 15.0,
                crowded_word_count: 3,
                crowded_scale: 0.88,
                long_word_chars: 12,
                long_word_scale: 0.93,
                five_word_scale: 0.85,
                many_word_count: 6,
                many_word_scale: 0.78,
                very_long_word_chars: 14,
                very_long_word_scale: 0.90,
                multiline_step: 0.04,
                multiline_cap: 0.08,
                wrap_ideal: 14,
                wrap_ideal_long_word: 12,
            },
            company: CompanyTuning {
                rule: SizeRule {
                    base_pt: 16.6,
                    min_pt: 10.4,
                    max_chars: 18,
                },
                roomy_rule: SizeRule {
                    base_pt: 15.4,
                    min_pt: 10.8,
                    max_chars: 24,
                },
                use_roomy_floor: true,
                floor_pt: 10.4,
                crowding_scale: 0.9,
                long_word_steps: [
                    Step {
                        at: 18,
                        scale: 0.82,
                    },
                    Step {
                        at: 14,
                        scale: 0.88,
                    },
                    Step {
                        at: 12,
                        scale: 0.93,
                    },
                ],
                length_steps: [
                    Step {
                        at: 42,
                        scale: 0.72,
                    },
                    Step {
                        at: 34,
                        scale: 0.80,
                    },
                    Step {
                        at: 28,
                        scale: 0.88,
                    },
                ],
                multiline_base: 0.9,
                multiline_step: 0.06,
                multiline_cap: 0.18,
                short_boost_chars: 8,
                short_boost: 1.16,
                mid_boost_chars: 12,
                mid_boost: 1.08,
                tiny_word_chars: 6,
                tiny_total_chars: 10,
                tiny_word_boost: 1.1,
                balance_name_ratio: 0.84,
                balance_round_ratio: 0.8,
                balance_base_ratio: 0.96,
                weight_boost: 1.0,
                wrap_ideal_base: 26,
                wrap_ideal_min: 16,
                wrap_ideal_max: 20,
            },
            density: DensityRule {
                name_chars: 18.0,
                company_chars: 22.0,
                joint_chars: 40.0,
                floor: 0.72,
            },
            spacing: SpacingTuning {
                gap_base_mm: 3.2,
                gap_floor_mm: 6.1,
                gap_name_two_lines: 1.12,
                gap_name_three_lines: 1.18,
                gap_company_lines_base: 1.12,
                gap_company_lines_step: 0.05,
                gap_company_lines_cap: 0.18,
                gap_long_company: [
                    Step {
                        at: 26,
                        scale: 1.14,
                    },
                    Step {
                        at: 18,
                        scale: 1.08,
                    },
                ],
                gap_short_company_chars: 10,
                gap_short_company_relax: 0.94,
                offset_base_mm: 27.5,
                offset_floor_mm: 21.5,
                offset_name_step_mm: 2.35,
                offset_name_cap_mm: 5.4,
                offset_company_step_mm: 1.35,
                offset_company_cap_mm: 3.6,
                back_offset_mm: 1.4,
                back_width_mm: 2.0,
                top_anchor_delta_mm: 8.2,
                top_anchor_floor_mm: 12.5,
                bottom_anchor_delta_mm: 12.2,
                bottom_anchor_floor_mm: 10.0,
                width_base_mm: 74.0,
                width_floor_mm: 64.0,
                width_min_mm: 50.0,
                width_len_threshold: 16,
                width_len_rate: 0.24,
                width_word_threshold: 10,
                width_word_rate: 0.72,
                width_multiline_penalty: 1.6,
            },
        }
    }
}

impl TypographyTuning {
    /// Variant for template stock whose company line prints lighter than
    /// the name line; bumps the finished company size by 12%.
    pub fn heavy_ink() -> Self {
        let mut tuning = Self::default();
        tuning.company.weight_boost = 1.12;
        tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_rule_below_threshold_keeps_base() {
        let rule = SizeRule {
            base_pt: 27.0,
            min_pt: 17.0,
            max_chars: 18,
        };
        assert_eq!(rule.size_for(0), 27.0);
        assert_eq!(rule.size_for(18), 27.0);
    }

    #[test]
    fn test_size_rule_shrinks_proportionally() {
        let rule = SizeRule {
            base_pt: 27.0,
            min_pt: 17.0,
            max_chars: 18,
        };
        // 18/22 * 27 = 22.09 → 22.1
        assert_eq!(rule.size_for(22), 22.1);
        // Very long strings bottom out at the minimum.
        assert_eq!(rule.size_for(200), 17.0);
    }

    #[test]
    fn test_density_scale_floors() {
        let density = DensityRule {
            name_chars: 18.0,
            company_chars: 22.0,
            joint_chars: 40.0,
            floor: 0.72,
        };
        assert_eq!(density.scale(10, 10), 1.0);
        // name 36 chars → density 2.0 → 1/2 = 0.5, floored at 0.72.
        assert_eq!(density.scale(36, 0), 0.72);
        // name 22 chars → density 22/18 → scale just under 1.
        let scale = density.scale(22, 5);
        assert!(scale < 1.0 && scale > 0.72);
    }

    #[test]
    fn test_company_wrap_ideal_window() {
        let tuning = TypographyTuning::default();
        // Short words leave the wide ideal.
        assert_eq!(tuning.company.wrap_ideal(4), 20);
        // Long words narrow it, clamped at 16.
        assert_eq!(tuning.company.wrap_ideal(10), 16);
        assert_eq!(tuning.company.wrap_ideal(30), 16);
        // Mid-length words land in between.
        assert_eq!(tuning.company.wrap_ideal(8), 18);
    }

    #[test]
    fn test_heavy_ink_only_changes_weight_boost() {
        let base = TypographyTuning::default();
        let heavy = TypographyTuning::heavy_ink();
        assert_eq!(heavy.company.weight_boost, 1.12);
        assert_eq!(heavy.name, base.name);
        assert_eq!(heavy.spacing, base.spacing);
    }
}
