//! Font-size resolution for the name/company pair.
//!
//! A constrained two-block sizing problem (maximize legibility, never
//! overflow the card, keep the blocks visually balanced) solved by an
//! explicit, order-sensitive chain of multiplicative penalties and
//! boosts rather than an optimizer — the card dimensions are fixed and
//! the rule table in [`TypographyTuning`] was tuned against real
//! rosters. The order of multiplier application and the floor/max
//! composition are load-bearing: the balance bound reads the finished
//! name size, so it must come last.

use crate::tuning::{TypographyTuning, round_tenth, step_scale};
use crate::types::{PLACEHOLDER_COMPANY, PLACEHOLDER_NAME};
use crate::wrap::estimate_lines;

/// Output of [`resolve_font_sizes`]: the two sizes plus the line
/// estimates the spacing resolver reuses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeBreakdown {
    pub name_size_pt: f32,
    pub company_size_pt: f32,
    pub name_lines: usize,
    pub company_lines: usize,
}

pub(crate) fn non_blank<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = text.trim();
    if trimmed.is_empty() { placeholder } else { trimmed }
}

pub(crate) fn longest_word_chars(text: &str) -> usize {
    text.split_whitespace()
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(0)
}

/// Compute the name and company font sizes for one card.
///
/// Blank inputs are substituted with the card placeholders, so a fully
/// empty record still resolves to sensible sizes. Total over all string
/// inputs; every result respects the tuning floors.
pub fn resolve_font_sizes(name: &str, company: &str, tuning: &TypographyTuning) -> FontSizeBreakdown {
    let name = non_blank(name, PLACEHOLDER_NAME);
    let company = non_blank(company, PLACEHOLDER_COMPANY);

    let name_len = name.chars().count();
    let company_len = company.chars().count();
    let word_count = name.split_whitespace().count().max(1);
    let longest_word = longest_word_chars(name);
    let company_longest = longest_word_chars(company);

    let base_name = tuning.name.rule.size_for(name_len);
    let base_company = tuning.company.rule.size_for(company_len);
    let roomy_company = tuning.company.roomy_rule.size_for(company_len);

    let scale = tuning.density.scale(name_len, company_len);

    let name_ideal = if longest_word >= tuning.name.long_word_chars {
        tuning.name.wrap_ideal_long_word
    } else {
        tuning.name.wrap_ideal
    };
    let name_lines = estimate_lines(name, name_ideal);
    let company_lines = estimate_lines(company, tuning.company.wrap_ideal(company_longest));

    // Name: crowding, word-count and wrap penalties, then the floor.
    let crowded_scale = if word_count >= tuning.name.crowded_word_count {
        tuning.name.crowded_scale
    } else if longest_word >= tuning.name.long_word_chars {
        tuning.name.long_word_scale
    } else {
        1.0
    };
    let extra_words_scale = if word_count >= tuning.name.many_word_count {
        tuning.name.many_word_scale
    } else if word_count == tuning.name.many_word_count - 1 {
        tuning.name.five_word_scale
    } else {
        1.0
    };
    let long_word_scale = if longest_word >= tuning.name.very_long_word_chars {
        tuning.name.very_long_word_scale
    } else {
        1.0
    };
    let multiline_scale = if name_lines >= 2 {
        1.0 - tuning
            .name
            .multiline_cap
            .min((name_lines as f32 - 2.0) * tuning.name.multiline_step)
    } else {
        1.0
    };
    let name_size = tuning.name.floor_pt.max(round_tenth(
        base_name * scale * crowded_scale * multiline_scale * extra_words_scale * long_word_scale,
    ));

    // Company: mirrored penalties plus the short-string boosts, bounded
    // below by the roomy variant and the balance bound, above by the
    // finished name size.
    let crowding_scale =
        if word_count >= tuning.name.crowded_word_count || name_lines >= 2 {
            tuning.company.crowding_scale
        } else {
            1.0
        };
    let company_long_word_scale = step_scale(&tuning.company.long_word_steps, company_longest);
    let company_length_scale = step_scale(&tuning.company.length_steps, company_len);
    let company_multiline_scale = if company_lines >= 2 {
        tuning.company.multiline_base
            - tuning
                .company
                .multiline_cap
                .min((company_lines as f32 - 2.0) * tuning.company.multiline_step)
    } else {
        1.0
    };
    let short_boost = if company_len <= tuning.company.short_boost_chars && company_lines == 1 {
        tuning.company.short_boost
    } else if company_len <= tuning.company.mid_boost_chars {
        tuning.company.mid_boost
    } else {
        1.0
    };
    let tiny_word_boost = if company_longest <= tuning.company.tiny_word_chars
        && company_len <= tuning.company.tiny_total_chars
    {
        tuning.company.tiny_word_boost
    } else {
        1.0
    };

    let multipliers = crowding_scale
        * company_long_word_scale
        * company_length_scale
        * company_multiline_scale
        * short_boost
        * tiny_word_boost;

    let balance_bound = (name_size * tuning.company.balance_name_ratio).min(
        (base_company * tuning.company.balance_base_ratio)
            .max(round_tenth(name_size * tuning.company.balance_round_ratio)),
    );

    let mut company_size = round_tenth(base_company * scale * multipliers);
    if tuning.company.use_roomy_floor {
        company_size = company_size.max(round_tenth(roomy_company * multipliers));
    }
    company_size = company_size
        .max(balance_bound)
        .max(tuning.company.floor_pt);

    if tuning.company.weight_boost != 1.0 {
        company_size =
            round_tenth(company_size * tuning.company.weight_boost).max(tuning.company.floor_pt);
    }

    // The company line may never visually dominate the name line.
    company_size = company_size.min(name_size);

    FontSizeBreakdown {
        name_size_pt: name_size,
        company_size_pt: company_size,
        name_lines,
        company_lines,
    }
}
