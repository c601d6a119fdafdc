//! Batch-wide uniform typography bounds.
//!
//! When a print run opts into uniform scaling, every card shares the
//! minimum font sizes and the maximum width any single card in the run
//! requires, so the batch reads as one consistent set.

use crate::tuning::TypographyTuning;
use crate::types::{Attendee, TypographyMetrics, UniformMetrics};

/// Fold a batch of already-resolved metrics into the uniform bounds.
///
/// Returns `None` for an empty batch.
pub fn uniform_from_metrics<I>(metrics: I) -> Option<UniformMetrics>
where
    I: IntoIterator<Item = TypographyMetrics>,
{
    metrics.into_iter().fold(None, |acc, m| {
        Some(match acc {
            None => UniformMetrics {
                name_size_pt: m.name_size_pt,
                company_size_pt: m.company_size_pt,
                names_width_mm: m.names_width_mm,
            },
            Some(u) => UniformMetrics {
                name_size_pt: u.name_size_pt.min(m.name_size_pt),
                company_size_pt: u.company_size_pt.min(m.company_size_pt),
                names_width_mm: u.names_width_mm.max(m.names_width_mm),
            },
        })
    })
}

/// Resolve every record's metrics and take the batch bounds.
pub fn build_uniform_metrics(
    attendees: &[Attendee],
    tuning: &TypographyTuning,
) -> Option<UniformMetrics> {
    uniform_from_metrics(
        attendees
            .iter()
            .map(|a| TypographyMetrics::resolve(&a.full_name, &a.company, tuning)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch_has_no_bounds() {
        assert_eq!(
            build_uniform_metrics(&[], &TypographyTuning::default()),
            None
        );
    }

    #[test]
    fn test_bounds_are_elementwise_min_and_max() {
        let tuning = TypographyTuning::default();
        let attendees = vec![
            Attendee::from_fields("Tsuru", "Aguayo", "Diego").unwrap(),
            Attendee::from_fields("Telecomunicaciones", "Fernández Ampudia", "María Guadalupe")
                .unwrap(),
        ];

        let uniform = build_uniform_metrics(&attendees, &tuning).unwrap();
        let individual: Vec<_> = attendees
            .iter()
            .map(|a| TypographyMetrics::resolve(&a.full_name, &a.company, &tuning))
            .collect();

        let min_name = individual
            .iter()
            .map(|m| m.name_size_pt)
            .fold(f32::INFINITY, f32::min);
        let min_company = individual
            .iter()
            .map(|m| m.company_size_pt)
            .fold(f32::INFINITY, f32::min);
        let max_width = individual
            .iter()
            .map(|m| m.names_width_mm)
            .fold(0.0f32, f32::max);

        assert_eq!(uniform.name_size_pt, min_name);
        assert_eq!(uniform.company_size_pt, min_company);
        assert_eq!(uniform.names_width_mm, max_width);

        // The long record constrains the short one, not vice versa.
        assert!(uniform.name_size_pt < individual[0].name_size_pt);
    }

    #[test]
    fn test_override_keeps_per_card_spacing() {
        let tuning = TypographyTuning::default();
        let metrics = TypographyMetrics::resolve("Ana Ruiz", "Kia", &tuning);
        let uniform = UniformMetrics {
            name_size_pt: 15.0,
            company_size_pt: 10.4,
            names_width_mm: 74.0,
        };

        let merged = uniform.override_onto(&metrics);
        assert_eq!(merged.name_size_pt, 15.0);
        assert_eq!(merged.company_size_pt, 10.4);
        assert_eq!(merged.names_width_mm, 74.0);
        assert_eq!(merged.names_gap_mm, metrics.names_gap_mm);
        assert_eq!(merged.names_offset_mm, metrics.names_offset_mm);
    }
}
