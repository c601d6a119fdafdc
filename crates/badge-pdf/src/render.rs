//! Badge face rendering into a duplex-ready PDF.
//!
//! Each sheet becomes two consecutive pages, front then back, sized to
//! the template grid. Per slot the resolved typography is painted as
//! centered Helvetica text; template artwork is a press-side concern and
//! is never drawn here.

use badge_layout::{
    Face, FacePlacement, TypographyMetrics, resolve_face_placement, uniform_from_metrics,
};
use badge_sheet::{LayoutMode, build_slots, chunk_into_sheets, group_records};
use printpdf::*;
use std::collections::HashMap;
use std::path::Path;

use crate::options::BadgeOptions;
use crate::types::Result;

const PT_TO_MM: f32 = 0.352778;
/// Flat average Helvetica advance in em units; close enough for
/// centering and wrap budgets at card sizes.
const AVG_ADVANCE_EM: f32 = 0.52;
const LINE_HEIGHT: f32 = 1.15;

/// One card's resolved text payload.
#[derive(Debug, Clone)]
struct CardText {
    name: String,
    company: String,
    metrics: TypographyMetrics,
    scale_front: f32,
    scale_back: f32,
}

impl CardText {
    fn scale_for(&self, face: Face) -> f32 {
        match face {
            Face::Front => self.scale_front,
            Face::Back => self.scale_back,
        }
    }
}

pub async fn generate_badges_pdf(
    attendees: &[badge_layout::Attendee],
    options: &BadgeOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let attendees = attendees.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes =
        tokio::task::spawn_blocking(move || badges_pdf_bytes(&attendees, &options)).await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

/// Build the full duplex PDF in memory.
///
/// An empty roster produces a valid zero-page document.
pub fn badges_pdf_bytes(
    attendees: &[badge_layout::Attendee],
    options: &BadgeOptions,
) -> Result<Vec<u8>> {
    options.validate()?;

    let tuning = &options.tuning;
    // Resolution is pure, so identical text pairs (shared company names,
    // duplicate rows) resolve once per run.
    let mut resolved: HashMap<(String, String), TypographyMetrics> = HashMap::new();
    let mut cards: Vec<CardText> = attendees
        .iter()
        .enumerate()
        .map(|(i, attendee)| {
            let record = options.overrides.get(&i);
            let name = record
                .map(|o| o.effective_name(attendee))
                .unwrap_or(&attendee.full_name);
            let company = record
                .map(|o| o.effective_company(attendee))
                .unwrap_or(&attendee.company);
            // Blank fields render their placeholders, matching what the
            // resolver sizes for.
            let name = if name.trim().is_empty() {
                badge_layout::PLACEHOLDER_NAME
            } else {
                name
            };
            let company = if company.trim().is_empty() {
                badge_layout::PLACEHOLDER_COMPANY
            } else {
                company
            };
            let metrics = *resolved
                .entry((name.to_string(), company.to_string()))
                .or_insert_with(|| TypographyMetrics::resolve(name, company, tuning));
            CardText {
                name: name.to_string(),
                company: company.to_string(),
                metrics,
                scale_front: options.font_scale.factor(Face::Front, record),
                scale_back: options.font_scale.factor(Face::Back, record),
            }
        })
        .collect();

    if options.uniform_scaling {
        if let Some(uniform) = uniform_from_metrics(cards.iter().map(|c| c.metrics)) {
            for card in &mut cards {
                card.metrics = uniform.override_onto(&card.metrics);
            }
        }
    }

    let template = &options.template;
    let columns = template.grid.columns;
    let page_width_mm = options.card_width_mm * columns as f32;
    let page_height_mm = options.card_height_mm * template.grid.rows as f32;

    let groups = group_records(&cards, options.layout_mode);
    let chunks = chunk_into_sheets(&groups, template.per_sheet);

    let mut doc = PdfDocument::new("Badges");
    let mut pages = Vec::new();

    for chunk in chunks {
        for face in [Face::Front, Face::Back] {
            let slots = build_slots(chunk, face, template);
            let mut ops = Vec::new();

            for (slot_index, slot) in slots.into_iter().enumerate() {
                let Some(group) = slot else { continue };
                let row = slot_index / columns;
                let col = slot_index % columns;
                let cell_left = col as f32 * options.card_width_mm;
                let cell_top = page_height_mm - row as f32 * options.card_height_mm;
                draw_card(&mut ops, group, face, options, cell_left, cell_top);
            }

            pages.push(PdfPage::new(
                Mm(page_width_mm),
                Mm(page_height_mm),
                ops,
            ));
        }
    }

    doc.pages = pages;

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}

/// Paint one card's face into its cell.
fn draw_card(
    ops: &mut Vec<Op>,
    group: &[CardText],
    face: Face,
    options: &BadgeOptions,
    cell_left: f32,
    cell_top: f32,
) {
    match options.layout_mode {
        LayoutMode::Mirror => {
            let Some(card) = group.first() else { return };
            let placement =
                resolve_face_placement(&card.metrics, &options.adjustments, face, &options.tuning);
            let metrics = card.metrics.with_font_scale(card.scale_for(face));
            let center_x = cell_left + options.card_width_mm / 2.0 + placement.horizontal_mm;
            let block_top = cell_top - placement.offset_mm;

            push_text_block(ops, card, &metrics, &placement, center_x, block_top, None);

            // The fold-over copy: the same block point-mirrored through
            // the card center, so it sits `offset` above the bottom edge
            // reading upside-down.
            let mirror_center = (
                cell_left + options.card_width_mm / 2.0,
                cell_top - options.card_height_mm / 2.0,
            );
            push_text_block(
                ops,
                card,
                &metrics,
                &placement,
                center_x,
                block_top,
                Some(mirror_center),
            );
        }
        LayoutMode::Paired => {
            for (position, card) in group.iter().take(2).enumerate() {
                let placement = resolve_face_placement(
                    &card.metrics,
                    &options.adjustments,
                    face,
                    &options.tuning,
                );
                let metrics = card.metrics.with_font_scale(card.scale_for(face));
                let center_x = cell_left + options.card_width_mm / 2.0 + placement.horizontal_mm;
                let block_top = if position == 0 {
                    cell_top - placement.top_offset_mm
                } else {
                    cell_top - options.card_height_mm / 2.0 - placement.bottom_offset_mm
                };
                push_text_block(ops, card, &metrics, &placement, center_x, block_top, None);
            }
        }
    }
}

/// Name block over company block, wrapped to the width budget and
/// centered on `center_x`. With `mirror_center` set, every line is
/// point-mirrored through it (a 180° rotation for the fold-over copy).
fn push_text_block(
    ops: &mut Vec<Op>,
    card: &CardText,
    metrics: &TypographyMetrics,
    placement: &FacePlacement,
    center_x: f32,
    block_top: f32,
    mirror_center: Option<(f32, f32)>,
) {
    let name_line_mm = metrics.name_size_pt * PT_TO_MM * LINE_HEIGHT;
    let company_line_mm = metrics.company_size_pt * PT_TO_MM * LINE_HEIGHT;

    let mut y = block_top;
    for line in wrap_to_width(&card.name, metrics.name_size_pt, placement.width_mm) {
        y -= name_line_mm;
        push_line(ops, &line, metrics.name_size_pt, center_x, y, mirror_center);
    }

    y -= placement.gap_mm;
    for line in wrap_to_width(&card.company, metrics.company_size_pt, placement.width_mm) {
        y -= company_line_mm;
        push_line(
            ops,
            &line,
            metrics.company_size_pt,
            center_x,
            y,
            mirror_center,
        );
    }
}

fn push_line(
    ops: &mut Vec<Op>,
    text: &str,
    size_pt: f32,
    center_x: f32,
    baseline_y: f32,
    mirror_center: Option<(f32, f32)>,
) {
    let start_x = center_x - text_width_mm(text, size_pt) / 2.0;

    let matrix = match mirror_center {
        None => TextMatrix::Translate(Mm(start_x).into_pt(), Mm(baseline_y).into_pt()),
        Some((cx, cy)) => TextMatrix::TranslateRotate(
            Mm(2.0 * cx - start_x).into_pt(),
            Mm(2.0 * cy - baseline_y).into_pt(),
            180.0,
        ),
    };

    ops.push(Op::StartTextSection);
    ops.push(Op::SetFontSizeBuiltinFont {
        font: BuiltinFont::Helvetica,
        size: Pt(size_pt),
    });
    ops.push(Op::SetTextMatrix { matrix });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_string())],
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::EndTextSection);
}

fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * AVG_ADVANCE_EM * size_pt * PT_TO_MM
}

/// Greedy wrap against the block's character budget at this size.
fn wrap_to_width(text: &str, size_pt: f32, width_mm: f32) -> Vec<String> {
    let char_width_mm = AVG_ADVANCE_EM * size_pt * PT_TO_MM;
    let budget = ((width_mm / char_width_mm) as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars > budget {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        } else {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_budget() {
        // 27pt → char ≈ 4.95mm → 74mm budget ≈ 14 chars.
        let lines = wrap_to_width("María Aguayo Fernández", 27.0, 74.0);
        assert_eq!(lines, vec!["María Aguayo", "Fernández"]);

        let lines = wrap_to_width("Kia", 16.6, 74.0);
        assert_eq!(lines, vec!["Kia"]);

        assert!(wrap_to_width("", 16.6, 74.0).is_empty());
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let lines = wrap_to_width("Telecomunicaciones SA", 20.0, 50.0);
        assert_eq!(lines[0], "Telecomunicaciones");
        assert_eq!(lines[1], "SA");
    }
}
