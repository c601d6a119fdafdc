//! Partitioning a roster into cards, sheets and duplex-aligned slots.
//!
//! The composer is independent of the typography engine: it works over
//! any record type and only meets the metrics at the rendering boundary.

use badge_layout::{Attendee, Face};

use crate::template::Template;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How attendees map onto physical cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutMode {
    /// One attendee per card, repeated upside-down on the lower half so
    /// the folded card reads from both sides.
    #[default]
    Mirror,
    /// Two attendees per card, upper and lower half.
    Paired,
}

/// Group records into cards according to the layout mode.
///
/// Mirror puts one record on each card; Paired takes consecutive pairs,
/// with a trailing singleton when the roster is odd.
pub fn group_records<T: Clone>(records: &[T], mode: LayoutMode) -> Vec<Vec<T>> {
    match mode {
        LayoutMode::Mirror => records.iter().map(|r| vec![r.clone()]).collect(),
        LayoutMode::Paired => records.chunks(2).map(|pair| pair.to_vec()).collect(),
    }
}

/// Split the ordered card list into sheet-sized windows.
///
/// The partition is exact: concatenating the chunks reproduces the
/// input, and only the last chunk may be short. A zero capacity yields
/// no sheets rather than failing.
pub fn chunk_into_sheets<T>(groups: &[T], per_sheet: usize) -> Vec<&[T]> {
    if per_sheet == 0 {
        return Vec::new();
    }
    groups.chunks(per_sheet).collect()
}

/// Place one sheet's cards into slots for the given face.
///
/// Card *i* of the chunk lands at `order[i]`; slots past the end of a
/// short final chunk stay empty.
pub fn build_slots<'a, T>(chunk: &'a [T], face: Face, template: &Template) -> Vec<Option<&'a T>> {
    let order = template.order(face);
    let mut slots: Vec<Option<&T>> = vec![None; template.per_sheet];
    for (group, &slot) in chunk.iter().zip(order.iter()) {
        if let Some(entry) = slots.get_mut(slot) {
            *entry = Some(group);
        }
    }
    slots
}

/// Headline numbers for a print run.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStatistics {
    /// Attendees on the roster.
    pub people: usize,
    /// Physical cards (groups) to produce.
    pub cards: usize,
    /// Sheets needed at the template's capacity.
    pub sheets: usize,
    /// Output pages: front and back of each sheet.
    pub output_pages: usize,
    /// Unused slots on the final sheet.
    pub empty_slots: usize,
}

/// Compute the run statistics without composing anything.
pub fn calculate_statistics(
    people: usize,
    mode: LayoutMode,
    template: &Template,
) -> PrintStatistics {
    let cards = match mode {
        LayoutMode::Mirror => people,
        LayoutMode::Paired => people.div_ceil(2),
    };
    let sheets = if template.per_sheet == 0 {
        0
    } else {
        cards.div_ceil(template.per_sheet)
    };
    PrintStatistics {
        people,
        cards,
        sheets,
        output_pages: sheets * 2,
        empty_slots: sheets * template.per_sheet - cards,
    }
}

/// Convenience: group a roster and report the statistics in one call.
pub fn statistics_for(
    attendees: &[Attendee],
    mode: LayoutMode,
    template: &Template,
) -> PrintStatistics {
    calculate_statistics(attendees.len(), mode, template)
}
