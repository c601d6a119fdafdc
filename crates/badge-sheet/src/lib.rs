//! Sheet composition for duplex card printing.
//!
//! Splits an ordered roster into fixed-capacity sheets and computes the
//! front/back slot placement so that, after the physical duplex flip,
//! every back slot aligns with its front counterpart:
//! - record grouping (one-per-card mirror, two-per-card paired)
//! - chunking into sheets (exact partition, short tail allowed)
//! - per-face slot permutations carried as template data
//! - print-run statistics

mod compose;
mod template;
mod types;

pub use compose::{
    LayoutMode, PrintStatistics, build_slots, calculate_statistics, chunk_into_sheets,
    group_records, statistics_for,
};
pub use template::{GridShape, Template};
pub use types::{Result, SheetError};
