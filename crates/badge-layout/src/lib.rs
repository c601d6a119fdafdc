//! Text-fitting engine for printable identification cards.
//!
//! Given arbitrary-length name and company strings, the resolvers here
//! pick font sizes, line counts, vertical offsets, gaps and block widths
//! so the text never overflows a fixed-size physical card, stays
//! balanced between the two blocks, and can be held uniform across a
//! whole print run:
//! - line estimation (greedy word-wrap simulation)
//! - font-size resolution (penalty/boost chain over a named tuning table)
//! - spacing resolution (gap, offset, width, per-face placement)
//! - uniform batch bounds (min sizes / max width over a roster)
//!
//! Everything is a total function of its inputs: no I/O, no shared
//! state, out-of-range inputs clamp instead of failing.

mod fontsize;
mod spacing;
mod tuning;
mod types;
mod uniform;
mod wrap;

pub use fontsize::{FontSizeBreakdown, resolve_font_sizes};
pub use spacing::{FacePlacement, SpacingMetrics, resolve_face_placement, resolve_spacing};
pub use tuning::{
    CompanyTuning, DensityRule, NameTuning, SizeRule, SpacingTuning, Step, TypographyTuning,
};
pub use types::{
    Attendee, FONT_SCALE_RANGE, Face, FontScale, PLACEHOLDER_COMPANY, PLACEHOLDER_NAME,
    PositionAdjustment, RecordOverride, TypographyMetrics, UniformMetrics,
};
pub use uniform::{build_uniform_metrics, uniform_from_metrics};
pub use wrap::estimate_lines;
