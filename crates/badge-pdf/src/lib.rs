//! Roster ingestion and duplex badge PDF assembly.
//!
//! Wraps the pure layout and composition crates with the two external
//! boundaries: CSV rosters in, printable front/back page pairs out.

mod csv;
mod options;
mod render;
mod types;

pub use self::csv::{attendees_from_reader, load_attendees_from_csv};
pub use options::BadgeOptions;
pub use render::{badges_pdf_bytes, generate_badges_pdf};
pub use types::{BadgeError, Result};
