use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("grid {columns}x{rows} does not match {per_sheet} slots per sheet")]
    GridMismatch {
        columns: usize,
        rows: usize,
        per_sheet: usize,
    },
    #[error("{face} slot order is not a permutation of 0..{per_sheet}")]
    InvalidOrder {
        face: &'static str,
        per_sheet: usize,
    },
    #[error("template must have at least one slot per sheet")]
    EmptyTemplate,
}

pub type Result<T> = std::result::Result<T, SheetError>;
