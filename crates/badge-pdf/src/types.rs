use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Sheet layout error: {0}")]
    Sheet(#[from] badge_sheet::SheetError),
}

pub type Result<T> = std::result::Result<T, BadgeError>;
