use thiserror::Error;

/// Errors surfaced by loading, configuring and rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no rows to plot")]
    EmptyData,

    #[error("invalid row for year {year}: {reason}")]
    InvalidRow { year: i32, reason: String },

    #[error("duplicate year {0} in data")]
    DuplicateYear(i32),

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("no element matches event target {0}")]
    UnknownTarget(String),

    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
