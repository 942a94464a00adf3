use std::path::PathBuf;

use chrono::NaiveDate;

/// Errors that occur when parsing a birth date.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DateError {
    /// The date string matched none of the accepted formats (`dd/mm/yyyy`, `dd-mm-yyyy`), or
    /// named a day that does not exist.
    #[error("Date `{date_str}` should be in dd/mm/yyyy or dd-mm-yyyy format")]
    InvalidDateFormat {
        /// The string that failed to parse.
        date_str: String,
    },
}

/// Errors that occur when deriving the grid geometry from a configuration.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LayoutError {
    /// The page should have a positive width and height.
    #[error("Page dimensions should be positive, got {width}x{height}")]
    NonPositivePage {
        /// Configured page width.
        width: f64,
        /// Configured page height.
        height: f64,
    },

    /// The grid should have at least one row and one column.
    #[error("Grid should have at least one row and column, got {rows} rows and {columns} columns")]
    EmptyGrid {
        /// Configured number of rows.
        rows: u32,
        /// Configured number of columns.
        columns: u32,
    },

    /// The margins leave no room for the boxes.
    #[error("Box size should be positive, but the configured margins leave {box_size}")]
    NonPositiveBoxSize {
        /// The box size that would have been derived.
        box_size: f64,
    },

    /// The grid is wider than the page.
    #[error("Grid of width {grid_width} should fit in page of width {page_width}")]
    GridTooWide {
        /// Total width of all columns, including box margins.
        grid_width: f64,
        /// Configured page width.
        page_width: f64,
    },
}

/// Errors that occur while drawing the calendar onto a canvas.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// The output document could not be created. Nothing has been drawn when this is returned.
    #[error("Could not create output file `{}`: {source}", path.display())]
    OutputCreation {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// A week in the grid lies beyond the range of representable dates.
    #[error("Week {weeks} after {start} is outside the representable date range")]
    DateOutOfRange {
        /// The first day of the calendar.
        start: NaiveDate,
        /// The number of weeks past `start` that could not be represented.
        weeks: u64,
    },

    /// The PDF content could not be encoded or written.
    #[error("{0}")]
    Pdf(#[from] lopdf::Error),

    /// The finished document could not be flushed to disk.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Wrapper for all the errors this crate can produce, for callers that don't care which stage
/// failed.
#[derive(thiserror::Error, Debug)]
pub enum CalendarError {
    /// See [DateError].
    #[error(transparent)]
    Date(#[from] DateError),

    /// See [LayoutError].
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// See [RenderError].
    #[error(transparent)]
    Render(#[from] RenderError),
}
