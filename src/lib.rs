//! # lifecal
//!
//! Renders a "life calendar": one page with a box for every week of a ninety year life, one row
//! per year, starting from a birth date.
//!
//! ## Examples
//!
//! Render straight to a PDF file:
//!
//! ```no_run
//! use lifecal::prelude::*;
//!
//! let birth: BirthDate = "15/06/1990".parse().unwrap();
//! let renderer = Renderer::new(CalendarConfig::default()).unwrap();
//! let mut canvas = PdfCanvas::create("life_calendar.pdf", renderer.config().page).unwrap();
//! renderer.render(&birth, &mut canvas).unwrap();
//! ```
//!
//! Or look at the weeks without drawing anything:
//!
//! ```
//! use lifecal::prelude::*;
//!
//! let grid = LifeGrid::new("01/01/2000".parse().unwrap(), GridDimensions::LIFETIME);
//! let first = grid.cell(0, 0).unwrap();
//! assert_eq!(first.kind, WeekKind::Birthday);
//! ```
//!
//! ## Important Terms
//!
//! - **Cell**: one box of the grid, standing for seven days. Row `r`, column `c` starts
//!   `r * 52 + c` weeks after the birth date.
//! - **Birthday week**: a cell whose seven days contain the birthday's anniversary.
//! - **New-year week**: a cell whose seven days contain the 1st of January. When both apply, the
//!   cell is a birthday week.
//! - **Box geometry**: box size, gaps and margins. Boxes fill the page height below the header
//!   exactly, and the columns are centered across the page width.
//!
//! ## Dates
//!
//! Birth dates are accepted as `dd/mm/yyyy` or `dd-mm-yyyy`. Someone born on the 29th of February
//! has their birthday week marked on the 28th in common years.
#![warn(missing_docs)]

mod canvas;
mod config;
mod date;
mod error;
mod font;
mod layout;
mod render;
mod week;

pub use crate::canvas::{Canvas, DrawOp, PdfCanvas, RecordingCanvas, Rect};
pub use crate::config::{CalendarConfig, FontSizes, GridDimensions, PageSize, Palette, Rgb};
pub use crate::date::BirthDate;
pub use crate::error::{CalendarError, DateError, LayoutError, RenderError};
pub use crate::font::{FontFace, Slant, TextExtents, Weight};
pub use crate::layout::BoxGeometry;
pub use crate::render::{RenderSummary, Renderer};
pub use crate::week::{is_current_week, LifeGrid, WeekCell, WeekKind};

/// A convenience module appropriate for glob imports (`use lifecal::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::BirthDate;
    #[doc(no_inline)]
    pub use crate::CalendarConfig;
    #[doc(no_inline)]
    pub use crate::CalendarError;
    #[doc(no_inline)]
    pub use crate::Canvas;
    #[doc(no_inline)]
    pub use crate::GridDimensions;
    #[doc(no_inline)]
    pub use crate::LifeGrid;
    #[doc(no_inline)]
    pub use crate::PdfCanvas;
    #[doc(no_inline)]
    pub use crate::RecordingCanvas;
    #[doc(no_inline)]
    pub use crate::Renderer;
    #[doc(no_inline)]
    pub use crate::WeekKind;
}
