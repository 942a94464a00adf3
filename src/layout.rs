use crate::{config::CalendarConfig, error::LayoutError};
use log::debug;

/// Sizes and offsets of the grid on the page, all in device units.
///
/// The boxes fill the vertical space between the header and footer margins exactly, and the
/// columns are centered horizontally, so that
/// `(box_size + box_margin) * columns + 2 * x_margin == page_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    /// Edge length of one box.
    pub box_size: f64,
    /// Gap between neighbouring boxes.
    pub box_margin: f64,
    /// Distance from the left (and right) page edge to the grid.
    pub x_margin: f64,
    /// Distance from the top page edge to the first row.
    pub y_margin: f64,
}

impl BoxGeometry {
    /// Derives the geometry for `config`.
    ///
    /// # Errors
    ///
    /// - If the page has a non-positive side, returns [LayoutError::NonPositivePage].
    /// - If the grid has no rows or no columns, returns [LayoutError::EmptyGrid].
    /// - If the margins leave no room for a box, returns [LayoutError::NonPositiveBoxSize].
    /// - If the columns don't fit across the page, returns [LayoutError::GridTooWide].
    pub fn compute(config: &CalendarConfig) -> Result<Self, LayoutError> {
        let page = config.page;
        let grid = config.grid;

        if !(page.width > 0.0 && page.height > 0.0) {
            return Err(LayoutError::NonPositivePage {
                width: page.width,
                height: page.height,
            });
        }
        if grid.rows == 0 || grid.columns == 0 {
            return Err(LayoutError::EmptyGrid {
                rows: grid.rows,
                columns: grid.columns,
            });
        }

        let usable_height = page.height - (config.header_margin + config.footer_margin);
        let box_size = usable_height / f64::from(grid.rows) - config.box_margin;
        if !(box_size > 0.0) {
            return Err(LayoutError::NonPositiveBoxSize { box_size });
        }

        let grid_width = (box_size + config.box_margin) * f64::from(grid.columns);
        if grid_width > page.width {
            return Err(LayoutError::GridTooWide {
                grid_width,
                page_width: page.width,
            });
        }

        let geometry = Self {
            box_size,
            box_margin: config.box_margin,
            x_margin: (page.width - grid_width) / 2.0,
            y_margin: config.header_margin,
        };
        debug!("computed grid geometry: {geometry:?}");
        Ok(geometry)
    }

    /// Distance from one box's left edge to the next one's.
    pub fn pitch(&self) -> f64 {
        self.box_size + self.box_margin
    }

    /// Top-left corner of the box at `row`, `column`.
    pub fn box_origin(&self, row: u32, column: u32) -> (f64, f64) {
        (
            self.x_margin + f64::from(column) * self.pitch(),
            self.y_margin + f64::from(row) * self.pitch(),
        )
    }
}
