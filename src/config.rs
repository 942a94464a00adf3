//! The fixed look of a life calendar: page size, margins, grid shape, fonts, colours and texts.

/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);

    /// A neutral gray of the given level.
    pub const fn gray(level: f64) -> Self {
        Rgb(level, level, level)
    }
}

/// Size of the output page in device units (points, 72 per inch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl PageSize {
    /// 26 x 40 inches.
    pub const POSTER: PageSize = PageSize {
        width: 1872.0,
        height: 2880.0,
    };
}

/// Number of rows (years) and columns (weeks) in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    /// One per year.
    pub rows: u32,
    /// One per week.
    pub columns: u32,
}

impl GridDimensions {
    /// Ninety years of fifty-two weeks.
    pub const LIFETIME: GridDimensions = GridDimensions {
        rows: 90,
        columns: 52,
    };

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    /// Title.
    pub heading: f64,
    /// Unused by the default layout; available to callers drawing extra text.
    pub small: f64,
    /// Legend, week numbers and row labels.
    pub tiny: f64,
}

/// Colours of everything on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background.
    pub background: Rgb,
    /// Title, legend and labels.
    pub text: Rgb,
    /// Box outlines.
    pub outline: Rgb,
    /// Weeks that are neither a birthday nor a new-year week.
    pub plain: Rgb,
    /// Birthday weeks and their legend swatch.
    pub birthday: Rgb,
    /// New-year weeks and their legend swatch.
    pub new_year: Rgb,
}

/// Everything the renderer needs to know besides the birth date. Built once, passed down.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    /// Size of the single output page.
    pub page: PageSize,
    /// Years and weeks shown.
    pub grid: GridDimensions,
    /// Space above the grid reserved for the title, legend and week numbers.
    pub header_margin: f64,
    /// Space below the grid.
    pub footer_margin: f64,
    /// Gap between neighbouring boxes.
    pub box_margin: f64,
    /// Width of the outline around every box.
    pub stroke_width: f64,
    /// Sizes of the title and label fonts.
    pub fonts: FontSizes,
    /// Fill, outline and text colours.
    pub palette: Palette,
    /// Centered above the grid.
    pub title: String,
    /// Legend text for birthday weeks.
    pub birthday_desc: String,
    /// Legend text for new-year weeks.
    pub new_year_desc: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            page: PageSize::POSTER,
            grid: GridDimensions::LIFETIME,
            header_margin: 144.0,
            footer_margin: 36.0,
            box_margin: 10.0,
            stroke_width: 4.0,
            fonts: FontSizes {
                heading: 48.0,
                small: 16.0,
                tiny: 12.0,
            },
            palette: Palette {
                background: Rgb::WHITE,
                text: Rgb::BLACK,
                outline: Rgb::BLACK,
                plain: Rgb::WHITE,
                birthday: Rgb::gray(0.5),
                new_year: Rgb::gray(0.8),
            },
            title: "LIFE CALENDAR".to_owned(),
            birthday_desc: "Week of your birthday".to_owned(),
            new_year_desc: "First week of the new year".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lifetime_poster() {
        let config = CalendarConfig::default();
        assert_eq!(config.page, PageSize::POSTER);
        assert_eq!(config.grid.cell_count(), 4680);
    }

    #[test]
    fn test_poster_is_26_by_40_inches() {
        assert_eq!(PageSize::POSTER.width / 72.0, 26.0);
        assert_eq!(PageSize::POSTER.height / 72.0, 40.0);
    }
}
