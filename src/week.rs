use crate::{config::GridDimensions, date::BirthDate, error::RenderError};
use chrono::{Datelike, Days, NaiveDate};

const DAYS_PER_WEEK: u64 = 7;

/// What a cell is highlighted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekKind {
    /// The week contains the birthday.
    Birthday,
    /// The week contains the 1st of January.
    NewYear,
    /// Neither.
    Plain,
}

impl WeekKind {
    /// Classifies the week beginning on `week_start` for someone born on `birth`.
    ///
    /// A birthday match wins over a new-year match, so a person born on the 1st of January only
    /// ever sees birthday weeks.
    pub fn classify(week_start: NaiveDate, birth: &BirthDate) -> Self {
        let (month, day) = birth.anniversary();
        if is_current_week(week_start, month, day) {
            WeekKind::Birthday
        } else if is_current_week(week_start, 1, 1) {
            WeekKind::NewYear
        } else {
            WeekKind::Plain
        }
    }
}

/// The date on which `month`/`day` falls in `year`. Days past the end of the month, i.e. the 29th
/// of February in common years, fall on the month's last day instead.
fn occurrence(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    (1..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
}

/// Returns true if `month`/`day` occurs within `[week_start, week_start + 7 days)`.
///
/// The occurrence in the year after `week_start`'s is checked too, since a week starting in late
/// December reaches into January.
pub fn is_current_week(week_start: NaiveDate, month: u32, day: u32) -> bool {
    let Some(week_end) = week_start.checked_add_days(Days::new(DAYS_PER_WEEK)) else {
        return false;
    };
    let year = week_start.year();
    [year, year + 1]
        .into_iter()
        .filter_map(|y| occurrence(y, month, day))
        .any(|date| week_start <= date && date < week_end)
}

/// One box of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCell {
    /// Years since birth.
    pub row: u32,
    /// Weeks into the row.
    pub column: u32,
    /// First day of the week the cell stands for.
    pub start: NaiveDate,
    /// How the cell is highlighted.
    pub kind: WeekKind,
}

/// The weeks of a life, laid out as rows of years.
///
/// Every row is exactly `columns` weeks long, so rows drift a day or two against the calendar
/// year as the grid goes on.
#[derive(Debug, Clone, Copy)]
pub struct LifeGrid {
    birth: BirthDate,
    dims: GridDimensions,
}

impl LifeGrid {
    /// A grid of `dims` starting on `birth`.
    pub fn new(birth: BirthDate, dims: GridDimensions) -> Self {
        Self { birth, dims }
    }

    /// Rows and columns of the grid.
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// First day of the week `weeks` weeks after the birth date.
    fn week_start(&self, weeks: u64) -> Result<NaiveDate, RenderError> {
        weeks
            .checked_mul(DAYS_PER_WEEK)
            .and_then(|days| self.birth.checked_add_days(Days::new(days)))
            .ok_or(RenderError::DateOutOfRange {
                start: *self.birth,
                weeks,
            })
    }

    /// First day of `row`.
    pub fn row_start(&self, row: u32) -> Result<NaiveDate, RenderError> {
        self.week_start(u64::from(row) * u64::from(self.dims.columns))
    }

    /// The cell at `row`, `column`.
    ///
    /// # Errors
    ///
    /// - If the cell's week can't be represented as a date, returns
    ///   [RenderError::DateOutOfRange].
    pub fn cell(&self, row: u32, column: u32) -> Result<WeekCell, RenderError> {
        let weeks = u64::from(row) * u64::from(self.dims.columns) + u64::from(column);
        let start = self.week_start(weeks)?;
        Ok(WeekCell {
            row,
            column,
            start,
            kind: WeekKind::classify(start, &self.birth),
        })
    }

    /// All cells of `row`, left to right.
    pub fn row(&self, row: u32) -> impl Iterator<Item = Result<WeekCell, RenderError>> + '_ {
        (0..self.dims.columns).map(move |column| self.cell(row, column))
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Result<WeekCell, RenderError>> + '_ {
        (0..self.dims.rows).flat_map(move |row| self.row(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::{fixture, rstest};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn birth(date_str: &str) -> BirthDate {
        BirthDate::parse(date_str).unwrap()
    }

    #[fixture]
    fn midsummer() -> LifeGrid {
        LifeGrid::new(birth("15/06/1990"), GridDimensions::LIFETIME)
    }

    #[rstest]
    #[case(ymd(2020, 6, 15), true)] // first day
    #[case(ymd(2020, 6, 9), true)] // last day
    #[case(ymd(2020, 6, 8), false)] // one past the end
    #[case(ymd(2020, 6, 16), false)] // starts the day after
    fn test_week_span_is_half_open(#[case] start: NaiveDate, #[case] current: bool) {
        assert_eq!(is_current_week(start, 6, 15), current);
    }

    #[rstest]
    #[case(ymd(2019, 12, 26))]
    #[case(ymd(2019, 12, 29))]
    #[case(ymd(2019, 12, 31))]
    #[case(ymd(2020, 1, 1))]
    fn test_week_crossing_new_year(#[case] start: NaiveDate) {
        assert!(is_current_week(start, 1, 1));
        assert_eq!(
            WeekKind::classify(start, &birth("15/06/1990")),
            WeekKind::NewYear
        );
    }

    #[test]
    fn test_december_week_misses_new_year() {
        assert!(!is_current_week(ymd(2019, 12, 25), 1, 1));
    }

    #[test]
    fn test_birthday_after_year_boundary() {
        // birthday on the 3rd of January, week starting in late December
        assert!(is_current_week(ymd(2021, 12, 30), 1, 3));
        assert_eq!(
            WeekKind::classify(ymd(2021, 12, 30), &birth("03/01/1980")),
            WeekKind::Birthday
        );
    }

    #[rstest]
    #[case(ymd(2021, 2, 22), true)] // contains the 28th
    #[case(ymd(2021, 3, 1), false)]
    #[case(ymd(2024, 2, 23), true)] // leap year, contains the 29th
    #[case(ymd(2024, 3, 1), false)]
    fn test_leap_day_birthday(#[case] start: NaiveDate, #[case] current: bool) {
        assert_eq!(is_current_week(start, 2, 29), current);
    }

    #[test]
    fn test_birthday_takes_precedence() {
        let birth = birth("01/01/2000");
        assert_eq!(WeekKind::classify(ymd(2000, 1, 1), &birth), WeekKind::Birthday);
        assert_eq!(WeekKind::classify(ymd(2030, 12, 28), &birth), WeekKind::Birthday);
    }

    #[test]
    fn test_new_year_birthday_has_no_new_year_cells() {
        let grid = LifeGrid::new(birth("01/01/2000"), GridDimensions::LIFETIME);
        let first = grid.cell(0, 0).unwrap();
        assert_eq!(first.kind, WeekKind::Birthday);
        assert!(grid
            .cells()
            .map(Result::unwrap)
            .all(|cell| cell.kind != WeekKind::NewYear));
    }

    #[rstest]
    fn test_cell_dates(midsummer: LifeGrid) {
        assert_eq!(midsummer.cell(0, 0).unwrap().start, ymd(1990, 6, 15));
        assert_eq!(midsummer.cell(0, 1).unwrap().start, ymd(1990, 6, 22));
        assert_eq!(midsummer.cell(1, 0).unwrap().start, ymd(1991, 6, 14));
        assert_eq!(midsummer.row_start(1).unwrap(), ymd(1991, 6, 14));
    }

    #[rstest]
    fn test_classification_matches_week_contents(midsummer: LifeGrid) {
        let birth = birth("15/06/1990");
        for (row, column) in (0..90u32).cartesian_product(0..52u32) {
            let cell = midsummer.cell(row, column).unwrap();
            let days = cell.start.iter_days().take(7).collect_vec();
            let has_birthday = days.iter().any(|d| d.month() == 6 && d.day() == 15);
            let has_new_year = days.iter().any(|d| d.month() == 1 && d.day() == 1);

            let expected = if has_birthday {
                WeekKind::Birthday
            } else if has_new_year {
                WeekKind::NewYear
            } else {
                WeekKind::Plain
            };
            assert_eq!(cell.kind, expected, "cell {row},{column}");
            assert_eq!(WeekKind::classify(cell.start, &birth), cell.kind);
        }
    }

    #[rstest]
    fn test_every_row_has_one_birthday_and_new_year(midsummer: LifeGrid) {
        // a 52 week row is 364 days, so it can miss an anniversary or contain the same one twice
        // only at its very edges
        let counts = midsummer
            .cells()
            .map(Result::unwrap)
            .map(|cell| cell.kind)
            .counts();
        assert!(counts[&WeekKind::Birthday] >= 89);
        assert!(counts[&WeekKind::NewYear] >= 89);
        assert_eq!(counts.values().sum::<usize>(), 4680);
    }

    #[rstest]
    fn test_cells_are_row_major(midsummer: LifeGrid) {
        let positions = midsummer
            .cells()
            .map(Result::unwrap)
            .map(|cell| (cell.row, cell.column))
            .collect_vec();
        let expected = (0..90u32).cartesian_product(0..52u32).collect_vec();
        assert_eq!(positions, expected);
    }

    #[test]
    fn test_out_of_range() {
        let grid = LifeGrid::new(
            BirthDate::explicit(262_100, 1, 1).unwrap(),
            GridDimensions::LIFETIME,
        );
        assert!(matches!(
            grid.cell(89, 51),
            Err(RenderError::DateOutOfRange { .. })
        ));
    }
}
