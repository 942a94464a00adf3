use crate::error::DateError;
use chrono::{Datelike, NaiveDate};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// Formats accepted for a birth date and the separator each uses, tried in order.
const ACCEPTED_FORMATS: [(&str, char); 2] = [("%d/%m/%Y", '/'), ("%d-%m-%Y", '-')];

/// `%Y` alone takes any number of digits and a sign, so the year is checked separately.
fn has_full_year(date_str: &str, separator: char) -> bool {
    date_str
        .rsplit(separator)
        .next()
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

/// Format of the row labels, e.g. `15 Jun, 1990`.
const LABEL_FORMAT: &str = "%d %b, %Y";

/// The first day of a life calendar.
///
/// ```
/// use lifecal::BirthDate;
///
/// let date: BirthDate = "15/06/1990".parse().unwrap();
/// assert_eq!(date, "15-06-1990".parse().unwrap());
/// assert!("1990-06-15".parse::<BirthDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Returns result of a new [BirthDate] for the given components, or
    /// [DateError::InvalidDateFormat] if they do not name a real day.
    pub fn explicit(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DateError::InvalidDateFormat {
                date_str: format!("{day:02}/{month:02}/{year}"),
            })
    }

    /// Parses `date_str` against each accepted format in turn and returns the first match.
    ///
    /// # Errors
    ///
    /// - If no format matches, the year is not exactly four digits, or the matched components are
    ///   not a real date, returns [DateError::InvalidDateFormat].
    pub fn parse(date_str: &str) -> Result<Self, DateError> {
        let trimmed = date_str.trim();
        ACCEPTED_FORMATS
            .iter()
            .filter(|(_, separator)| has_full_year(trimmed, *separator))
            .find_map(|(format, _)| NaiveDate::parse_from_str(trimmed, format).ok())
            .map(Self)
            .ok_or_else(|| DateError::InvalidDateFormat {
                date_str: date_str.to_owned(),
            })
    }

    /// The month and day on which the birthday recurs.
    pub fn anniversary(&self) -> (u32, u32) {
        (self.0.month(), self.0.day())
    }
}

impl FromStr for BirthDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Deref for BirthDate {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}

/// Formats a date the way row labels show it.
pub(crate) fn row_label(date: &NaiveDate) -> String {
    date.format(LABEL_FORMAT).to_string()
}
