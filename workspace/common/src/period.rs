//! Calendar months and the Actual/Forecast split.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DataError, Result};

/// A calendar month, stored as the first day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period(NaiveDate);

impl Period {
    /// Builds the period for `year`/`month`, or `None` if the month is invalid.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Const constructor for compiled-in tables.
    ///
    /// Panics on an invalid month, which turns a typo in a constant table
    /// into a compile error.
    pub const fn month(year: i32, month: u32) -> Self {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => Self(date),
            None => panic!("invalid calendar month"),
        }
    }

    /// The period a given date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self(date - Days::new(u64::from(date.day0())))
    }

    pub fn previous(self) -> Self {
        Self(self.0 - Months::new(1))
    }

    pub fn next(self) -> Self {
        Self(self.0 + Months::new(1))
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Short axis label, e.g. `Apr 25`.
    pub fn label(self) -> String {
        self.0.format("%b %y").to_string()
    }

    /// Abbreviated month name, e.g. `Apr`.
    pub fn month_name(self) -> String {
        self.0.format("%b").to_string()
    }

    /// Month name with the full year, e.g. `Apr 2025`.
    pub fn long_label(self) -> String {
        self.0.format("%b %Y").to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Whether a figure is already realized or projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Actual,
    Forecast,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Actual => "Actual",
            Classification::Forecast => "Forecast",
        }
    }

    pub fn is_forecast(self) -> bool {
        matches!(self, Classification::Forecast)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anchors the dashboards to a "current" date.
///
/// The month containing `as_of` is where the TODAY marker sits. Everything
/// up to and including the month before it (the boundary month) is Actual;
/// everything later is Forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingCalendar {
    as_of: NaiveDate,
}

impl ReportingCalendar {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn today_month(&self) -> Period {
        Period::containing(self.as_of)
    }

    /// Last month classified as Actual.
    pub fn boundary(&self) -> Period {
        self.today_month().previous()
    }

    pub fn classify(&self, period: Period) -> Classification {
        if period <= self.boundary() {
            Classification::Actual
        } else {
            Classification::Forecast
        }
    }

    /// Human-readable as-of date, e.g. `21 Jan 2026`.
    pub fn as_of_label(&self) -> String {
        self.as_of.format("%-d %b %Y").to_string()
    }
}

/// Checks that periods strictly increase and that no Actual follows a Forecast.
pub(crate) fn check_sequence<I>(entries: I) -> Result<()>
where
    I: IntoIterator<Item = (Period, Classification)>,
{
    let mut previous: Option<Period> = None;
    let mut seen_forecast = false;

    for (index, (period, classification)) in entries.into_iter().enumerate() {
        if let Some(prev) = previous {
            if period <= prev {
                return Err(DataError::OutOfOrder {
                    index,
                    reason: format!("{} does not follow {}", period, prev),
                });
            }
        }

        match classification {
            Classification::Forecast => seen_forecast = true,
            Classification::Actual if seen_forecast => {
                return Err(DataError::OutOfOrder {
                    index,
                    reason: format!("Actual point {} follows a Forecast point", period),
                });
            }
            Classification::Actual => {}
        }

        previous = Some(period);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> ReportingCalendar {
        ReportingCalendar::new(NaiveDate::from_ymd_opt(2026, 1, 21).unwrap())
    }

    #[test]
    fn test_period_labels() {
        let period = Period::month(2025, 4);
        assert_eq!(period.label(), "Apr 25");
        assert_eq!(period.month_name(), "Apr");
        assert_eq!(period.long_label(), "Apr 2025");
        assert_eq!(period.to_string(), "Apr 25");
    }

    #[test]
    fn test_period_new_rejects_invalid_month() {
        assert!(Period::new(2025, 13).is_none());
        assert_eq!(Period::new(2025, 12), Some(Period::month(2025, 12)));
    }

    #[test]
    fn test_period_navigation_crosses_year() {
        let december = Period::month(2025, 12);
        assert_eq!(december.next(), Period::month(2026, 1));
        assert_eq!(Period::month(2026, 1).previous(), december);
    }

    #[test]
    fn test_containing_truncates_to_first_day() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 21).unwrap();
        let period = Period::containing(date);
        assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn test_calendar_boundary_and_classification() {
        let calendar = calendar();
        assert_eq!(calendar.today_month(), Period::month(2026, 1));
        assert_eq!(calendar.boundary(), Period::month(2025, 12));

        assert_eq!(calendar.classify(Period::month(2025, 10)), Classification::Actual);
        assert_eq!(calendar.classify(Period::month(2025, 12)), Classification::Actual);
        assert_eq!(calendar.classify(Period::month(2026, 1)), Classification::Forecast);
        assert_eq!(calendar.classify(Period::month(2026, 2)), Classification::Forecast);
    }

    #[test]
    fn test_as_of_label() {
        assert_eq!(calendar().as_of_label(), "21 Jan 2026");
    }

    #[test]
    fn test_check_sequence_accepts_ordered_split() {
        let entries = vec![
            (Period::month(2025, 11), Classification::Actual),
            (Period::month(2025, 12), Classification::Actual),
            (Period::month(2026, 1), Classification::Forecast),
        ];
        assert!(check_sequence(entries).is_ok());
    }

    #[test]
    fn test_check_sequence_rejects_interleaving() {
        let entries = vec![
            (Period::month(2025, 11), Classification::Actual),
            (Period::month(2025, 12), Classification::Forecast),
            (Period::month(2026, 1), Classification::Actual),
        ];
        match check_sequence(entries) {
            Err(DataError::OutOfOrder { index, .. }) => assert_eq!(index, 2),
            other => panic!("Expected OutOfOrder, got {:?}", other),
        }
    }

    #[test]
    fn test_check_sequence_rejects_duplicate_period() {
        let entries = vec![
            (Period::month(2025, 11), Classification::Actual),
            (Period::month(2025, 11), Classification::Actual),
        ];
        assert!(matches!(
            check_sequence(entries),
            Err(DataError::OutOfOrder { index: 1, .. })
        ));
    }
}
