//! Low-revenue advisory derived from the forecast points.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::format::format_compact;
use crate::period::Period;
use crate::revenue::RevenueSeries;

/// Threshold below which a forecast month raises the advisory.
pub fn default_threshold() -> Decimal {
    Decimal::from(1_000_000)
}

/// Forecast months that fall under the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub periods: Vec<Period>,
    pub threshold: Decimal,
}

impl Advisory {
    pub const HEADLINE: &'static str = "Low Revenue Alert";

    pub const CALL_TO_ACTION: &'static str =
        "Immediate action required to convert SQL/MQLs in the pipeline.";

    /// Month names only, e.g. `Feb & Mar`.
    pub fn month_list(&self) -> String {
        let names: Vec<String> = self.periods.iter().map(|p| p.month_name()).collect();
        join_natural(&names)
    }

    /// Months with their year, e.g. `Feb & Mar 2026` or `Dec 2025 & Jan 2026`.
    pub fn period_list(&self) -> String {
        let first_year = self.periods.first().map(|p| p.year());
        let same_year = self.periods.iter().all(|p| Some(p.year()) == first_year);

        match first_year {
            Some(year) if same_year => format!("{} {}", self.month_list(), year),
            _ => {
                let labels: Vec<String> = self.periods.iter().map(|p| p.long_label()).collect();
                join_natural(&labels)
            }
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Forecast for {} drops significantly below the {} threshold.",
            self.period_list(),
            format_compact(self.threshold)
        )
    }
}

/// Returns an advisory when any Forecast point is strictly below `threshold`.
///
/// Actual points never contribute, however low they are.
#[instrument(skip(series), fields(num_points = series.len(), threshold = %threshold))]
pub fn advisory(series: &RevenueSeries, threshold: Decimal) -> Option<Advisory> {
    let periods: Vec<Period> = series
        .forecasts()
        .filter(|p| p.amount < threshold)
        .map(|p| p.period)
        .collect();

    if periods.is_empty() {
        debug!("No forecast point below threshold");
        return None;
    }

    debug!(count = periods.len(), "Forecast points below threshold");
    Some(Advisory { periods, threshold })
}

fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} & {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Classification;
    use crate::revenue::RevenuePoint;

    fn point(year: i32, month: u32, amount: i64, classification: Classification) -> RevenuePoint {
        RevenuePoint::new(Period::month(year, month), Decimal::from(amount), classification)
    }

    #[test]
    fn test_advisory_triggers_on_low_forecast_only() {
        let series = RevenueSeries::new(vec![
            point(2025, 4, 1_250_000, Classification::Actual),
            point(2026, 1, 1_516_000, Classification::Forecast),
            point(2026, 2, 240_000, Classification::Forecast),
        ])
        .unwrap();

        let advisory = advisory(&series, default_threshold()).expect("Feb should trigger");
        assert_eq!(advisory.periods, vec![Period::month(2026, 2)]);
        assert_eq!(advisory.threshold, Decimal::from(1_000_000));
    }

    #[test]
    fn test_low_actual_does_not_trigger() {
        let series = RevenueSeries::new(vec![
            point(2025, 12, 10, Classification::Actual),
            point(2026, 1, 1_516_000, Classification::Forecast),
        ])
        .unwrap();

        assert!(advisory(&series, default_threshold()).is_none());
    }

    #[test]
    fn test_threshold_is_strict() {
        let series = RevenueSeries::new(vec![point(2026, 1, 1_000_000, Classification::Forecast)])
            .unwrap();

        assert!(advisory(&series, default_threshold()).is_none());
        assert!(advisory(&series, Decimal::from(1_000_001)).is_some());
    }

    #[test]
    fn test_message_for_same_year() {
        let advisory = Advisory {
            periods: vec![Period::month(2026, 2), Period::month(2026, 3)],
            threshold: default_threshold(),
        };
        assert_eq!(advisory.month_list(), "Feb & Mar");
        assert_eq!(advisory.period_list(), "Feb & Mar 2026");
        assert_eq!(
            advisory.message(),
            "Forecast for Feb & Mar 2026 drops significantly below the ฿1.0M threshold."
        );
    }

    #[test]
    fn test_period_list_across_years() {
        let advisory = Advisory {
            periods: vec![
                Period::month(2025, 12),
                Period::month(2026, 1),
                Period::month(2026, 2),
            ],
            threshold: Decimal::from(500_000),
        };
        assert_eq!(advisory.period_list(), "Dec 2025, Jan 2026 & Feb 2026");
        assert!(advisory.message().ends_with("below the ฿500k threshold."));
    }

    #[test]
    fn test_join_natural() {
        assert_eq!(join_natural(&[]), "");
        assert_eq!(join_natural(&["Feb".to_string()]), "Feb");
        assert_eq!(
            join_natural(&["Jan".to_string(), "Feb".to_string(), "Mar".to_string()]),
            "Jan, Feb & Mar"
        );
    }
}
