//! Compiled-in datasets behind both dashboards.
//!
//! Classifications are not stored in the tables; they are derived from the
//! reporting calendar so that the Actual/Forecast split and the TODAY marker
//! can never disagree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::period::{Period, ReportingCalendar};
use crate::revenue::{RevenuePoint, RevenueSeries};
use crate::sales::{ROSTER, SalesPoint, SalesSeries};

const AS_OF: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 21) {
    Some(date) => date,
    None => panic!("invalid as-of date"),
};

const REVENUE: [(Period, i64); 12] = [
    (Period::month(2025, 4), 1_250_000),
    (Period::month(2025, 5), 1_380_000),
    (Period::month(2025, 6), 1_100_000),
    (Period::month(2025, 7), 1_420_000),
    (Period::month(2025, 8), 1_650_000),
    (Period::month(2025, 9), 1_500_000),
    (Period::month(2025, 10), 1_580_000),
    (Period::month(2025, 11), 1_720_000),
    (Period::month(2025, 12), 1_850_000),
    // Pipeline projections
    (Period::month(2026, 1), 1_516_000),
    (Period::month(2026, 2), 240_000),
    (Period::month(2026, 3), 50_000),
];

// Amounts in ROSTER order: Ananya, Pimchanok, Nattapon.
const SALES: [(Period, [i64; 3]); 5] = [
    (Period::month(2025, 10), [320_000, 450_000, 280_000]),
    (Period::month(2025, 11), [410_000, 390_000, 350_000]),
    (Period::month(2025, 12), [290_000, 520_000, 480_000]),
    (Period::month(2026, 1), [348_000, 772_000, 396_000]),
    (Period::month(2026, 2), [48_000, 36_000, 156_000]),
];

/// Calendar both dashboards are anchored to.
pub fn calendar() -> ReportingCalendar {
    ReportingCalendar::new(AS_OF)
}

/// Twelve months of revenue: nine Actual, three Forecast.
pub fn revenue() -> RevenueSeries {
    let calendar = calendar();
    let points = REVENUE
        .iter()
        .map(|&(period, amount)| {
            RevenuePoint::new(period, Decimal::from(amount), calendar.classify(period))
        })
        .collect();
    RevenueSeries::from_trusted(points)
}

/// Five months of per-representative sales.
pub fn sales() -> SalesSeries {
    let calendar = calendar();
    let points = SALES
        .iter()
        .map(|&(period, amounts)| SalesPoint {
            period,
            classification: calendar.classify(period),
            amounts: ROSTER
                .iter()
                .zip(amounts)
                .map(|(rep, amount)| (rep.id.to_string(), Decimal::from(amount)))
                .collect(),
        })
        .collect();
    SalesSeries::from_trusted(&ROSTER, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::{advisory, default_threshold};
    use crate::period::Classification;
    use crate::revenue::{PipelineRisk, RevenueSummary};

    #[test]
    fn test_revenue_dataset_passes_validation() {
        let series = revenue();
        assert_eq!(series.len(), 12);
        assert!(RevenueSeries::new(series.points().to_vec()).is_ok());
    }

    #[test]
    fn test_revenue_split_is_nine_actual_three_forecast() {
        let series = revenue();
        assert_eq!(series.actuals().count(), 9);
        assert_eq!(series.forecasts().count(), 3);
        assert_eq!(series.last_actual_index(), Some(8));
        assert_eq!(series.first_forecast_index(), Some(9));
        assert_eq!(
            series.get(9).map(|p| p.classification),
            Some(Classification::Forecast)
        );
    }

    #[test]
    fn test_today_marker_lands_on_first_forecast() {
        let series = revenue();
        let today = calendar().today_month();
        assert_eq!(today.label(), "Jan 26");
        assert_eq!(series.position_of(today), series.first_forecast_index());
    }

    #[test]
    fn test_revenue_summary_matches_dashboard_figures() {
        let summary = RevenueSummary::from_series(&revenue(), default_threshold());
        assert_eq!(summary.actual_total, Decimal::from(13_450_000));
        assert_eq!(summary.forecast_total, Decimal::from(1_806_000));
        assert_eq!(summary.actual_months, 9);
        assert_eq!(summary.forecast_months, 3);
        assert_eq!(summary.pipeline_risk(), PipelineRisk::High);
        assert_eq!(summary.risk_subtext(), "Feb & Mar below threshold");
    }

    #[test]
    fn test_revenue_summary_serializes_amounts_as_strings() {
        let summary = RevenueSummary::from_series(&revenue(), default_threshold());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["actual_total"], "13450000");
        assert_eq!(json["first_forecast"]["classification"], "Forecast");
        assert_eq!(json["first_forecast"]["period"], "2026-01-01");
    }

    #[test]
    fn test_revenue_advisory_names_feb_and_mar() {
        let advisory = advisory(&revenue(), default_threshold()).expect("advisory expected");
        assert_eq!(
            advisory.periods,
            vec![Period::month(2026, 2), Period::month(2026, 3)]
        );
        assert_eq!(
            advisory.message(),
            "Forecast for Feb & Mar 2026 drops significantly below the ฿1.0M threshold."
        );
    }

    #[test]
    fn test_sales_dataset_passes_validation() {
        let series = sales();
        assert_eq!(series.len(), 5);
        assert!(SalesSeries::new(&ROSTER, series.points().to_vec()).is_ok());
    }

    #[test]
    fn test_sales_classification_follows_boundary() {
        let series = sales();
        let classes: Vec<Classification> =
            series.points().iter().map(|p| p.classification).collect();
        assert_eq!(
            classes,
            vec![
                Classification::Actual,
                Classification::Actual,
                Classification::Actual,
                Classification::Forecast,
                Classification::Forecast,
            ]
        );
        assert_eq!(
            series.forecast_span(),
            Some((Period::month(2026, 1), Period::month(2026, 2)))
        );
    }

    #[test]
    fn test_sales_amounts_map_to_roster() {
        let series = sales();
        let january = series.get(3).unwrap();
        assert_eq!(january.amount_for("Ananya"), Decimal::from(348_000));
        assert_eq!(january.amount_for("Pimchanok"), Decimal::from(772_000));
        assert_eq!(january.amount_for("Nattapon"), Decimal::from(396_000));
        assert_eq!(series.max_amount(), Decimal::from(772_000));
    }
}
