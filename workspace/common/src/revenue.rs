//! Monthly revenue series and the figures derived from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::advisory::{Advisory, advisory};
use crate::error::{DataError, Result};
use crate::period::{Classification, Period, check_sequence};

/// One month of revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub period: Period,
    pub amount: Decimal,
    pub classification: Classification,
}

impl RevenuePoint {
    pub fn new(period: Period, amount: Decimal, classification: Classification) -> Self {
        Self {
            period,
            amount,
            classification,
        }
    }
}

/// Chronologically ordered revenue points, all Actuals before all Forecasts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSeries {
    points: Vec<RevenuePoint>,
}

impl RevenueSeries {
    /// Validates and wraps a list of points.
    ///
    /// Rejects an empty list, negative amounts, periods that do not strictly
    /// increase and any Actual point that follows a Forecast point.
    #[instrument(skip(points), fields(num_points = points.len()))]
    pub fn new(points: Vec<RevenuePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(DataError::DataUnavailable(
                "revenue series has no points".to_string(),
            ));
        }

        for (index, point) in points.iter().enumerate() {
            if point.amount.is_sign_negative() && !point.amount.is_zero() {
                return Err(DataError::MalformedPoint {
                    index,
                    reason: format!("negative amount {} for {}", point.amount, point.period),
                });
            }
        }

        check_sequence(points.iter().map(|p| (p.period, p.classification)))?;

        debug!("Revenue series validated");
        Ok(Self { points })
    }

    /// Wraps points that are known to be valid (the compiled-in dataset).
    pub(crate) fn from_trusted(points: Vec<RevenuePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[RevenuePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RevenuePoint> {
        self.points.get(index)
    }

    pub fn position_of(&self, period: Period) -> Option<usize> {
        self.points.iter().position(|p| p.period == period)
    }

    pub fn last_actual_index(&self) -> Option<usize> {
        self.points
            .iter()
            .rposition(|p| p.classification == Classification::Actual)
    }

    pub fn first_forecast_index(&self) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.classification == Classification::Forecast)
    }

    pub fn actuals(&self) -> impl Iterator<Item = &RevenuePoint> {
        self.points
            .iter()
            .filter(|p| p.classification == Classification::Actual)
    }

    pub fn forecasts(&self) -> impl Iterator<Item = &RevenuePoint> {
        self.points
            .iter()
            .filter(|p| p.classification == Classification::Forecast)
    }

    pub fn actual_total(&self) -> Decimal {
        self.actuals().map(|p| p.amount).sum()
    }

    pub fn forecast_total(&self) -> Decimal {
        self.forecasts().map(|p| p.amount).sum()
    }

    pub fn max_amount(&self) -> Decimal {
        self.points
            .iter()
            .map(|p| p.amount)
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

/// Headline risk level shown next to the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineRisk {
    Low,
    High,
}

impl PipelineRisk {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineRisk::Low => "Low",
            PipelineRisk::High => "High",
        }
    }
}

/// Figures for the revenue page's stat cards and header note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSummary {
    pub actual_total: Decimal,
    pub forecast_total: Decimal,
    pub actual_months: usize,
    pub forecast_months: usize,
    pub first_forecast: Option<RevenuePoint>,
    pub advisory: Option<Advisory>,
}

impl RevenueSummary {
    #[instrument(skip(series), fields(num_points = series.len(), threshold = %threshold))]
    pub fn from_series(series: &RevenueSeries, threshold: Decimal) -> Self {
        let summary = Self {
            actual_total: series.actual_total(),
            forecast_total: series.forecast_total(),
            actual_months: series.actuals().count(),
            forecast_months: series.forecasts().count(),
            first_forecast: series.forecasts().next().cloned(),
            advisory: advisory(series, threshold),
        };
        debug!(
            actual_total = %summary.actual_total,
            forecast_total = %summary.forecast_total,
            "Computed revenue summary"
        );
        summary
    }

    pub fn pipeline_risk(&self) -> PipelineRisk {
        if self.advisory.is_some() {
            PipelineRisk::High
        } else {
            PipelineRisk::Low
        }
    }

    /// One-line explanation under the risk card.
    pub fn risk_subtext(&self) -> String {
        match &self.advisory {
            Some(advisory) => format!("{} below threshold", advisory.month_list()),
            None => "All forecasts above threshold".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: i32, month: u32, amount: i64, classification: Classification) -> RevenuePoint {
        RevenuePoint::new(Period::month(year, month), Decimal::from(amount), classification)
    }

    #[test]
    fn test_new_rejects_empty_series() {
        assert!(matches!(
            RevenueSeries::new(Vec::new()),
            Err(DataError::DataUnavailable(_))
        ));
    }

    #[test]
    fn test_new_rejects_negative_amount() {
        let points = vec![
            point(2025, 11, 100, Classification::Actual),
            point(2025, 12, -5, Classification::Actual),
        ];
        match RevenueSeries::new(points) {
            Err(DataError::MalformedPoint { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected MalformedPoint, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_actual_after_forecast() {
        let points = vec![
            point(2025, 11, 100, Classification::Forecast),
            point(2025, 12, 100, Classification::Actual),
        ];
        assert!(matches!(
            RevenueSeries::new(points),
            Err(DataError::OutOfOrder { index: 1, .. })
        ));
    }

    #[test]
    fn test_actual_indices_precede_forecast_indices() {
        let series = RevenueSeries::new(vec![
            point(2025, 4, 1_250_000, Classification::Actual),
            point(2026, 1, 1_516_000, Classification::Forecast),
            point(2026, 2, 240_000, Classification::Forecast),
        ])
        .unwrap();

        assert_eq!(series.last_actual_index(), Some(0));
        assert_eq!(series.first_forecast_index(), Some(1));
        assert!(series.last_actual_index() < series.first_forecast_index());
    }

    #[test]
    fn test_totals_and_max() {
        let series = RevenueSeries::new(vec![
            point(2025, 11, 1_000, Classification::Actual),
            point(2025, 12, 2_000, Classification::Actual),
            point(2026, 1, 500, Classification::Forecast),
        ])
        .unwrap();

        assert_eq!(series.actual_total(), Decimal::from(3_000));
        assert_eq!(series.forecast_total(), Decimal::from(500));
        assert_eq!(series.max_amount(), Decimal::from(2_000));
        assert_eq!(series.position_of(Period::month(2026, 1)), Some(2));
    }

    #[test]
    fn test_summary_without_advisory_is_low_risk() {
        let series = RevenueSeries::new(vec![
            point(2025, 12, 1_200_000, Classification::Actual),
            point(2026, 1, 1_100_000, Classification::Forecast),
        ])
        .unwrap();

        let summary = RevenueSummary::from_series(&series, Decimal::from(1_000_000));
        assert_eq!(summary.pipeline_risk(), PipelineRisk::Low);
        assert_eq!(summary.risk_subtext(), "All forecasts above threshold");
        assert_eq!(summary.forecast_months, 1);
        assert_eq!(
            summary.first_forecast.map(|p| p.period),
            Some(Period::month(2026, 1))
        );
    }
}
