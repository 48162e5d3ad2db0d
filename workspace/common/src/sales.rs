//! Per-representative monthly sales.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::error::{DataError, Result};
use crate::period::{Classification, Period, check_sequence};

/// Display settings for one sales representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepresentativeConfig {
    pub id: &'static str,
    pub display_color: &'static str,
    pub display_label: &'static str,
}

impl RepresentativeConfig {
    /// Single-letter avatar shown on the toggle card.
    pub fn initial(&self) -> String {
        self.display_label.chars().take(1).collect()
    }
}

/// The tracked sales team, in display order.
pub static ROSTER: [RepresentativeConfig; 3] = [
    RepresentativeConfig {
        id: "Ananya",
        display_color: "#8b5cf6",
        display_label: "Ananya",
    },
    RepresentativeConfig {
        id: "Pimchanok",
        display_color: "#10b981",
        display_label: "Pimchanok",
    },
    RepresentativeConfig {
        id: "Nattapon",
        display_color: "#f59e0b",
        display_label: "Nattapon",
    },
];

/// One month of sales, one amount per representative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub period: Period,
    pub classification: Classification,
    pub amounts: BTreeMap<String, Decimal>,
}

impl SalesPoint {
    pub fn amount_for(&self, id: &str) -> Decimal {
        self.amounts.get(id).copied().unwrap_or(Decimal::ZERO)
    }
}

/// Sales points over a fixed roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSeries {
    roster: &'static [RepresentativeConfig],
    points: Vec<SalesPoint>,
}

impl SalesSeries {
    /// Validates that every point covers exactly the roster with
    /// non-negative amounts, and that periods are ordered with Actuals first.
    #[instrument(skip(roster, points), fields(num_points = points.len(), roster_size = roster.len()))]
    pub fn new(roster: &'static [RepresentativeConfig], points: Vec<SalesPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(DataError::DataUnavailable(
                "sales series has no points".to_string(),
            ));
        }

        for (index, point) in points.iter().enumerate() {
            if point.amounts.len() != roster.len() {
                return Err(DataError::MalformedPoint {
                    index,
                    reason: format!(
                        "expected {} representatives, found {}",
                        roster.len(),
                        point.amounts.len()
                    ),
                });
            }

            for rep in roster {
                match point.amounts.get(rep.id) {
                    None => {
                        return Err(DataError::MalformedPoint {
                            index,
                            reason: format!("missing amount for {}", rep.id),
                        });
                    }
                    Some(amount) if amount.is_sign_negative() && !amount.is_zero() => {
                        return Err(DataError::MalformedPoint {
                            index,
                            reason: format!("negative amount {} for {}", amount, rep.id),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        check_sequence(points.iter().map(|p| (p.period, p.classification)))?;

        debug!("Sales series validated");
        Ok(Self { roster, points })
    }

    pub(crate) fn from_trusted(
        roster: &'static [RepresentativeConfig],
        points: Vec<SalesPoint>,
    ) -> Self {
        Self { roster, points }
    }

    pub fn roster(&self) -> &'static [RepresentativeConfig] {
        self.roster
    }

    pub fn points(&self) -> &[SalesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SalesPoint> {
        self.points.get(index)
    }

    pub fn representative(&self, id: &str) -> Option<&'static RepresentativeConfig> {
        self.roster.iter().find(|rep| rep.id == id)
    }

    /// Indices of the first and last Forecast points, used for the
    /// highlighted region.
    pub fn forecast_range(&self) -> Option<(usize, usize)> {
        let first = self
            .points
            .iter()
            .position(|p| p.classification == Classification::Forecast)?;
        let last = self
            .points
            .iter()
            .rposition(|p| p.classification == Classification::Forecast)?;
        Some((first, last))
    }

    pub fn forecast_span(&self) -> Option<(Period, Period)> {
        self.forecast_range()
            .map(|(first, last)| (self.points[first].period, self.points[last].period))
    }

    /// Sum of each representative's amounts across all periods, in roster order.
    pub fn totals_by_representative(&self) -> Vec<(&'static RepresentativeConfig, Decimal)> {
        self.roster
            .iter()
            .map(|rep| {
                let total: Decimal = self.points.iter().map(|p| p.amount_for(rep.id)).sum();
                (rep, total)
            })
            .collect()
    }

    /// Largest single bar, across every representative.
    pub fn max_amount(&self) -> Decimal {
        self.points
            .iter()
            .flat_map(|p| p.amounts.values().copied())
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}
