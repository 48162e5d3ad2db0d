//! What the chart tooltips show for the focused point.
//!
//! Both builders return `None` when there is nothing to show, which the
//! rendering side maps to an empty node.

use serde::Serialize;

use crate::format::format_full;
use crate::period::Classification;
use crate::revenue::RevenueSeries;
use crate::sales::SalesSeries;
use crate::view_state::SeriesVisibility;

/// Extra line shown under Forecast figures.
pub const FORECAST_NOTE: &str = "Projected based on pipeline";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub period_label: String,
    pub classification: Classification,
    pub amount_label: String,
    pub advisory_line: Option<&'static str>,
}

impl TooltipContent {
    pub fn for_revenue(series: &RevenueSeries, hovered: Option<usize>) -> Option<Self> {
        let point = series.get(hovered?)?;
        Some(Self {
            period_label: point.period.label(),
            classification: point.classification,
            amount_label: format_full(point.amount),
            advisory_line: point
                .classification
                .is_forecast()
                .then_some(FORECAST_NOTE),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesTooltipRow {
    pub label: &'static str,
    pub color: &'static str,
    pub amount_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesTooltipContent {
    pub period_label: String,
    pub classification: Classification,
    pub rows: Vec<SalesTooltipRow>,
}

impl SalesTooltipContent {
    /// One row per visible representative; `None` when nothing is focused or
    /// every series is hidden.
    pub fn for_sales(
        series: &SalesSeries,
        visibility: &SeriesVisibility,
        hovered: Option<usize>,
    ) -> Option<Self> {
        let point = series.get(hovered?)?;
        let rows: Vec<SalesTooltipRow> = visibility
            .visible(series.roster())
            .into_iter()
            .map(|rep| SalesTooltipRow {
                label: rep.display_label,
                color: rep.display_color,
                amount_label: format_full(point.amount_for(rep.id)),
            })
            .collect();

        if rows.is_empty() {
            return None;
        }

        Some(Self {
            period_label: point.period.label(),
            classification: point.classification,
            rows,
        })
    }
}
