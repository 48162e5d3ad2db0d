use anyhow::{bail, Result};
use common::{
    dataset, default_threshold, format_compact, format_thousands, RevenueSummary,
};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Print the revenue and sales figures the dashboards display.
pub fn summary(threshold: Option<Decimal>) -> Result<()> {
    let threshold = threshold.unwrap_or_else(default_threshold);
    if threshold.is_sign_negative() && !threshold.is_zero() {
        bail!("Threshold must not be negative, got {}", threshold);
    }

    info!("Rendering dashboard summary");
    debug!("Advisory threshold: {}", threshold);

    println!("{}", render_summary(threshold));
    Ok(())
}

/// Plain-text report of both dashboards for the given advisory threshold.
pub fn render_summary(threshold: Decimal) -> String {
    let calendar = dataset::calendar();
    let revenue = dataset::revenue();
    let sales = dataset::sales();
    let summary = RevenueSummary::from_series(&revenue, threshold);

    let mut lines = vec![
        format!("Revenue (as of {})", calendar.as_of_label()),
        format!("  YTD revenue (actual):  {}", format_compact(summary.actual_total)),
        format!(
            "  Next {} months total:  {}",
            summary.forecast_months,
            format_compact(summary.forecast_total)
        ),
    ];

    if let Some(first) = &summary.first_forecast {
        lines.push(format!(
            "  {} forecast:        {}",
            first.period.label(),
            format_compact(first.amount)
        ));
    }

    lines.push(format!(
        "  Pipeline risk:         {} ({})",
        summary.pipeline_risk().as_str(),
        summary.risk_subtext()
    ));

    if let Some(advisory) = &summary.advisory {
        lines.push(format!("  {}: {}", common::Advisory::HEADLINE, advisory.message()));
    }

    lines.push(String::new());
    lines.push("Sales team totals".to_string());
    for (rep, total) in sales.totals_by_representative() {
        lines.push(format!("  {:<10} {}", rep.display_label, format_thousands(total)));
    }

    lines.join("\n")
}
