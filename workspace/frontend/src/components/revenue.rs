mod advisory_banner;
mod chart;
mod stats;
mod tooltip;
mod view;

pub use advisory_banner::AdvisoryBanner;
pub use chart::RevenueChart;
pub use stats::{RevenueStats, StatCard, Trend};
pub use tooltip::RevenueTooltip;
pub use view::RevenueView;
