mod chart;
mod toggle;
mod tooltip;
mod view;

pub use chart::SalesChart;
pub use toggle::RepresentativeToggle;
pub use tooltip::SalesTooltip;
pub use view::SalesPerformanceView;
