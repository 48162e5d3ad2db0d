//! Domain types and pure logic shared between the server and the frontend.
//!
//! Everything here is deterministic and free of I/O: the compiled-in
//! datasets, the formatting rules, the threshold advisory and the small
//! pieces of view state the dashboards mutate. The frontend renders what
//! this crate computes; the server uses it for the `summary` command.

pub mod advisory;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod format;
pub mod period;
pub mod revenue;
pub mod sales;
pub mod tooltip;
pub mod view_state;

pub use advisory::{Advisory, advisory, default_threshold};
pub use error::{DataError, Result};
pub use format::{currency_symbol, format_compact, format_full, format_thousands};
pub use period::{Classification, Period, ReportingCalendar};
pub use revenue::{PipelineRisk, RevenuePoint, RevenueSeries, RevenueSummary};
pub use sales::{ROSTER, RepresentativeConfig, SalesPoint, SalesSeries};
pub use tooltip::{FORECAST_NOTE, SalesTooltipContent, SalesTooltipRow, TooltipContent};
pub use view_state::{HoverTracker, SeriesVisibility};
