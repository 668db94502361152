//! Reports for the expense tracker
//!
//! Pure aggregates computed from a snapshot of expenses: overall and
//! current-month totals, the monthly series behind the chart, and a
//! per-category breakdown. Nothing here touches storage.

pub mod monthly;
pub mod summary;
pub mod totals;

pub use monthly::{chart_labels, chart_points, monthly_series, peak, MonthlyTotal};
pub use summary::Summary;
pub use totals::{
    category_totals, current_month_total, current_month_total_now, malformed_dates, total,
    CategoryTotal,
};
