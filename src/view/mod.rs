//! View models
//!
//! Pure functions from API data to display records. Nothing here knows how
//! the records are drawn; a render target (terminal, web, tests) consumes
//! them through [`crate::dashboard::DashboardView`] and [`ChartBackend`].

mod cards;
mod charts;
mod detail;
mod format;
mod table;

pub use cards::{stat_cards, StatCards};
pub use charts::{
    monthly_trend_chart, palette_color, percentage, type_distribution_chart, Axis, AxisId,
    AxisPosition, ChartBackend, ChartHandle, ChartKind, ChartName, ChartRegistry, ChartSpec,
    Series, SeriesStyle, PALETTE,
};
pub use detail::{DetailField, DetailItem, DetailView, ModalState};
pub use format::{
    format_amount, format_count, format_date_time, format_number, parse_date_time, NOT_AVAILABLE,
};
pub use table::{
    detail_summary, transaction_rows, type_filter_options, type_style, FilterOption,
    TransactionRow, TypeStyle, ALL_TYPES_LABEL,
};
