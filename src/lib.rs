//! # MoMo Dashboard
//!
//! A client for a mobile-money transactions API: summary statistics, a
//! type-distribution chart, a monthly trend chart, a searchable and
//! filterable transaction table and a per-transaction detail view.
//!
//! ## Modules
//!
//! - [`api`]: the four read-only endpoints and their reqwest client
//! - [`model`]: transactions, statistics and filter criteria
//! - [`view`]: formatting and view models (cards, charts, rows, details)
//! - [`dashboard`]: the controller that loads data and drives a view
//! - [`terminal`]: a text render target and the interactive loop
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use momo_dashboard::{
//!     Config, DashboardController, HttpApiClient, TerminalView, TextChartBackend,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = HttpApiClient::new(&config.api)?;
//!
//!     let controller = DashboardController::new(
//!         api,
//!         TerminalView::new(std::io::stdout()),
//!         TextChartBackend::new(std::io::stdout()),
//!         config.display,
//!     );
//!     controller.initialize().await?;
//!
//!     println!("{} transactions loaded", controller.transactions().await.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod model;
pub mod terminal;
pub mod view;

pub use api::{ApiError, ApiResult, DashboardApi, HttpApiClient};
pub use config::{ApiConfig, Config, DisplayConfig, LoggingConfig};
pub use dashboard::{
    DashboardController, DashboardError, DashboardResult, DashboardView, Outcome, UiEvent,
};
pub use model::{
    FilterCriteria, FilterError, FilterField, FilterInputs, StatisticsSnapshot, Transaction,
    TransactionType,
};
pub use terminal::{OutputFormat, TerminalView, TextChartBackend};
