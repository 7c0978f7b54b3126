//! Dashboard
//!
//! [`DashboardController`] owns the loaded statistics and transactions,
//! talks to a [`DashboardApi`](crate::api::DashboardApi) and pushes view
//! models into a [`DashboardView`] and a chart backend.

mod controller;
mod error;
mod events;
mod view;

pub use controller::DashboardController;
pub use error::{DashboardError, DashboardResult};
pub use events::{Outcome, UiEvent};
pub use view::DashboardView;
