//! Render target abstraction

use crate::model::FilterInputs;
use crate::view::{DetailView, FilterOption, StatCards, TransactionRow};

/// Something that can display the dashboard and hold its inputs
///
/// The controller never reads state back from the view except for the
/// user-editable inputs.
pub trait DashboardView: Send {
    fn set_loading(&mut self, loading: bool);

    fn render_stat_cards(&mut self, cards: &StatCards);

    fn render_table(&mut self, rows: &[TransactionRow]);

    fn render_type_filter(&mut self, options: &[FilterOption]);

    fn show_detail(&mut self, detail: &DetailView);

    fn hide_detail(&mut self);

    /// Blocking user notification
    fn show_error(&mut self, message: &str);

    /// Current contents of the five filter inputs
    fn filter_inputs(&self) -> FilterInputs;

    /// Current contents of the search input
    fn search_term(&self) -> String;

    /// Empty the filter inputs and the search input
    fn reset_inputs(&mut self);
}
