//! Terminal render target

use std::io::Write;

use super::render::{cards_text, detail_text, filter_options_text, table_text};
use crate::dashboard::DashboardView;
use crate::model::{FilterField, FilterInputs};
use crate::view::{DetailView, FilterOption, StatCards, TransactionRow};

/// Writes the dashboard as text and holds the user's inputs
pub struct TerminalView<W> {
    out: W,
    inputs: FilterInputs,
    search: String,
    loading: bool,
    type_options: Vec<FilterOption>,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            inputs: FilterInputs::default(),
            search: String::new(),
            loading: false,
            type_options: Vec::new(),
        }
    }

    pub fn set_input(&mut self, field: FilterField, value: &str) {
        self.inputs.set(field, value);
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Options of the most recently rendered type filter
    pub fn type_options(&self) -> &[FilterOption] {
        &self.type_options
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write free text, e.g. command help
    pub fn print(&mut self, text: &str) {
        self.emit(text);
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write + Send> DashboardView for TerminalView<W> {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading {
            self.emit("Loading...\n");
        }
    }

    fn render_stat_cards(&mut self, cards: &StatCards) {
        self.emit(&cards_text(cards));
    }

    fn render_table(&mut self, rows: &[TransactionRow]) {
        self.emit(&table_text(rows));
    }

    fn render_type_filter(&mut self, options: &[FilterOption]) {
        self.type_options = options.to_vec();
        self.emit(&filter_options_text(options));
    }

    fn show_detail(&mut self, detail: &DetailView) {
        self.emit(&detail_text(detail));
    }

    fn hide_detail(&mut self) {
        self.emit("Detail closed\n");
    }

    fn show_error(&mut self, message: &str) {
        self.emit(&format!("Error: {}\n", message));
    }

    fn filter_inputs(&self) -> FilterInputs {
        self.inputs.clone()
    }

    fn search_term(&self) -> String {
        self.search.clone()
    }

    fn reset_inputs(&mut self) {
        self.inputs.clear();
        self.search.clear();
    }
}
