//! Terminal front end
//!
//! A text render target for the dashboard controller, an interactive
//! command loop and the writers used by one-shot CLI commands.

mod charts;
mod command;
mod output;
mod render;
pub mod repl;
mod view;

pub use charts::TextChartBackend;
pub use command::{Command, CommandError, HELP};
pub use output::{
    write_detail, write_rows, write_statistics, OutputError, OutputFormat, OutputResult,
    StatisticsReport,
};
pub use render::{cards_text, chart_text, detail_text, table_text, BAR_WIDTH};
pub use view::TerminalView;
