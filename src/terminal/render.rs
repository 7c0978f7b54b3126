//! Plain-text renditions of the view models

use std::fmt::Write;

use crate::view::{ChartKind, ChartSpec, DetailView, FilterOption, StatCards, TransactionRow};

const TABLE_HEADERS: [&str; 4] = ["Date", "Type", "Amount", "Details"];
const ACTION_HEADER: &str = "ID";

/// Widest bar drawn for the largest value in a chart
pub const BAR_WIDTH: usize = 40;

/// The four stat cards, one per line
pub fn cards_text(cards: &StatCards) -> String {
    let entries = [
        ("Total Transactions", &cards.total_transactions),
        ("Total Amount", &cards.total_amount),
        ("Average Amount", &cards.avg_amount),
        ("Largest Transaction", &cards.max_amount),
    ];

    let mut out = String::new();
    for (label, value) in entries {
        let _ = writeln!(out, "{:<20} {}", label, value);
    }
    out
}

/// Aligned transaction table with an ID column for the detail action
pub fn table_text(rows: &[TransactionRow]) -> String {
    if rows.is_empty() {
        return "No transactions found\n".to_string();
    }

    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|r| [r.date.as_str(), r.type_label.as_str(), r.amount.as_str(), r.details.as_str()])
        .collect();

    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &TABLE_HEADERS, &widths, ACTION_HEADER);
    let rule = widths.iter().sum::<usize>() + widths.len() * 3 + ACTION_HEADER.len();
    let _ = writeln!(out, "{}", "-".repeat(rule));
    for (row, cells) in rows.iter().zip(&cells) {
        write_row(&mut out, cells, &widths, &row.id.to_string());
    }
    out
}

fn write_row(out: &mut String, cells: &[&str; 4], widths: &[usize; 4], id: &str) {
    for (cell, width) in cells.iter().zip(widths) {
        let _ = write!(out, "{:<width$} | ", cell, width = *width);
    }
    let _ = writeln!(out, "{}", id);
}

/// Label/value pairs of the detail modal
pub fn detail_text(detail: &DetailView) -> String {
    let width = detail
        .items
        .iter()
        .map(|item| item.label.len())
        .max()
        .unwrap_or(0);

    let mut out = format!("Transaction #{}\n", detail.id);
    for item in &detail.items {
        let _ = writeln!(out, "  {:<width$}  {}", item.label, item.value, width = width);
    }
    out
}

/// Selectable values of the type filter
pub fn filter_options_text(options: &[FilterOption]) -> String {
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    format!("Types: {}\n", labels.join(", "))
}

/// Horizontal bars, one line per category
///
/// Doughnut charts show each slice's share; bar charts show the first
/// series as bars and the remaining series as trailing values.
pub fn chart_text(spec: &ChartSpec) -> String {
    let mut out = format!("[{}]\n", spec.name);

    let Some(primary) = spec.series.first() else {
        return out;
    };
    if spec.categories.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let max = primary.values.iter().cloned().fold(0.0_f64, f64::max);
    let label_width = spec
        .categories
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);

    for (index, category) in spec.categories.iter().enumerate() {
        let value = primary.values.get(index).copied().unwrap_or(0.0);
        let bar = "#".repeat(bar_len(value, max));
        let _ = write!(
            out,
            "  {:<label_width$} {:<bar_width$} ",
            category,
            bar,
            label_width = label_width,
            bar_width = BAR_WIDTH
        );

        let legend = match spec.kind {
            ChartKind::Doughnut => spec.tooltip(0, index),
            ChartKind::Bar => {
                let parts: Vec<String> = (0..spec.series.len())
                    .filter_map(|s| spec.tooltip(s, index))
                    .collect();
                Some(parts.join(", "))
            }
        };
        let _ = writeln!(out, "{}", legend.unwrap_or_default());
    }
    out
}

fn bar_len(value: f64, max: f64) -> usize {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize
}
