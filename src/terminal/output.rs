//! One-shot command output in table, JSON or CSV form

use serde::Serialize;
use std::io::Write;
use thiserror::Error;

use super::render::{cards_text, chart_text, detail_text, table_text};
use crate::view::{ChartSpec, DetailView, StatCards, TransactionRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Statistics view: stat cards followed by both charts
#[derive(Debug, Serialize)]
pub struct StatisticsReport<'a> {
    pub cards: &'a StatCards,
    pub charts: &'a [ChartSpec],
}

pub fn write_statistics<W: Write>(
    out: W,
    report: &StatisticsReport<'_>,
    format: OutputFormat,
) -> OutputResult<()> {
    match format {
        OutputFormat::Table => {
            let mut text = cards_text(report.cards);
            for chart in report.charts {
                text.push('\n');
                text.push_str(&chart_text(chart));
            }
            write_text(out, &text)
        }
        OutputFormat::Json => write_json(out, report),
        // Charts have no flat shape; CSV carries the cards only
        OutputFormat::Csv => write_csv(out, std::iter::once(report.cards)),
    }
}

pub fn write_rows<W: Write>(
    out: W,
    rows: &[TransactionRow],
    format: OutputFormat,
) -> OutputResult<()> {
    match format {
        OutputFormat::Table => write_text(out, &table_text(rows)),
        OutputFormat::Json => write_json(out, &rows),
        OutputFormat::Csv => write_csv(out, rows),
    }
}

pub fn write_detail<W: Write>(
    out: W,
    detail: &DetailView,
    format: OutputFormat,
) -> OutputResult<()> {
    match format {
        OutputFormat::Table => write_text(out, &detail_text(detail)),
        OutputFormat::Json => write_json(out, detail),
        OutputFormat::Csv => write_csv(out, &detail.items),
    }
}

fn write_text<W: Write>(mut out: W, text: &str) -> OutputResult<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> OutputResult<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write, T: Serialize>(
    out: W,
    records: impl IntoIterator<Item = T>,
) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::model::Transaction;
    use crate::view::transaction_rows;

    fn rows() -> Vec<TransactionRow> {
        transaction_rows(
            &[Transaction::new(3, "Bank Deposit").amount(1500.0)],
            &DisplayConfig::default(),
        )
    }

    #[test]
    fn test_rows_as_csv() {
        let mut out = Vec::new();
        write_rows(&mut out, &rows(), OutputFormat::Csv).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,date,type_label,type_style,amount,details"
        );
        assert_eq!(lines.next().unwrap(), "3,N/A,Bank Deposit,Deposit,\"1,500 RWF\",N/A");
    }

    #[test]
    fn test_rows_as_json() {
        let mut out = Vec::new();
        write_rows(&mut out, &rows(), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["id"], 3);
        assert_eq!(value[0]["amount"], "1,500 RWF");
    }

    #[test]
    fn test_detail_as_table() {
        let detail = DetailView::from_transaction(
            &Transaction::new(3, "Bank Deposit").sender("Jane"),
            &DisplayConfig::default(),
        );
        let mut out = Vec::new();
        write_detail(&mut out, &detail, OutputFormat::Table).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Transaction #3\n"));
        assert!(text.contains("Jane"));
    }
}
