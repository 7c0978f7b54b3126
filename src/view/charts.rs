//! Chart specifications and the chart registry
//!
//! Charts are described as plain data ([`ChartSpec`]) and handed to a
//! [`ChartBackend`] that owns the actual drawing. The [`ChartRegistry`]
//! remembers which live instance belongs to which chart name and destroys it
//! before a replacement is created, so a refresh never stacks two charts on
//! the same slot.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::model::StatisticsSnapshot;

/// Slice colours for the type distribution chart
pub const PALETTE: [&str; 8] = [
    "#FFCB05", "#FFA500", "#FF8C00", "#FFD700", "#1a1a1a", "#333333", "#666666", "#999999",
];

const COUNT_BAR_COLOR: &str = "rgba(255, 203, 5, 0.8)";
const AMOUNT_LINE_COLOR: &str = "rgba(26, 26, 26, 1)";

/// Stable chart slot names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChartName {
    TypeDistribution,
    MonthlyTrend,
}

impl ChartName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartName::TypeDistribution => "typeChart",
            ChartName::MonthlyTrend => "monthlyChart",
        }
    }
}

impl fmt::Display for ChartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    /// Proportions of a whole
    Doughnut,
    /// Categorical bars, optionally with overlaid line series
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesStyle {
    Slices,
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AxisId {
    X,
    /// Primary value axis
    Y,
    /// Secondary value axis, scaled independently
    Y1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisPosition {
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: AxisId,
    pub position: AxisPosition,
    pub title: String,
    /// Whether grid lines for this axis are drawn across the plot area
    pub grid_lines: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    /// One colour per value for slices, otherwise a single colour
    pub colors: Vec<String>,
    pub style: SeriesStyle,
    pub axis: AxisId,
}

/// Everything a backend needs to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub name: ChartName,
    pub kind: ChartKind,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub axes: Vec<Axis>,
}

impl ChartSpec {
    /// Tooltip text for one point
    ///
    /// Doughnut slices show their share of the total as
    /// `label: value (pct%)`; other charts show `series: value`.
    pub fn tooltip(&self, series: usize, index: usize) -> Option<String> {
        let s = self.series.get(series)?;
        let value = *s.values.get(index)?;

        match self.kind {
            ChartKind::Doughnut => {
                let label = self.categories.get(index).map(String::as_str).unwrap_or("");
                let total: f64 = s.values.iter().sum();
                let share = (percentage(value, total) * 10.0).round() / 10.0;
                Some(format!("{}: {} ({:.1}%)", label, value, share))
            }
            ChartKind::Bar => Some(format!("{}: {}", s.label, value)),
        }
    }
}

/// `value / total * 100`, zero when the total is zero
pub fn percentage(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// Palette colour for the slice at `index`, cycling past the end
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Doughnut of transaction counts per type
pub fn type_distribution_chart(stats: &StatisticsSnapshot) -> ChartSpec {
    let categories: Vec<String> = stats
        .by_type
        .iter()
        .map(|t| t.transaction_type.label().to_string())
        .collect();
    let values = stats.by_type.iter().map(|t| t.count as f64).collect();
    let colors = (0..categories.len())
        .map(|i| palette_color(i).to_string())
        .collect();

    ChartSpec {
        name: ChartName::TypeDistribution,
        kind: ChartKind::Doughnut,
        categories,
        series: vec![Series {
            label: "Transactions".to_string(),
            values,
            colors,
            style: SeriesStyle::Slices,
            axis: AxisId::Y,
        }],
        axes: Vec::new(),
    }
}

/// Monthly counts as bars with total amount as a line on its own axis
pub fn monthly_trend_chart(stats: &StatisticsSnapshot) -> ChartSpec {
    let categories = stats.by_month.iter().map(|m| m.month.clone()).collect();

    ChartSpec {
        name: ChartName::MonthlyTrend,
        kind: ChartKind::Bar,
        categories,
        series: vec![
            Series {
                label: "Transaction Count".to_string(),
                values: stats.by_month.iter().map(|m| m.count as f64).collect(),
                colors: vec![COUNT_BAR_COLOR.to_string()],
                style: SeriesStyle::Bar,
                axis: AxisId::Y,
            },
            Series {
                label: "Total Amount (RWF)".to_string(),
                values: stats
                    .by_month
                    .iter()
                    .map(|m| m.total_amount.unwrap_or(0.0))
                    .collect(),
                colors: vec![AMOUNT_LINE_COLOR.to_string()],
                style: SeriesStyle::Line,
                axis: AxisId::Y1,
            },
        ],
        axes: vec![
            Axis {
                id: AxisId::X,
                position: AxisPosition::Bottom,
                title: "Month".to_string(),
                grid_lines: true,
            },
            Axis {
                id: AxisId::Y,
                position: AxisPosition::Left,
                title: "Transaction Count".to_string(),
                grid_lines: true,
            },
            Axis {
                id: AxisId::Y1,
                position: AxisPosition::Right,
                title: "Amount (RWF)".to_string(),
                grid_lines: false,
            },
        ],
    }
}

/// Opaque handle to a live chart instance, minted by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A charting engine
///
/// Implementations allocate whatever resources a drawn chart needs in
/// `create` and must release them in `destroy`.
pub trait ChartBackend: Send {
    fn create(&mut self, spec: &ChartSpec) -> ChartHandle;

    fn destroy(&mut self, handle: ChartHandle);
}

/// Live chart instances keyed by chart name
#[derive(Debug, Default)]
pub struct ChartRegistry {
    live: HashMap<ChartName, ChartHandle>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `spec`, destroying any previous chart with the same name first
    pub fn render<B: ChartBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        spec: &ChartSpec,
    ) -> ChartHandle {
        if let Some(previous) = self.live.remove(&spec.name) {
            tracing::debug!(chart = %spec.name, handle = previous.id(), "Destroying chart");
            backend.destroy(previous);
        }

        let handle = backend.create(spec);
        self.live.insert(spec.name, handle);
        handle
    }

    /// Handle of the live chart with this name
    pub fn get(&self, name: ChartName) -> Option<ChartHandle> {
        self.live.get(&name).copied()
    }

    /// Number of live charts
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Destroy every live chart
    pub fn clear<B: ChartBackend + ?Sized>(&mut self, backend: &mut B) {
        for (_, handle) in self.live.drain() {
            backend.destroy(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MonthCount, TypeCount};
    use std::collections::HashSet;

    #[derive(Default)]
    struct CountingBackend {
        next: u64,
        live: HashSet<ChartHandle>,
        created: usize,
    }

    impl ChartBackend for CountingBackend {
        fn create(&mut self, _spec: &ChartSpec) -> ChartHandle {
            self.next += 1;
            self.created += 1;
            let handle = ChartHandle::new(self.next);
            self.live.insert(handle);
            handle
        }

        fn destroy(&mut self, handle: ChartHandle) {
            assert!(self.live.remove(&handle), "double destroy of {:?}", handle);
        }
    }

    fn by_type(entries: &[(&str, u64)]) -> StatisticsSnapshot {
        StatisticsSnapshot {
            by_type: entries
                .iter()
                .map(|(kind, count)| TypeCount {
                    transaction_type: (*kind).into(),
                    count: *count,
                    total_amount: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_type_tooltip_percentages() {
        let chart = type_distribution_chart(&by_type(&[("A", 3), ("B", 1)]));

        assert_eq!(chart.categories, vec!["A", "B"]);
        assert_eq!(chart.tooltip(0, 0).unwrap(), "A: 3 (75.0%)");
        assert_eq!(chart.tooltip(0, 1).unwrap(), "B: 1 (25.0%)");
        assert_eq!(chart.tooltip(0, 2), None);
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        let chart = type_distribution_chart(&by_type(&[("A", 1), ("B", 2)]));
        assert_eq!(chart.tooltip(0, 0).unwrap(), "A: 1 (33.3%)");
        assert_eq!(chart.tooltip(0, 1).unwrap(), "B: 2 (66.7%)");
    }

    #[test]
    fn test_percentage_halves_round_up() {
        let chart = type_distribution_chart(&by_type(&[("A", 1), ("B", 399)]));
        assert_eq!(chart.tooltip(0, 0).unwrap(), "A: 1 (0.3%)");

        let chart = type_distribution_chart(&by_type(&[("A", 1), ("B", 79)]));
        assert_eq!(chart.tooltip(0, 0).unwrap(), "A: 1 (1.3%)");
    }

    #[test]
    fn test_zero_total_has_zero_percentage() {
        let chart = type_distribution_chart(&by_type(&[("A", 0)]));
        assert_eq!(chart.tooltip(0, 0).unwrap(), "A: 0 (0.0%)");
    }

    #[test]
    fn test_palette_is_indexed_and_cycles() {
        let entries: Vec<(String, u64)> = (0..10).map(|i| (format!("T{}", i), 1)).collect();
        let refs: Vec<(&str, u64)> = entries.iter().map(|(k, c)| (k.as_str(), *c)).collect();
        let chart = type_distribution_chart(&by_type(&refs));

        let colors = &chart.series[0].colors;
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[0], PALETTE[0]);
        assert_eq!(colors[7], PALETTE[7]);
        assert_eq!(colors[8], PALETTE[0]);

        let two = type_distribution_chart(&by_type(&[("A", 1), ("B", 1)]));
        assert_eq!(two.series[0].colors, vec![PALETTE[0], PALETTE[1]]);
    }

    #[test]
    fn test_monthly_chart_keeps_server_order_and_dual_axes() {
        let stats = StatisticsSnapshot {
            by_month: vec![
                MonthCount {
                    month: "2024-06".to_string(),
                    count: 5,
                    total_amount: Some(9000.0),
                },
                MonthCount {
                    month: "2024-05".to_string(),
                    count: 2,
                    total_amount: None,
                },
            ],
            ..Default::default()
        };

        let chart = monthly_trend_chart(&stats);
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.categories, vec!["2024-06", "2024-05"]);

        let counts = &chart.series[0];
        assert_eq!(counts.style, SeriesStyle::Bar);
        assert_eq!(counts.axis, AxisId::Y);
        assert_eq!(counts.values, vec![5.0, 2.0]);

        let amounts = &chart.series[1];
        assert_eq!(amounts.style, SeriesStyle::Line);
        assert_eq!(amounts.axis, AxisId::Y1);
        assert_eq!(amounts.values, vec![9000.0, 0.0]);

        let right = chart.axes.iter().find(|a| a.id == AxisId::Y1).unwrap();
        assert_eq!(right.position, AxisPosition::Right);
        assert_eq!(right.title, "Amount (RWF)");
        assert!(!right.grid_lines);

        assert_eq!(chart.tooltip(1, 0).unwrap(), "Total Amount (RWF): 9000");
    }

    #[test]
    fn test_rerender_leaves_one_live_instance() {
        let mut backend = CountingBackend::default();
        let mut registry = ChartRegistry::new();
        let spec = type_distribution_chart(&by_type(&[("A", 3)]));

        let first = registry.render(&mut backend, &spec);
        let second = registry.render(&mut backend, &spec);

        assert_ne!(first, second);
        assert_eq!(backend.created, 2);
        assert_eq!(backend.live.len(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(ChartName::TypeDistribution), Some(second));
    }

    #[test]
    fn test_charts_with_different_names_coexist() {
        let mut backend = CountingBackend::default();
        let mut registry = ChartRegistry::new();
        let stats = by_type(&[("A", 1)]);

        registry.render(&mut backend, &type_distribution_chart(&stats));
        registry.render(&mut backend, &monthly_trend_chart(&stats));
        assert_eq!(backend.live.len(), 2);

        registry.clear(&mut backend);
        assert!(registry.is_empty());
        assert!(backend.live.is_empty());
    }
}
