//! Text chart backend

use std::collections::BTreeMap;
use std::io::Write;

use super::render::chart_text;
use crate::view::{ChartBackend, ChartHandle, ChartName, ChartSpec};

/// Draws charts as horizontal bars and tracks which are live
pub struct TextChartBackend<W> {
    out: W,
    next_id: u64,
    live: BTreeMap<ChartHandle, ChartName>,
}

impl<W: Write + Send> TextChartBackend<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_id: 0,
            live: BTreeMap::new(),
        }
    }

    /// Number of charts created and not yet destroyed
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, handle: ChartHandle) -> bool {
        self.live.contains_key(&handle)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ChartBackend for TextChartBackend<W> {
    fn create(&mut self, spec: &ChartSpec) -> ChartHandle {
        self.next_id += 1;
        let handle = ChartHandle::new(self.next_id);
        self.live.insert(handle, spec.name);

        if let Err(e) = self
            .out
            .write_all(chart_text(spec).as_bytes())
            .and_then(|_| self.out.flush())
        {
            tracing::warn!(chart = %spec.name, error = %e, "Failed to draw chart");
        }
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if self.live.remove(&handle).is_none() {
            tracing::debug!(handle = handle.id(), "Destroying unknown chart");
        }
    }
}
