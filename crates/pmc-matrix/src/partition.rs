use std::ops::Range;

use crate::config::ComputeConfig;

/// A half-open range `[start, end)` of flat cell indices owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    /// Index of the worker this range belongs to.
    pub worker: usize,
    pub start: usize,
    pub end: usize,
}

impl WorkItem {
    /// Number of cells in this range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split the flat cell space `0..dim²` into one contiguous range per worker.
///
/// Every worker gets `dim² / workers` cells; the last one also takes the
/// remainder, so the ranges always cover the whole space with no overlap.
/// Items are returned in worker order.
pub fn partition(config: &ComputeConfig) -> Vec<WorkItem> {
    let cells = config.cells();
    let workers = config.workers();
    let chunk = cells / workers;

    (0..workers)
        .map(|worker| WorkItem {
            worker,
            start: worker * chunk,
            end: if worker == workers - 1 {
                cells
            } else {
                (worker + 1) * chunk
            },
        })
        .collect()
}
