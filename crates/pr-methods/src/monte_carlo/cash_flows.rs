//! Per-path cash flows collected during the Longstaff-Schwartz sweep.

use pr_core::{ensure, errors::Result, require_arg, Real, Size};
use std::collections::VecDeque;

/// Time-indexed cash-flow vectors, earliest kept time first.
///
/// Vector `k` holds the cash flow of every path at time row `first_row + k`.
/// Recording an exercise at an earlier row prepends a vector and cancels
/// every later cash flow of the exercising paths, so each path keeps at
/// most one nonzero entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowMatrix {
    paths: Size,
    first_row: Size,
    flows: VecDeque<Vec<Real>>,
}

impl CashFlowMatrix {
    /// Start from the terminal cash flows at time row `row`.
    pub fn new(row: Size, terminal: Vec<Real>) -> Self {
        let paths = terminal.len();
        let mut flows = VecDeque::new();
        flows.push_back(terminal);
        Self {
            paths,
            first_row: row,
            flows,
        }
    }

    /// Record the cash flows realised at `row`, one row before the earliest
    /// stored vector.
    ///
    /// Every path with a nonzero entry in `early` has its later cash flows
    /// zeroed. Returns the per-path sum over all stored vectors afterwards.
    pub fn record_exercise_date(&mut self, row: Size, early: Vec<Real>) -> Result<Vec<Real>> {
        require_arg!(
            early.len() == self.paths,
            "expected {} cash flows, got {}",
            self.paths,
            early.len()
        );
        ensure!(
            row + 1 == self.first_row,
            "exercise dates must be recorded backwards: row {row} after row {}",
            self.first_row
        );

        for later in self.flows.iter_mut() {
            for (cf, &e) in later.iter_mut().zip(&early) {
                if e != 0.0 {
                    *cf = 0.0;
                }
            }
        }
        self.flows.push_front(early);
        self.first_row = row;
        Ok(self.realized())
    }

    /// Undiscounted per-path sum over all stored vectors.
    pub fn realized(&self) -> Vec<Real> {
        let mut total = vec![0.0; self.paths];
        for flows in &self.flows {
            for (t, &cf) in total.iter_mut().zip(flows) {
                *t += cf;
            }
        }
        total
    }

    /// Number of paths.
    pub fn paths(&self) -> Size {
        self.paths
    }

    /// Time row of the earliest stored vector.
    pub fn first_row(&self) -> Size {
        self.first_row
    }

    /// Number of stored vectors.
    pub fn len(&self) -> Size {
        self.flows.len()
    }

    /// Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Stored vectors, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = &[Real]> {
        self.flows.iter().map(Vec::as_slice)
    }

    /// Cash flows at time row `row`, if stored.
    pub fn at_row(&self, row: Size) -> Option<&[Real]> {
        row.checked_sub(self.first_row)
            .and_then(|k| self.flows.get(k))
            .map(Vec::as_slice)
    }

    /// Number of nonzero cash flows of `path` across all stored vectors.
    pub fn exercise_count(&self, path: Size) -> Size {
        self.flows.iter().filter(|v| v[path] != 0.0).count()
    }
}
