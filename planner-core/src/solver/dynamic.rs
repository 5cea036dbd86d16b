#[cfg(test)]
#[path = "../../tests/unit/solver/dynamic_test.rs"]
mod dynamic_test;

use crate::models::{Event, Solution};
use crate::solver::{Solver, validate_event};
use crate::utils::{Environment, GenericResult, Timer};
use std::sync::Arc;

/// A default limit for amount of table cells. Each cell is a `usize`, so the default table
/// takes at most 80 MB on 64-bit targets.
pub const DEFAULT_MAX_CELLS: usize = 10_000_000;

/// Solves the problem with classic bottom-up 0/1 knapsack tabulation.
///
/// A cell `(i, t)` of the table keeps the maximum enjoyment achievable using the first `i`
/// activities with total time not exceeding `t`. Time and memory complexity is `O(n * max_time)`,
/// so the table size is checked against a configurable limit before allocation. Columns beyond
/// total time of all activities are never allocated as they repeat the last one.
///
/// Among solutions with maximum enjoyment, the one with the smallest time used is returned.
pub struct DynamicProgramming {
    environment: Arc<Environment>,
    max_cells: usize,
}

impl DynamicProgramming {
    /// Creates a new instance of `DynamicProgramming` with default table size limit.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment, max_cells: DEFAULT_MAX_CELLS }
    }

    /// Sets a maximum amount of table cells.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Returns a maximum amount of table cells.
    pub fn max_cells(&self) -> usize {
        self.max_cells
    }
}

impl Solver for DynamicProgramming {
    fn solve(&self, event: &Event) -> GenericResult<Solution> {
        validate_event(event)?;

        if event.activities.is_empty() {
            return Ok(Solution::empty());
        }

        let logger = self.environment.logger.as_ref();
        let timer = Timer::start();

        let table = EnjoymentTable::new(event, self.max_cells)?;
        logger(&format!(
            "dynamic programming table is filled in {}ms: {}x{} cells",
            timer.elapsed_millis(),
            table.rows,
            table.columns
        ));

        let (best_time, best_enjoyment) = table.find_best();
        let chosen = table.reconstruct(event, best_time, best_enjoyment);
        let solution = Solution::from_indices(event, chosen.as_slice(), true);

        debug_assert_eq!(solution.enjoyment, best_enjoyment);
        debug_assert_eq!(solution.time_used, best_time);

        logger(&format!(
            "dynamic programming completed in {}ms: enjoyment: {}, time used: {}",
            timer.elapsed_millis(),
            solution.enjoyment,
            solution.time_used
        ));

        Ok(solution)
    }
}

/// A row-major `(n + 1) x (capacity + 1)` table of best enjoyment values, where capacity is
/// `max_time` limited by total time of all activities.
struct EnjoymentTable {
    rows: usize,
    columns: usize,
    cells: Vec<usize>,
}

impl EnjoymentTable {
    fn new(event: &Event, max_cells: usize) -> GenericResult<Self> {
        // time beyond total time of all activities cannot change any cell value
        let capacity = event.max_time.min(event.total_time());

        let rows = event.size() + 1;
        let columns = capacity.checked_add(1).ok_or_else(|| format!("max time is too large: '{capacity}'"))?;
        let size = rows
            .checked_mul(columns)
            .filter(|&size| size <= max_cells)
            .ok_or_else(|| format!("table of {rows}x{columns} cells exceeds the limit of {max_cells} cells"))?;

        let mut table = Self { rows, columns, cells: vec![0; size] };
        table.fill(event);

        Ok(table)
    }

    fn get(&self, row: usize, column: usize) -> usize {
        self.cells[row * self.columns + column]
    }

    fn fill(&mut self, event: &Event) {
        let columns = self.columns;

        event.activities.iter().enumerate().for_each(|(idx, activity)| {
            let (previous, current) = self.cells[idx * columns..(idx + 2) * columns].split_at_mut(columns);

            (0..columns).for_each(|time| {
                current[time] = if activity.time <= time {
                    previous[time].max(previous[time - activity.time].saturating_add(activity.enjoyment))
                } else {
                    previous[time]
                };
            });
        });
    }

    /// Returns the smallest time with maximum enjoyment in the last row.
    fn find_best(&self) -> (usize, usize) {
        let last = self.rows - 1;

        (0..self.columns).fold((0, self.get(last, 0)), |(best_time, best_enjoyment), time| {
            let enjoyment = self.get(last, time);
            if enjoyment > best_enjoyment { (time, enjoyment) } else { (best_time, best_enjoyment) }
        })
    }

    /// Walks rows backwards and returns indices of taken activities in ascending order.
    fn reconstruct(&self, event: &Event, best_time: usize, best_enjoyment: usize) -> Vec<usize> {
        let mut chosen = Vec::new();
        let mut time = best_time;
        let mut enjoyment = best_enjoyment;

        for row in (1..self.rows).rev() {
            if enjoyment == 0 {
                break;
            }

            if self.get(row, time) != self.get(row - 1, time) {
                let idx = row - 1;
                let activity = &event.activities[idx];

                chosen.push(idx);
                enjoyment = enjoyment.saturating_sub(activity.enjoyment);
                time -= activity.time;
            }
        }

        chosen.reverse();

        chosen
    }
}
