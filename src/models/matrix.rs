//! Home/away assignment matrix.
//!
//! Decides, for the single extra meeting implied by an odd meeting count,
//! which side of every pair hosts. Indices follow roster order.
//!
//! # Layout
//!
//! `cells[i][j] == Some(true)` means roster slot `i` hosts slot `j`.
//! The grid is antisymmetric (`cells[j][i] == !cells[i][j]`) and the
//! diagonal is `None`.

use serde::{Deserialize, Serialize};

/// N×N home/away grid over roster indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeAwayMatrix {
    cells: Vec<Vec<Option<bool>>>,
}

impl HomeAwayMatrix {
    /// Creates an unassigned grid for `size` roster slots.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![None; size]; size],
        }
    }

    /// Number of roster slots covered.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Raw cell value. `None` on the diagonal, for unassigned pairs, or
    /// out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<bool> {
        self.cells.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    /// Whether slot `i` hosts slot `j`.
    #[inline]
    pub fn hosts(&self, i: usize, j: usize) -> bool {
        self.get(i, j) == Some(true)
    }

    /// Assigns `i` as host of `j` (or visitor when `home` is false) and
    /// mirrors the cell.
    pub fn set(&mut self, i: usize, j: usize, home: bool) {
        debug_assert!(i != j, "diagonal cells stay unassigned");
        self.cells[i][j] = Some(home);
        self.cells[j][i] = Some(!home);
    }

    /// Row view for slot `i`.
    pub fn row(&self, i: usize) -> &[Option<bool>] {
        &self.cells[i]
    }

    /// Number of opponents slot `i` hosts.
    pub fn home_count(&self, i: usize) -> usize {
        self.cells[i].iter().filter(|c| **c == Some(true)).count()
    }

    /// Number of opponents slot `i` visits.
    pub fn away_count(&self, i: usize) -> usize {
        self.cells[i].iter().filter(|c| **c == Some(false)).count()
    }

    /// Home minus away for slot `i`.
    pub fn balance(&self, i: usize) -> i64 {
        self.home_count(i) as i64 - self.away_count(i) as i64
    }

    /// Whether every off-diagonal pair is assigned.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().enumerate().all(|(i, row)| {
            row.iter()
                .enumerate()
                .all(|(j, cell)| i == j || cell.is_some())
        })
    }
}
