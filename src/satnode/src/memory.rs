//! Static clause memory and the dynamic literal-falsified bitmap.
//!
//! Both are dense `R x C` matrices of the same shape: `R` clauses, `C` the
//! maximum clause width, rows right-padded with `0`.

use crate::literal::Lit;

/// Immutable clause matrix plus the row-pointer cursor used during
/// propagation sweeps.
#[derive(Debug, Clone)]
pub struct StaticMemory {
    rows: Vec<Vec<Lit>>,
    num_cols: usize,
    row_pointer: usize,
    zero_row: Vec<Lit>,
}

impl StaticMemory {
    /// Builds the matrix, right-padding every row with `0` out to the width
    /// of the longest clause.
    pub fn new(mut rows: Vec<Vec<Lit>>) -> Self {
        let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(num_cols, 0);
        }
        StaticMemory {
            rows,
            num_cols,
            row_pointer: 0,
            zero_row: vec![0; num_cols],
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn row_pointer(&self) -> usize {
        self.row_pointer
    }

    /// Returns row `idx`, or an all-zero row of width `num_cols` if `idx` is
    /// out of bounds. Never faults.
    pub fn fetch_row(&self, idx: usize) -> &[Lit] {
        match self.rows.get(idx) {
            Some(row) => row,
            None => &self.zero_row,
        }
    }

    pub fn advance_pointer(&mut self) {
        self.row_pointer += 1;
    }

    pub fn reset_pointer(&mut self) {
        self.row_pointer = 0;
    }
}

/// Mutable per-row falsification bitmap, same shape as [`StaticMemory`].
#[derive(Debug, Clone)]
pub struct DynamicMemory {
    rows: Vec<Vec<u8>>,
    zero_row: Vec<u8>,
}

impl DynamicMemory {
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        DynamicMemory {
            rows: vec![vec![0u8; num_cols]; num_rows],
            zero_row: vec![0u8; num_cols],
        }
    }

    /// Returns row `idx`, or an all-zero row if `idx` is out of bounds.
    /// Never faults, mirroring [`StaticMemory::fetch_row`].
    pub fn row(&self, idx: usize) -> &[u8] {
        match self.rows.get(idx) {
            Some(row) => row,
            None => &self.zero_row,
        }
    }

    /// Writes `row` at `idx`. Out-of-bounds writes are silently dropped: an
    /// out-of-range row has no storage to update, matching the read side's
    /// never-fault contract.
    pub fn set_row(&mut self, idx: usize, row: Vec<u8>) {
        if let Some(slot) = self.rows.get_mut(idx) {
            *slot = row;
        }
    }

    /// Clears every falsification bit. Called when the trail is rewound on
    /// a decision flip; the bitmap is a pure function of the trail and must
    /// be recomputed from scratch.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.iter_mut().for_each(|b| *b = 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_row_out_of_bounds_is_all_zero() {
        let mem = StaticMemory::new(vec![vec![2, 4], vec![3, 6]]);
        assert_eq!(mem.fetch_row(5), &[0, 0]);
    }

    #[test]
    fn fetch_row_in_bounds_returns_actual_row() {
        let mem = StaticMemory::new(vec![vec![2, 4], vec![3, 6]]);
        assert_eq!(mem.fetch_row(1), &[3, 6]);
    }

    #[test]
    fn pointer_resets_and_advances() {
        let mut mem = StaticMemory::new(vec![vec![2]]);
        mem.advance_pointer();
        mem.advance_pointer();
        assert_eq!(mem.row_pointer(), 2);
        mem.reset_pointer();
        assert_eq!(mem.row_pointer(), 0);
    }

    #[test]
    fn dynamic_memory_clear_zeroes_all_rows() {
        let mut dyn_mem = DynamicMemory::new(2, 2);
        dyn_mem.set_row(0, vec![1, 1]);
        dyn_mem.clear();
        assert_eq!(dyn_mem.row(0), &[0, 0]);
    }

    #[test]
    fn dynamic_memory_row_out_of_bounds_is_all_zero() {
        let dyn_mem = DynamicMemory::new(0, 0);
        assert_eq!(dyn_mem.row(0), &[] as &[u8]);
    }

    #[test]
    fn dynamic_memory_set_row_out_of_bounds_is_ignored() {
        let mut dyn_mem = DynamicMemory::new(0, 2);
        dyn_mem.set_row(3, vec![1, 1]);
        assert_eq!(dyn_mem.row(3), &[0, 0]);
    }
}
