#![forbid(unsafe_code)]

//! The reorder step: open a slot at `to` by sliding the run between the
//! dragged cell and `to` one position toward the dragged cell's old slot.
//!
//! Moving forward (`to > from`), every cell in `(from, to]` moves to
//! `i - 1`. Moving backward (`to < from`), every cell in `[to, from)` moves to
//! `i + 1`, visited from `from - 1` down to `to`. The dragged cell then takes
//! index `to`.
//!
//! Cells are found by scanning current indices on every step, never through
//! a cached position, so several reorders within one drag compose.
//!
//! # Invariants
//!
//! 1. If indices form a permutation of `0..len` before the call, they form one
//!    after it.
//! 2. Only cells whose index lies between `from` and `to` are touched.
//! 3. The dragged cell's frame is not modified here.

use crate::cell::{Cell, CellElement, CellId};

/// One cell that changed index during a reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub cell: CellId,
    pub from: usize,
    pub to: usize,
}

/// Move the dragged cell to index `to`, shifting the cells in between.
///
/// Returns the shifts applied to the other cells, in visiting order. Returns
/// an empty list when the dragged cell is unknown, already at `to`, or `to`
/// is out of range.
pub fn reorder<V: CellElement>(cells: &mut [Cell<V>], dragged: CellId, to: usize) -> Vec<Shift> {
    let Some(from) = cells.iter().find(|c| c.id() == dragged).map(Cell::index) else {
        return Vec::new();
    };
    if from == to || to >= cells.len() {
        return Vec::new();
    }

    let mut shifts = Vec::with_capacity(from.abs_diff(to));
    if to > from {
        for i in from + 1..=to {
            shift_one(cells, dragged, i, i - 1, &mut shifts);
        }
    } else {
        for i in (to..from).rev() {
            shift_one(cells, dragged, i, i + 1, &mut shifts);
        }
    }

    if let Some(cell) = cells.iter_mut().find(|c| c.id() == dragged) {
        cell.view_mut().set_index(to);
    }
    shifts
}

fn shift_one<V: CellElement>(
    cells: &mut [Cell<V>],
    dragged: CellId,
    from: usize,
    to: usize,
    shifts: &mut Vec<Shift>,
) {
    let Some(cell) = cells
        .iter_mut()
        .find(|c| c.id() != dragged && c.index() == from)
    else {
        #[cfg(feature = "tracing")]
        tracing::warn!(message = "reorder.lookup_miss", index = from);
        return;
    };
    cell.view_mut().set_index(to);
    shifts.push(Shift {
        cell: cell.id(),
        from,
        to,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PlainCell;

    fn cells(n: usize) -> Vec<Cell<PlainCell<usize>>> {
        (0..n)
            .map(|i| {
                let mut view = PlainCell::new(i);
                view.set_index(i);
                Cell::new(CellId(i as u64), view)
            })
            .collect()
    }

    /// Content in logical order.
    fn order(cells: &[Cell<PlainCell<usize>>]) -> Vec<usize> {
        let mut sorted: Vec<_> = cells.iter().collect();
        sorted.sort_by_key(|c| c.index());
        sorted.iter().map(|c| c.view().content).collect()
    }

    #[test]
    fn forward_move_shifts_run_left() {
        let mut cs = cells(5);
        let shifts = reorder(&mut cs, CellId(0), 3);
        assert_eq!(order(&cs), vec![1, 2, 3, 0, 4]);
        assert_eq!(
            shifts,
            vec![
                Shift { cell: CellId(1), from: 1, to: 0 },
                Shift { cell: CellId(2), from: 2, to: 1 },
                Shift { cell: CellId(3), from: 3, to: 2 },
            ]
        );
    }

    #[test]
    fn backward_move_shifts_run_right_descending() {
        let mut cs = cells(5);
        let shifts = reorder(&mut cs, CellId(4), 1);
        assert_eq!(order(&cs), vec![0, 4, 1, 2, 3]);
        let visited: Vec<_> = shifts.iter().map(|s| s.from).collect();
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[test]
    fn same_index_is_noop() {
        let mut cs = cells(4);
        assert!(reorder(&mut cs, CellId(2), 2).is_empty());
        assert_eq!(order(&cs), vec![0, 1, 2, 3]);
    }

    #[test]
    fn out_of_range_target_is_noop() {
        let mut cs = cells(4);
        assert!(reorder(&mut cs, CellId(1), 4).is_empty());
        assert_eq!(order(&cs), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unknown_dragged_cell_is_noop() {
        let mut cs = cells(3);
        assert!(reorder(&mut cs, CellId(99), 0).is_empty());
    }

    #[test]
    fn consecutive_reorders_compose() {
        let mut cs = cells(6);
        reorder(&mut cs, CellId(1), 4);
        reorder(&mut cs, CellId(1), 2);
        reorder(&mut cs, CellId(1), 5);
        assert_eq!(order(&cs), vec![0, 2, 3, 4, 5, 1]);
    }

    #[test]
    fn lookup_miss_skips_step() {
        let mut cs = cells(4);
        // Knock cell 2 out of the range so index 2 has no owner.
        cs[2].view_mut().set_index(9);
        let shifts = reorder(&mut cs, CellId(0), 3);
        assert_eq!(shifts.len(), 2);
        assert_eq!(cs[1].index(), 0);
        assert_eq!(cs[3].index(), 2);
        assert_eq!(cs[0].index(), 3);
    }
}
