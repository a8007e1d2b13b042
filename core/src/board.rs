use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed 3×3 playing grid, stored row-major as a flat array.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; GRID_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    pub const fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < GRID_SIZE && coords.1 < GRID_SIZE {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        Ok(self.cells[self.validate_coords(coords)?.to_flat_index()])
    }

    /// Writes unconditionally; only writing to empty cells is the caller's
    /// contract.
    pub fn set(&mut self, coords: Coord2, cell: Cell) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_flat_index()] = cell;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Row-major iterator over the empty coordinates.
    pub fn iter_empty(&self) -> impl Iterator<Item = Coord2> + '_ {
        let size = usize::from(GRID_SIZE);
        (0..GRID_CELLS)
            .filter(move |&index| self.cells[index].is_none())
            .map(move |index| ((index / size) as Coord, (index % size) as Coord))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    /// Panics on out-of-range coordinates; use [`Board::get`] for the
    /// checked variant.
    fn index(&self, coords: Coord2) -> &Self::Output {
        assert!(self.validate_coords(coords).is_ok(), "coordinates outside the grid");
        &self.cells[coords.to_flat_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        assert!(self.validate_coords(coords).is_ok(), "coordinates outside the grid");
        &mut self.cells[coords.to_flat_index()]
    }
}
