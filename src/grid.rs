use std::fmt;

use error_chain::bail;

use crate::cells::{GridCoordinate, TriangleOrientation, WallBit, ALL_WALLS_MASK};
use crate::errors::*;
use crate::units::{ColumnsCount, RowsCount};

/// An immutable rectangular arrangement of triangular cells, each carrying a
/// 3-bit wall mask. Construction validates the whole structure; afterwards
/// every stored value is known to be in range and every shared wall is known
/// to be recorded identically by both of its cells.
#[derive(Clone)]
pub struct TriangleGrid {
    rows: RowsCount,
    columns: ColumnsCount,
    cells: Vec<u8>,
}

impl fmt::Debug for TriangleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "TriangleGrid :: rows: {:?}, columns: {:?}, cells: {:?}",
               self.rows,
               self.columns,
               self.cells)
    }
}

impl TriangleGrid {
    pub fn new(rows: RowsCount, columns: ColumnsCount, cells: Vec<u8>) -> Result<TriangleGrid> {
        let RowsCount(row_count) = rows;
        let ColumnsCount(column_count) = columns;

        if row_count < 1 || column_count < 1 {
            bail!(ErrorKind::Format("the maze needs at least one row and one column".into()));
        }
        if row_count == column_count {
            bail!(ErrorKind::Format(format!("the row and column counts must differ, both are {}",
                                            row_count)));
        }
        let cell_count = row_count
            .checked_mul(column_count)
            .ok_or_else(|| ErrorKind::Format("the maze dimensions overflow".into()))?;
        if cells.len() != cell_count {
            bail!(ErrorKind::Format(format!("expected {} cell values, found {}",
                                            cell_count,
                                            cells.len())));
        }
        if let Some(bad) = cells.iter().position(|&value| value > ALL_WALLS_MASK) {
            bail!(ErrorKind::Format(format!("cell {} holds {} which is outside 0-7",
                                            GridCoordinate::from_row_major_index(bad, columns),
                                            cells[bad])));
        }

        let grid = TriangleGrid {
            rows,
            columns,
            cells,
        };
        grid.check_wall_seams()?;
        Ok(grid)
    }

    /// Every physical wall is stored twice, once per adjacent cell; both
    /// records must agree or the definition is rejected.
    fn check_wall_seams(&self) -> Result<()> {
        for coord in self.iter() {
            if coord.col < self.columns.0 {
                let right = GridCoordinate::new(coord.row, coord.col + 1);
                if self.wall_bit(coord, WallBit::Right) != self.wall_bit(right, WallBit::Left) {
                    bail!(ErrorKind::Format(format!("cells {} and {} disagree about their \
                                                     shared wall",
                                                    coord,
                                                    right)));
                }
            }

            // Only an apex-down cell shares its horizontal wall with the
            // (apex-up) cell directly below it.
            if coord.row < self.rows.0 &&
               TriangleOrientation::of(coord) == TriangleOrientation::ApexDown {
                let below = GridCoordinate::new(coord.row + 1, coord.col);
                if self.wall_bit(coord, WallBit::Horizontal) !=
                   self.wall_bit(below, WallBit::Horizontal) {
                    bail!(ErrorKind::Format(format!("cells {} and {} disagree about their \
                                                     shared wall",
                                                    coord,
                                                    below)));
                }
            }
        }
        Ok(())
    }

    fn wall_bit(&self, coord: GridCoordinate, bit: WallBit) -> bool {
        let index = self.coordinate_to_index(coord)
            .expect("seam check iterates only in-range coordinates");
        self.cells[index] & bit.mask() != 0
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Is the coordinate within the grid's 1-based bounds?
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row >= 1 && coord.row <= self.rows.0 && coord.col >= 1 && coord.col <= self.columns.0
    }

    /// Convert a grid coordinate to an index in the range 0..grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some((coord.row - 1) * self.columns.0 + (coord.col - 1))
        } else {
            None
        }
    }

    /// The cell's raw wall mask.
    pub fn get_cell(&self, coord: GridCoordinate) -> Result<u8> {
        self.coordinate_to_index(coord)
            .map(|index| self.cells[index])
            .ok_or_else(|| Error::from(ErrorKind::OutOfRange(coord)))
    }

    /// Does the cell record a wall on the given file-format bit?
    pub fn has_wall(&self, coord: GridCoordinate, bit: WallBit) -> Result<bool> {
        let cell = self.get_cell(coord)?;
        Ok(cell & bit.mask() != 0)
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter {
            columns: self.columns,
            current_cell_number: 0,
            cells_count: self.size(),
        }
    }
}

#[derive(Clone)]
pub struct CellIter {
    columns: ColumnsCount,
    current_cell_number: usize,
    cells_count: usize,
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number,
                                                             self.columns);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
