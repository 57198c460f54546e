use error_chain::bail;
use smallvec::SmallVec;

use crate::cells::{GridCoordinate, Side, TriangleOrientation, WallBit};
use crate::errors::*;
use crate::grid::TriangleGrid;

/// A triangle has at most three sides to report.
pub type SideSmallVec = SmallVec<[Side; 3]>;

/// Stateless geometric queries over one borrowed grid: a cell's orientation,
/// which of its sides lie on the outer rim, whether a side is open, and who
/// is on the other side of it.
#[derive(Debug, Copy, Clone)]
pub struct TriangleView<'g> {
    grid: &'g TriangleGrid,
}

impl<'g> TriangleView<'g> {
    pub fn new(grid: &TriangleGrid) -> TriangleView {
        TriangleView { grid }
    }

    #[inline]
    pub fn orientation(&self, coord: GridCoordinate) -> TriangleOrientation {
        TriangleOrientation::of(coord)
    }

    /// The cell's sides on the grid's outer rim, in the fixed priority order
    /// left, right, horizontal.
    pub fn exterior_sides(&self, coord: GridCoordinate) -> Result<SideSmallVec> {
        if !self.grid.is_valid_coordinate(coord) {
            bail!(ErrorKind::OutOfRange(coord));
        }

        let mut sides = SideSmallVec::new();
        if coord.col == 1 {
            sides.push(Side::Left);
        }
        if coord.col == self.grid.columns().0 {
            sides.push(Side::Right);
        }
        let orientation = self.orientation(coord);
        let horizontal_faces_outward = match orientation {
            TriangleOrientation::ApexUp => coord.row == 1,
            TriangleOrientation::ApexDown => coord.row == self.grid.rows().0,
        };
        if horizontal_faces_outward {
            sides.push(orientation.horizontal_side());
        }
        Ok(sides)
    }

    /// Can the cell be left through `side`? Fails `InvalidDirection` when
    /// asked about the vertical side the cell's orientation does not have.
    pub fn is_open(&self, coord: GridCoordinate, side: Side) -> Result<bool> {
        let cell = self.grid.get_cell(coord)?;

        if let Side::Up | Side::Down = side {
            if self.orientation(coord).horizontal_side() != side {
                bail!(ErrorKind::InvalidDirection(coord, side));
            }
        }

        Ok(cell & WallBit::for_side(side).mask() == 0)
    }

    /// The adjacent coordinate through `side`, or `None` when the step
    /// leaves the grid.
    pub fn offset(&self, coord: GridCoordinate, side: Side) -> Option<GridCoordinate> {
        if !self.grid.is_valid_coordinate(coord) {
            return None;
        }
        let target = Self::offset_coordinate(coord, side);
        if self.grid.is_valid_coordinate(target) {
            Some(target)
        } else {
            None
        }
    }

    /// As [`offset`](TriangleView::offset), failing `OutOfRange` instead of
    /// returning `None`.
    pub fn neighbor(&self, coord: GridCoordinate, side: Side) -> Result<GridCoordinate> {
        if !self.grid.is_valid_coordinate(coord) {
            bail!(ErrorKind::OutOfRange(coord));
        }
        let target = Self::offset_coordinate(coord, side);
        if self.grid.is_valid_coordinate(target) {
            Ok(target)
        } else {
            bail!(ErrorKind::OutOfRange(target));
        }
    }

    // The fixed travel offsets. The caller has already bounds-checked
    // `coord`, so row/col are at least 1 and the subtractions cannot wrap.
    fn offset_coordinate(coord: GridCoordinate, side: Side) -> GridCoordinate {
        match side {
            Side::Left => GridCoordinate::new(coord.row, coord.col - 1),
            Side::Right => GridCoordinate::new(coord.row, coord.col + 1),
            Side::Up => GridCoordinate::new(coord.row - 1, coord.col),
            Side::Down => GridCoordinate::new(coord.row + 1, coord.col),
        }
    }
}
