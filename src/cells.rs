use std::convert::From;
use std::fmt;

use crate::units::ColumnsCount;

/// 1-based (row, column) position of a triangle in the grid.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> GridCoordinate {
        let ColumnsCount(row_size) = columns;
        GridCoordinate::new(index / row_size + 1, index % row_size + 1)
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_col_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_col_pair.0, row_col_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Whether a triangle's single horizontal side is its top or its bottom edge.
///
/// Apex-up cells carry their horizontal side on top (an `Up` side, shared
/// with the cell above); apex-down cells carry it on the bottom (a `Down`
/// side, shared with the cell below).
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum TriangleOrientation {
    ApexUp,
    ApexDown,
}

impl TriangleOrientation {
    /// Orientation is fixed by position alone: apex-up iff `row + col` is
    /// even. It alternates along every row and every column.
    #[inline]
    pub fn of(coord: GridCoordinate) -> TriangleOrientation {
        if (coord.row + coord.col) % 2 == 0 {
            TriangleOrientation::ApexUp
        } else {
            TriangleOrientation::ApexDown
        }
    }

    /// The one vertical travel direction this orientation physically has.
    #[inline]
    pub fn horizontal_side(self) -> Side {
        match self {
            TriangleOrientation::ApexUp => Side::Up,
            TriangleOrientation::ApexDown => Side::Down,
        }
    }
}

/// A travel direction out of a cell. Every triangle has `Left` and `Right`
/// sides; `Up` exists only on apex-up cells and `Down` only on apex-down
/// cells.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Side {
    Left,
    Right,
    Up,
    Down,
}

impl Side {
    /// The side a neighbour is entered through after travelling this way.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Up => Side::Down,
            Side::Down => Side::Up,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Up => "up",
            Side::Down => "down",
        };
        write!(f, "{}", name)
    }
}

/// Bit positions of the file format's per-cell wall mask. Kept separate from
/// [`Side`]: bit2 guards both vertical travel directions, whichever one the
/// cell's orientation provides.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallBit {
    Left,
    Right,
    Horizontal,
}

/// Any cell value with a bit set outside this mask is malformed.
pub const ALL_WALLS_MASK: u8 = 0b0000_0111;

impl WallBit {
    #[inline]
    pub fn mask(self) -> u8 {
        match self {
            WallBit::Left => 1 << 0,
            WallBit::Right => 1 << 1,
            WallBit::Horizontal => 1 << 2,
        }
    }

    /// The wall bit guarding travel through `side`.
    #[inline]
    pub fn for_side(side: Side) -> WallBit {
        match side {
            Side::Left => WallBit::Left,
            Side::Right => WallBit::Right,
            Side::Up | Side::Down => WallBit::Horizontal,
        }
    }
}
