use std::fmt;

use itertools::Itertools;

use crate::cells::GridCoordinate;
use crate::grid::TriangleGrid;
use crate::utils::{fnv_hashset, FnvHashSet};

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from("   ")
    }
}

/// Marks the cells a walk passed through.
#[derive(Debug)]
pub struct RouteDisplay {
    on_route_coordinates: FnvHashSet<GridCoordinate>,
}

impl RouteDisplay {
    pub fn new(route: &[GridCoordinate]) -> Self {
        let mut on_route_coordinates = fnv_hashset(route.len());
        on_route_coordinates.extend(route.iter().cloned());
        RouteDisplay { on_route_coordinates }
    }
}

impl GridDisplay for RouteDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_route_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

/// One text line per grid row; each cell body is 3 glyphs wide, taken from
/// `display` when given and from the cell's wall mask otherwise.
pub fn render_grid(grid: &TriangleGrid, display: Option<&dyn GridDisplay>) -> String {
    (1..=grid.rows().0)
        .map(|row| {
            (1..=grid.columns().0)
                .map(|col| {
                    let coord = GridCoordinate::new(row, col);
                    match display {
                        Some(displayer) => displayer.render_cell_body(coord),
                        None => {
                            let cell = grid.get_cell(coord)
                                .expect("rendering iterates only in-range coordinates");
                            format!("{:^3}", cell)
                        }
                    }
                })
                .join("")
        })
        .join("\n")
}

impl fmt::Display for TriangleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_grid(self, None))
    }
}
