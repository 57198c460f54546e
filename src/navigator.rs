use error_chain::bail;

use crate::cells::{GridCoordinate, Side, TriangleOrientation};
use crate::errors::*;
use crate::grid::TriangleGrid;
use crate::triangles::TriangleView;
use crate::units::StepLimit;

/// Which hand stays on the wall while walking.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum HandRule {
    LeftHand,
    RightHand,
}

/// The side ordering scanned by one hand rule on one orientation.
///
/// Clockwise order starts from the horizontal side: apex-up cells cycle
/// (horizontal, right, left), apex-down cells (horizontal, left, right).
/// The right hand scans clockwise, the left hand the reverse.
pub fn side_cycle(orientation: TriangleOrientation, rule: HandRule) -> &'static [Side; 3] {
    match (orientation, rule) {
        (TriangleOrientation::ApexUp, HandRule::RightHand) => &[Side::Up, Side::Right, Side::Left],
        (TriangleOrientation::ApexUp, HandRule::LeftHand) => &[Side::Left, Side::Right, Side::Up],
        (TriangleOrientation::ApexDown, HandRule::RightHand) => {
            &[Side::Down, Side::Left, Side::Right]
        }
        (TriangleOrientation::ApexDown, HandRule::LeftHand) => {
            &[Side::Right, Side::Left, Side::Down]
        }
    }
}

/// Step ceiling a wall-follower cannot reach in a simply connected maze.
/// Mazes with detached wall loops can cycle forever, so a walk there may
/// exhaust this limit instead of terminating.
pub fn simply_connected_step_limit(grid: &TriangleGrid) -> StepLimit {
    StepLimit(grid.size() * 3)
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum WalkState {
    /// No current cell yet; the entry side is still to be chosen.
    Entering,
    /// Standing in `current`, having come in through `entered_through`.
    Advancing {
        current: GridCoordinate,
        entered_through: Side,
    },
    /// Walked off an exterior side; the walk succeeded.
    Done,
    /// Every side of `at` is walled; the walk cannot continue.
    Stuck { at: GridCoordinate },
}

/// The wall-following engine. Owns the only mutable cursor of a walk: the
/// current cell and the side it was entered through.
#[derive(Debug)]
pub struct Navigator<'g> {
    view: TriangleView<'g>,
    start: GridCoordinate,
    rule: HandRule,
    state: WalkState,
}

impl<'g> Navigator<'g> {
    /// Fails `OutOfRange` for a start position outside the grid, before any
    /// traversal step runs.
    pub fn new(grid: &'g TriangleGrid,
               start: GridCoordinate,
               rule: HandRule)
               -> Result<Navigator<'g>> {
        if !grid.is_valid_coordinate(start) {
            bail!(ErrorKind::OutOfRange(start));
        }
        Ok(Navigator {
            view: TriangleView::new(grid),
            start,
            rule,
            state: WalkState::Entering,
        })
    }

    /// Run the walk to completion and return every visited cell in order,
    /// the start cell first. The exit itself is not a cell and is not
    /// emitted. `limit` caps the number of side selections; exceeding it
    /// fails `StepLimitExceeded`.
    pub fn walk(mut self, limit: StepLimit) -> Result<Vec<GridCoordinate>> {
        let StepLimit(max_steps) = limit;
        let mut visited = Vec::new();
        let mut steps = 0;

        loop {
            match self.state {
                WalkState::Entering => {
                    let entry = self.entry_side()?;
                    visited.push(self.start);
                    self.state = WalkState::Advancing {
                        current: self.start,
                        entered_through: entry,
                    };
                }
                WalkState::Advancing { current, entered_through } => {
                    if steps == max_steps {
                        bail!(ErrorKind::StepLimitExceeded(limit));
                    }
                    steps += 1;

                    match self.next_open_side(current, entered_through)? {
                        None => self.state = WalkState::Stuck { at: current },
                        Some(side) => {
                            match self.view.offset(current, side) {
                                Some(next) => {
                                    visited.push(next);
                                    self.state = WalkState::Advancing {
                                        current: next,
                                        entered_through: side.opposite(),
                                    };
                                }
                                // Off the grid through an open exterior
                                // side: the maze is solved.
                                None => self.state = WalkState::Done,
                            }
                        }
                    }
                }
                WalkState::Stuck { at } => bail!(ErrorKind::Trapped(at)),
                WalkState::Done => return Ok(visited),
            }
        }
    }

    /// The first open side of the start cell's boundary set, in the fixed
    /// priority order left, right, horizontal.
    fn entry_side(&self) -> Result<Side> {
        let boundary = self.view.exterior_sides(self.start)?;
        for &side in &*boundary {
            if self.view.is_open(self.start, side)? {
                return Ok(side);
            }
        }
        bail!(ErrorKind::NoEntrance(self.start));
    }

    /// Scan the cell's sides in hand-rule order, starting immediately after
    /// the side entered through and re-checking that side last. `None` when
    /// all three sides are walled.
    fn next_open_side(&self,
                      current: GridCoordinate,
                      entered_through: Side)
                      -> Result<Option<Side>> {
        let cycle = side_cycle(self.view.orientation(current), self.rule);
        let entry_index = cycle.iter()
            .position(|&side| side == entered_through)
            .expect("the side entered through is always a side of the cell entered");

        for offset in 1..=cycle.len() {
            let side = cycle[(entry_index + offset) % cycle.len()];
            if self.view.is_open(current, side)? {
                return Ok(Some(side));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::errors::{Error, ErrorKind};
    use crate::units::{ColumnsCount, RowsCount, StepLimit};
    use crate::utils::fnv_hashset;

    fn gc(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate::new(row, col)
    }

    /// Straight corridor along row 1 of a 2x3 grid: entrance on the left of
    /// (1,1), exit on the right of (1,3), row 2 fully walled.
    fn corridor_2x3() -> TriangleGrid {
        TriangleGrid::new(RowsCount(2), ColumnsCount(3), vec![4, 4, 4, 7, 7, 7]).unwrap()
    }

    /// A single fully open row: every wall of every cell absent.
    fn open_1x5() -> TriangleGrid {
        TriangleGrid::new(RowsCount(1), ColumnsCount(5), vec![0; 5]).unwrap()
    }

    fn walk(grid: &TriangleGrid, start: GridCoordinate, rule: HandRule) -> Vec<GridCoordinate> {
        Navigator::new(grid, start, rule)
            .expect("start position is valid")
            .walk(simply_connected_step_limit(grid))
            .expect("walk should reach an exit")
    }

    #[test]
    fn right_hand_walks_the_corridor_to_the_far_exit() {
        let g = corridor_2x3();
        assert_eq!(walk(&g, gc(1, 1), HandRule::RightHand),
                   vec![gc(1, 1), gc(1, 2), gc(1, 3)]);
    }

    #[test]
    fn hand_rules_agree_on_a_forced_corridor() {
        // No branches anywhere, so both hands are forced along the same
        // cells in the same order.
        let g = corridor_2x3();
        let right = walk(&g, gc(1, 1), HandRule::RightHand);
        let left = walk(&g, gc(1, 1), HandRule::LeftHand);
        assert_eq!(right, left);
    }

    #[test]
    fn hand_rules_walk_an_open_row_to_opposite_exits() {
        // From the middle of a fully open row the two rules set off in
        // opposite directions and jointly cover the whole row.
        let g = open_1x5();
        let right = walk(&g, gc(1, 3), HandRule::RightHand);
        let left = walk(&g, gc(1, 3), HandRule::LeftHand);

        assert_eq!(right, vec![gc(1, 3), gc(1, 4), gc(1, 5)]);
        assert_eq!(left, vec![gc(1, 3), gc(1, 2), gc(1, 1)]);

        let mut covered = fnv_hashset(g.size());
        covered.extend(right.iter().cloned());
        covered.extend(left.iter().cloned());
        assert_eq!(covered.len(), g.size());
    }

    #[test]
    fn start_outside_the_grid_fails_before_walking() {
        let g = corridor_2x3();
        for &(row, col) in &[(0, 1), (1, 0), (3, 1), (1, 4)] {
            match Navigator::new(&g, gc(row, col), HandRule::RightHand) {
                Err(Error(ErrorKind::OutOfRange(at), _)) => assert_eq!(at, gc(row, col)),
                other => panic!("expected OutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn interior_start_without_open_boundary_fails_no_entrance() {
        let g = corridor_2x3();
        // (1,2) has no boundary sides at all, (2,1) has only closed ones.
        for &(row, col) in &[(1, 2), (2, 1)] {
            let result = Navigator::new(&g, gc(row, col), HandRule::RightHand)
                .unwrap()
                .walk(simply_connected_step_limit(&g));
            match result {
                Err(Error(ErrorKind::NoEntrance(at), _)) => assert_eq!(at, gc(row, col)),
                other => panic!("expected NoEntrance, got {:?}", other),
            }
        }
    }

    #[test]
    fn tight_step_limit_fails_the_walk() {
        let g = corridor_2x3();
        // The corridor needs three side selections: two advances and the
        // final exiting one.
        let result = Navigator::new(&g, gc(1, 1), HandRule::RightHand)
            .unwrap()
            .walk(StepLimit(2));
        match result {
            Err(Error(ErrorKind::StepLimitExceeded(limit), _)) => {
                assert_eq!(limit, StepLimit(2))
            }
            other => panic!("expected StepLimitExceeded, got {:?}", other),
        }

        let route = Navigator::new(&g, gc(1, 1), HandRule::RightHand)
            .unwrap()
            .walk(StepLimit(3))
            .unwrap();
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn single_cell_walk_exits_back_through_the_entrance() {
        // (1,1) opens only to the left rim; the walker re-checks its entry
        // side last, finds it open and leaves the way it came.
        let g = TriangleGrid::new(RowsCount(1), ColumnsCount(2), vec![6, 7]).unwrap();
        assert_eq!(walk(&g, gc(1, 1), HandRule::RightHand), vec![gc(1, 1)]);
        assert_eq!(walk(&g, gc(1, 1), HandRule::LeftHand), vec![gc(1, 1)]);
    }

    #[test]
    fn side_cycles_are_mirror_images() {
        for &orientation in &[TriangleOrientation::ApexUp, TriangleOrientation::ApexDown] {
            let clockwise = side_cycle(orientation, HandRule::RightHand);
            let counter: Vec<Side> =
                side_cycle(orientation, HandRule::LeftHand).iter().rev().cloned().collect();
            assert_eq!(&clockwise[..], &counter[..]);
            assert_eq!(clockwise[0], orientation.horizontal_side());
        }
    }
}
