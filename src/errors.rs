use error_chain::*;

use crate::cells::{GridCoordinate, Side};
use crate::units::StepLimit;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        Format(reason: String) {
            description("malformed maze definition")
            display("malformed maze definition: {}", reason)
        }
        OutOfRange(position: GridCoordinate) {
            description("position outside the maze")
            display("position {} is outside the maze", position)
        }
        InvalidDirection(position: GridCoordinate, side: Side) {
            description("triangle has no such side")
            display("the triangle at {} has no {} side", position, side)
        }
        NoEntrance(position: GridCoordinate) {
            description("start cell has no open boundary side")
            display("no open boundary side to enter the maze at {}", position)
        }
        Trapped(position: GridCoordinate) {
            description("no open side to continue the walk")
            display("walled in at {} with every side closed", position)
        }
        StepLimitExceeded(limit: StepLimit) {
            description("walk exceeded its step ceiling")
            display("walk exceeded its step ceiling of {} steps", limit.0)
        }
    }
}
