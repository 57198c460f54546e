use docopt::Docopt;
use error_chain::bail;
use serde_derive::Deserialize;
use trimazes::{
    cells::GridCoordinate,
    errors::*,
    loader,
    navigator::{simply_connected_step_limit, HandRule, Navigator},
};

const USAGE: &str = "Trimazes

Solves a maze drawn on a triangular grid using the right or left hand rule.

Usage:
    trimazes_driver -h | --help
    trimazes_driver --test <file>
    trimazes_driver --rpath <row> <col> <file>
    trimazes_driver --lpath <row> <col> <file>

Options:
    -h --help   Show this screen.
    --test      Check that <file> holds a well formed maze definition. Prints either 'Valid' or 'Invalid'.
    --rpath     Walk the maze keeping the right hand on the wall, starting at row <row>, column <col>.
    --lpath     Walk the maze keeping the left hand on the wall, starting at row <row>, column <col>.
";

#[derive(Debug, Deserialize)]
struct DriverArgs {
    flag_test: bool,
    flag_rpath: bool,
    flag_lpath: bool,
    arg_row: Option<usize>,
    arg_col: Option<usize>,
    arg_file: String,
}

fn main() {
    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: DriverArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if args.flag_test {
        // Any load failure folds into Invalid; the command itself succeeds.
        match loader::load_grid(&args.arg_file) {
            Ok(_) => println!("Valid"),
            Err(_) => println!("Invalid"),
        }
        return Ok(());
    }

    let rule = if args.flag_rpath {
        HandRule::RightHand
    } else {
        HandRule::LeftHand
    };
    let start = match (args.arg_row, args.arg_col) {
        (Some(row), Some(col)) => GridCoordinate::new(row, col),
        _ => bail!("a start row and column are required"),
    };

    let grid = loader::load_grid(&args.arg_file)?;
    let route = Navigator::new(&grid, start, rule)?.walk(simply_connected_step_limit(&grid))?;
    for position in &route {
        println!("{}, {}", position.row, position.col);
    }

    Ok(())
}
