//! Reads the textual maze format into a [`TriangleGrid`]: two dimension
//! integers, then `rows * cols` cell values in `[0, 7]` row-major, then end
//! of input. Anything else is a format error and no grid is produced.

use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use error_chain::bail;

use crate::errors::*;
use crate::grid::TriangleGrid;
use crate::units::{ColumnsCount, RowsCount};

pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<TriangleGrid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .chain_err(|| format!("failed to read maze file {}", path.display()))?;
    parse_grid(&text)
}

pub fn parse_grid(input: &str) -> Result<TriangleGrid> {
    let mut tokens = input.split_whitespace();

    let row_count = next_dimension(&mut tokens, "row count")?;
    let column_count = next_dimension(&mut tokens, "column count")?;
    let cell_count = row_count
        .checked_mul(column_count)
        .ok_or_else(|| ErrorKind::Format("the maze dimensions overflow".into()))?;

    // The declared size is untrusted input; cap the allocation hint.
    let mut cells = Vec::with_capacity(cell_count.min(1 << 16));
    for cell_number in 0..cell_count {
        match tokens.next() {
            Some(token) => cells.push(parse_cell(token)?),
            None => {
                bail!(ErrorKind::Format(format!("expected {} cell values, the input ends \
                                                 after {}",
                                                cell_count,
                                                cell_number)))
            }
        }
    }

    if tokens.next().is_some() {
        bail!(ErrorKind::Format("trailing content after the last cell value".into()));
    }

    TriangleGrid::new(RowsCount(row_count), ColumnsCount(column_count), cells)
}

fn next_dimension(tokens: &mut SplitWhitespace, what: &str) -> Result<usize> {
    let token = tokens.next()
        .ok_or_else(|| ErrorKind::Format(format!("missing the {}", what)))?;
    token.parse()
        .chain_err(|| ErrorKind::Format(format!("the {} {:?} is not a whole number", what, token)))
}

fn parse_cell(token: &str) -> Result<u8> {
    // Range checking beyond u8 is the grid constructor's job.
    token.parse()
        .chain_err(|| ErrorKind::Format(format!("the cell value {:?} is not a whole number \
                                                 in 0-7",
                                                token)))
}
