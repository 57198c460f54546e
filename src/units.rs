#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

/// Ceiling on the number of side selections a single walk may make.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct StepLimit(pub usize);
