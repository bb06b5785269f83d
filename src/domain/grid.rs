use std::fmt;

/// A single grid value. Zone labels and elevations share the same storage type.
pub type Cell = i64;

/// A cell value read from a zone grid.
pub type ZoneLabel = Cell;

/// Reasons a grid file (or a flat list of cells) cannot become a `Grid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input had no first line at all
    MissingHeader,
    /// The first line is not exactly two non-negative integers
    MalformedHeader { line: String },
    /// Either dimension is zero
    EmptyShape { rows: usize, cols: usize },
    /// rows * cols does not fit in memory addressing
    ShapeOverflow { rows: usize, cols: usize },
    /// A body token is not a base-10 integer (line is 1-based)
    InvalidToken { line: usize, token: String },
    /// The file is not UTF-8 text (line is 1-based, where decoding first fails)
    InvalidEncoding { line: usize },
    /// The body holds the wrong number of values for the declared shape
    TokenCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingHeader => {
                write!(f, "Missing header: expected '<rows> <cols>' on the first line")
            }
            FormatError::MalformedHeader { line } => write!(
                f,
                "Malformed header {:?}: expected exactly two non-negative integers '<rows> <cols>'",
                line
            ),
            FormatError::EmptyShape { rows, cols } => write!(
                f,
                "Empty grid shape {}x{}: rows and cols must both be at least 1",
                rows, cols
            ),
            FormatError::ShapeOverflow { rows, cols } => {
                write!(f, "Grid shape {}x{} is too large", rows, cols)
            }
            FormatError::InvalidToken { line, token } => {
                write!(f, "Invalid value {:?} on line {}: not an integer", token, line)
            }
            FormatError::InvalidEncoding { line } => {
                write!(f, "Invalid text on line {}: file is not UTF-8", line)
            }
            FormatError::TokenCountMismatch { expected, found } => write!(
                f,
                "Wrong element count: header declares {} values but found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// Rectangular, row-major grid of integers with at least one row and one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from a flat row-major list.
    /// The first `cols` values fill row 0, the next `cols` fill row 1, and so on.
    pub fn from_row_major(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, FormatError> {
        if rows == 0 || cols == 0 {
            return Err(FormatError::EmptyShape { rows, cols });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(FormatError::ShapeOverflow { rows, cols })?;
        if cells.len() != expected {
            return Err(FormatError::TokenCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Convenience for small literal grids: one array per row.
    pub fn from_rows<const N: usize>(rows: &[[Cell; N]]) -> Result<Self, FormatError> {
        let cells: Vec<Cell> = rows.iter().flatten().copied().collect();
        Self::from_row_major(rows.len(), N, cells)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.shape() == other.shape()
    }

    /// Value at (row, col), or `None` when outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Flat row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Smallest and largest cell values.
    pub fn min_max(&self) -> (Cell, Cell) {
        // Non-empty by construction, so the fold seeds are always overwritten
        self.cells
            .iter()
            .fold((Cell::MAX, Cell::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Serializes into the text format read by the grid loader:
    /// a `<rows> <cols>` header followed by one line per row.
    pub fn to_text(&self) -> String {
        let mut out = format!("{} {}\n", self.rows, self.cols);
        for row in self.iter_rows() {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}
