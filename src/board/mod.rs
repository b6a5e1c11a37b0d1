//! Board geometry: rows of lettered cells and the scoring lines over them.
//!
//! A board of size `n` has `n + 1` rows: row *i* (1-indexed, `i <= n`)
//! holds `i + 1` cells and the final row holds `n` cells. Cells are
//! labeled with consecutive uppercase letters in row-major order.
//!
//! Scoring lines come in three families:
//!
//! - **Row**: one line per row (`n + 1` lines).
//! - **FarDiagonal**: the two leading column lines plus the `n`
//!   bottom-anchored diagonals (`n + 2` lines).
//! - **SideDiagonal**: the `n` right-edge diagonals.
//!
//! Total line count is `3n + 3`. The geometry is pure data: capture
//! status lives in the game state, not here, so one layout can be shared
//! by every state in a search tree.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::CellId;
use crate::error::Error;

/// Smallest supported board size.
pub const MIN_SIZE: u32 = 1;

/// Largest supported board size. Past 5 the label alphabet runs out.
pub const MAX_SIZE: u32 = 5;

/// The family a scoring line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineFamily {
    /// Horizontal lines, one per row.
    Row,
    /// Leading columns and bottom-anchored diagonals.
    FarDiagonal,
    /// Right-edge diagonals.
    SideDiagonal,
}

/// A scoring line: a named group of cells.
///
/// Cells are stored as indices into [`BoardLayout::cells`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpec {
    /// Which family the line belongs to.
    pub family: LineFamily,
    /// Position within the family (0-based).
    pub index: usize,
    /// Member cells, as indices into the layout's cell list.
    pub cells: Vec<usize>,
}

/// Immutable board geometry for one board size.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardLayout {
    size: u32,
    cells: Vec<CellId>,
    rows: Vec<Vec<usize>>,
    lines: Vec<LineSpec>,
    index_of: FxHashMap<char, usize>,
}

impl BoardLayout {
    /// Build the geometry for a board of the given size.
    ///
    /// Returns [`Error::UnsupportedBoardSize`] outside `1..=5`.
    pub fn new(size: u32) -> Result<Self, Error> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(Error::UnsupportedBoardSize(size));
        }
        let n = size as usize;

        // Rows: n upper rows of i+1 cells, then a bottom row of n cells.
        let mut rows: Vec<Vec<usize>> = Vec::with_capacity(n + 1);
        let mut next = 0;
        for i in 1..=n {
            rows.push((next..next + i + 1).collect());
            next += i + 1;
        }
        rows.push((next..next + n).collect());
        next += n;

        let cells: Vec<CellId> = (0..next)
            .map(|i| CellId::new((b'A' + i as u8) as char))
            .collect();
        let index_of = cells.iter().enumerate().map(|(i, c)| (c.raw(), i)).collect();

        let mut lines = Vec::with_capacity(3 * n + 3);

        // Row family: one line per row.
        for (i, row) in rows.iter().enumerate() {
            lines.push(LineSpec {
                family: LineFamily::Row,
                index: i,
                cells: row.clone(),
            });
        }

        // FarDiagonal family: the two leading columns first. The second
        // column picks up the head of the bottom row.
        lines.push(LineSpec {
            family: LineFamily::FarDiagonal,
            index: 0,
            cells: (0..n).map(|i| rows[i][0]).collect(),
        });
        let mut second: Vec<usize> = (0..n).map(|i| rows[i][1]).collect();
        second.push(rows[n][0]);
        lines.push(LineSpec {
            family: LineFamily::FarDiagonal,
            index: 1,
            cells: second,
        });

        // Then the n bottom-anchored diagonals: line k starts at bottom-row
        // cell k-1 and climbs one row and one column at a time.
        for k in 1..=n {
            let mut members = vec![rows[n][k - 1]];
            for j in 0..k {
                members.push(rows[n - 1 - j][k - 1 - j]);
            }
            lines.push(LineSpec {
                family: LineFamily::FarDiagonal,
                index: k + 1,
                cells: members,
            });
        }

        // SideDiagonal family: right-edge diagonals. Line k (k < n) starts
        // at the end of row k+1 and steps one cell further from the right
        // edge per row, ending in the bottom row.
        for k in 1..n {
            let mut members = Vec::with_capacity(n - k + 1);
            for (step, r) in (k + 1..=n).enumerate() {
                let row = &rows[r - 1];
                members.push(row[row.len() - 1 - step]);
            }
            let bottom = &rows[n];
            members.push(bottom[bottom.len() - (n - k)]);
            lines.push(LineSpec {
                family: LineFamily::SideDiagonal,
                index: k - 1,
                cells: members,
            });
        }
        // Line n runs down the right edge of the upper rows.
        lines.push(LineSpec {
            family: LineFamily::SideDiagonal,
            index: n - 1,
            cells: (0..n)
                .map(|i| {
                    let row = &rows[i];
                    row[row.len() - 1]
                })
                .collect(),
        });

        Ok(Self {
            size,
            cells,
            rows,
            lines,
            index_of,
        })
    }

    /// Board size `n`.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cell identifiers in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Get a cell identifier by index.
    #[must_use]
    pub fn cell(&self, index: usize) -> CellId {
        self.cells[index]
    }

    /// Rows as sequences of cell indices, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// All scoring lines, row family first.
    #[must_use]
    pub fn lines(&self) -> &[LineSpec] {
        &self.lines
    }

    /// Total number of scoring lines (`3n + 3`).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Captured-line count a player needs to end the game:
    /// `ceil(line_count / 2)`.
    #[must_use]
    pub fn lines_to_win(&self) -> usize {
        self.lines.len().div_ceil(2)
    }

    /// Look up a cell's index by identifier.
    #[must_use]
    pub fn index_of(&self, cell: CellId) -> Option<usize> {
        self.index_of.get(&cell.raw()).copied()
    }
}
