//! Board text model: rows of opaque cell labels.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;
use serde::Serialize;

/// A parsed board: ordered rows of ordered cell labels.
///
/// Rows may have different lengths. Labels are kept verbatim; their meaning
/// (digit, flag, mine, unopened) belongs to whoever produced the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: Vec<Vec<String>>,
}

impl Board {
    /// Parse board text.
    ///
    /// Rows are separated by `\n` (a trailing newline does not add a row and
    /// `\r\n` is accepted). Each row is trimmed and split on runs of
    /// whitespace, so a blank row yields a row with no cells.
    pub fn parse(text: &str) -> Self {
        let rows = text
            .lines()
            .map(|row| row.split_whitespace().map(str::to_owned).collect())
            .collect();
        Board { rows }
    }

    /// Build a board from already split rows.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Board { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns `true` when every row has the same number of cells.
    pub fn is_rectangular(&self) -> bool {
        self.rows.windows(2).all(|pair| pair[0].len() == pair[1].len())
    }

    /// Label of the cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&str> {
        self.rows.get(y)?.get(x).map(String::as_str)
    }

    /// Cells in row-major order as `(x, y, label)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, label)| (x, y, label.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromStr for Board {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Board::parse(s))
    }
}

/// Writes one line per row with single spaces between labels.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
