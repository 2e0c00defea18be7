// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-shape table of text rows.

use super::constants::{DEFAULT_ROW_WIDTH, DEFAULT_TABLE_ROWS};
use super::Token;
use crate::errors::{SortError, SortResult};

/// Dimensions of a [`RowTable`]: number of rows and characters per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableShape {
    rows: usize,
    width: usize,
}

impl TableShape {
    pub fn new(rows: usize, width: usize) -> SortResult<Self> {
        if rows == 0 || width == 0 {
            return Err(SortError::InvalidShape { rows, width });
        }
        Ok(Self { rows, width })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for TableShape {
    fn default() -> Self {
        Self {
            rows: DEFAULT_TABLE_ROWS,
            width: DEFAULT_ROW_WIDTH,
        }
    }
}

/// A table whose shape never changes once built.
///
/// Sorting permutes or overwrites rows; it never adds, removes or widens them.
/// Rows longer than the shape's width are truncated on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTable {
    shape: TableShape,
    rows: Vec<Token>,
}

impl RowTable {
    /// A table of blank rows.
    pub fn new(shape: TableShape) -> Self {
        Self {
            shape,
            rows: vec![Token::default(); shape.rows],
        }
    }

    pub fn from_rows<S: AsRef<str>>(shape: TableShape, rows: &[S]) -> SortResult<Self> {
        if rows.len() != shape.rows {
            return Err(SortError::RowCountMismatch {
                expected: shape.rows,
                found: rows.len(),
            });
        }
        let rows = rows
            .iter()
            .map(|row| Token::with_limit(row.as_ref(), shape.width))
            .collect();
        Ok(Self { shape, rows })
    }

    pub fn shape(&self) -> TableShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Token> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[Token] {
        &self.rows
    }

    /// Overwrite row `index`, truncating `text` to the table width.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_row(&mut self, index: usize, text: &str) {
        self.rows[index] = Token::with_limit(text, self.shape.width);
    }

    pub(crate) fn put(&mut self, index: usize, row: Token) {
        self.rows[index] = row;
    }

    /// Move row `index` out, leaving a blank row until it is `put` back.
    pub(crate) fn take_row(&mut self, index: usize) -> Token {
        std::mem::take(&mut self.rows[index])
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let shape = TableShape::default();
        assert_eq!(shape.rows(), 5);
        assert_eq!(shape.width(), 4);
    }

    #[test]
    fn test_zero_shape_rejected() {
        assert_eq!(
            TableShape::new(0, 4),
            Err(SortError::InvalidShape { rows: 0, width: 4 })
        );
        assert!(TableShape::new(3, 0).is_err());
    }

    #[test]
    fn test_from_rows_truncates_and_checks_count() {
        let shape = TableShape::new(2, 3).unwrap();
        let table = RowTable::from_rows(shape, &["abcdef", "xy"]).unwrap();
        assert_eq!(table.row(0).map(Token::as_str), Some("abc"));
        assert_eq!(table.row(1).map(Token::as_str), Some("xy"));

        assert_eq!(
            RowTable::from_rows(shape, &["a"]),
            Err(SortError::RowCountMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_set_and_swap_rows() {
        let mut table = RowTable::new(TableShape::new(2, 4).unwrap());
        table.set_row(0, "zzzzzz");
        table.set_row(1, "aaaa");
        table.swap_rows(0, 1);
        assert_eq!(table.rows()[0].as_str(), "aaaa");
        assert_eq!(table.rows()[1].as_str(), "zzzz");
        assert_eq!(table.len(), 2);
    }
}
