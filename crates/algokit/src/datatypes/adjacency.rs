//! Sparse 2D matrix: a `Hashtable` of row tables keyed by `y`, each keyed by `x`.
//!
//! Row tables are created empty on the first write to their row. Row and
//! column counts inherit the `Hashtable::size` semantics (one past the highest
//! index), so a row's column count is one past its highest written `x`.

use tracing::debug;

use super::hashtable::check_key;
use super::Hashtable;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix<V> {
    rows: Hashtable<Hashtable<V>>,
    width_hint: usize,
    height_hint: usize,
}

impl<V> Default for AdjacencyMatrix<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AdjacencyMatrix<V> {
    pub fn new() -> Self {
        Self {
            rows: Hashtable::new(),
            width_hint: 0,
            height_hint: 0,
        }
    }

    /// Pre-size the row table to `height`. No rows are created and `width`
    /// is only recorded; rows always start empty.
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            rows: Hashtable::with_size(height),
            width_hint: width,
            height_hint: height,
        }
    }

    /// Store `value` at column `x` of row `y`, returning the value it replaced.
    ///
    /// Errors with `InvalidArgument` when `x` or `y` exceeds `MAX_KEY`; the
    /// matrix is unchanged in that case.
    pub fn add(&mut self, x: usize, y: usize, value: V) -> Result<Option<V>> {
        check_key(x)?;
        let row = self.rows.get_or_insert_with(y, || {
            debug!(row = y, "create matrix row");
            Hashtable::new()
        })?;
        row.add(x, value)
    }

    /// `(width, height)` as passed to [`AdjacencyMatrix::with_dimensions`].
    #[inline]
    pub fn dimension_hints(&self) -> (usize, usize) {
        (self.width_hint, self.height_hint)
    }

    /// Value at `(x, y)`; `None` if the row or the cell was never written.
    pub fn value(&self, x: usize, y: usize) -> Option<&V> {
        self.rows.value(y)?.value(x)
    }

    pub fn value_mut(&mut self, x: usize, y: usize) -> Option<&mut V> {
        self.rows.value_mut(y)?.value_mut(x)
    }

    #[inline]
    pub fn has_value(&self, x: usize, y: usize) -> bool {
        self.value(x, y).is_some()
    }

    /// Row table at `y`, if that row was ever written.
    #[inline]
    pub fn row(&self, y: usize) -> Option<&Hashtable<V>> {
        self.rows.value(y)
    }

    #[inline]
    pub fn number_of_rows(&self) -> usize {
        self.rows.size()
    }

    /// Column count of `row`, or 0 when the row does not exist.
    pub fn number_of_cols(&self, row: usize) -> usize {
        self.rows.value(row).map_or(0, Hashtable::size)
    }

    /// Populated cells as `(x, y, &value)`, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &V)> {
        self.rows
            .iter()
            .flat_map(|(y, row)| row.iter().map(move |(x, v)| (x, y, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::MAX_KEY;
    use crate::error::Error;

    #[test]
    fn lazy_rows_and_absent_reads() {
        let mut m = AdjacencyMatrix::new();
        m.add(2, 7, "v").unwrap();
        assert_eq!(m.value(2, 7), Some(&"v"));
        assert_eq!(m.value(2, 8), None);
        assert_eq!(m.value(3, 7), None);
        assert_eq!(m.number_of_rows(), 8);
        assert_eq!(m.number_of_cols(7), 3);
        assert_eq!(m.number_of_cols(0), 0);
        assert!(m.row(0).is_none());
    }

    #[test]
    fn rows_grow_independently() {
        let mut m = AdjacencyMatrix::new();
        m.add(9, 0, 1.0).unwrap();
        m.add(1, 2, 2.0).unwrap();
        assert_eq!(m.add(1, 2, 3.0).unwrap(), Some(2.0));
        assert_eq!(m.number_of_rows(), 3);
        assert_eq!(m.number_of_cols(0), 10);
        assert_eq!(m.number_of_cols(1), 0);
        assert_eq!(m.number_of_cols(2), 2);
        assert!(m.has_value(9, 0));
        assert!(!m.has_value(0, 0));
    }

    #[test]
    fn dimension_hints_only_size_the_row_table() {
        let mut m: AdjacencyMatrix<u8> = AdjacencyMatrix::with_dimensions(5, 4);
        assert_eq!(m.dimension_hints(), (5, 4));
        assert_eq!(m.number_of_rows(), 4);
        for r in 0..4 {
            assert_eq!(m.number_of_cols(r), 0);
            assert!(m.row(r).is_none());
        }
        m.add(1, 2, 7).unwrap();
        assert_eq!(m.number_of_cols(2), 2);
        assert_eq!(m.number_of_cols(1), 0);
        m.add(1, 6, 8).unwrap();
        assert_eq!(m.number_of_cols(6), 2);
        assert_eq!(m.number_of_rows(), 7);
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut m = AdjacencyMatrix::new();
        let err = m.add(usize::MAX, 0, 'x').unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(m.add(0, usize::MAX, 'y').is_err());
        assert_eq!(m.number_of_rows(), 0);
        assert!(m.row(0).is_none());
        m.add(MAX_KEY, 0, 'z').unwrap();
        assert_eq!(m.number_of_cols(0), usize::MAX);
    }

    #[test]
    fn iterates_row_major() {
        let mut m = AdjacencyMatrix::new();
        m.add(3, 1, 'c').unwrap();
        m.add(0, 0, 'a').unwrap();
        m.add(1, 1, 'b').unwrap();
        let cells: Vec<(usize, usize, char)> = m.iter().map(|(x, y, v)| (x, y, *v)).collect();
        assert_eq!(cells, vec![(0, 0, 'a'), (1, 1, 'b'), (3, 1, 'c')]);
        if let Some(v) = m.value_mut(3, 1) {
            *v = 'z';
        }
        assert_eq!(m.value(3, 1), Some(&'z'));
    }
}
