use std::ops::Index;

use thiserror::Error;

/// Errors that can occur when constructing a [`FlowMatrix`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("row {row} has {len} entries but the matrix has {rows} rows")]
    NotSquare { row: usize, len: usize, rows: usize },

    #[error("expected {expected} values for an order-{order} matrix, got {actual}")]
    WrongLength {
        order: usize,
        expected: usize,
        actual: usize,
    },
}

/// A square grid of directed edge weights between indexed nodes.
///
/// Entry `(i, j)` is the weight of the edge from node `i` to node `j`;
/// zero means no edge. Values are stored in row-major order, so a matrix
/// doubles as the flat vector a minimizer works on: element `k` of
/// [`as_slice`] corresponds to row `k / N`, column `k % N`, and
/// [`from_flat`] is the exact inverse of that flattening.
///
/// The order is fixed for the lifetime of a value.
///
/// [`as_slice`]: FlowMatrix::as_slice
/// [`from_flat`]: FlowMatrix::from_flat
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix")
)]
pub struct FlowMatrix {
    order: usize,
    values: Vec<f64>,
}

impl FlowMatrix {
    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns an error if any row's length differs from the number of
    /// rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let order = rows.len();
        let mut values = Vec::with_capacity(order * order);

        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != order {
                return Err(MatrixError::NotSquare {
                    row,
                    len: entries.len(),
                    rows: order,
                });
            }
            values.extend_from_slice(entries);
        }

        Ok(Self { order, values })
    }

    /// Reshapes a row-major flat vector into an order-N matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector's length is not `order * order`.
    pub fn from_flat(order: usize, values: Vec<f64>) -> Result<Self, MatrixError> {
        let expected = order * order;
        if values.len() != expected {
            return Err(MatrixError::WrongLength {
                order,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self { order, values })
    }

    /// Creates an all-zero matrix of the given order.
    #[must_use]
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            values: vec![0.0; order * order],
        }
    }

    /// Returns the number of nodes (rows and columns).
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the total number of entries, `order * order`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the entry at `(from, to)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from < self.order && to < self.order {
            Some(self.values[from * self.order + to])
        } else {
            None
        }
    }

    /// Returns the entries as a row-major flat slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the matrix, returning its row-major flat vector.
    #[must_use]
    pub fn into_flat(self) -> Vec<f64> {
        self.values
    }
}

impl Index<(usize, usize)> for FlowMatrix {
    type Output = f64;

    fn index(&self, (from, to): (usize, usize)) -> &f64 {
        assert!(
            from < self.order && to < self.order,
            "entry ({from}, {to}) out of bounds for an order-{} matrix",
            self.order
        );
        &self.values[from * self.order + to]
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    order: usize,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for FlowMatrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, MatrixError> {
        Self::from_flat(raw.order, raw.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_square_rows() {
        let matrix = FlowMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();

        assert_eq!(matrix.order(), 2);
        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix[(0, 1)], 1.0);
        assert_eq!(matrix[(1, 0)], 2.0);
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = FlowMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0]]);

        assert_eq!(
            result,
            Err(MatrixError::NotSquare {
                row: 1,
                len: 1,
                rows: 2
            })
        );
    }

    #[test]
    fn rejects_rectangular_input() {
        let result = FlowMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);

        assert!(matches!(result, Err(MatrixError::NotSquare { .. })));
    }

    #[test]
    fn rejects_wrong_flat_length() {
        let result = FlowMatrix::from_flat(2, vec![1.0, 2.0, 3.0]);

        assert_eq!(
            result,
            Err(MatrixError::WrongLength {
                order: 2,
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn flatten_then_reshape_is_identity() {
        let matrix = FlowMatrix::from_rows(vec![
            vec![0.0, 1.5, 0.0],
            vec![2.0, 0.0, 0.5],
            vec![0.0, 3.0, 4.0],
        ])
        .unwrap();

        let reshaped = FlowMatrix::from_flat(matrix.order(), matrix.as_slice().to_vec()).unwrap();

        assert_eq!(reshaped, matrix);
    }

    #[test]
    fn flat_index_maps_row_major() {
        let matrix = FlowMatrix::from_flat(2, vec![10.0, 11.0, 12.0, 13.0]).unwrap();

        // Element k lands at row k / N, column k % N.
        assert_eq!(matrix[(0, 0)], 10.0);
        assert_eq!(matrix[(0, 1)], 11.0);
        assert_eq!(matrix[(1, 0)], 12.0);
        assert_eq!(matrix[(1, 1)], 13.0);
    }

    #[test]
    fn get_is_bounds_checked() {
        let matrix = FlowMatrix::zeros(2);

        assert_eq!(matrix.get(1, 1), Some(0.0));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 2), None);
    }

    #[test]
    fn empty_matrix_is_valid() {
        let matrix = FlowMatrix::from_rows(Vec::new()).unwrap();

        assert_eq!(matrix.order(), 0);
        assert!(matrix.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_enforces_squareness() {
        let matrix: FlowMatrix =
            serde_json::from_str(r#"{"order":2,"values":[0.0,1.0,2.0,3.0]}"#).unwrap();
        assert_eq!(matrix.order(), 2);

        let bad: Result<FlowMatrix, _> =
            serde_json::from_str(r#"{"order":2,"values":[0.0,1.0]}"#);
        assert!(bad.is_err());
    }
}
