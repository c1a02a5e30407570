//! Dense square matrix storage
//!
//! The phrase graph is fully connected in general (any two windows that
//! share a vocabulary term have an edge), so it is stored densely in
//! row-major order rather than in a sparse format.

/// A dense `n x n` matrix of `f64`, row-major
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// All-zeros matrix
    pub fn zeros(n: usize) -> Self {
        Self::filled(n, 0.0)
    }

    /// Matrix with every entry set to `value`
    pub fn filled(n: usize, value: f64) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    /// Build from rows; `None` unless every row has exactly `rows.len()` entries
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            return None;
        }
        Some(Self {
            n,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows (= number of columns)
    pub fn size(&self) -> usize {
        self.n
    }

    /// Check if the matrix has no entries
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry (i, j)
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Set entry (i, j)
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Mutable row `i`
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics, and an empty matrix has no rows anyway
        self.data.chunks_exact(self.n.max(1))
    }

    /// Sum of each row
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows().map(|r| r.iter().sum()).collect()
    }

    /// Sum of each column
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.n];
        for row in self.rows() {
            for (sum, &x) in sums.iter_mut().zip(row) {
                *sum += x;
            }
        }
        sums
    }

    /// Transposed copy
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                out.set(j, i, self.get(i, j));
            }
        }
        out
    }

    /// Check if the matrix equals its transpose
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.n).all(|i| {
            ((i + 1)..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }

    /// `a * self + b` applied entry-wise
    pub fn affine(&self, a: f64, b: f64) -> Self {
        Self {
            n: self.n,
            data: self.data.iter().map(|&x| a * x + b).collect(),
        }
    }

    /// Matrix-vector product written into `out`
    pub fn mul_vec_into(&self, v: &[f64], out: &mut [f64]) {
        debug_assert_eq!(v.len(), self.n);
        debug_assert_eq!(out.len(), self.n);
        for (o, row) in out.iter_mut().zip(self.rows()) {
            *o = row.iter().zip(v).map(|(m, x)| m * x).sum();
        }
    }

    /// Matrix-vector product
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.n];
        self.mul_vec_into(v, &mut out);
        out
    }

    /// Check that no entry is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> SquareMatrix {
        SquareMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        assert!(SquareMatrix::from_rows(vec![vec![1.0, 2.0]]).is_none());
        assert!(SquareMatrix::from_rows(vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_sums_and_transpose() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.row_sums(), vec![3.0, 7.0]);
        assert_eq!(a.column_sums(), vec![4.0, 6.0]);

        let t = a.transpose();
        assert_eq!(t.get(0, 1), 3.0);
        assert_eq!(t.get(1, 0), 2.0);
        assert!(!a.is_symmetric(0.0));
        assert!(m(&[&[0.0, 5.0], &[5.0, 0.0]]).is_symmetric(0.0));
    }

    #[test]
    fn test_mul_vec() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.mul_vec(&[1.0, 1.0]), vec![3.0, 7.0]);
        assert_eq!(a.mul_vec(&[2.0, 0.0]), vec![2.0, 6.0]);
    }

    #[test]
    fn test_affine() {
        let a = m(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let b = a.affine(0.5, 0.25);
        assert_eq!(b.row(0), &[0.25, 0.75]);
        assert_eq!(b.row(1), &[0.75, 0.25]);
    }

    #[test]
    fn test_empty_matrix() {
        let e = SquareMatrix::zeros(0);
        assert_eq!(e.rows().count(), 0);
        assert!(e.row_sums().is_empty());
        assert!(e.mul_vec(&[]).is_empty());
    }

    #[test]
    fn test_is_finite() {
        let mut a = SquareMatrix::filled(2, 1.0);
        assert!(a.is_finite());
        a.set(1, 1, f64::NAN);
        assert!(!a.is_finite());
    }
}
