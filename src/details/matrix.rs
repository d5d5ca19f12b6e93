/// Dense row-major DP table of size `rows * cols`.
///
/// Allocated per call and dropped with it, the alignment measures never share
/// a table between calls.
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    matrix: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Clone,
{
    pub fn new(rows: usize, cols: usize, val: T) -> Self {
        Self {
            rows,
            cols,
            matrix: vec![val; rows * cols],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &self.matrix[row * self.cols + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &mut self.matrix[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, val: T) {
        *self.get_mut(row, col) = val;
    }
}

impl<T> Matrix<T>
where
    T: Copy,
{
    /// Value of the bottom right cell
    pub fn last(&self) -> T {
        self.matrix[self.matrix.len() - 1]
    }
}
