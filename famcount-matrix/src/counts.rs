use std::ops::Add;

///
/// Dense, row-major matrix of counts.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> CountMatrix<T>
where
    T: Copy + Default + Add<Output = T> + From<u8>,
{
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), String> {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
            Ok(())
        } else {
            Err(format!("Index out of bounds: row {}, col {}", row, col))
        }
    }

    pub fn increment(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            let index = row * self.cols + col;
            if let Some(value) = self.data.get_mut(index) {
                *value = *value + T::from(1);
            }
        }
    }

    ///
    /// All values of one row, `None` when the row is out of bounds.
    ///
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_new_matrix_is_zeroed() {
        let mat: CountMatrix<u32> = CountMatrix::new(2, 3);
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.cols(), 3);
        assert_eq!(mat.row(0), Some(&[0, 0, 0][..]));
        assert_eq!(mat.row(1), Some(&[0, 0, 0][..]));
        assert_eq!(mat.row(2), None);
    }

    #[rstest]
    fn test_set_and_increment() {
        let mut mat: CountMatrix<u32> = CountMatrix::new(2, 2);
        mat.set(1, 0, 5).unwrap();
        mat.increment(1, 0);
        mat.increment(0, 1);

        assert_eq!(mat.get(1, 0), Some(&6));
        assert_eq!(mat.get(0, 1), Some(&1));
        assert_eq!(mat.get(0, 2), None);
        assert!(mat.set(2, 0, 1).is_err());
    }

    #[rstest]
    fn test_zero_columns() {
        let mat: CountMatrix<u32> = CountMatrix::new(3, 0);
        assert_eq!(mat.row(2), Some(&[][..]));
    }
}
