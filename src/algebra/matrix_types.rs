/// Common dimension queries for matrix types.
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// (rows, columns)
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if rows == columns
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
