/// Textbook i-j-k product over a contiguous block of output rows.
///
/// Each cell is a full dot product of one row of A with one column of B,
/// written (not accumulated) into `c_rows`. The inner loop walks B with
/// stride `cols`, which is exactly the cache-unfriendly access pattern the
/// thread benchmark is meant to load the CPU with.
///
/// # Arguments
///
/// * `a` - Matrix A (rows × inner), row-major
/// * `b` - Matrix B (inner × cols), row-major
/// * `c_rows` - Output rows of C starting at `first_row`, row-major
/// * `first_row` - Index in C of the first row held by `c_rows`
/// * `inner` - Columns of A, rows of B
/// * `cols` - Columns of B and C
///
/// # Panics
///
/// Panics if `c_rows` is not a whole number of rows or reaches past A.
pub fn matmul_rows_ijk(
    a: &[i64],
    b: &[i64],
    c_rows: &mut [i64],
    first_row: usize,
    inner: usize,
    cols: usize,
) {
    assert_eq!(c_rows.len() % cols.max(1), 0, "C block is not whole rows");
    let row_count = if cols == 0 { 0 } else { c_rows.len() / cols };
    assert!(
        (first_row + row_count) * inner <= a.len(),
        "C block rows {}..{} exceed A",
        first_row,
        first_row + row_count
    );

    for local in 0..row_count {
        let i = first_row + local;
        for j in 0..cols {
            let mut sum = 0;
            for p in 0..inner {
                sum += a[i * inner + p] * b[p * cols + j];
            }
            c_rows[local * cols + j] = sum;
        }
    }
}

/// Single-threaded i-j-k product of the whole matrix: C = A * B.
///
/// Use this as a correctness baseline for the threaded version.
pub fn matmul_naive_ijk(
    a: &[i64],
    b: &[i64],
    c: &mut [i64],
    rows: usize,
    inner: usize,
    cols: usize,
) {
    assert_eq!(a.len(), rows * inner, "A: expected {}x{}", rows, inner);
    assert_eq!(b.len(), inner * cols, "B: expected {}x{}", inner, cols);
    assert_eq!(c.len(), rows * cols, "C: expected {}x{}", rows, cols);
    matmul_rows_ijk(a, b, c, 0, inner, cols);
}
