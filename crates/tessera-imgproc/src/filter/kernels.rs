/// Create the 3x3 blur kernel.
///
/// A normalized binomial kernel: the weights sum to one. Every corner is
/// exactly `0.0625`; a `0.062` corner would leave the sum short of one.
///
/// # Returns
///
/// The kernel as a vector of rows.
pub fn blur_kernel() -> Vec<Vec<f64>> {
    vec![
        vec![0.0625, 0.125, 0.0625],
        vec![0.125, 0.25, 0.125],
        vec![0.0625, 0.125, 0.0625],
    ]
}

/// Create the 5x5 sharpen kernel.
///
/// Negative weights on the outer ring, positive weights on the inner ring and
/// a center weight of one.
///
/// # Returns
///
/// The kernel as a vector of rows.
pub fn sharpen_kernel() -> Vec<Vec<f64>> {
    let o = -0.125;
    let i = 0.25;
    vec![
        vec![o, o, o, o, o],
        vec![o, i, i, i, o],
        vec![o, i, 1.0, i, o],
        vec![o, i, i, i, o],
        vec![o, o, o, o, o],
    ]
}
