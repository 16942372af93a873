//! Pixel interpolation used when downscaling.
//!
//! A fractional source coordinate falls into one of four cases depending on
//! which of its components are integral:
//!
//! - **both integral**: the source pixel is copied as is
//! - **column fractional**: linear blend of the two horizontal neighbours
//! - **row fractional**: linear blend of the two vertical neighbours
//! - **both fractional**: bilinear blend of the four surrounding pixels
//!
//! Interpolated channels are rounded to the nearest integer; copied pixels are not touched.

use tessera_image::{Color, Image};

use crate::core::round_channel;

/// Blend two values: `a` weighted by the distance from `t` to its ceiling and
/// `b` weighted by the distance from `t` to its floor.
///
/// # Arguments
///
/// * `a` - The value at `floor(t)`.
/// * `b` - The value at `ceil(t)`.
/// * `t` - The fractional coordinate.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let lower = t - t.floor();
    let upper = t.ceil() - t;
    a * upper + b * lower
}

/// Sample the source image at a fractional position.
///
/// # Arguments
///
/// * `image` - The source image.
/// * `row` - The y coordinate, in `[0, rows)`.
/// * `col` - The x coordinate, in `[0, cols)`.
///
/// # Returns
///
/// The sampled color.
pub fn sample(image: &Image, row: f64, col: f64) -> Color {
    let row_integral = row.fract() == 0.0;
    let col_integral = col.fract() == 0.0;

    let (r0, r1) = neighbours(row, image.rows());
    let (c0, c1) = neighbours(col, image.cols());

    let at = |r: usize, c: usize| image.as_slice()[r * image.cols() + c].to_array();

    let channels = match (row_integral, col_integral) {
        (true, true) => at(r0, c0),
        (true, false) => {
            let (a, b) = (at(r0, c0), at(r0, c1));
            blend(|k| lerp(f64::from(a[k]), f64::from(b[k]), col))
        }
        (false, true) => {
            let (a, b) = (at(r0, c0), at(r1, c0));
            blend(|k| lerp(f64::from(a[k]), f64::from(b[k]), row))
        }
        (false, false) => {
            let (p00, p01) = (at(r0, c0), at(r0, c1));
            let (p10, p11) = (at(r1, c0), at(r1, c1));
            blend(|k| {
                let top = lerp(f64::from(p00[k]), f64::from(p01[k]), col);
                let bottom = lerp(f64::from(p10[k]), f64::from(p11[k]), col);
                lerp(top, bottom, row)
            })
        }
    };

    Color::from(channels)
}

// floor and ceil indices, kept inside the image
fn neighbours(t: f64, len: usize) -> (usize, usize) {
    let last = len.saturating_sub(1);
    let lo = (t.floor().max(0.0) as usize).min(last);
    let hi = (t.ceil().max(0.0) as usize).min(last);
    (lo, hi)
}

fn blend(f: impl Fn(usize) -> f64) -> [u32; 3] {
    [round_channel(f(0)), round_channel(f(1)), round_channel(f(2))]
}
