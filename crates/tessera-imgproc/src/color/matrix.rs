use tessera_image::{Color, Image};

use crate::{
    core::{clamp_channel, map_pixels},
    editor::ImageEditor,
    error::ImgprocError,
};

/// Define the luminance weights for the greyscale conversion, in red, green, blue order.
const LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// The greyscale matrix: every output channel is the luminance of the input.
pub const GREYSCALE: [[f64; 3]; 3] = [LUMA, LUMA, LUMA];

/// The sepia tone matrix.
pub const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// A 3x3 linear transform applied to the channels of every pixel.
///
/// For each pixel, `new[i] = sum_j matrix[i][j] * old[j]`, truncated to an
/// integer and clamped into `[0, max_value]`. The input channel order is
/// red, green, blue.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMatrix {
    matrix: [[f64; 3]; 3],
}

impl ColorMatrix {
    /// Create a color transform from a matrix given as rows.
    ///
    /// # Errors
    ///
    /// Returns [`ImgprocError::InvalidMatrix`] if the matrix is not exactly 3x3.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_imgproc::color::ColorMatrix;
    ///
    /// assert!(ColorMatrix::new(vec![vec![1.0, 0.0, 0.0]; 3]).is_ok());
    /// assert!(ColorMatrix::new(vec![vec![1.0, 0.0, 0.0]; 2]).is_err());
    /// ```
    pub fn new(matrix: Vec<Vec<f64>>) -> Result<Self, ImgprocError> {
        if matrix.len() != 3 {
            let cols = matrix.first().map(|r| r.len()).unwrap_or(0);
            return Err(ImgprocError::InvalidMatrix {
                rows: matrix.len(),
                cols,
            });
        }

        let mut m = [[0.0; 3]; 3];
        for (dst, row) in m.iter_mut().zip(matrix.iter()) {
            if row.len() != 3 {
                return Err(ImgprocError::InvalidMatrix {
                    rows: 3,
                    cols: row.len(),
                });
            }
            dst.copy_from_slice(row);
        }

        Ok(Self { matrix: m })
    }

    /// The greyscale transform.
    pub fn greyscale() -> Self {
        Self { matrix: GREYSCALE }
    }

    /// The sepia transform.
    pub fn sepia() -> Self {
        Self { matrix: SEPIA }
    }

    /// The coefficients of the transform.
    pub fn matrix(&self) -> &[[f64; 3]; 3] {
        &self.matrix
    }

    /// Transform a single color, clamping into `[0, max_value]`.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_image::Color;
    /// use tessera_imgproc::color::ColorMatrix;
    ///
    /// let grey = ColorMatrix::greyscale().transform(Color::new(0, 100, 0), 255);
    /// assert_eq!(grey, Color::new(71, 71, 71));
    /// ```
    pub fn transform(&self, color: Color, max_value: u32) -> Color {
        let old = color.to_array();
        let mut new = [0u32; 3];
        for (dst, row) in new.iter_mut().zip(self.matrix.iter()) {
            let sum = row
                .iter()
                .zip(old.iter())
                .fold(0.0, |acc, (&w, &c)| acc + w * f64::from(c));
            *dst = clamp_channel(sum, max_value);
        }
        Color::from(new)
    }
}

impl ImageEditor for ColorMatrix {
    fn apply(&self, src: &Image) -> Result<Image, ImgprocError> {
        let max_value = src.max_value();
        Ok(map_pixels(src, |c| self.transform(c, max_value))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_image::ImageSize;

    // mirrors the accumulation order of `transform`
    fn luma(c: Color) -> u32 {
        let sum = 0.0
            + LUMA[0] * f64::from(c.red())
            + LUMA[1] * f64::from(c.green())
            + LUMA[2] * f64::from(c.blue());
        clamp_channel(sum, 255)
    }

    #[test]
    fn test_invalid_matrix() {
        assert_eq!(
            ColorMatrix::new(vec![vec![1.0; 3]; 4]),
            Err(ImgprocError::InvalidMatrix { rows: 4, cols: 3 })
        );
        assert_eq!(
            ColorMatrix::new(vec![vec![1.0; 3], vec![1.0; 3], vec![1.0; 4]]),
            Err(ImgprocError::InvalidMatrix { rows: 3, cols: 4 })
        );
        assert_eq!(
            ColorMatrix::new(vec![]),
            Err(ImgprocError::InvalidMatrix { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn test_matrix_accessor() -> Result<(), ImgprocError> {
        assert_eq!(ColorMatrix::greyscale().matrix(), &GREYSCALE);
        assert_eq!(ColorMatrix::sepia().matrix()[2], [0.272, 0.534, 0.131]);

        let swap = ColorMatrix::new(vec![
            vec![0.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
        ])?;
        assert_eq!(swap.matrix()[0], [0.0, 0.0, 1.0]);
        assert_eq!(swap.transform(Color::new(1, 2, 3), 255), Color::new(3, 2, 1));
        Ok(())
    }

    #[test]
    fn test_greyscale() -> Result<(), ImgprocError> {
        let image = Image::from_rows(
            &[vec![
                Color::new(255, 0, 0),
                Color::new(0, 255, 0),
                Color::new(0, 0, 255),
            ]],
            255,
        )?;
        let grey = ColorMatrix::greyscale().apply(&image)?;

        // 0.2126 * 255 = 54.213, 0.7152 * 255 = 182.376, 0.0722 * 255 = 18.411
        assert_eq!(grey.get_pixel(0, 0)?, Color::new(54, 54, 54));
        assert_eq!(grey.get_pixel(1, 0)?, Color::new(182, 182, 182));
        assert_eq!(grey.get_pixel(2, 0)?, Color::new(18, 18, 18));
        Ok(())
    }

    #[test]
    fn test_greyscale_twice() -> Result<(), ImgprocError> {
        let rows: Vec<Vec<Color>> = (0..8)
            .map(|y| {
                (0..8)
                    .map(|x| Color::new(x * 32, y * 32, (x * y) % 256))
                    .collect()
            })
            .collect();
        let image = Image::from_rows(&rows, 255)?;

        let once = ColorMatrix::greyscale().apply(&image)?;
        let twice = ColorMatrix::greyscale().apply(&once)?;

        // a second pass maps grey v to trunc(v * (0.2126 + 0.7152 + 0.0722)),
        // which is computed here rather than assumed to be v
        for (a, b) in once.as_slice().iter().zip(twice.as_slice()) {
            assert_eq!(a.red(), a.green());
            assert_eq!(a.green(), a.blue());
            let v = luma(*a);
            assert_eq!(*b, Color::new(v, v, v));
            assert!(v <= a.red());
        }
        Ok(())
    }

    #[test]
    fn test_sepia_clamps() -> Result<(), ImgprocError> {
        let image = Image::from_size_val(
            ImageSize {
                width: 2,
                height: 3,
            },
            Color::new(255, 255, 255),
            255,
        )?;
        let sepia = ColorMatrix::sepia().apply(&image)?;

        // red and green rows sum above one, blue row 0.937 * 255 = 238.935
        assert_eq!(sepia.get_pixel(1, 2)?, Color::new(255, 255, 238));
        assert_eq!(sepia.size(), image.size());
        assert_eq!(sepia.max_value(), 255);
        Ok(())
    }

    #[test]
    fn test_respects_ceiling() -> Result<(), ImgprocError> {
        let image = Image::from_size_val([1, 1].into(), Color::new(10, 10, 10), 10)?;
        let sepia = ColorMatrix::sepia().apply(&image)?;
        assert_eq!(sepia.get_pixel(0, 0)?, Color::new(10, 10, 9));
        assert_eq!(sepia.max_value(), 10);
        Ok(())
    }
}
