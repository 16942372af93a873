use tessera_image::{Color, Image};

use super::kernels;
use crate::{core::clamp_channel, editor::ImageEditor, error::ImgprocError};

/// A square convolution filter with an odd side length.
///
/// Every output pixel is the weighted sum of the source pixels under the
/// kernel centered on it. Kernel cells that fall outside the image contribute
/// nothing and their weight is not redistributed. Each channel sum is
/// truncated to an integer and clamped into `[0, max_value]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Convolution {
    // row-major, side * side weights
    kernel: Vec<f64>,
    side: usize,
}

impl Convolution {
    /// Create a convolution filter from a kernel given as rows.
    ///
    /// # Errors
    ///
    /// Returns [`ImgprocError::InvalidKernel`] unless every row has as many
    /// entries as there are rows and the number of rows is odd.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_imgproc::filter::Convolution;
    ///
    /// assert!(Convolution::new(vec![vec![0.0, 1.0, 0.0]; 3]).is_ok());
    /// assert!(Convolution::new(vec![vec![0.25, 0.25], vec![0.25, 0.25]]).is_err());
    /// ```
    pub fn new(kernel: Vec<Vec<f64>>) -> Result<Self, ImgprocError> {
        let side = kernel.len();

        if let Some(row) = kernel.iter().find(|row| row.len() != side) {
            return Err(ImgprocError::InvalidKernel {
                rows: side,
                cols: row.len(),
            });
        }

        if side % 2 == 0 {
            return Err(ImgprocError::InvalidKernel {
                rows: side,
                cols: side,
            });
        }

        Ok(Self {
            kernel: kernel.into_iter().flatten().collect(),
            side,
        })
    }

    /// The 3x3 blur filter.
    pub fn blur() -> Self {
        Self::from_square(kernels::blur_kernel())
    }

    /// The 5x5 sharpen filter.
    pub fn sharpen() -> Self {
        Self::from_square(kernels::sharpen_kernel())
    }

    // only for the built-in kernels, which are known to be odd and square
    fn from_square(kernel: Vec<Vec<f64>>) -> Self {
        let side = kernel.len();
        Self {
            kernel: kernel.into_iter().flatten().collect(),
            side,
        }
    }

    /// The side length of the kernel.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The kernel weight at row `i` and column `j`.
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.side || j >= self.side {
            return None;
        }
        Some(self.kernel[i * self.side + j])
    }

    fn filter_pixel(&self, src: &Image, x: usize, y: usize) -> Color {
        let (cols, rows) = (src.cols() as isize, src.rows() as isize);
        let center = (self.side / 2) as isize;
        let data = src.as_slice();

        let mut sum = [0.0f64; 3];
        for i in 0..self.side {
            let sy = y as isize - center + i as isize;
            if sy < 0 || sy >= rows {
                continue;
            }
            for j in 0..self.side {
                let sx = x as isize - center + j as isize;
                if sx < 0 || sx >= cols {
                    continue;
                }
                let w = self.kernel[i * self.side + j];
                let pixel = data[(sy * cols + sx) as usize].to_array();
                for (acc, &val) in sum.iter_mut().zip(pixel.iter()) {
                    *acc += w * f64::from(val);
                }
            }
        }

        let max_value = src.max_value();
        Color::new(
            clamp_channel(sum[0], max_value),
            clamp_channel(sum[1], max_value),
            clamp_channel(sum[2], max_value),
        )
    }
}

impl ImageEditor for Convolution {
    /// Filter the image with the kernel.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_image::{Color, Image, ImageSize};
    /// use tessera_imgproc::{filter::Convolution, ImageEditor};
    ///
    /// let image = Image::from_size_val(
    ///     ImageSize { width: 4, height: 3 },
    ///     Color::new(16, 32, 64),
    ///     255,
    /// )
    /// .unwrap();
    ///
    /// let blurred = Convolution::blur().apply(&image).unwrap();
    ///
    /// assert_eq!(blurred.size(), image.size());
    /// // the interior sees the full kernel, which sums to one
    /// assert_eq!(blurred.get_pixel(1, 1).unwrap(), Color::new(16, 32, 64));
    /// ```
    fn apply(&self, src: &Image) -> Result<Image, ImgprocError> {
        let mut data = Vec::with_capacity(src.size().area());
        for y in 0..src.rows() {
            for x in 0..src.cols() {
                data.push(self.filter_pixel(src, x, y));
            }
        }
        Ok(Image::new(src.size(), data, src.max_value())?)
    }
}
