use tessera_image::{Image, ImageSize};

use crate::{editor::ImageEditor, error::ImgprocError, interpolation};

/// Downscale an image to a fixed size.
///
/// Each target pixel `(i, j)` maps to the source position
/// `row = i * source_height / target_height`, `col = j * source_width / target_width`
/// and is sampled with [`interpolation::sample`]. The output keeps the source ceiling.
///
/// # Example
///
/// ```
/// use tessera_image::{Color, Image, ImageSize};
/// use tessera_imgproc::{resize::Downscale, ImageEditor};
///
/// let image = Image::from_size_val(
///     ImageSize { width: 4, height: 5 },
///     Color::new(1, 2, 3),
///     255,
/// )
/// .unwrap();
///
/// let downscale = Downscale::new(ImageSize { width: 2, height: 3 }).unwrap();
/// let resized = downscale.apply(&image).unwrap();
///
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// assert_eq!(resized.get_pixel(1, 2).unwrap(), Color::new(1, 2, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Downscale {
    size: ImageSize,
}

impl Downscale {
    /// Create a downscale to `size`.
    ///
    /// # Errors
    ///
    /// Returns [`ImgprocError::InvalidTargetSize`] if the width or height is zero.
    pub fn new(size: ImageSize) -> Result<Self, ImgprocError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImgprocError::InvalidTargetSize(size));
        }
        Ok(Self { size })
    }

    /// The target size.
    pub fn size(&self) -> ImageSize {
        self.size
    }
}

impl ImageEditor for Downscale {
    /// Downscale `src` to the target size.
    ///
    /// # Errors
    ///
    /// Returns [`ImgprocError::TargetLargerThanSource`] if the target is wider
    /// or taller than `src`.
    fn apply(&self, src: &Image) -> Result<Image, ImgprocError> {
        let dst_size = self.size;
        if dst_size.width > src.width() || dst_size.height > src.height() {
            return Err(ImgprocError::TargetLargerThanSource {
                dst_size,
                src_size: src.size(),
            });
        }

        // multiply before dividing so integral positions come out exact
        let mut data = Vec::with_capacity(dst_size.area());
        for i in 0..dst_size.height {
            let row = (i * src.rows()) as f64 / dst_size.height as f64;
            for j in 0..dst_size.width {
                let col = (j * src.cols()) as f64 / dst_size.width as f64;
                data.push(interpolation::sample(src, row, col));
            }
        }

        Ok(Image::new(dst_size, data, src.max_value())?)
    }
}
