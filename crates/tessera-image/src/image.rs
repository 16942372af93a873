use std::sync::Arc;

use crate::{color::Color, error::ImageError};

/// The conventional channel ceiling of 8-bit images.
pub const DEFAULT_MAX_VALUE: u32 = 255;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use tessera_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Total number of pixels.
    ///
    /// Only meaningful for sizes already validated by an [`Image`]; use
    /// [`ImageSize::checked_area`] for untrusted sizes.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Total number of pixels, or `None` if it overflows `usize`.
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// An immutable rectangular grid of colors plus a channel ceiling.
///
/// Pixels are stored row-major. The pixel buffer is reference counted, so
/// cloning an image is cheap and no clone can ever observe a mutation of
/// another: there is no API that writes into an existing image.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Image {
    size: ImageSize,
    max_value: u32,
    data: Arc<[Color]>,
}

impl Image {
    /// Create a new image from row-major pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixels of the image, row by row.
    /// * `max_value` - The channel ceiling of the image.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::EmptyImage`] if the size has no rows or no columns,
    /// [`ImageError::ImageTooLarge`] if the pixel count overflows and
    /// [`ImageError::InvalidChannelShape`] if the data length does not match the size.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_image::{Color, Image, ImageSize};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 1,
    ///     },
    ///     vec![Color::new(255, 0, 0), Color::new(0, 0, 255)],
    ///     255,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.width(), 2);
    /// assert_eq!(image.height(), 1);
    /// assert_eq!(image.get_pixel(1, 0).unwrap(), Color::new(0, 0, 255));
    /// ```
    pub fn new(size: ImageSize, data: Vec<Color>, max_value: u32) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::EmptyImage);
        }

        let area = pixel_count(size)?;
        if data.len() != area {
            return Err(ImageError::InvalidChannelShape(data.len(), area));
        }

        Ok(Self {
            size,
            max_value,
            data: data.into(),
        })
    }

    /// Create a new image with every pixel set to `val`.
    pub fn from_size_val(size: ImageSize, val: Color, max_value: u32) -> Result<Self, ImageError> {
        let area = pixel_count(size)?;
        Image::new(size, vec![val; area], max_value)
    }

    /// Create a new image by copying a nested array of rows.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::EmptyImage`] if there are no rows or the first row is empty,
    /// and [`ImageError::RaggedRows`] if any row differs in length from the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_image::{Color, Image};
    ///
    /// let black = Color::new(0, 0, 0);
    /// let white = Color::new(255, 255, 255);
    ///
    /// let image = Image::from_rows(&[vec![black, white], vec![white, black]], 255).unwrap();
    /// assert_eq!(image.get_pixel(1, 0).unwrap(), white);
    ///
    /// assert!(Image::from_rows(&[vec![black, white], vec![white]], 255).is_err());
    /// ```
    pub fn from_rows<R>(rows: &[R], max_value: u32) -> Result<Self, ImageError>
    where
        R: AsRef<[Color]>,
    {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if expected == 0 {
            return Err(ImageError::EmptyImage);
        }

        let mut data = Vec::with_capacity(expected * rows.len());
        for (row, pixels) in rows.iter().enumerate() {
            let pixels = pixels.as_ref();
            if pixels.len() != expected {
                return Err(ImageError::RaggedRows {
                    row,
                    len: pixels.len(),
                    expected,
                });
            }
            data.extend_from_slice(pixels);
        }

        let size = ImageSize {
            width: expected,
            height: rows.len(),
        };

        Image::new(size, data, max_value)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the channel ceiling of the image.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Get the pixels of the image in row-major order.
    pub fn as_slice(&self) -> &[Color] {
        &self.data
    }

    /// Get the color at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the coordinates are outside the image.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Color, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        Ok(self.data[y * self.width() + x])
    }

    /// Copy the pixels out as a nested array of rows.
    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.data
            .chunks_exact(self.width())
            .map(|row| row.to_vec())
            .collect()
    }
}

fn pixel_count(size: ImageSize) -> Result<usize, ImageError> {
    size
        .checked_area()
        .ok_or(ImageError::ImageTooLarge(size.width, size.height))
}

#[cfg(test)]
mod tests {
    use crate::{Color, Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.area(), 200);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::from_size_val(
            ImageSize {
                width: 10,
                height: 20,
            },
            Color::new(1, 2, 3),
            255,
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.cols(), 10);
        assert_eq!(image.rows(), 20);
        assert_eq!(image.max_value(), 255);
        assert_eq!(image.get_pixel(9, 19)?, Color::new(1, 2, 3));

        Ok(())
    }

    #[test]
    fn image_invalid_data_length() {
        let res = Image::new([2, 2].into(), vec![Color::default(); 3], 255);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(3, 4)));
    }

    #[test]
    fn image_size_overflow() {
        let size = ImageSize {
            width: usize::MAX / 2 + 1,
            height: 2,
        };
        assert_eq!(size.checked_area(), None);
        assert_eq!(
            Image::new(size, vec![], 255),
            Err(ImageError::ImageTooLarge(size.width, 2))
        );
        assert_eq!(
            Image::from_size_val(size, Color::default(), 255),
            Err(ImageError::ImageTooLarge(size.width, 2))
        );
    }

    #[test]
    fn image_empty() {
        let res = Image::new([0, 2].into(), vec![], 255);
        assert_eq!(res, Err(ImageError::EmptyImage));

        let rows: Vec<Vec<Color>> = vec![];
        assert_eq!(Image::from_rows(&rows, 255), Err(ImageError::EmptyImage));

        let rows: Vec<Vec<Color>> = vec![vec![]];
        assert_eq!(Image::from_rows(&rows, 255), Err(ImageError::EmptyImage));
    }

    #[test]
    fn image_ragged_rows() {
        let c = Color::default();
        let res = Image::from_rows(&[vec![c, c], vec![c, c], vec![c]], 255);
        assert_eq!(
            res,
            Err(ImageError::RaggedRows {
                row: 2,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn image_from_rows_copies_input() -> Result<(), ImageError> {
        let red = Color::new(255, 0, 0);
        let blue = Color::new(0, 0, 255);

        let mut rows = vec![vec![red, blue], vec![blue, red]];
        let image = Image::from_rows(&rows, 255)?;

        rows[0][0] = blue;
        assert_eq!(image.get_pixel(0, 0)?, red);
        assert_eq!(image.to_rows(), vec![vec![red, blue], vec![blue, red]]);

        Ok(())
    }

    #[test]
    fn image_pixel_out_of_bounds() -> Result<(), ImageError> {
        let image = Image::from_size_val([3, 2].into(), Color::default(), 255)?;
        assert_eq!(
            image.get_pixel(3, 0),
            Err(ImageError::PixelIndexOutOfBounds(3, 0, 3, 2))
        );
        assert_eq!(
            image.get_pixel(0, 2),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );
        Ok(())
    }

    #[test]
    fn image_structural_eq() -> Result<(), ImageError> {
        let a = Image::from_size_val([2, 2].into(), Color::new(5, 5, 5), 255)?;
        let b = Image::from_size_val([2, 2].into(), Color::new(5, 5, 5), 255)?;
        let c = Image::from_size_val([2, 2].into(), Color::new(5, 5, 5), 100)?;
        assert_eq!(a, b);
        assert_ne!(a, c);
        Ok(())
    }
}
