use tessera_image::{Color, Image, ImageError, ImageSize, DEFAULT_MAX_VALUE};

use crate::error::ImgprocError;

/// Something that produces an image from its own parameters.
pub trait ImageGenerator {
    /// Generate the image.
    fn create(&self) -> Result<Image, ImgprocError>;
}

/// Red, orange, yellow, green, blue, indigo and violet, top to bottom.
pub const RAINBOW: [Color; 7] = [
    Color::new(255, 0, 0),
    Color::new(255, 165, 0),
    Color::new(255, 255, 0),
    Color::new(0, 255, 0),
    Color::new(0, 0, 255),
    Color::new(75, 0, 130),
    Color::new(238, 130, 238),
];

/// The two colors used by [`Checkerboard::with_default_palette`].
pub const DEFAULT_CHECKER_PALETTE: [Color; 2] = [Color::new(250, 0, 0), Color::new(0, 250, 0)];

/// A square board of `num_tiles` x `num_tiles` tiles cycling through a palette.
///
/// The tile at tile row `r` and tile column `c` takes
/// `palette[(r + c) % palette.len()]`.
///
/// # Example
///
/// ```
/// use tessera_image::Color;
/// use tessera_imgproc::{pattern::Checkerboard, ImageGenerator};
///
/// let black = Color::new(0, 0, 0);
/// let white = Color::new(255, 255, 255);
///
/// let board = Checkerboard::new(4, 8, vec![black, white]).unwrap().create().unwrap();
///
/// assert_eq!(board.width(), 32);
/// assert_eq!(board.get_pixel(3, 3).unwrap(), black);
/// assert_eq!(board.get_pixel(4, 3).unwrap(), white);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkerboard {
    tile_size: usize,
    num_tiles: usize,
    palette: Vec<Color>,
}

impl Checkerboard {
    /// Create a checkerboard generator.
    ///
    /// # Arguments
    ///
    /// * `tile_size` - Side of a tile in pixels.
    /// * `num_tiles` - Number of tiles along each side.
    /// * `palette` - Colors to cycle through.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero, the palette is empty or the
    /// board has more pixels than fit in `usize`.
    pub fn new(
        tile_size: usize,
        num_tiles: usize,
        palette: Vec<Color>,
    ) -> Result<Self, ImgprocError> {
        if tile_size == 0 {
            return Err(ImgprocError::InvalidTileSize(tile_size));
        }
        if num_tiles == 0 {
            return Err(ImgprocError::InvalidTileCount(num_tiles));
        }
        if palette.is_empty() {
            return Err(ImgprocError::EmptyPalette);
        }
        let side = tile_size.checked_mul(num_tiles);
        if side.and_then(|side| side.checked_mul(side)).is_none() {
            return Err(ImgprocError::CheckerboardTooLarge {
                tile_size,
                num_tiles,
            });
        }
        Ok(Self {
            tile_size,
            num_tiles,
            palette,
        })
    }

    /// Create a checkerboard alternating [`DEFAULT_CHECKER_PALETTE`].
    pub fn with_default_palette(tile_size: usize, num_tiles: usize) -> Result<Self, ImgprocError> {
        Self::new(tile_size, num_tiles, DEFAULT_CHECKER_PALETTE.to_vec())
    }

    /// Size of the generated image.
    pub fn size(&self) -> ImageSize {
        let side = self.tile_size * self.num_tiles;
        ImageSize {
            width: side,
            height: side,
        }
    }
}

impl ImageGenerator for Checkerboard {
    fn create(&self) -> Result<Image, ImgprocError> {
        let size = self.size();
        let ts = self.tile_size;

        let data = (0..size.height)
            .flat_map(|y| (0..size.width).map(move |x| (x, y)))
            .map(|(x, y)| self.palette[(y / ts + x / ts) % self.palette.len()])
            .collect();

        log::debug!(
            "checkerboard of {} tiles of {} px, {} colors",
            self.num_tiles,
            ts,
            self.palette.len()
        );

        Ok(Image::new(size, data, DEFAULT_MAX_VALUE)?)
    }
}

/// Seven horizontal bands of equal height colored with [`RAINBOW`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rainbow {
    size: ImageSize,
}

impl Rainbow {
    /// Create a rainbow generator.
    ///
    /// # Errors
    ///
    /// Returns [`ImgprocError::InvalidRainbowSize`] if a dimension is zero or
    /// the height is not a multiple of seven, and [`ImageError::ImageTooLarge`]
    /// if the pixel count overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, ImgprocError> {
        if width == 0 || height == 0 || height % RAINBOW.len() != 0 {
            return Err(ImgprocError::InvalidRainbowSize { width, height });
        }
        let size = ImageSize { width, height };
        if size.checked_area().is_none() {
            return Err(ImageError::ImageTooLarge(width, height).into());
        }
        Ok(Self { size })
    }

    /// Size of the generated image.
    pub fn size(&self) -> ImageSize {
        self.size
    }
}

impl ImageGenerator for Rainbow {
    fn create(&self) -> Result<Image, ImgprocError> {
        let band = self.size.height / RAINBOW.len();
        let mut data = Vec::with_capacity(self.size.area());
        for y in 0..self.size.height {
            data.resize(data.len() + self.size.width, RAINBOW[y / band]);
        }
        Ok(Image::new(self.size, data, DEFAULT_MAX_VALUE)?)
    }
}
