use tessera_image::{ImageError, ImageSize};

/// An error type for the editors and generators.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImgprocError {
    /// Error coming from the underlying image.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The convolution kernel is not square or its side is not odd.
    #[error("Invalid kernel: expected an odd square kernel, got {rows} rows with a row of length {cols}")]
    InvalidKernel {
        /// Number of rows of the kernel.
        rows: usize,
        /// Length of the first row that breaks the square shape.
        cols: usize,
    },

    /// The color matrix is not 3x3.
    #[error("Invalid color matrix: expected 3x3, got {rows} rows with a row of length {cols}")]
    InvalidMatrix {
        /// Number of rows of the matrix.
        rows: usize,
        /// Length of the first row that breaks the 3x3 shape.
        cols: usize,
    },

    /// The downscale target has a zero dimension.
    #[error("Invalid target size {0}: width and height must be positive")]
    InvalidTargetSize(ImageSize),

    /// The downscale target is larger than the image it is applied to.
    #[error("Target size {dst_size} is larger than the source size {src_size}")]
    TargetLargerThanSource {
        /// The requested size.
        dst_size: ImageSize,
        /// The size of the image being downscaled.
        src_size: ImageSize,
    },

    /// The mosaic seed count is zero.
    #[error("Invalid seed count ({0}): at least one seed is required")]
    InvalidSeedCount(usize),

    /// The mosaic asks for more seeds than the image has pixels.
    #[error("Too many seeds ({seeds}) for an image with {pixels} pixels")]
    TooManySeeds {
        /// Requested number of seeds.
        seeds: usize,
        /// Number of pixels in the image.
        pixels: usize,
    },

    /// The same seed position was given twice.
    #[error("Duplicate seed at ({0}, {1})")]
    DuplicateSeed(usize, usize),

    /// The checkerboard tile size is zero.
    #[error("Invalid tile size ({0}): must be positive")]
    InvalidTileSize(usize),

    /// The checkerboard tile count is zero.
    #[error("Invalid tile count ({0}): must be positive")]
    InvalidTileCount(usize),

    /// The checkerboard has more pixels than fit in `usize`.
    #[error("Checkerboard of {num_tiles} tiles of {tile_size} px is too large")]
    CheckerboardTooLarge {
        /// Requested tile side.
        tile_size: usize,
        /// Requested number of tiles per side.
        num_tiles: usize,
    },

    /// The checkerboard palette is empty.
    #[error("Checkerboard palette must contain at least one color")]
    EmptyPalette,

    /// The rainbow size is not positive or the height is not a multiple of seven.
    #[error("Invalid rainbow size {width}x{height}: both must be positive and the height a multiple of 7")]
    InvalidRainbowSize {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}
