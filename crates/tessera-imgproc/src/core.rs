use num_traits::ToPrimitive;
use tessera_image::{Color, Image, ImageError};

/// Truncate a channel value towards zero and clamp it into `[0, max_value]`.
///
/// # Example
///
/// ```
/// use tessera_imgproc::core::clamp_channel;
///
/// assert_eq!(clamp_channel(12.9, 255), 12);
/// assert_eq!(clamp_channel(-3.5, 255), 0);
/// assert_eq!(clamp_channel(300.0, 255), 255);
/// ```
pub fn clamp_channel(value: f64, max_value: u32) -> u32 {
    let clamped = num_traits::clamp(value.trunc(), 0.0, f64::from(max_value));
    // NaN survives the clamp and maps to zero here
    clamped.to_u32().unwrap_or(0)
}

/// Round a non-negative channel value to the nearest integer.
pub fn round_channel(value: f64) -> u32 {
    value.round().to_u32().unwrap_or(0)
}

/// Build a new image of the same size and ceiling by mapping every pixel.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `f` - Function from the source color to the destination color.
pub fn map_pixels(src: &Image, f: impl Fn(Color) -> Color) -> Result<Image, ImageError> {
    let data = src.as_slice().iter().map(|&c| f(c)).collect();
    Image::new(src.size(), data, src.max_value())
}
