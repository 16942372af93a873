use crate::error::ImageError;

/// Number of channels stored in a [`Color`].
pub const NUM_CHANNELS: usize = 3;

/// An RGB color with non-negative integer channels.
///
/// The channels have no upper bound of their own; producers clamp them to the
/// ceiling of the image they write into.
///
/// # Examples
///
/// ```
/// use tessera_image::Color;
///
/// let orange = Color::new(255, 165, 0);
///
/// assert_eq!(orange.red(), 255);
/// assert_eq!(orange.get(1), Ok(165));
/// assert!(orange.get(3).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    red: u32,
    green: u32,
    blue: u32,
}

impl Color {
    /// Create a new color from its red, green and blue channels.
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// The red channel.
    pub const fn red(&self) -> u32 {
        self.red
    }

    /// The green channel.
    pub const fn green(&self) -> u32 {
        self.green
    }

    /// The blue channel.
    pub const fn blue(&self) -> u32 {
        self.blue
    }

    /// Get a channel by index: 0 is red, 1 is green and 2 is blue.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::ChannelIndexOutOfBounds`] for any other index.
    pub fn get(&self, index: usize) -> Result<u32, ImageError> {
        match index {
            0 => Ok(self.red),
            1 => Ok(self.green),
            2 => Ok(self.blue),
            _ => Err(ImageError::ChannelIndexOutOfBounds(index, NUM_CHANNELS)),
        }
    }

    /// The channels as an array in red, green, blue order.
    pub const fn to_array(&self) -> [u32; NUM_CHANNELS] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u32; NUM_CHANNELS]> for Color {
    fn from(channels: [u32; NUM_CHANNELS]) -> Self {
        Color::new(channels[0], channels[1], channels[2])
    }
}

impl From<Color> for [u32; NUM_CHANNELS] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::ImageError;

    #[test]
    fn color_channels() -> Result<(), ImageError> {
        let color = Color::new(10, 20, 30);
        assert_eq!(color.get(0)?, 10);
        assert_eq!(color.get(1)?, 20);
        assert_eq!(color.get(2)?, 30);
        assert_eq!(color.to_array(), [10, 20, 30]);
        Ok(())
    }

    #[test]
    fn color_channel_out_of_bounds() {
        let color = Color::new(1, 2, 3);
        assert_eq!(color.get(3), Err(ImageError::ChannelIndexOutOfBounds(3, 3)));
    }

    #[test]
    fn color_structural_eq() {
        use std::collections::HashSet;

        let a = Color::new(1, 2, 3);
        let b = Color::from([1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, Color::new(3, 2, 1));

        let set: HashSet<Color> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_eq!(a.to_string(), "(1, 2, 3)");
    }
}
