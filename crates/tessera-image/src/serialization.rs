use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::{Color, Image, ImageSize};

impl serde::Serialize for Image {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Image", 3)?;
        state.serialize_field("size", &self.size())?;
        state.serialize_field("max_value", &self.max_value())?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for Image {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ImageData {
            size: ImageSize,
            max_value: u32,
            data: Vec<Color>,
        }

        let ImageData {
            size,
            max_value,
            data,
        } = ImageData::deserialize(deserializer)?;

        Image::new(size, data, max_value).map_err(serde::de::Error::custom)
    }
}
