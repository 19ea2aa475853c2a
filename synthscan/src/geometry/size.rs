use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Width and height of a (text) image, in page units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

impl ImageSize {
    pub fn try_new(width: f32, height: f32) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0,
            "invalid image size, width: {width}, height: {height}"
        );
        Ok(ImageSize { width, height })
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
