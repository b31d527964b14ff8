use image::RgbaImage;

use crate::foundation::core::Rgba8;

/// Pixel classification rule separating a shape from its background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForegroundRule {
    /// Background is exactly this color; everything else is foreground.
    ///
    /// A color with zero alpha matches every fully transparent pixel, whatever its RGB bytes.
    NotBackground(Rgba8),
    /// Foreground when alpha is at least `min`.
    Alpha {
        /// Inclusive alpha threshold.
        min: u8,
    },
}

impl Default for ForegroundRule {
    fn default() -> Self {
        Self::NotBackground(Rgba8::TRANSPARENT)
    }
}

impl ForegroundRule {
    pub fn is_foreground(self, px: Rgba8) -> bool {
        match self {
            Self::NotBackground(bg) => {
                if bg.a == 0 {
                    px.a != 0
                } else {
                    px != bg
                }
            }
            Self::Alpha { min } => px.a >= min,
        }
    }
}

/// Boolean shape mask, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl RasterMask {
    /// Build a mask from row-major booleans. Panics if `bits.len() != width * height`.
    pub fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> Self {
        assert_eq!(
            bits.len(),
            width as usize * height as usize,
            "mask bits must be width*height"
        );
        Self {
            width,
            height,
            bits,
        }
    }

    /// Threshold a decoded image into a mask.
    pub fn from_image(img: &RgbaImage, rule: ForegroundRule) -> Self {
        let (width, height) = img.dimensions();
        let bits = img
            .pixels()
            .map(|px| rule.is_foreground(Rgba8::from_pixel(*px)))
            .collect();
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Out-of-bounds coordinates read as background.
    pub fn get(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/mask.rs"]
mod tests;
