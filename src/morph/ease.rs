use std::str::FromStr;

use crate::foundation::error::MorphError;

/// Timing curve applied to the frame position before interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InOutCubic,
    SmoothStep,
}

impl Ease {
    pub const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InOutCubic,
        Ease::SmoothStep,
    ];

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in_quad",
            Self::OutQuad => "out_quad",
            Self::InOutQuad => "in_out_quad",
            Self::InOutCubic => "in_out_cubic",
            Self::SmoothStep => "smooth_step",
        }
    }
}

impl FromStr for Ease {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Ease::ALL
            .into_iter()
            .find(|e| e.name() == key)
            .ok_or_else(|| {
                let names: Vec<_> = Ease::ALL.iter().map(|e| e.name()).collect();
                MorphError::config(format!(
                    "unknown ease \"{s}\" (expected one of: {})",
                    names.join(", ")
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/ease.rs"]
mod tests;
