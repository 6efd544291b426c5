use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Circle-color storage for one series.
///
/// Most series carry between one and four marker colors, so the list stays
/// inline in the common case.
pub type CircleColorList = SmallVec<[Color; 4]>;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Builds a circle-color list from a slice of prepared colors.
///
/// Configuration code passes colors through here so the storage type stays a
/// detail of this module.
#[must_use]
pub fn create_colors(colors: &[Color]) -> CircleColorList {
    colors.iter().copied().collect()
}

/// Maps host resource identifiers to concrete colors.
///
/// This is the compatibility path for consumers that still address colors by
/// platform resource id; hosts without a resource table simply never supply a
/// resolver.
pub trait ColorResolver {
    fn resolve(&self, resource_id: u32) -> Option<Color>;
}
