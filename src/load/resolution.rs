//! The resolution policy of the loaded images.

use serde::{Deserialize, Serialize};
use std::ops::Div;

/// The maximum image width kept by [`Resolution::Auto`].
pub const AUTO_WIDTH_MAX: u32 = 1600;

/// The policy to pick the target image size.
///
/// It is serialized as the integer value it is built from with `From<i64>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Resolution {
    /// Downscaling the images wider than [`AUTO_WIDTH_MAX`] to that width.
    #[default]
    Auto,
    /// Downscaling by a factor of `1`, `2`, `4` or `8`, with rounding.
    ///
    /// Any other factor is taken as [`Resolution::Width`].
    Factor(u32),
    /// Downscaling to the target width, with truncation.
    Width(f64),
}

impl Resolution {
    /// ## Returns
    ///
    /// The target size `(width, height)`.
    pub fn get_target_size(
        &self,
        width: u32,
        height: u32,
        resolution_scale: f64,
    ) -> (u32, u32) {
        let resolution = self.normalize();
        let (width, height) = (width as f64, height as f64);

        let divisor = resolution.get_downscale(width) * resolution_scale;

        match resolution {
            Resolution::Factor(_) => (
                width.div(divisor).round_ties_even() as u32,
                height.div(divisor).round_ties_even() as u32,
            ),
            Resolution::Auto | Resolution::Width(_) => {
                (width.div(divisor) as u32, height.div(divisor) as u32)
            },
        }
    }

    /// Whether [`Resolution::Auto`] downscales the images of `width`.
    #[inline]
    pub fn is_large(width: u32) -> bool {
        width > AUTO_WIDTH_MAX
    }

    #[inline]
    fn normalize(self) -> Self {
        match self {
            Resolution::Factor(factor) if !matches!(factor, 1 | 2 | 4 | 8) => {
                Resolution::Width(factor as f64)
            },
            resolution => resolution,
        }
    }

    fn get_downscale(
        &self,
        width: f64,
    ) -> f64 {
        match *self {
            Resolution::Auto => {
                if width > AUTO_WIDTH_MAX as f64 {
                    width / AUTO_WIDTH_MAX as f64
                } else {
                    1.0
                }
            },
            Resolution::Factor(factor) => factor as f64,
            Resolution::Width(target) => width / target,
        }
    }
}

/// `-1` is [`Resolution::Auto`], `1`, `2`, `4` and `8` are [`Resolution::Factor`],
/// and any other value is [`Resolution::Width`].
impl From<i64> for Resolution {
    #[inline]
    fn from(value: i64) -> Self {
        match value {
            -1 => Resolution::Auto,
            1 | 2 | 4 | 8 => Resolution::Factor(value as u32),
            _ => Resolution::Width(value as f64),
        }
    }
}

/// The fractional part of [`Resolution::Width`] is truncated.
impl From<Resolution> for i64 {
    #[inline]
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Auto => -1,
            Resolution::Factor(factor) => factor as i64,
            Resolution::Width(target) => target as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn from_value() {
        use super::*;

        assert_eq!(Resolution::from(-1_i64), Resolution::Auto);
        assert_eq!(Resolution::from(1_i64), Resolution::Factor(1));
        assert_eq!(Resolution::from(2_i64), Resolution::Factor(2));
        assert_eq!(Resolution::from(4_i64), Resolution::Factor(4));
        assert_eq!(Resolution::from(8_i64), Resolution::Factor(8));
        assert_eq!(Resolution::from(3_i64), Resolution::Width(3.0));
        assert_eq!(Resolution::from(16_i64), Resolution::Width(16.0));
        assert_eq!(Resolution::from(800_i64), Resolution::Width(800.0));
        assert_eq!(Resolution::default(), Resolution::Auto);
    }

    #[test]
    fn get_target_size_with_factor() {
        use super::*;

        [
            (1, 1.0, (1000, 750), (1000, 750)),
            (2, 1.0, (1000, 750), (500, 375)),
            (4, 1.0, (1000, 752), (250, 188)),
            (8, 1.0, (1000, 752), (125, 94)),
            (2, 2.0, (1000, 750), (250, 188)),
            // Ties to even
            (4, 1.0, (1002, 750), (250, 188)),
            (1, 2.0, (999, 333), (500, 166)),
        ]
        .into_iter()
        .for_each(|(factor, scale, (width, height), target)| {
            let output = Resolution::Factor(factor)
                .get_target_size(width, height, scale);
            assert_eq!(output, target, "factor = {factor}, scale = {scale}");
        });
    }

    #[test]
    fn get_target_size_with_auto() {
        use super::*;

        let output = Resolution::Auto.get_target_size(1200, 800, 1.0);
        assert_eq!(output, (1200, 800));

        let output = Resolution::Auto.get_target_size(1200, 800, 2.0);
        assert_eq!(output, (600, 400));

        let output = Resolution::Auto.get_target_size(1600, 900, 1.0);
        assert_eq!(output, (1600, 900));

        let output = Resolution::Auto.get_target_size(3200, 1800, 1.0);
        assert_eq!(output, (1600, 900));

        let output = Resolution::Auto.get_target_size(3200, 1800, 2.0);
        assert_eq!(output, (800, 450));

        let output = Resolution::Auto.get_target_size(1700, 17, 1.0);
        assert_eq!(output, (1600, 16));

        // Truncation
        let output = Resolution::Auto.get_target_size(1001, 751, 2.0);
        assert_eq!(output, (500, 375));
    }

    #[test]
    fn get_target_size_with_width() {
        use super::*;

        let output = Resolution::Width(800.0).get_target_size(1000, 750, 1.0);
        assert_eq!(output, (800, 600));

        let output = Resolution::Width(800.0).get_target_size(1000, 750, 2.0);
        assert_eq!(output, (400, 300));

        let output = Resolution::Width(2000.0).get_target_size(1000, 750, 1.0);
        assert_eq!(output, (2000, 1500));

        // Truncation
        let output = Resolution::Width(400.0).get_target_size(1000, 749, 1.0);
        assert_eq!(output, (400, 299));
    }

    #[test]
    fn get_target_size_with_other_factor() {
        use super::*;

        // Taken as a target width of 3, not as a factor of 3
        let output = Resolution::Factor(3).get_target_size(1000, 751, 1.0);
        assert_eq!(output, (3, 2));

        let output = Resolution::Factor(16).get_target_size(1000, 750, 1.0);
        assert_eq!(output, (16, 12));

        let output = Resolution::Factor(0).get_target_size(1000, 750, 1.0);
        assert_eq!(output, (0, 0));
    }

    #[test]
    fn get_target_size_with_non_positive_width() {
        use super::*;

        let output = Resolution::Width(0.0).get_target_size(8, 6, 1.0);
        assert_eq!(output, (0, 0));

        let output = Resolution::Width(-2.0).get_target_size(8, 6, 1.0);
        assert_eq!(output, (0, 0));
    }

    #[test]
    fn serde_integer_form() {
        use super::*;

        let resolution = serde_json::from_str::<Resolution>("3").unwrap();
        assert_eq!(resolution, Resolution::Width(3.0));
        assert_eq!(resolution.get_target_size(1000, 751, 1.0), (3, 2));

        let resolution = serde_json::from_str::<Resolution>("400").unwrap();
        assert_eq!(resolution, Resolution::Width(400.0));
        assert_eq!(resolution.get_target_size(1000, 749, 1.0), (400, 299));

        let resolution = serde_json::from_str::<Resolution>("-1").unwrap();
        assert_eq!(resolution, Resolution::Auto);
        let resolution = serde_json::from_str::<Resolution>("4").unwrap();
        assert_eq!(resolution, Resolution::Factor(4));

        assert!(serde_json::from_str::<Resolution>(r#"{"Factor":3}"#).is_err());
        assert!(serde_json::from_str::<Resolution>(r#""Auto""#).is_err());

        [
            (Resolution::Auto, "-1"),
            (Resolution::Factor(8), "8"),
            (Resolution::Width(800.0), "800"),
        ]
        .into_iter()
        .for_each(|(resolution, target)| {
            let output = serde_json::to_string(&resolution).unwrap();
            assert_eq!(output, target);
        });
    }

    #[test]
    fn is_large() {
        use super::*;

        assert!(!Resolution::is_large(1600));
        assert!(Resolution::is_large(1601));
    }
}
