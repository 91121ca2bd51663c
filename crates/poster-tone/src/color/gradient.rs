//! Perceived luminance and the eased two-color gradient.
//!
//! The gradient band of the poster does not ramp linearly. Its blend factor
//! grows with the square root of the distance past the gradient anchor,
//! normalised by the luminance gap between the two end colors:
//!
//! ```text
//! a = sqrt((intensity - base) / (luminance(dst) - luminance(src)))
//! c = min(255, round(src_c + a * (dst_c - src_c)))     for each channel c
//! ```
//!
//! `a` is 0 at the anchor and can exceed 1 far past it; the per-channel clamp
//! keeps the overshoot inside the byte range.

use super::rgb::Rgb;
use crate::api::ToneError;

/// Perceived brightness of an sRGB color.
///
/// Uses the weighted root-sum-of-squares approximation
/// `sqrt(0.241 r² + 0.691 g² + 0.068 b²)` on raw byte values. The squared
/// terms and coefficients are fixed; reference renders depend on them.
///
/// # Example
/// ```
/// use poster_tone::{luminance, Rgb};
/// assert_eq!(luminance(Rgb::new(0, 0, 0)), 0.0);
/// assert!((luminance(Rgb::new(255, 255, 255)) - 255.0).abs() < 1e-9);
/// ```
#[inline]
pub fn luminance(color: Rgb) -> f64 {
    let [r, g, b] = color.channels();
    (0.241 * r * r + 0.691 * g * g + 0.068 * b * b).sqrt()
}

/// A validated `src -> dst` gradient with its luminance span precomputed.
///
/// Construction fails unless `dst` is strictly brighter than `src`; with an
/// empty or negative span the blend factor has no real value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    src: Rgb,
    dst: Rgb,
    span: f64,
}

impl Gradient {
    /// Create a gradient running from `src` (factor 0) towards `dst`.
    ///
    /// # Errors
    ///
    /// Returns [`ToneError::DegenerateGradient`] if
    /// `luminance(dst) <= luminance(src)`.
    pub fn new(src: Rgb, dst: Rgb) -> Result<Self, ToneError> {
        let span = luminance(dst) - luminance(src);
        if !(span > 0.0) {
            return Err(ToneError::DegenerateGradient { src, dst });
        }
        Ok(Self { src, dst, span })
    }

    /// The color at factor 0.
    #[inline]
    pub fn src(&self) -> Rgb {
        self.src
    }

    /// The color the gradient eases towards.
    #[inline]
    pub fn dst(&self) -> Rgb {
        self.dst
    }

    /// Blend factor for `intensity`, given the anchor `base`.
    ///
    /// Intensities below the anchor are treated as the anchor itself.
    #[inline]
    pub fn factor(&self, base: u8, intensity: u8) -> f64 {
        let distance = intensity.saturating_sub(base) as f64;
        (distance / self.span).sqrt()
    }

    /// Color for `intensity` when the gradient starts at `base`.
    pub fn at(&self, base: u8, intensity: u8) -> Rgb {
        let a = self.factor(base, intensity);
        let src = self.src.channels();
        let dst = self.dst.channels();
        let blend = |i: usize| (src[i] + a * (dst[i] - src[i])).round().clamp(0.0, 255.0) as u8;
        Rgb::new(blend(0), blend(1), blend(2))
    }
}

/// One-shot form of [`Gradient::at`].
///
/// # Errors
///
/// Returns [`ToneError::DegenerateGradient`] if `dst` is not brighter than
/// `src`.
pub fn interpolate(src: Rgb, dst: Rgb, base: u8, intensity: u8) -> Result<Rgb, ToneError> {
    Ok(Gradient::new(src, dst)?.at(base, intensity))
}
