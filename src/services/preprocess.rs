//! Image preprocessing ahead of tone mapping.
//!
//! Order matters: posterize first so the median filter votes between a
//! handful of levels, then blur, then collapse to a single luma channel.

use image::{DynamicImage, GrayImage, Luma, RgbImage};
use imageproc::filter::median_filter;

use crate::models::{odd_window, RenderConfig};

/// Keep the top `bits` bits of every channel (1..=8).
pub fn posterize(img: &RgbImage, bits: u8) -> RgbImage {
    let bits = bits.clamp(1, 8);
    let mask = (0xFFu16 << (8 - bits)) as u8;
    let mut out = img.clone();
    for value in out.iter_mut() {
        *value &= mask;
    }
    out
}

/// Median blur with a square window; even sizes are bumped to the next odd one.
pub fn median_blur(img: &RgbImage, window: u32) -> RgbImage {
    let radius = odd_window(window) / 2;
    if radius == 0 {
        return img.clone();
    }
    median_filter(img, radius, radius)
}

/// ITU-R 601-2 luma, rounded the way common image libraries do it.
pub fn to_luma(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut gray = GrayImage::new(width, height);
    for (src, dst) in img.pixels().zip(gray.pixels_mut()) {
        let [r, g, b] = src.0;
        let y = (19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + 0x8000) >> 16;
        *dst = Luma([y as u8]);
    }
    gray
}

/// Posterize, blur and grayscale an image according to `config`.
pub fn preprocess(img: &DynamicImage, config: &RenderConfig) -> GrayImage {
    let rgb = img.to_rgb8();
    let posterized = posterize(&rgb, config.posterization);
    let blurred = median_blur(&posterized, config.median_window());
    let gray = to_luma(&blurred);

    tracing::debug!(
        bits = config.posterization,
        window = config.median_window(),
        "Preprocessed image"
    );
    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_posterize_keeps_top_bits() {
        let img = RgbImage::from_pixel(1, 1, Rgb([0xFF, 0x9C, 0x1F]));

        assert_eq!(posterize(&img, 3).get_pixel(0, 0).0, [0xE0, 0x80, 0x00]);
        assert_eq!(posterize(&img, 1).get_pixel(0, 0).0, [0x80, 0x80, 0x00]);
        assert_eq!(posterize(&img, 8).get_pixel(0, 0).0, [0xFF, 0x9C, 0x1F]);
    }

    #[test]
    fn test_median_blur_window_one_is_identity() {
        let img = RgbImage::from_fn(5, 5, |x, y| Rgb([(x * 40) as u8, (y * 40) as u8, 7]));
        assert_eq!(median_blur(&img, 1), img);
        // 0 rounds up to a window of 1
        assert_eq!(median_blur(&img, 0), img);
    }

    #[test]
    fn test_median_blur_removes_speck() {
        let mut img = RgbImage::from_pixel(5, 5, Rgb([10, 10, 10]));
        img.put_pixel(2, 2, Rgb([250, 250, 250]));

        let blurred = median_blur(&img, 3);
        assert_eq!(blurred.get_pixel(2, 2).0, [10, 10, 10]);
    }

    #[test]
    fn test_median_blur_even_window_matches_odd() {
        let img = RgbImage::from_fn(6, 6, |x, y| Rgb([((x * y) * 13) as u8, 0, (x * 31) as u8]));
        assert_eq!(median_blur(&img, 4), median_blur(&img, 5));
    }

    #[test]
    fn test_to_luma_weights() {
        let img = RgbImage::from_vec(
            4,
            1,
            vec![255, 255, 255, 0, 0, 0, 255, 0, 0, 0, 255, 0],
        )
        .unwrap();
        let gray = to_luma(&img);

        assert_eq!(gray.as_raw(), &vec![255u8, 0, 76, 150]);
    }

    #[test]
    fn test_preprocess_dimensions_and_levels() {
        let rgb = RgbImage::from_fn(16, 8, |x, y| Rgb([(x * 16) as u8, (y * 32) as u8, 128]));
        let config = RenderConfig::default();

        let gray = preprocess(&DynamicImage::ImageRgb8(rgb), &config);
        assert_eq!(gray.dimensions(), (16, 8));
    }

    #[test]
    fn test_preprocess_drops_alpha() {
        let rgba = image::RgbaImage::from_pixel(3, 3, image::Rgba([255, 255, 255, 0]));
        let config = RenderConfig {
            posterization: 8,
            median: 1,
            ..Default::default()
        };

        let gray = preprocess(&DynamicImage::ImageRgba8(rgba), &config);
        assert!(gray.pixels().all(|p| p.0 == [255]));
    }
}
