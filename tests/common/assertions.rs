//! Assertion helpers for tests.

use image::RgbImage;
use pretty_assertions::assert_eq;
use std::path::Path;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Assert bytes are a PNG image
pub fn assert_png_bytes(bytes: &[u8]) {
    assert!(
        bytes.starts_with(PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert a file exists, is a PNG, and decode it
pub fn assert_png_file(path: &Path) -> RgbImage {
    assert!(path.exists(), "Expected {} to exist", path.display());
    let bytes = std::fs::read(path).expect("Failed to read output");
    assert_png_bytes(&bytes);
    image::load_from_memory(&bytes)
        .expect("Output should decode")
        .to_rgb8()
}

/// Assert the three report lines are present and sum to roughly 100
pub fn assert_report_text(text: &str) {
    let values: Vec<f64> = ["dark: ", "accent: ", "the rest: "]
        .iter()
        .map(|label| {
            let line = text
                .lines()
                .find(|l| l.starts_with(label))
                .unwrap_or_else(|| panic!("Missing {label:?} line in {text:?}"));
            line[label.len()..]
                .trim_end_matches('%')
                .parse()
                .unwrap_or_else(|_| panic!("Bad percentage in {line:?}"))
        })
        .collect();

    let total: f64 = values.iter().sum();
    assert!((total - 100.0).abs() < 0.05, "Report sums to {total}: {text}");
}

/// Count pixels painted with exactly `color`
pub fn count_color(img: &RgbImage, color: [u8; 3]) -> usize {
    img.pixels().filter(|p| p.0 == color).count()
}

pub fn assert_dimensions(img: &RgbImage, width: u32, height: u32) {
    assert_eq!(img.dimensions(), (width, height), "Unexpected output size");
}
