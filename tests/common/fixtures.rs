//! Test fixtures: synthetic photos written into a scratch directory.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Palette hex codes used by the default config
pub mod hope {
    pub const DARK: [u8; 3] = [0x00, 0x31, 0x4c];
    pub const ACCENT: [u8; 3] = [0xd7, 0x1a, 0x20];
    pub const MID: [u8; 3] = [0x70, 0x96, 0x9f];
    pub const HIGHLIGHT: [u8; 3] = [0xfc, 0xe4, 0xa8];
}

/// A portrait-ish test image: dark background, warm face blob, bright sky.
pub fn portrait(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let cx = width as f64 / 2.0;
        let cy = height as f64 / 2.0;
        let dx = (x as f64 - cx) / cx;
        let dy = (y as f64 - cy) / cy;
        let r2 = dx * dx + dy * dy;
        if r2 < 0.25 {
            Rgb([220, 170, 140])
        } else if y < height / 3 {
            let v = 150 + (x * 100 / width.max(1)) as u8;
            Rgb([v, v, 255])
        } else {
            let v = (y * 60 / height.max(1)) as u8;
            Rgb([v, v / 2, v / 3])
        }
    })
}

/// Horizontal gray ramp covering every intensity.
pub fn ramp(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgb([v, v, v])
    })
}

/// Scratch directory that owns the generated inputs.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `img` under `name`; the extension picks the format.
    pub fn write_image(&self, name: &str, img: &RgbImage) -> PathBuf {
        let path = self.join(name);
        let format = ImageFormat::from_path(&path).expect("Unknown image extension");
        DynamicImage::ImageRgb8(img.clone())
            .save_with_format(&path, format)
            .expect("Failed to write fixture image");
        path
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }
}
