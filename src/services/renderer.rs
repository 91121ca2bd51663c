use crate::error::RenderError;
use crate::models::RenderConfig;
use crate::rendering::encode_rgb_png;
use crate::services::output_path::resolve_output_path;
use crate::services::preprocess::preprocess;
use image::DynamicImage;
use poster_tone::{BandReport, PosterMapper};
use std::path::{Path, PathBuf};

/// Result of rendering one image
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub width: u32,
    pub height: u32,
    /// Encoded 8-bit RGB PNG
    pub png: Vec<u8>,
    pub report: BandReport,
    /// Where the PNG was written, if it was written at all
    pub output_path: Option<PathBuf>,
}

/// High-level render service: preprocess, tone map, encode
pub struct RenderService {
    config: RenderConfig,
    mapper: PosterMapper,
}

impl RenderService {
    /// Validates `config` once so every later render can rely on it.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let mapper = config.mapper()?;
        Ok(Self { config, mapper })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a decoded image into an in-memory PNG
    pub fn render(&self, image: &DynamicImage) -> Result<RenderOutcome, RenderError> {
        let gray = preprocess(image, &self.config);
        let (width, height) = gray.dimensions();

        let poster = self
            .mapper
            .map(gray.as_raw(), width as usize, height as usize)?;
        tracing::debug!(distinct = poster.table().len(), "Built color table");

        let png = encode_rgb_png(width, height, poster.rgb())?;
        Ok(RenderOutcome {
            width,
            height,
            png,
            report: *poster.report(),
            output_path: None,
        })
    }

    /// Decode `input`, render it, and write the PNG to `output` or the
    /// default `<stem>_obamafied.png` beside the input.
    pub fn render_file(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<RenderOutcome, RenderError> {
        if !input.exists() {
            return Err(RenderError::InputNotFound(input.to_path_buf()));
        }

        let image = image::open(input)?;
        tracing::info!(
            path = %input.display(),
            width = image.width(),
            height = image.height(),
            "Decoded image"
        );

        let mut outcome = self.render(&image)?;

        let output_path = resolve_output_path(input, output);
        std::fs::write(&output_path, &outcome.png)?;
        tracing::info!(
            path = %output_path.display(),
            bytes = outcome.png.len(),
            "Wrote poster"
        );

        outcome.output_path = Some(output_path);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(32, 16, |x, y| {
            Rgb([(x * 8) as u8, (y * 16) as u8, ((x + y) * 5) as u8])
        }))
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RenderConfig {
            posterization: 0,
            ..Default::default()
        };
        assert!(matches!(
            RenderService::new(config),
            Err(RenderError::Config(_))
        ));
    }

    #[test]
    fn test_render_produces_png_of_same_size() {
        let service = RenderService::new(RenderConfig::default()).unwrap();
        let outcome = service.render(&gradient_image()).unwrap();

        assert_eq!((outcome.width, outcome.height), (32, 16));
        assert_eq!(&outcome.png[..8], b"\x89PNG\r\n\x1a\n");
        assert!((outcome.report.total() - 100.0).abs() < 1e-9);
        assert_eq!(outcome.output_path, None);
    }

    #[test]
    fn test_render_paints_darkest_pixels_dark() {
        let service = RenderService::new(RenderConfig::default()).unwrap();
        let outcome = service.render(&gradient_image()).unwrap();

        let decoded = image::load_from_memory(&outcome.png).unwrap().to_rgb8();
        let dark = service.config().palette().unwrap().dark.to_bytes();
        assert!(decoded.pixels().any(|p| p.0 == dark));
    }

    #[test]
    fn test_render_file_missing_input() {
        let service = RenderService::new(RenderConfig::default()).unwrap();
        let result = service.render_file(Path::new("/nonexistent/photo.jpg"), None);

        assert!(matches!(result, Err(RenderError::InputNotFound(_))));
    }
}
