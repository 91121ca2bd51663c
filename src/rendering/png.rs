use std::io::Cursor;

use crate::error::RenderError;

/// Encode a flattened, row-major RGB buffer as an 8-bit RGB PNG.
pub fn encode_rgb_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, RenderError> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(RenderError::PngEncode(format!(
            "buffer holds {} bytes, {width}x{height} RGB needs {expected}",
            rgb.len()
        )));
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = ::png::Encoder::new(&mut buf, width, height);
        encoder.set_color(::png::ColorType::Rgb);
        encoder.set_depth(::png::BitDepth::Eight);
        encoder.set_compression(::png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_rgb_png_signature() {
        let rgb = vec![0u8, 49, 76, 252, 228, 168];
        let png = encode_rgb_png(2, 1, &rgb).unwrap();

        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_rgb_png_decodes_back() {
        let rgb: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 7) as u8).collect();
        let png = encode_rgb_png(4, 3, &rgb).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.into_raw(), rgb);
    }

    #[test]
    fn test_encode_rgb_png_rejects_short_buffer() {
        let result = encode_rgb_png(2, 2, &[0u8; 6]);
        assert!(matches!(result, Err(RenderError::PngEncode(_))));
    }
}
