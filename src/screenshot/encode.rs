use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ImageBuffer, Rgb};

use crate::screenshot::bitmap::Bitmap;
use crate::screenshot::error::{Result, ScreenshotError};

/// Fixed quality for lossy encodes (0–100 scale).
pub const JPEG_QUALITY: u8 = 75;

/// The two supported raster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Match a requested format token case-insensitively.
    ///
    /// `jpg` and `jpeg` select JPEG; anything else, including an absent
    /// token, selects lossless PNG.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if t.eq_ignore_ascii_case("jpg") || t.eq_ignore_ascii_case("jpeg") => {
                Self::Jpeg
            }
            _ => Self::Png,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Canonical tag reported in response payloads.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPG",
        }
    }
}

/// Terminal artifact of the pipeline: compressed bytes plus format tag.
pub struct EncodedImage {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl EncodedImage {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Base64 (standard alphabet, padded) for transport to a remote caller.
    pub fn to_base64(&self) -> String {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &self.bytes)
    }
}

/// Serialize a bitmap into a compressed byte stream in the given format.
pub fn encode(bitmap: &Bitmap, format: ImageFormat) -> Result<EncodedImage> {
    let img: ImageBuffer<Rgb<u8>, _> =
        ImageBuffer::from_raw(bitmap.width(), bitmap.height(), bitmap.as_raw())
            .ok_or_else(|| ScreenshotError::Encode("bitmap buffer mismatch".to_string()))?;

    let mut bytes = Vec::new();
    match format {
        ImageFormat::Png => {
            let encoder = PngEncoder::new(&mut bytes);
            img.write_with_encoder(encoder)
                .map_err(|e| ScreenshotError::Encode(e.to_string()))?;
        }
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
            img.write_with_encoder(encoder)
                .map_err(|e| ScreenshotError::Encode(e.to_string()))?;
        }
    }

    Ok(EncodedImage { bytes, format })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a synthetic RGB test image (gradient pattern).
    fn make_test_bitmap(width: u32, height: u32) -> Bitmap {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push((x % 256) as u8);
                data.push((y % 256) as u8);
                data.push(128);
            }
        }
        Bitmap::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn from_token_is_case_insensitive() {
        assert_eq!(ImageFormat::from_token(Some("jpg")), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_token(Some("JPG")), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_token(Some("jpeg")), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_token(Some("JpEg")), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_token(Some("png")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_token(Some("PNG")), ImageFormat::Png);
    }

    #[test]
    fn from_token_defaults_to_png() {
        assert_eq!(ImageFormat::from_token(None), ImageFormat::Png);
        assert_eq!(ImageFormat::from_token(Some("")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_token(Some("webp")), ImageFormat::Png);
    }

    #[test]
    fn mime_types_and_tags() {
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Png.tag(), "PNG");
        assert_eq!(ImageFormat::Jpeg.tag(), "JPG");
    }

    #[test]
    fn png_encode_produces_png_magic_bytes() {
        let encoded = encode(&make_test_bitmap(64, 36), ImageFormat::Png).unwrap();
        assert_eq!(&encoded.bytes()[0..4], &[0x89, b'P', b'N', b'G']);
        assert_eq!(encoded.mime_type(), "image/png");
    }

    #[test]
    fn jpeg_encode_produces_jpeg_magic_bytes() {
        let encoded = encode(&make_test_bitmap(64, 36), ImageFormat::Jpeg).unwrap();
        assert_eq!(encoded.bytes()[0], 0xFF);
        assert_eq!(encoded.bytes()[1], 0xD8);
        assert_eq!(encoded.mime_type(), "image/jpeg");
    }

    #[test]
    fn png_roundtrip_is_lossless() {
        let bmp = make_test_bitmap(320, 180);
        let encoded = encode(&bmp, ImageFormat::Png).unwrap();

        let decoded = image::load_from_memory(encoded.bytes()).unwrap().to_rgb8();
        assert_eq!(decoded.width(), 320);
        assert_eq!(decoded.height(), 180);
        assert_eq!(decoded.as_raw().as_slice(), bmp.as_raw());
    }

    #[test]
    fn jpeg_roundtrip_preserves_dimensions() {
        let encoded = encode(&make_test_bitmap(320, 180), ImageFormat::Jpeg).unwrap();

        let decoded = image::load_from_memory(encoded.bytes()).unwrap();
        assert_eq!(decoded.width(), 320);
        assert_eq!(decoded.height(), 180);
    }

    #[test]
    fn base64_decodes_back_to_the_encoded_bytes() {
        let encoded = encode(&make_test_bitmap(16, 9), ImageFormat::Png).unwrap();
        let b64 = encoded.to_base64();
        let decoded =
            base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &b64).unwrap();
        assert_eq!(decoded, encoded.bytes());
    }
}
