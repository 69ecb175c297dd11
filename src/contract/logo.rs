//! Logo asset loading.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};

use super::ContractError;

const JPEG_QUALITY: u8 = 90;

/// Logo decoded from disk and re-encoded as JPEG for embedding.
#[derive(Debug, Clone)]
pub struct LogoImage {
    pub width_px: u32,
    pub height_px: u32,
    pub jpeg: Vec<u8>,
}

impl LogoImage {
    /// Read and decode the logo file. Transparent areas become white.
    pub fn load(path: &Path) -> Result<Self, ContractError> {
        let decoded = image::open(path).map_err(|source| ContractError::AssetLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let rgb = flatten_on_white(&decoded.to_rgba8());
        let (width_px, height_px) = rgb.dimensions();

        let mut jpeg = Cursor::new(Vec::new());
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
            .encode_image(&rgb)
            .map_err(ContractError::LogoEncode)?;

        Ok(Self {
            width_px,
            height_px,
            jpeg: jpeg.into_inner(),
        })
    }
}

fn flatten_on_white(rgba: &image::RgbaImage) -> RgbImage {
    let (width, height) = rgba.dimensions();
    let mut rgb = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = pixel[3] as u16;
        let blend = |channel: u8| ((channel as u16 * alpha + 255 * (255 - alpha)) / 255) as u8;
        rgb.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }

    rgb
}
