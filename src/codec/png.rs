use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ExtendedColorType, ImageEncoder, ImageReader, codecs::png::PngEncoder};

use crate::foundation::{
    core::Raster,
    error::{ProcimgError, ProcimgResult},
};

pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode as PNG: RGB8 when every pixel is opaque, RGBA8 otherwise.
pub fn encode_png(raster: &Raster) -> ProcimgResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new(Cursor::new(&mut buffer));
    if raster.is_opaque() {
        let rgb: Vec<u8> = raster
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        encoder
            .write_image(&rgb, raster.width, raster.height, ExtendedColorType::Rgb8)
            .map_err(|err| ProcimgError::encode(format!("failed to encode PNG: {err}")))?;
    } else {
        encoder
            .write_image(
                &raster.data,
                raster.width,
                raster.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|err| ProcimgError::encode(format!("failed to encode PNG: {err}")))?;
    }
    Ok(buffer)
}

/// `data:image/png;base64,<payload>`.
pub fn to_data_uri(raster: &Raster) -> ProcimgResult<String> {
    let png = encode_png(raster)?;
    let mut out = String::with_capacity(DATA_URI_PREFIX.len() + png.len().div_ceil(3) * 4);
    out.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(&png, &mut out);
    Ok(out)
}

/// Strip an optional `data:...;base64,` header and any ASCII whitespace (line-wrapped base64).
fn payload(input: &str) -> Vec<u8> {
    let input = input.trim();
    let b64 = match input.split_once(',') {
        Some((_, rest)) => rest,
        None => input,
    };
    b64.bytes().filter(|b| !b.is_ascii_whitespace()).collect()
}

fn reader(bytes: &[u8]) -> ProcimgResult<ImageReader<Cursor<&[u8]>>> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|err| ProcimgError::decode(format!("failed to read image: {err}")))
}

/// Decode a data URI or bare base64 string into RGBA8.
///
/// Any container the `image` crate can sniff is accepted. Images with more than
/// `max_pixels` pixels are rejected before the pixel data is decoded.
pub fn decode_image_data(input: &str, max_pixels: u64) -> ProcimgResult<Raster> {
    let b64 = payload(input);
    if b64.is_empty() {
        return Err(ProcimgError::decode("image_data is empty"));
    }
    let bytes = STANDARD
        .decode(b64)
        .map_err(|err| ProcimgError::decode(format!("invalid base64: {err}")))?;

    let (width, height) = reader(&bytes)?
        .into_dimensions()
        .map_err(|err| ProcimgError::decode(format!("unrecognized image: {err}")))?;
    let pixels = u64::from(width) * u64::from(height);
    if pixels > max_pixels {
        return Err(ProcimgError::validation(format!(
            "image is {width}x{height} ({pixels} pixels), limit is {max_pixels}"
        )));
    }

    let decoded = reader(&bytes)?
        .decode()
        .map_err(|err| ProcimgError::decode(format!("failed to decode image: {err}")))?;
    let rgba = decoded.to_rgba8();
    let (w, h) = rgba.dimensions();
    tracing::debug!(width = w, height = h, "decoded image_data");
    Raster::from_raw(w, h, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/png.rs"]
mod tests;
