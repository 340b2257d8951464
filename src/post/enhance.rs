use rayon::prelude::*;

use crate::{
    foundation::{
        core::Raster,
        error::{ProcimgError, ProcimgResult},
        math::{luma, round_u8},
    },
    post::filter::{SMOOTH, convolve},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnhanceKind {
    #[default]
    Brightness,
    Contrast,
    Color,
    Sharpness,
}

impl EnhanceKind {
    /// Unknown names fall back to brightness.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "contrast" => Self::Contrast,
            "color" => Self::Color,
            "sharpness" => Self::Sharpness,
            _ => Self::Brightness,
        }
    }
}

/// The image an enhancement interpolates away from (`factor = 0`).
fn degenerate(src: &Raster, kind: EnhanceKind) -> Raster {
    match kind {
        EnhanceKind::Brightness => {
            let mut out = src.clone();
            for px in out.data.chunks_exact_mut(4) {
                px[..3].fill(0);
            }
            out
        }
        EnhanceKind::Contrast => {
            let sum: f64 = src
                .data
                .par_chunks_exact(4)
                .map(|px| f64::from(round_u8(luma(px[0], px[1], px[2]))))
                .sum();
            let mean = round_u8(sum / src.canvas().pixel_count() as f64);
            let mut out = src.clone();
            for px in out.data.chunks_exact_mut(4) {
                px[..3].fill(mean);
            }
            out
        }
        EnhanceKind::Color => {
            let mut out = src.clone();
            out.data.par_chunks_exact_mut(4).for_each(|px| {
                let l = round_u8(luma(px[0], px[1], px[2]));
                px[..3].fill(l);
            });
            out
        }
        EnhanceKind::Sharpness => convolve(src, SMOOTH),
    }
}

/// Blend `src` with its degenerate form: `degenerate * (1 - factor) + src * factor`.
///
/// `factor = 1` returns the input unchanged. Alpha is preserved.
#[tracing::instrument(level = "debug", skip(src), fields(width = src.width, height = src.height))]
pub fn enhance(src: &Raster, kind: EnhanceKind, factor: f64) -> ProcimgResult<Raster> {
    if !factor.is_finite() {
        return Err(ProcimgError::validation(format!(
            "enhancement factor must be finite, got {factor}"
        )));
    }
    let mut out = degenerate(src, kind);
    out.data
        .par_chunks_exact_mut(4)
        .zip(src.data.par_chunks_exact(4))
        .for_each(|(dst, img)| {
            for c in 0..3 {
                let d = f64::from(dst[c]);
                dst[c] = round_u8(d + (f64::from(img[c]) - d) * factor);
            }
            dst[3] = img[3];
        });
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/post/enhance.rs"]
mod tests;
