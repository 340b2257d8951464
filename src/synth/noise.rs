use rand::Rng;
use rayon::prelude::*;

use crate::foundation::{
    core::{Canvas, Raster},
    math::round_u8,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoiseMode {
    /// Independent uniform RGB per pixel.
    #[default]
    Random,
    /// Smooth sin/cos interference field (grayscale).
    Perlin,
    /// Diagonal grayscale ramp from the top-left corner.
    Ramp,
}

impl NoiseMode {
    /// `random` and `perlin` are recognized; every other name is a ramp.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Self::Random,
            "perlin" => Self::Perlin,
            _ => Self::Ramp,
        }
    }
}

fn perlin_value(row: u32, col: u32) -> u8 {
    let v = ((f64::from(row) * 0.1).sin() + (f64::from(col) * 0.1).cos()) / 2.0;
    round_u8(255.0 * v)
}

fn ramp_value(row: u32, col: u32, canvas: Canvas) -> u8 {
    let span = f64::from(canvas.width) + f64::from(canvas.height);
    round_u8(255.0 * (f64::from(row) + f64::from(col)) / span)
}

fn fill_gray(out: &mut Raster, value: impl Fn(u32, u32) -> u8 + Sync) {
    let stride = out.stride();
    out.data
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(row, dst)| {
            for (col, px) in dst.chunks_exact_mut(4).enumerate() {
                let g = value(row as u32, col as u32);
                px.copy_from_slice(&[g, g, g, 255]);
            }
        });
}

/// Full-canvas noise field.
pub fn noise<R: Rng + ?Sized>(canvas: Canvas, mode: NoiseMode, rng: &mut R) -> Raster {
    let mut out = Raster::filled(canvas, [0, 0, 0, 255]);
    match mode {
        NoiseMode::Random => {
            let mut rgb = vec![0u8; canvas.pixel_count() * 3];
            rng.fill_bytes(&mut rgb);
            for (px, src) in out.data.chunks_exact_mut(4).zip(rgb.chunks_exact(3)) {
                px[..3].copy_from_slice(src);
            }
        }
        NoiseMode::Perlin => fill_gray(&mut out, perlin_value),
        NoiseMode::Ramp => fill_gray(&mut out, |row, col| ramp_value(row, col, canvas)),
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/synth/noise.rs"]
mod tests;
