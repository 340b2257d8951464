use rayon::prelude::*;

use crate::foundation::{
    core::{Canvas, Raster, Rgb8},
    math::lerp_u8,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    /// Anything other than `vertical` is horizontal.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Self::Vertical,
            _ => Self::Horizontal,
        }
    }

    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Interpolation ratio for position `i` along an axis of `len` pixels.
///
/// The first pixel is exactly 0 and the last exactly 1; a 1-pixel axis stays at 0.
pub(crate) fn axis_t(i: u32, len: u32) -> f64 {
    let denom = len.saturating_sub(1).max(1);
    f64::from(i) / f64::from(denom)
}

fn blend(c1: Rgb8, c2: Rgb8, t: f64) -> [u8; 4] {
    [
        lerp_u8(c1.r, c2.r, t),
        lerp_u8(c1.g, c2.g, t),
        lerp_u8(c1.b, c2.b, t),
        255,
    ]
}

/// Two-color linear gradient along `direction`.
pub fn gradient(canvas: Canvas, c1: Rgb8, c2: Rgb8, direction: Direction) -> Raster {
    let mut out = Raster::filled(canvas, [0, 0, 0, 255]);
    let stride = out.stride();

    match direction {
        Direction::Horizontal => {
            let row: Vec<u8> = (0..canvas.width)
                .flat_map(|x| blend(c1, c2, axis_t(x, canvas.width)))
                .collect();
            out.data
                .par_chunks_exact_mut(stride)
                .for_each(|dst| dst.copy_from_slice(&row));
        }
        Direction::Vertical => {
            out.data
                .par_chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(y, dst)| {
                    let px = blend(c1, c2, axis_t(y as u32, canvas.height));
                    for d in dst.chunks_exact_mut(4) {
                        d.copy_from_slice(&px);
                    }
                });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/synth/gradient.rs"]
mod tests;
