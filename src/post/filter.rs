use rayon::prelude::*;

use crate::foundation::{core::Raster, math::round_u8};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterKind {
    #[default]
    Blur,
    Sharpen,
    Edge,
    Emboss,
    Smooth,
}

impl FilterKind {
    /// Unknown names fall back to blur.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "sharpen" => Self::Sharpen,
            "edge" => Self::Edge,
            "emboss" => Self::Emboss,
            "smooth" => Self::Smooth,
            _ => Self::Blur,
        }
    }

    pub fn kernel(self) -> Kernel {
        match self {
            Self::Blur => BLUR,
            Self::Sharpen => SHARPEN,
            Self::Edge => EDGE,
            Self::Emboss => EMBOSS,
            Self::Smooth => SMOOTH,
        }
    }
}

/// Square convolution kernel: `out = sum(w * px) / scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel {
    pub size: usize,
    pub weights: &'static [i32],
    pub scale: i32,
    pub offset: i32,
}

#[rustfmt::skip]
pub const BLUR: Kernel = Kernel {
    size: 5,
    weights: &[
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ],
    scale: 16,
    offset: 0,
};

#[rustfmt::skip]
pub const SHARPEN: Kernel = Kernel {
    size: 3,
    weights: &[
        -2, -2, -2,
        -2, 32, -2,
        -2, -2, -2,
    ],
    scale: 16,
    offset: 0,
};

#[rustfmt::skip]
pub const EDGE: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, -1, -1,
        -1,  8, -1,
        -1, -1, -1,
    ],
    scale: 1,
    offset: 0,
};

#[rustfmt::skip]
pub const EMBOSS: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, 0, 0,
         0, 1, 0,
         0, 0, 0,
    ],
    scale: 1,
    offset: 128,
};

#[rustfmt::skip]
pub const SMOOTH: Kernel = Kernel {
    size: 3,
    weights: &[
        1, 1, 1,
        1, 5, 1,
        1, 1, 1,
    ],
    scale: 13,
    offset: 0,
};

/// Convolve RGB with `kernel`, replicating edge pixels; alpha is copied through.
pub fn convolve(src: &Raster, kernel: Kernel) -> Raster {
    let w = src.width as i64;
    let h = src.height as i64;
    let radius = (kernel.size / 2) as i64;
    let stride = src.stride();
    let mut out = src.clone();

    out.data
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as i64;
            for x in 0..w {
                let mut acc = [0i32; 3];
                for (ki, &kw) in kernel.weights.iter().enumerate() {
                    if kw == 0 {
                        continue;
                    }
                    let dx = (ki % kernel.size) as i64 - radius;
                    let dy = (ki / kernel.size) as i64 - radius;
                    let sx = (x + dx).clamp(0, w - 1);
                    let sy = (y + dy).clamp(0, h - 1);
                    let idx = ((sy * w + sx) as usize) * 4;
                    for c in 0..3 {
                        acc[c] += kw * i32::from(src.data[idx + c]);
                    }
                }
                let o = (x as usize) * 4;
                for c in 0..3 {
                    let v = f64::from(acc[c]) / f64::from(kernel.scale) + f64::from(kernel.offset);
                    row[o + c] = round_u8(v);
                }
            }
        });
    out
}

#[tracing::instrument(level = "debug", skip(src), fields(width = src.width, height = src.height))]
pub fn filter(src: &Raster, kind: FilterKind) -> Raster {
    convolve(src, kind.kernel())
}

#[cfg(test)]
#[path = "../../tests/unit/post/filter.rs"]
mod tests;
