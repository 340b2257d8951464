//! Image synthesizers.
//!
//! Every generator takes a validated [`Canvas`] and, when it needs randomness,
//! an explicit `rand::Rng`. Output rasters are always fully opaque.

pub mod gradient;
pub mod mandala;
pub mod noise;
pub mod palette;
pub mod scatter;

use rand::Rng;

use crate::foundation::{
    core::{Canvas, Raster, Rgb8},
    error::ProcimgResult,
};

pub use gradient::{Direction, gradient};
pub use mandala::{MandalaStyle, RingLayout, mandala, mandala_plan, ring_layouts};
pub use noise::{NoiseMode, noise};
pub use scatter::{PatternKind, ScatterPreset, abstract_art, pattern, scatter, scatter_shapes};

/// The three presets served by the simplified `/generate` endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimpleImage {
    Gradient { color1: Rgb8, color2: Rgb8 },
    Pattern(PatternKind),
    Mandala,
}

pub fn simple_image<R: Rng + ?Sized>(
    canvas: Canvas,
    kind: SimpleImage,
    rng: &mut R,
) -> ProcimgResult<Raster> {
    match kind {
        SimpleImage::Gradient { color1, color2 } => {
            Ok(gradient(canvas, color1, color2, Direction::Horizontal))
        }
        SimpleImage::Pattern(p) => pattern(canvas, p, rng),
        SimpleImage::Mandala => mandala(canvas, MandalaStyle::Simple),
    }
}
