use crate::foundation::core::Rgb8;

/// Background colors for the abstract composition.
pub const ABSTRACT_BACKGROUND: &[Rgb8] = &[
    Rgb8::new(255, 100, 100),
    Rgb8::new(100, 255, 100),
    Rgb8::new(100, 100, 255),
    Rgb8::new(255, 255, 100),
    Rgb8::new(255, 100, 255),
];

/// Motif colors, indexed by `layer % len`.
pub const MANDALA: &[Rgb8] = &[
    Rgb8::new(255, 100, 100),
    Rgb8::new(100, 255, 100),
    Rgb8::new(100, 100, 255),
    Rgb8::new(255, 255, 100),
    Rgb8::new(255, 100, 255),
    Rgb8::new(100, 255, 255),
];

pub const SIMPLE_MANDALA: &[Rgb8] = &[
    Rgb8::new(255, 100, 100),
    Rgb8::new(100, 255, 100),
    Rgb8::new(100, 100, 255),
    Rgb8::new(255, 255, 100),
];

pub const PATTERN_CIRCLES: &[Rgb8] = &[
    Rgb8::new(255, 0, 0),
    Rgb8::new(0, 255, 0),
    Rgb8::new(0, 0, 255),
    Rgb8::new(255, 255, 0),
    Rgb8::new(255, 0, 255),
];

pub const PATTERN_RECTANGLES: &[Rgb8] = &[
    Rgb8::new(255, 100, 100),
    Rgb8::new(100, 255, 100),
    Rgb8::new(100, 100, 255),
    Rgb8::new(255, 255, 100),
];

pub const PATTERN_LINES: &[Rgb8] = &[
    Rgb8::new(255, 0, 0),
    Rgb8::new(0, 255, 0),
    Rgb8::new(0, 0, 255),
];

pub fn pick<R: rand::Rng + ?Sized>(palette: &[Rgb8], rng: &mut R) -> Rgb8 {
    palette[rng.random_range(0..palette.len())]
}
