//! Random shape compositions.
//!
//! The abstract composition and the three simple patterns differ only in their
//! background, shape mix, palette and geometry ranges, so each is a
//! [`ScatterPreset`] fed to the same generator.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::{
    foundation::{
        core::{Canvas, Point, Raster, Rgb8},
        error::ProcimgResult,
    },
    render::{self, Paint, Shape, ShapeKind},
    synth::{
        gradient::{Direction, gradient},
        palette,
    },
};

/// Upper bound on shapes per composition.
pub const MAX_COMPLEXITY: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScatterKind {
    Circle,
    Rect,
    Triangle,
    Line,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Solid(Rgb8),
    /// Two colors drawn from the palette, random direction.
    PaletteGradient(&'static [Rgb8]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillSource {
    AnyColor,
    Palette(&'static [Rgb8]),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RadiusRule {
    Range(RangeInclusive<u32>),
    /// From `min` up to a quarter of the shorter side (never below `min`).
    QuarterMinSide { min: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RectRule {
    /// Both corners anywhere on the canvas, normalized.
    Corners,
    /// Top-left kept `margin` px from the right/bottom edges, extent drawn from `size`.
    Sized {
        margin: u32,
        size: RangeInclusive<u32>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScatterPreset {
    pub background: Background,
    pub count: u32,
    pub kinds: &'static [ScatterKind],
    pub fill: FillSource,
    /// `None` draws opaque fills. Lines are always opaque.
    pub alpha: Option<RangeInclusive<u8>>,
    pub circle_radius: RadiusRule,
    pub rect: RectRule,
    pub line_width: RangeInclusive<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternKind {
    #[default]
    Circles,
    Rectangles,
    Lines,
}

impl PatternKind {
    /// Unknown names fall back to circles; there is no blank-canvas result.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangles" => Self::Rectangles,
            "lines" => Self::Lines,
            _ => Self::Circles,
        }
    }
}

impl ScatterPreset {
    pub fn abstract_art(complexity: u32) -> Self {
        Self {
            background: Background::PaletteGradient(palette::ABSTRACT_BACKGROUND),
            count: complexity.min(MAX_COMPLEXITY),
            kinds: &[
                ScatterKind::Circle,
                ScatterKind::Rect,
                ScatterKind::Triangle,
                ScatterKind::Line,
            ],
            fill: FillSource::AnyColor,
            alpha: Some(50..=200),
            circle_radius: RadiusRule::QuarterMinSide { min: 20 },
            rect: RectRule::Corners,
            line_width: 2..=10,
        }
    }

    pub fn pattern(kind: PatternKind) -> Self {
        let base = Self {
            background: Background::Solid(Rgb8::WHITE),
            count: 0,
            kinds: &[],
            fill: FillSource::AnyColor,
            alpha: None,
            circle_radius: RadiusRule::Range(10..=50),
            rect: RectRule::Sized {
                margin: 50,
                size: 20..=100,
            },
            line_width: 3..=3,
        };
        match kind {
            PatternKind::Circles => Self {
                count: 20,
                kinds: &[ScatterKind::Circle],
                fill: FillSource::Palette(palette::PATTERN_CIRCLES),
                ..base
            },
            PatternKind::Rectangles => Self {
                count: 15,
                kinds: &[ScatterKind::Rect],
                fill: FillSource::Palette(palette::PATTERN_RECTANGLES),
                ..base
            },
            PatternKind::Lines => Self {
                count: 30,
                kinds: &[ScatterKind::Line],
                fill: FillSource::Palette(palette::PATTERN_LINES),
                ..base
            },
        }
    }
}

fn background<R: Rng + ?Sized>(canvas: Canvas, bg: Background, rng: &mut R) -> Raster {
    match bg {
        Background::Solid(c) => Raster::filled(canvas, c.to_rgba8(255)),
        Background::PaletteGradient(colors) => {
            let c1 = palette::pick(colors, rng);
            let c2 = palette::pick(colors, rng);
            gradient(canvas, c1, c2, Direction::random(rng))
        }
    }
}

fn coord<R: Rng + ?Sized>(max: u32, rng: &mut R) -> f64 {
    f64::from(rng.random_range(0..=max))
}

fn random_point<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Point {
    Point::new(coord(canvas.width, rng), coord(canvas.height, rng))
}

fn fill_color<R: Rng + ?Sized>(fill: FillSource, rng: &mut R) -> Rgb8 {
    match fill {
        FillSource::AnyColor => Rgb8::new(rng.random(), rng.random(), rng.random()),
        FillSource::Palette(colors) => palette::pick(colors, rng),
    }
}

/// Generate the shapes for one composition without drawing them.
pub fn scatter_shapes<R: Rng + ?Sized>(
    canvas: Canvas,
    preset: &ScatterPreset,
    rng: &mut R,
) -> Vec<Shape> {
    if preset.kinds.is_empty() {
        return Vec::new();
    }

    let mut shapes = Vec::with_capacity(preset.count as usize);
    for _ in 0..preset.count {
        let kind = preset.kinds[rng.random_range(0..preset.kinds.len())];
        let color = fill_color(preset.fill, rng);
        let paint = match &preset.alpha {
            Some(range) => Paint::with_alpha(color, rng.random_range(range.clone())),
            None => Paint::opaque(color),
        };

        let shape = match kind {
            ScatterKind::Circle => {
                let center = random_point(canvas, rng);
                let radius = match preset.circle_radius {
                    RadiusRule::Range(ref r) => rng.random_range(r.clone()),
                    RadiusRule::QuarterMinSide { min } => {
                        rng.random_range(min..=(canvas.min_side() / 4).max(min))
                    }
                };
                Shape::circle(center, f64::from(radius), paint)
            }
            ScatterKind::Rect => match preset.rect {
                RectRule::Corners => {
                    let x1 = rng.random_range(0..=canvas.width);
                    let y1 = rng.random_range(0..=canvas.height);
                    let x2 = rng.random_range(x1..=canvas.width);
                    let y2 = rng.random_range(y1..=canvas.height);
                    Shape::rect(
                        Point::new(f64::from(x1), f64::from(y1)),
                        Point::new(f64::from(x2), f64::from(y2)),
                        paint,
                    )
                }
                RectRule::Sized {
                    margin,
                    ref size,
                } => {
                    let x1 = coord(canvas.width.saturating_sub(margin), rng);
                    let y1 = coord(canvas.height.saturating_sub(margin), rng);
                    let x2 = x1 + f64::from(rng.random_range(size.clone()));
                    let y2 = y1 + f64::from(rng.random_range(size.clone()));
                    Shape::rect(Point::new(x1, y1), Point::new(x2, y2), paint)
                }
            },
            ScatterKind::Triangle => Shape::new(
                ShapeKind::Triangle {
                    a: random_point(canvas, rng),
                    b: random_point(canvas, rng),
                    c: random_point(canvas, rng),
                },
                paint,
            ),
            ScatterKind::Line => {
                let from = random_point(canvas, rng);
                let to = random_point(canvas, rng);
                let width = rng.random_range(preset.line_width.clone());
                Shape::new(
                    ShapeKind::Line {
                        from,
                        to,
                        width: f64::from(width),
                    },
                    Paint::opaque(color),
                )
            }
        };
        shapes.push(shape);
    }
    shapes
}

/// Render a full composition: background first, then every scattered shape.
pub fn scatter<R: Rng + ?Sized>(
    canvas: Canvas,
    preset: &ScatterPreset,
    rng: &mut R,
) -> ProcimgResult<Raster> {
    let mut out = background(canvas, preset.background, rng);
    let shapes = scatter_shapes(canvas, preset, rng);
    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        shapes = shapes.len(),
        "scatter composition"
    );
    render::draw_shapes(&mut out, &shapes)?;
    Ok(out)
}

/// Gradient background plus `complexity` translucent random shapes.
pub fn abstract_art<R: Rng + ?Sized>(
    canvas: Canvas,
    complexity: u32,
    rng: &mut R,
) -> ProcimgResult<Raster> {
    scatter(canvas, &ScatterPreset::abstract_art(complexity), rng)
}

/// White background plus a fixed number of opaque palette shapes.
pub fn pattern<R: Rng + ?Sized>(
    canvas: Canvas,
    kind: PatternKind,
    rng: &mut R,
) -> ProcimgResult<Raster> {
    scatter(canvas, &ScatterPreset::pattern(kind), rng)
}

#[cfg(test)]
#[path = "../../tests/unit/synth/scatter.rs"]
mod tests;
