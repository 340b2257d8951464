//! Radially symmetric compositions.
//!
//! Planning and drawing are split: [`mandala_plan`] lays out the shapes and
//! [`mandala`] rasterizes them over a black background.

use std::f64::consts::TAU;

use crate::{
    foundation::{
        core::{Canvas, Point, Raster, Rgb8},
        error::ProcimgResult,
    },
    render::{self, Paint, Shape, ShapeKind},
    synth::palette,
};

/// Upper bound on mandala layers.
pub const MAX_LAYERS: u32 = 64;

const CENTER_RADIUS: f64 = 20.0;
const CENTER_OUTLINE: f64 = 3.0;
const MOTIF_OUTLINE: f64 = 2.0;

const SIMPLE_RINGS: u32 = 5;
const SIMPLE_RING_WIDTH: f64 = 3.0;
const SIMPLE_SPOKES: u32 = 12;
const SIMPLE_SPOKE_LENGTH: f64 = 80.0;
const SIMPLE_SPOKE_WIDTH: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MandalaStyle {
    /// Concentric rings of alternating circle/square motifs around a gold-rimmed disc.
    Layered { complexity: u32 },
    /// Five colored rings and twelve white spokes.
    Simple,
}

/// Geometry of one motif ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingLayout {
    pub layer: u32,
    pub radius: u32,
    pub motif_count: u32,
    pub motif_half_size: u32,
}

impl RingLayout {
    pub fn color(&self) -> Rgb8 {
        palette::MANDALA[self.layer as usize % palette::MANDALA.len()]
    }

    /// Even layers are circles, odd layers squares.
    pub fn is_circle(&self) -> bool {
        self.layer % 2 == 0
    }
}

/// Ring layout for a layered mandala, outermost first.
pub fn ring_layouts(canvas: Canvas, complexity: u32) -> Vec<RingLayout> {
    let complexity = complexity.min(MAX_LAYERS);
    let base = canvas.min_side() / 3;
    (0..complexity)
        .map(|layer| {
            let radius = base - layer * base / complexity;
            RingLayout {
                layer,
                radius,
                motif_count: 6 + 2 * layer,
                motif_half_size: (radius / 10).max(5),
            }
        })
        .collect()
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn layered_plan(canvas: Canvas, complexity: u32) -> Vec<Shape> {
    let center = canvas.center();
    let mut shapes = Vec::new();

    for ring in ring_layouts(canvas, complexity) {
        let paint = Paint::opaque(ring.color());
        let half = f64::from(ring.motif_half_size);
        for i in 0..ring.motif_count {
            let angle = TAU * f64::from(i) / f64::from(ring.motif_count);
            let at = polar(center, f64::from(ring.radius), angle);
            let motif = if ring.is_circle() {
                Shape::circle(at, half, paint)
            } else {
                Shape::square(at, half, paint)
            };
            shapes.push(motif.outlined(Rgb8::WHITE, MOTIF_OUTLINE));
        }
    }

    shapes.push(
        Shape::circle(center, CENTER_RADIUS, Paint::opaque(Rgb8::WHITE))
            .outlined(Rgb8::GOLD, CENTER_OUTLINE),
    );
    shapes
}

fn simple_plan(canvas: Canvas) -> Vec<Shape> {
    let center = canvas.center();
    let mut shapes = Vec::with_capacity((SIMPLE_RINGS + SIMPLE_SPOKES) as usize);

    for i in 0..SIMPLE_RINGS {
        let color = palette::SIMPLE_MANDALA[i as usize % palette::SIMPLE_MANDALA.len()];
        shapes.push(Shape::new(
            ShapeKind::Ring {
                center,
                radius: f64::from(30 + 20 * i),
                width: SIMPLE_RING_WIDTH,
            },
            Paint::opaque(color),
        ));
    }

    for i in 0..SIMPLE_SPOKES {
        let angle = TAU * f64::from(i) / f64::from(SIMPLE_SPOKES);
        shapes.push(Shape::new(
            ShapeKind::Line {
                from: center,
                to: polar(center, SIMPLE_SPOKE_LENGTH, angle),
                width: SIMPLE_SPOKE_WIDTH,
            },
            Paint::opaque(Rgb8::WHITE),
        ));
    }
    shapes
}

/// Shapes for `style`, in draw order.
pub fn mandala_plan(canvas: Canvas, style: MandalaStyle) -> Vec<Shape> {
    match style {
        MandalaStyle::Layered { complexity } => layered_plan(canvas, complexity),
        MandalaStyle::Simple => simple_plan(canvas),
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(width = canvas.width, height = canvas.height))]
pub fn mandala(canvas: Canvas, style: MandalaStyle) -> ProcimgResult<Raster> {
    let mut out = Raster::filled(canvas, Rgb8::BLACK.to_rgba8(255));
    let shapes = mandala_plan(canvas, style);
    render::draw_shapes(&mut out, &shapes)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/synth/mandala.rs"]
mod tests;
