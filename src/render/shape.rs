use crate::foundation::core::{Point, Rgb8};

/// Fill color plus straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paint {
    pub color: Rgb8,
    pub alpha: u8,
}

impl Paint {
    pub fn opaque(color: Rgb8) -> Self {
        Self { color, alpha: 255 }
    }

    pub fn with_alpha(color: Rgb8, alpha: u8) -> Self {
        Self { color, alpha }
    }
}

/// Border drawn inside the shape bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub color: Rgb8,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Circle {
        center: Point,
        radius: f64,
    },
    /// Axis-aligned, `min` <= `max` on both axes.
    Rect {
        min: Point,
        max: Point,
    },
    Triangle {
        a: Point,
        b: Point,
        c: Point,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
    },
    /// Outline-only circle; `width` grows inward from `radius`.
    Ring {
        center: Point,
        radius: f64,
        width: f64,
    },
}

/// One drawable primitive. Produced by the synthesizers, consumed by the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub paint: Paint,
    pub outline: Option<Outline>,
}

impl Shape {
    pub fn new(kind: ShapeKind, paint: Paint) -> Self {
        Self {
            kind,
            paint,
            outline: None,
        }
    }

    pub fn outlined(mut self, color: Rgb8, width: f64) -> Self {
        self.outline = Some(Outline { color, width });
        self
    }

    /// Rectangle from two arbitrary corners.
    pub fn rect(p1: Point, p2: Point, paint: Paint) -> Self {
        let min = Point::new(p1.x.min(p2.x), p1.y.min(p2.y));
        let max = Point::new(p1.x.max(p2.x), p1.y.max(p2.y));
        Self::new(ShapeKind::Rect { min, max }, paint)
    }

    /// Square of half-size `half` centered on `center`.
    pub fn square(center: Point, half: f64, paint: Paint) -> Self {
        Self::rect(
            Point::new(center.x - half, center.y - half),
            Point::new(center.x + half, center.y + half),
            paint,
        )
    }

    pub fn circle(center: Point, radius: f64, paint: Paint) -> Self {
        Self::new(ShapeKind::Circle { center, radius }, paint)
    }
}
