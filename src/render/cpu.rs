use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::{
        core::{Canvas, Point, Rgb8},
        error::{ProcimgError, ProcimgResult},
    },
    render::shape::{Paint, Shape, ShapeKind},
};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Rasterize `shapes` in order onto a transparent layer.
///
/// Returns premultiplied RGBA8, row-major, `canvas.width * canvas.height * 4` bytes.
pub fn rasterize_layer(canvas: Canvas, shapes: &[Shape]) -> ProcimgResult<Vec<u8>> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| ProcimgError::validation("canvas width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| ProcimgError::validation("canvas height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    for shape in shapes {
        draw_shape(&mut ctx, shape);
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap.data_as_u8_slice().to_vec())
}

fn draw_shape(ctx: &mut vello_cpu::RenderContext, shape: &Shape) {
    match shape.kind {
        ShapeKind::Circle { center, radius } => {
            let inset = match shape.outline {
                Some(o) => {
                    set_paint(ctx, Paint::opaque(o.color));
                    ctx.fill_path(&ring_path(center, radius, radius - o.width));
                    o.width
                }
                None => 0.0,
            };
            let r = radius - inset;
            if r > 0.0 {
                set_paint(ctx, shape.paint);
                let circle = vello_cpu::kurbo::Circle::new(pixel_center(center), r);
                ctx.fill_path(&circle.to_path(CIRCLE_TOLERANCE));
            }
        }
        ShapeKind::Rect { min, max } => {
            let outer = vello_cpu::kurbo::Rect::new(min.x, min.y, max.x + 1.0, max.y + 1.0);
            let inner = match shape.outline {
                Some(o) => {
                    let inner = vello_cpu::kurbo::Rect::new(
                        outer.x0 + o.width,
                        outer.y0 + o.width,
                        outer.x1 - o.width,
                        outer.y1 - o.width,
                    );
                    set_paint(ctx, Paint::opaque(o.color));
                    ctx.fill_path(&rect_frame_path(outer, inner));
                    inner
                }
                None => outer,
            };
            if inner.width() > 0.0 && inner.height() > 0.0 {
                set_paint(ctx, shape.paint);
                ctx.fill_rect(&inner);
            }
        }
        ShapeKind::Triangle { a, b, c } => {
            set_paint(ctx, shape.paint);
            ctx.fill_path(&polygon_path(&[
                pixel_center(a),
                pixel_center(b),
                pixel_center(c),
            ]));
        }
        ShapeKind::Line { from, to, width } => {
            set_paint(ctx, shape.paint);
            ctx.fill_path(&line_path(pixel_center(from), pixel_center(to), width));
        }
        ShapeKind::Ring {
            center,
            radius,
            width,
        } => {
            set_paint(ctx, shape.paint);
            ctx.fill_path(&ring_path(center, radius, radius - width));
        }
    }
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, paint: Paint) {
    let Rgb8 { r, g, b } = paint.color;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, paint.alpha));
}

/// Integer pixel coordinates address pixel centers.
fn pixel_center(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x + 0.5, p.y + 0.5)
}

fn polygon_path(points: &[vello_cpu::kurbo::Point]) -> vello_cpu::kurbo::BezPath {
    let mut path = vello_cpu::kurbo::BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        path.move_to(first);
        for &p in iter {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

fn circle_points(center: vello_cpu::kurbo::Point, radius: f64) -> Vec<vello_cpu::kurbo::Point> {
    let segments = ((radius * 2.0).ceil() as usize).clamp(24, 256);
    (0..segments)
        .map(|i| {
            let theta = std::f64::consts::TAU * (i as f64) / (segments as f64);
            vello_cpu::kurbo::Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

/// Annulus between `outer` and `inner`; inner contour winds the other way.
fn ring_path(center: Point, outer: f64, inner: f64) -> vello_cpu::kurbo::BezPath {
    let c = pixel_center(center);
    let mut path = polygon_path(&circle_points(c, outer.max(0.0)));
    if inner > 0.0 {
        let mut hole = circle_points(c, inner);
        hole.reverse();
        path.extend(polygon_path(&hole).elements().iter().copied());
    }
    path
}

fn rect_frame_path(
    outer: vello_cpu::kurbo::Rect,
    inner: vello_cpu::kurbo::Rect,
) -> vello_cpu::kurbo::BezPath {
    let corners = |r: vello_cpu::kurbo::Rect| {
        [
            vello_cpu::kurbo::Point::new(r.x0, r.y0),
            vello_cpu::kurbo::Point::new(r.x1, r.y0),
            vello_cpu::kurbo::Point::new(r.x1, r.y1),
            vello_cpu::kurbo::Point::new(r.x0, r.y1),
        ]
    };
    let mut path = polygon_path(&corners(outer));
    if inner.width() > 0.0 && inner.height() > 0.0 {
        let mut hole = corners(inner);
        hole.reverse();
        path.extend(polygon_path(&hole).elements().iter().copied());
    }
    path
}

fn line_path(
    from: vello_cpu::kurbo::Point,
    to: vello_cpu::kurbo::Point,
    width: f64,
) -> vello_cpu::kurbo::BezPath {
    let half = width.max(1.0) / 2.0;
    let d = to - from;
    let len = d.hypot();
    let (ux, uy) = if len > f64::EPSILON {
        (d.x / len, d.y / len)
    } else {
        (1.0, 0.0)
    };
    let n = vello_cpu::kurbo::Vec2::new(-uy * half, ux * half);
    let end = if len > f64::EPSILON {
        to
    } else {
        to + vello_cpu::kurbo::Vec2::new(half, 0.0)
    };
    let start = if len > f64::EPSILON {
        from
    } else {
        from - vello_cpu::kurbo::Vec2::new(half, 0.0)
    };
    polygon_path(&[start + n, end + n, end - n, start - n])
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
