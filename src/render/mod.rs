//! Shape rasterization: synthesizers describe what to draw as a list of [`Shape`]s,
//! the CPU backend turns them into a premultiplied layer, and the layer is composited
//! over a background [`Raster`](crate::Raster).

pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod shape;

use crate::foundation::{core::Raster, error::ProcimgResult};

pub use shape::{Outline, Paint, Shape, ShapeKind};

/// Draw `shapes` in order over `background`.
pub fn draw_shapes(background: &mut Raster, shapes: &[Shape]) -> ProcimgResult<()> {
    if shapes.is_empty() {
        return Ok(());
    }
    let layer = cpu::rasterize_layer(background.canvas(), shapes)?;
    composite::over_in_place(background, &layer)
}
