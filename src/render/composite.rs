use crate::foundation::{
    core::Raster,
    error::{ProcimgError, ProcimgResult},
    math::mul_div255_u8,
};

pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(px[3]);
    [
        mul_div255_u8(u16::from(px[0]), a),
        mul_div255_u8(u16::from(px[1]), a),
        mul_div255_u8(u16::from(px[2]), a),
        px[3],
    ]
}

pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let un = |c: u8| -> u8 { ((u32::from(c) * 255 + a / 2) / a).min(255) as u8 };
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

/// Composite a premultiplied RGBA8 layer over a straight-alpha raster in place.
pub fn over_in_place(dst: &mut Raster, layer: &[u8]) -> ProcimgResult<()> {
    if dst.data.len() != layer.len() {
        return Err(ProcimgError::validation(
            "over_in_place expects a layer matching the raster size",
        ));
    }
    for (d, s) in dst.data.chunks_exact_mut(4).zip(layer.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let base = premultiply([d[0], d[1], d[2], d[3]]);
        let out = unpremultiply(over(base, [s[0], s[1], s[2], s[3]]));
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
