pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Round to nearest and saturate into a channel.
pub(crate) fn round_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// ITU-R 601-2 luma, the weights used for grayscale conversion.
pub(crate) fn luma(r: u8, g: u8, b: u8) -> f64 {
    (299.0 * f64::from(r) + 587.0 * f64::from(g) + 114.0 * f64::from(b)) / 1000.0
}

/// Linear interpolation `a*(1-t) + b*t` rounded into a channel.
pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    round_u8(f64::from(a) * (1.0 - t) + f64::from(b) * t)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
