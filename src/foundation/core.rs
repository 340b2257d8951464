use crate::foundation::error::{ProcimgError, ProcimgResult};

pub use kurbo::Point;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const GOLD: Self = Self::new(255, 215, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba8(self, a: u8) -> [u8; 4] {
        [self.r, self.g, self.b, a]
    }

    /// Build a color from loosely typed channel values (`[r, g, b]` or `[r, g, b, a]`).
    ///
    /// Fractional values truncate toward zero; anything outside `0..=255` is rejected.
    pub fn from_channels(channels: &[f64]) -> ProcimgResult<Self> {
        if channels.len() != 3 && channels.len() != 4 {
            return Err(ProcimgError::validation(format!(
                "color must have 3 ([r,g,b]) or 4 ([r,g,b,a]) channels, got {}",
                channels.len()
            )));
        }
        let mut out = [0u8; 4];
        for (slot, &v) in out.iter_mut().zip(channels) {
            *slot = channel_u8(v)?;
        }
        Ok(Self::new(out[0], out[1], out[2]))
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (alpha is validated and dropped).
    pub fn from_hex(s: &str) -> ProcimgResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if (s.len() != 6 && s.len() != 8) || !s.is_ascii() {
            return Err(ProcimgError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            ));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| {
                ProcimgError::validation(format!("invalid hex byte \"{}\"", &s[i..i + 2]))
            })
        };
        if s.len() == 8 {
            byte(6)?;
        }
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }
}

fn channel_u8(v: f64) -> ProcimgResult<u8> {
    if !v.is_finite() {
        return Err(ProcimgError::validation("color channel must be a finite number"));
    }
    let t = v.trunc();
    if !(0.0..=255.0).contains(&t) {
        return Err(ProcimgError::validation(format!(
            "color channel {v} is outside 0..=255"
        )));
    }
    Ok(t as u8)
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => Self::from_channels(&v).map_err(serde::de::Error::custom),
        }
    }
}

/// Validated output dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> ProcimgResult<Self> {
        if width == 0 || height == 0 {
            return Err(ProcimgError::validation(format!(
                "canvas must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Validate requested dimensions and clamp each side to `max_side`.
    pub fn clamped(width: i64, height: i64, max_side: u32) -> ProcimgResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ProcimgError::validation(format!(
                "width and height must be positive, got {width}x{height}"
            )));
        }
        let max_side = i64::from(max_side.max(1));
        let w = width.min(max_side);
        let h = height.min(max_side);
        if w != width || h != height {
            tracing::debug!(width, height, w, h, "clamped canvas dimensions");
        }
        Self::new(w as u32, h as u32)
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }

    /// Integer center, matching `(w / 2, h / 2)`.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width / 2), f64::from(self.height / 2))
    }
}

/// Straight-alpha RGBA8 pixel grid, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Raster {
    pub fn filled(canvas: Canvas, rgba: [u8; 4]) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: rgba.repeat(canvas.pixel_count()),
        }
    }

    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ProcimgResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| ProcimgError::validation("raster size overflow"))?;
        if width == 0 || height == 0 {
            return Err(ProcimgError::validation("raster must be at least 1x1"));
        }
        if data.len() != expected {
            return Err(ProcimgError::validation(format!(
                "raster expects {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    pub fn is_opaque(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 255)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
