//! procimg generates images procedurally and post-processes them over HTTP.
//!
//! # Layers
//!
//! - [`synth`]: gradients, random shape compositions, noise fields and mandalas,
//!   each a pure function of a [`Canvas`], its parameters and an explicit RNG.
//! - [`render`]: rasterizes shape lists with `vello_cpu` and composites them over
//!   a background.
//! - [`post`]: enhancement blends and fixed convolution filters.
//! - [`codec`]: PNG encoding and base64 data-URI conversion.
//! - [`service`]: axum router and handlers returning a uniform JSON envelope.
//!
//! Rasters are straight-alpha RGBA8 ([`Raster`]). Synthesized images are opaque.
#![forbid(unsafe_code)]

mod foundation;

pub mod codec;
pub mod post;
pub mod render;
pub mod service;
pub mod synth;

pub use crate::foundation::core::{Canvas, Point, Raster, Rgb8};
pub use crate::foundation::error::{ProcimgError, ProcimgResult};
pub use crate::service::{ApiResponse, ServiceConfig, build_router};
