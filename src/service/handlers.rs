//! Request handlers.
//!
//! Each endpoint is split in two: a synchronous `*_image` function that turns a
//! typed request into a [`Raster`], and an async axum handler that parses the
//! body, runs that function on the blocking pool and wraps the outcome in an
//! [`ApiResponse`]. Every failure becomes `{"success":false,"error":...}` with
//! HTTP 200.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use rand::{SeedableRng, rngs::StdRng};
use serde::de::DeserializeOwned;

use crate::{
    codec,
    foundation::{
        core::{Canvas, Raster},
        error::{ProcimgError, ProcimgResult},
    },
    post::{self, EnhanceKind, FilterKind},
    service::{
        config::ServiceConfig,
        envelope::ApiResponse,
        request::{
            AbstractRequest, EnhanceRequest, FilterRequest, GradientRequest, MandalaRequest,
            NoiseRequest, SimpleRequest,
        },
    },
    synth::{self, Direction, MandalaStyle, NoiseMode, PatternKind, SimpleImage},
};

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn parse_complexity(value: i64, cap: u32) -> ProcimgResult<u32> {
    if value < 0 {
        return Err(ProcimgError::validation(format!(
            "complexity must not be negative, got {value}"
        )));
    }
    Ok(u32::try_from(value).map_or(cap, |v| v.min(cap)))
}

fn decode_input(image_data: Option<&str>, config: &ServiceConfig) -> ProcimgResult<Raster> {
    let data = image_data.ok_or_else(|| ProcimgError::validation("image_data is required"))?;
    codec::decode_image_data(data, config.max_decoded_pixels)
}

pub fn gradient_image(req: GradientRequest, config: &ServiceConfig) -> ProcimgResult<Raster> {
    let canvas = Canvas::clamped(req.width, req.height, config.max_dimension)?;
    Ok(synth::gradient(
        canvas,
        req.color1,
        req.color2,
        Direction::parse(&req.direction),
    ))
}

pub fn abstract_image(req: AbstractRequest, config: &ServiceConfig) -> ProcimgResult<Raster> {
    let canvas = Canvas::clamped(req.width, req.height, config.max_dimension)?;
    let complexity = parse_complexity(req.complexity, synth::scatter::MAX_COMPLEXITY)?;
    synth::abstract_art(canvas, complexity, &mut rng_for(req.seed))
}

pub fn noise_image(req: NoiseRequest, config: &ServiceConfig) -> ProcimgResult<Raster> {
    let canvas = Canvas::clamped(req.width, req.height, config.max_dimension)?;
    Ok(synth::noise(
        canvas,
        NoiseMode::parse(&req.kind),
        &mut rng_for(req.seed),
    ))
}

pub fn mandala_image(req: MandalaRequest, config: &ServiceConfig) -> ProcimgResult<Raster> {
    let canvas = Canvas::clamped(req.width, req.height, config.max_dimension)?;
    let complexity = parse_complexity(req.complexity, synth::mandala::MAX_LAYERS)?;
    synth::mandala(canvas, MandalaStyle::Layered { complexity })
}

pub fn simple_image(req: SimpleRequest, config: &ServiceConfig) -> ProcimgResult<Raster> {
    let kind = match req.kind.trim().to_ascii_lowercase().as_str() {
        "gradient" => SimpleImage::Gradient {
            color1: req.color1,
            color2: req.color2,
        },
        "pattern" => SimpleImage::Pattern(PatternKind::parse(&req.pattern)),
        "mandala" => SimpleImage::Mandala,
        other => {
            return Err(ProcimgError::validation(format!(
                "unknown image type '{other}'"
            )));
        }
    };
    let canvas = Canvas::clamped(req.width, req.height, config.simple_max_dimension)?;
    synth::simple_image(canvas, kind, &mut rng_for(req.seed))
}

pub fn enhance_image(req: EnhanceRequest, config: &ServiceConfig) -> ProcimgResult<Raster> {
    let src = decode_input(req.image_data.as_deref(), config)?;
    post::enhance(&src, EnhanceKind::parse(&req.kind), req.factor)
}

pub fn filter_image(req: FilterRequest, config: &ServiceConfig) -> ProcimgResult<Raster> {
    let src = decode_input(req.image_data.as_deref(), config)?;
    Ok(post::filter(&src, FilterKind::parse(&req.kind)))
}

/// Parse `body` as `T`, run `op` and encode the result as a data URI.
pub fn process<T, F>(body: &[u8], config: &ServiceConfig, op: F) -> ProcimgResult<String>
where
    T: DeserializeOwned,
    F: FnOnce(T, &ServiceConfig) -> ProcimgResult<Raster>,
{
    let req: T = serde_json::from_slice(body)?;
    let raster = op(req, config)?;
    codec::to_data_uri(&raster)
}

/// Request body as extracted by axum; oversized or unreadable bodies arrive as `Err`.
pub type Body = Result<Bytes, BytesRejection>;

async fn respond<T, F>(
    endpoint: &'static str,
    config: Arc<ServiceConfig>,
    body: Body,
    op: F,
) -> Json<ApiResponse>
where
    T: DeserializeOwned,
    F: FnOnce(T, &ServiceConfig) -> ProcimgResult<Raster> + Send + 'static,
{
    let outcome = match body {
        Ok(body) => tokio::task::spawn_blocking(move || process(&body, &config, op))
            .await
            .unwrap_or_else(|err| {
                Err(ProcimgError::Other(anyhow::anyhow!(
                    "image worker failed: {err}"
                )))
            }),
        Err(rejection) => Err(ProcimgError::validation(format!(
            "request body rejected: {rejection}"
        ))),
    };

    match &outcome {
        Ok(uri) => tracing::debug!(endpoint, bytes = uri.len(), "image ready"),
        Err(err) => tracing::warn!(endpoint, error = %err, "request failed"),
    }
    Json(ApiResponse::from(outcome))
}

#[tracing::instrument(skip_all)]
pub async fn generate_gradient(
    State(config): State<Arc<ServiceConfig>>,
    body: Body,
) -> Json<ApiResponse> {
    respond("gradient", config, body, gradient_image).await
}

#[tracing::instrument(skip_all)]
pub async fn generate_abstract(
    State(config): State<Arc<ServiceConfig>>,
    body: Body,
) -> Json<ApiResponse> {
    respond("abstract", config, body, abstract_image).await
}

#[tracing::instrument(skip_all)]
pub async fn generate_noise(
    State(config): State<Arc<ServiceConfig>>,
    body: Body,
) -> Json<ApiResponse> {
    respond("noise", config, body, noise_image).await
}

#[tracing::instrument(skip_all)]
pub async fn generate_mandala(
    State(config): State<Arc<ServiceConfig>>,
    body: Body,
) -> Json<ApiResponse> {
    respond("mandala", config, body, mandala_image).await
}

#[tracing::instrument(skip_all)]
pub async fn generate_simple(
    State(config): State<Arc<ServiceConfig>>,
    body: Body,
) -> Json<ApiResponse> {
    respond("generate", config, body, simple_image).await
}

#[tracing::instrument(skip_all)]
pub async fn enhance(State(config): State<Arc<ServiceConfig>>, body: Body) -> Json<ApiResponse> {
    respond("enhance", config, body, enhance_image).await
}

#[tracing::instrument(skip_all)]
pub async fn filter(State(config): State<Arc<ServiceConfig>>, body: Body) -> Json<ApiResponse> {
    respond("filter", config, body, filter_image).await
}

#[cfg(test)]
#[path = "../../tests/unit/service/handlers.rs"]
mod tests;
