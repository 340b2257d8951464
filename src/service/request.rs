//! Request bodies for every POST endpoint.
//!
//! Missing fields take their documented defaults. Numeric fields accept JSON
//! numbers (fractions truncate toward zero) or numeric strings.

use serde::{Deserialize, Deserializer, de::Error as _};

use crate::foundation::core::Rgb8;

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(i64),
    Float(f64),
    Text(String),
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Number::deserialize(deserializer)? {
        Number::Int(v) => Ok(v),
        Number::Float(v) if v.is_finite() => Ok(v.trunc() as i64),
        Number::Float(v) => Err(D::Error::custom(format!("expected an integer, got {v}"))),
        Number::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid integer \"{s}\""))),
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Number::deserialize(deserializer)? {
        Number::Int(v) => Ok(v as f64),
        Number::Float(v) => Ok(v),
        Number::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid number \"{s}\""))),
    }
}

fn default_width() -> i64 {
    800
}

fn default_height() -> i64 {
    600
}

fn default_simple_width() -> i64 {
    400
}

fn default_simple_height() -> i64 {
    300
}

fn default_color1() -> Rgb8 {
    Rgb8::new(255, 0, 0)
}

fn default_color2() -> Rgb8 {
    Rgb8::new(0, 0, 255)
}

fn default_direction() -> String {
    "horizontal".to_owned()
}

fn default_abstract_complexity() -> i64 {
    10
}

fn default_mandala_complexity() -> i64 {
    8
}

fn default_noise_type() -> String {
    "random".to_owned()
}

fn default_simple_type() -> String {
    "gradient".to_owned()
}

fn default_pattern() -> String {
    "circles".to_owned()
}

fn default_enhance_type() -> String {
    "brightness".to_owned()
}

fn default_factor() -> f64 {
    1.2
}

fn default_filter_type() -> String {
    "blur".to_owned()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GradientRequest {
    #[serde(default = "default_width", deserialize_with = "lenient_i64")]
    pub width: i64,
    #[serde(default = "default_height", deserialize_with = "lenient_i64")]
    pub height: i64,
    #[serde(default = "default_color1")]
    pub color1: Rgb8,
    #[serde(default = "default_color2")]
    pub color2: Rgb8,
    #[serde(default = "default_direction")]
    pub direction: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AbstractRequest {
    #[serde(default = "default_width", deserialize_with = "lenient_i64")]
    pub width: i64,
    #[serde(default = "default_height", deserialize_with = "lenient_i64")]
    pub height: i64,
    #[serde(default = "default_abstract_complexity", deserialize_with = "lenient_i64")]
    pub complexity: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NoiseRequest {
    #[serde(default = "default_width", deserialize_with = "lenient_i64")]
    pub width: i64,
    #[serde(default = "default_height", deserialize_with = "lenient_i64")]
    pub height: i64,
    #[serde(rename = "type", default = "default_noise_type")]
    pub kind: String,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MandalaRequest {
    #[serde(default = "default_width", deserialize_with = "lenient_i64")]
    pub width: i64,
    #[serde(default = "default_height", deserialize_with = "lenient_i64")]
    pub height: i64,
    #[serde(default = "default_mandala_complexity", deserialize_with = "lenient_i64")]
    pub complexity: i64,
}

/// Body of the simplified `/generate` endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SimpleRequest {
    #[serde(rename = "type", default = "default_simple_type")]
    pub kind: String,
    #[serde(default = "default_simple_width", deserialize_with = "lenient_i64")]
    pub width: i64,
    #[serde(default = "default_simple_height", deserialize_with = "lenient_i64")]
    pub height: i64,
    #[serde(default = "default_color1")]
    pub color1: Rgb8,
    #[serde(default = "default_color2")]
    pub color2: Rgb8,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(rename = "type", default = "default_enhance_type")]
    pub kind: String,
    #[serde(default = "default_factor", deserialize_with = "lenient_f64")]
    pub factor: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(rename = "type", default = "default_filter_type")]
    pub kind: String,
}

#[cfg(test)]
#[path = "../../tests/unit/service/request.rs"]
mod tests;
