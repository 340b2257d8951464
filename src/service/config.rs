/// Limits shared by every request handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Largest side accepted by the `/generate/*` endpoints; larger requests are clamped.
    pub max_dimension: u32,
    /// Largest side accepted by `/generate`.
    pub simple_max_dimension: u32,
    /// Pixel budget for images decoded from `image_data`.
    pub max_decoded_pixels: u64,
    /// Request body limit in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_dimension: 2000,
            simple_max_dimension: 1000,
            max_decoded_pixels: 40_000_000,
            max_body_bytes: 32 * 1024 * 1024,
        }
    }
}
