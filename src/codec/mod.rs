//! PNG and base64 data-URI conversion at the HTTP boundary.

pub mod png;

pub use png::{DATA_URI_PREFIX, decode_image_data, encode_png, to_data_uri};
