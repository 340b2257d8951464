use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Html,
    routing::{get, post},
};

use crate::service::{config::ServiceConfig, handlers};

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>procimg</title></head>
<body>
<h1>procimg</h1>
<p>POST a JSON body to any endpoint below. Responses are
<code>{"success":true,"image":"data:image/png;base64,..."}</code> or
<code>{"success":false,"error":"..."}</code>.</p>
<ul>
<li><code>POST /generate/gradient</code> width, height, color1, color2, direction</li>
<li><code>POST /generate/abstract</code> width, height, complexity, seed</li>
<li><code>POST /generate/noise</code> width, height, type (random | perlin), seed</li>
<li><code>POST /generate/mandala</code> width, height, complexity</li>
<li><code>POST /generate</code> type (gradient | pattern | mandala), width, height, color1, color2, pattern, seed</li>
<li><code>POST /enhance</code> image_data, type (brightness | contrast | color | sharpness), factor</li>
<li><code>POST /filter</code> image_data, type (blur | sharpen | edge | emboss | smooth)</li>
<li><code>GET /health</code></li>
</ul>
</body>
</html>
"#;

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// All routes, sharing `config`.
pub fn build_router(config: ServiceConfig) -> Router {
    let body_limit = config.max_body_bytes;
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/generate/gradient", post(handlers::generate_gradient))
        .route("/generate/abstract", post(handlers::generate_abstract))
        .route("/generate/noise", post(handlers::generate_noise))
        .route("/generate/mandala", post(handlers::generate_mandala))
        .route("/generate", post(handlers::generate_simple))
        .route("/enhance", post(handlers::enhance))
        .route("/filter", post(handlers::filter))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(Arc::new(config))
}
