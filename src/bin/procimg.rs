use anyhow::Context as _;
use clap::Parser;
use procimg::ServiceConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// The shape rasterizer addresses pixels with `u16`.
fn dimension_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(u16::MAX))
}

#[derive(Parser, Debug)]
#[command(name = "procimg", version, about = "Procedural image generation service")]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "PROCIMG_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind.
    #[arg(long, env = "PROCIMG_PORT", default_value_t = 5000)]
    port: u16,

    /// Largest side for the `/generate/*` endpoints; larger requests are clamped.
    #[arg(long, default_value_t = 2000, value_parser = dimension_parser())]
    max_dimension: u32,

    /// Largest side for `/generate`.
    #[arg(long, default_value_t = 1000, value_parser = dimension_parser())]
    simple_max_dimension: u32,

    /// Pixel budget for images submitted to `/enhance` and `/filter`.
    #[arg(long, default_value_t = 40_000_000)]
    max_decoded_pixels: u64,

    /// Request body limit in bytes.
    #[arg(long, default_value_t = 32 * 1024 * 1024)]
    max_body_bytes: usize,
}

impl Cli {
    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_dimension: self.max_dimension,
            simple_max_dimension: self.simple_max_dimension,
            max_decoded_pixels: self.max_decoded_pixels,
            max_body_bytes: self.max_body_bytes,
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.service_config();
    tracing::debug!(?config, "service config");

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    let local = listener.local_addr().context("read bound address")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %local,
        "procimg listening"
    );

    axum::serve(listener, procimg::build_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;

    tracing::info!("procimg stopped");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/bin/cli.rs"]
mod tests;
