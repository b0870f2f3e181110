use std::net::SocketAddr;

use clap::Parser;
use dev_proxy::{ProxyConfig, DEFAULT_BODY_LIMIT, DEFAULT_LISTEN, DEFAULT_TARGET};
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "dev-proxy")]
#[command(about = "Forward /api requests to the Students backend during development")]
struct Args {
    /// Address to listen on
    #[arg(long, env = "PROXY_LISTEN", default_value = DEFAULT_LISTEN)]
    listen: SocketAddr,

    /// Origin that /api requests are forwarded to
    #[arg(long, env = "PROXY_TARGET", default_value = DEFAULT_TARGET)]
    target: String,

    /// Largest request body forwarded, in bytes
    #[arg(long, env = "PROXY_BODY_LIMIT", default_value_t = DEFAULT_BODY_LIMIT)]
    body_limit: usize,
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::warn!("signal received, shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )?;

    let args = Args::parse();
    let app = dev_proxy::app(ProxyConfig {
        target: args.target.clone(),
        body_limit: args.body_limit,
    })?;

    let listener = TcpListener::bind(args.listen).await?;
    tracing::info!(listen = %args.listen, target = %args.target, "proxying /api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
