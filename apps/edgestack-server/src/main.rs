//! EdgeStack API server.
//!
//! Serves the HMAC-authenticated backend API: a gateway layer verifies
//! every request against the shared secret, then routes it to the profile,
//! item catalog, or interaction log handlers.
//!
//! # Usage
//!
//! ```text
//! HMAC_SECRET=... GATEWAY_LISTEN=0.0.0.0:8080 edgestack-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GATEWAY_LISTEN` | `0.0.0.0:8080` | Bind address |
//! | `HMAC_SECRET` | *(unset)* | Shared secret value |
//! | `HMAC_SECRET_FILE` | *(unset)* | Path to a file holding the secret (takes precedence) |
//! | `ALLOWED_ORIGIN` | `*` | `Access-Control-Allow-Origin` value |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use edgestack_api_core::{EdgeStackApi, EdgeStackApiHandler};
use edgestack_api_http::{ApiHttpConfig, ApiHttpService};
use edgestack_auth::{Authenticator, SharedSecret, load_shared_secret};
use edgestack_core::GatewayConfig;

/// Server version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Attempts to load the shared secret before giving up.
const SECRET_LOAD_ATTEMPTS: u32 = 3;

/// Delay between secret load attempts.
const SECRET_LOAD_BACKOFF: Duration = Duration::from_millis(500);

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Load the shared secret, retrying transient failures.
///
/// A process that cannot obtain its secret must not start serving: every
/// request would be denied with a reason that points at the caller instead
/// of the missing dependency.
async fn load_secret_with_retry() -> Result<SharedSecret> {
    let mut attempt = 1;
    loop {
        match load_shared_secret() {
            Ok(secret) => return Ok(secret),
            Err(err) if attempt < SECRET_LOAD_ATTEMPTS => {
                warn!(
                    error = %err,
                    attempt,
                    "failed to load shared secret, retrying"
                );
                tokio::time::sleep(SECRET_LOAD_BACKOFF).await;
                attempt += 1;
            }
            Err(err) => {
                return Err(err).context("cannot load shared secret; refusing to serve");
            }
        }
    }
}

/// Run the accept loop, serving connections until a shutdown signal is received.
async fn serve(
    listener: TcpListener,
    service: ApiHttpService<EdgeStackApiHandler>,
) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    // Wait for in-flight requests to complete.
    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::from_env();
    init_tracing(&config.log_level)?;

    // Secret loading is the one blocking startup dependency; everything
    // after this point is in-process.
    let secret = load_secret_with_retry().await?;
    let authenticator = Authenticator::new(secret);

    let provider = EdgeStackApi::new();
    let handler = EdgeStackApiHandler::new(Arc::new(provider));
    let http_config = ApiHttpConfig {
        allowed_origin: config.allowed_origin.clone(),
    };
    let service = ApiHttpService::new(Arc::new(handler), authenticator, http_config);

    let addr: SocketAddr = config
        .gateway_listen
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.gateway_listen))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(
        %addr,
        allowed_origin = %config.allowed_origin,
        version = VERSION,
        "starting EdgeStack server",
    );

    serve(listener, service).await
}
