//! Triangle finder server binary.
//!
//! Usage: `triangles-web [listen-addr]`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triangles_web::{WebConfig, WebServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triangles_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr_arg = std::env::args().nth(1);
    let config = WebConfig::from_env()?.with_addr_arg(addr_arg.as_deref())?;

    tracing::info!("Starting triangle finder");
    tracing::debug!(?config, "loaded configuration");

    WebServer::new(config).serve().await?;

    Ok(())
}
