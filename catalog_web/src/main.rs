use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_grpc::CatalogClient;
use catalog_web::routes;

const CATALOG_URL: &str = "http://127.0.0.1:50051";
const WEB_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The channel connects on first use; a dead catalog service surfaces as
    // a 500 on the first request, not at startup.
    let client = CatalogClient::connect_lazy(CATALOG_URL)?;
    let app = routes::router(Arc::new(client));

    let listener = tokio::net::TcpListener::bind(WEB_ADDR).await?;
    info!("web front-end listening on http://{}", WEB_ADDR);
    axum::serve(listener, app).await?;
    Ok(())
}
