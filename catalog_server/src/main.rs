use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::info;

use catalog_server::product::repo::ProductRepository;
use catalog_server::server::Server;
use catalog_server::{constant, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let options = SqliteConnectOptions::new()
        .filename(constant::DB_PATH)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    ProductRepository::new(pool.clone()).ensure_schema().await?;
    info!("schema ensured in {}", constant::DB_PATH);

    let listener = TcpListener::bind(constant::GRPC_ADDR).await?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        let _ = shutdown_tx.send(());
    });

    Server::new(pool).start(listener, shutdown_rx).await
}
