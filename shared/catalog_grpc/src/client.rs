use std::time::Duration;

use async_trait::async_trait;
use tonic::Status;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::proto::product::v1::{
    Empty, Product, ReadRequest, product_service_client::ProductServiceClient,
};

/// Fixed per-RPC deadline; also used as the connect timeout. Nothing retries.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(1);

/// The five-operation capability set exposed by the catalog service.
///
/// Both adapters (web front-end, tests) are polymorphic over this trait, so
/// a handler never holds a concrete transport.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn create_product(&self, name: &str, price: f64) -> Result<Product, Status>;
    async fn read_product(&self, id: i64) -> Result<Product, Status>;
    async fn update_product(&self, id: i64, name: &str, price: f64) -> Result<Product, Status>;
    async fn delete_product(&self, id: i64) -> Result<bool, Status>;
    async fn list_products(&self) -> Result<Vec<Product>, Status>;
}

/// Typed client over a lazily-connected tonic channel.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ProductServiceClient<Channel>,
}

impl CatalogClient {
    /// Build a client against `url` (e.g. `http://127.0.0.1:50051`).
    ///
    /// The channel connects on first use; a dead endpoint surfaces as an
    /// `Unavailable` status on the first call rather than here.
    pub fn connect_lazy(url: &str) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(url.to_string())?
            .connect_timeout(RPC_TIMEOUT)
            .timeout(RPC_TIMEOUT)
            .connect_lazy();
        debug!("catalog client created for {}", url);
        Ok(Self {
            inner: ProductServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn create_product(&self, name: &str, price: f64) -> Result<Product, Status> {
        let request = Product {
            id: 0,
            name: name.to_owned(),
            price,
        };
        self.inner
            .clone()
            .create_product(request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn read_product(&self, id: i64) -> Result<Product, Status> {
        self.inner
            .clone()
            .read_product(ReadRequest { id })
            .await
            .map(tonic::Response::into_inner)
    }

    async fn update_product(&self, id: i64, name: &str, price: f64) -> Result<Product, Status> {
        let request = Product {
            id,
            name: name.to_owned(),
            price,
        };
        self.inner
            .clone()
            .update_product(request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn delete_product(&self, id: i64) -> Result<bool, Status> {
        self.inner
            .clone()
            .delete_product(ReadRequest { id })
            .await
            .map(|response| response.into_inner().success)
    }

    async fn list_products(&self) -> Result<Vec<Product>, Status> {
        self.inner
            .clone()
            .list_products(Empty {})
            .await
            .map(|response| response.into_inner().products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_lazy_accepts_valid_url() {
        assert!(CatalogClient::connect_lazy("http://127.0.0.1:50051").is_ok());
    }

    #[test]
    fn connect_lazy_rejects_garbage_url() {
        assert!(CatalogClient::connect_lazy("not a uri").is_err());
    }
}
