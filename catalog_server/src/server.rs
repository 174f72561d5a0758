use sqlx::{Pool, Sqlite};
use tokio::net::TcpListener;
use tokio::sync::oneshot::Receiver;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use catalog_grpc::proto::product::v1 as pb;
use catalog_grpc::proto::product::v1::product_service_server::{
    ProductService, ProductServiceServer,
};

use crate::error::CatalogError;
use crate::product::repo::ProductRepository;

/// gRPC adapter over the repository. Stateless except for the pool handle;
/// every request is one statement, no validation beyond type coercion.
pub struct CatalogService {
    repo: ProductRepository,
}

impl CatalogService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }
}

#[tonic::async_trait]
impl ProductService for CatalogService {
    async fn create_product(
        &self,
        request: Request<pb::Product>,
    ) -> Result<Response<pb::Product>, Status> {
        let req = request.into_inner();
        // The id is server-assigned; zero is the only valid create-path value.
        if req.id != 0 {
            return Err(CatalogError::Invalid("id must be unset on create").into());
        }
        let product = self.repo.insert(&req.name, req.price).await?;
        debug!("created product {}", product.id);
        Ok(Response::new(product.into()))
    }

    async fn read_product(
        &self,
        request: Request<pb::ReadRequest>,
    ) -> Result<Response<pb::Product>, Status> {
        let product = self.repo.get(request.into_inner().id).await?;
        Ok(Response::new(product.into()))
    }

    async fn update_product(
        &self,
        request: Request<pb::Product>,
    ) -> Result<Response<pb::Product>, Status> {
        let req = request.into_inner();
        let product = self.repo.update(req.id, &req.name, req.price).await?;
        debug!("updated product {}", product.id);
        Ok(Response::new(product.into()))
    }

    async fn delete_product(
        &self,
        request: Request<pb::ReadRequest>,
    ) -> Result<Response<pb::DeleteResponse>, Status> {
        let success = self.repo.delete(request.into_inner().id).await?;
        Ok(Response::new(pb::DeleteResponse { success }))
    }

    async fn list_products(
        &self,
        _request: Request<pb::Empty>,
    ) -> Result<Response<pb::ProductList>, Status> {
        let products = self.repo.list().await?;
        Ok(Response::new(pb::ProductList {
            products: products.into_iter().map(Into::into).collect(),
        }))
    }
}

pub struct Server {
    svc: CatalogService,
}

impl Server {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            svc: CatalogService::new(ProductRepository::new(pool)),
        }
    }

    /// Serve on an already-bound listener until `shutdown_rx` fires.
    pub async fn start(self, listener: TcpListener, shutdown_rx: Receiver<()>) -> anyhow::Result<()> {
        let addr = listener.local_addr()?;
        info!("catalog service bound on {}", addr);

        tonic::transport::Server::builder()
            .add_service(ProductServiceServer::new(self.svc))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async {
                let _ = shutdown_rx.await;
                info!("catalog service shutting down");
            })
            .await?;
        Ok(())
    }
}
