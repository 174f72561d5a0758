//! Wire contract and client for the product catalog service.

/// Generated protobuf types
pub mod proto {
    pub mod product {
        pub mod v1 {
            tonic::include_proto!("product.v1");
        }
    }
}

mod client;

pub use client::{CatalogApi, CatalogClient, RPC_TIMEOUT};
