use catalog_grpc::proto::product::v1 as pb;

/// A persisted catalog row. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<Product> for pb::Product {
    fn from(product: Product) -> Self {
        pb::Product {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
