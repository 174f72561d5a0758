pub const GRPC_ADDR: &str = "127.0.0.1:50051";
pub const DB_PATH: &str = "product.db";
