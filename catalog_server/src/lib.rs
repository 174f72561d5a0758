pub mod constant;
pub mod error;
pub mod logging;
pub mod product;
pub mod server;
