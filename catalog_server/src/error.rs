use std::{error::Error, fmt::Debug};

use tonic::Status;

#[derive(thiserror::Error)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error("invalid request: {0}")]
    Invalid(&'static str),

    #[error("database error")]
    Database(#[source] sqlx::Error),
}

impl Debug for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        if let Some(source) = self.source() {
            write!(f, " (Caused by: {})", source)?;
        }
        Ok(())
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => CatalogError::NotFound,
            err => CatalogError::Database(err),
        }
    }
}

impl From<CatalogError> for Status {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::NotFound => Status::not_found(message),
            CatalogError::Invalid(_) => Status::invalid_argument(message),
            CatalogError::Database(_) => Status::internal(message),
        }
    }
}
