use sqlx::Sqlite;

use super::model::Product;
use crate::error::CatalogError;

/// Single-table store for catalog rows. Every operation is one statement;
/// nothing spans a transaction.
#[derive(Clone)]
pub struct ProductRepository {
    pub pool: sqlx::Pool<Sqlite>,
}

impl ProductRepository {
    pub fn new(pool: sqlx::Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Create the table if absent. Idempotent, no migration versioning.
    pub async fn ensure_schema(&self) -> Result<(), CatalogError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                price REAL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert(&self, name: &str, price: f64) -> Result<Product, CatalogError> {
        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
            .bind(name)
            .bind(price)
            .execute(&self.pool)
            .await?;
        Ok(Product {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            price,
        })
    }

    pub async fn get(&self, id: i64) -> Result<Product, CatalogError> {
        Ok(
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await?,
        )
    }

    /// Update name and price in place. Errors with `NotFound` when the id
    /// does not exist; the row is never created. Echoes the input back on
    /// success without a re-read.
    pub async fn update(&self, id: i64, name: &str, price: f64) -> Result<Product, CatalogError> {
        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(name)
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound);
        }
        Ok(Product {
            id,
            name: name.to_owned(),
            price,
        })
    }

    /// Returns whether a row was actually removed; a miss is not an error.
    pub async fn delete(&self, id: i64) -> Result<bool, CatalogError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Full snapshot, id ascending. No pagination, no filter.
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    use super::*;

    async fn test_repo() -> (tempfile::TempDir, ProductRepository) {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = SqliteConnectOptions::new()
            .filename(dir.path().join("catalog.db"))
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .expect("open pool");
        let repo = ProductRepository::new(pool);
        repo.ensure_schema().await.expect("schema");
        (dir, repo)
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let (_dir, repo) = test_repo().await;
        repo.ensure_schema().await.expect("second ensure");
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let (_dir, repo) = test_repo().await;
        let first = repo.insert("Laptop", 1500.0).await.expect("insert");
        let second = repo.insert("Mouse", 25.0).await.expect("insert");
        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.name, "Laptop");
        assert_eq!(first.price, 1500.0);
    }

    #[tokio::test]
    async fn get_returns_inserted_row() {
        let (_dir, repo) = test_repo().await;
        let created = repo.insert("Laptop", 1500.0).await.expect("insert");
        let found = repo.get(created.id).await.expect("get");
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let (_dir, repo) = test_repo().await;
        let err = repo.get(999_999).await.expect_err("must miss");
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn update_changes_subsequent_reads() {
        let (_dir, repo) = test_repo().await;
        let created = repo.insert("Laptop", 1500.0).await.expect("insert");
        let echoed = repo
            .update(created.id, "Gaming Laptop", 1800.0)
            .await
            .expect("update");
        assert_eq!(echoed.id, created.id);
        let found = repo.get(created.id).await.expect("get");
        assert_eq!(found.name, "Gaming Laptop");
        assert_eq!(found.price, 1800.0);
    }

    #[tokio::test]
    async fn update_missing_id_creates_no_row() {
        let (_dir, repo) = test_repo().await;
        repo.insert("Laptop", 1500.0).await.expect("insert");
        let err = repo
            .update(999_999, "Ghost", 1.0)
            .await
            .expect_err("must miss");
        assert!(matches!(err, CatalogError::NotFound));
        assert_eq!(repo.list().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let (_dir, repo) = test_repo().await;
        let created = repo.insert("Laptop", 1500.0).await.expect("insert");
        assert!(repo.delete(created.id).await.expect("delete"));
        assert!(!repo.delete(created.id).await.expect("second delete"));
        let err = repo.get(created.id).await.expect_err("gone");
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let (_dir, repo) = test_repo().await;
        repo.insert("B", 2.0).await.expect("insert");
        repo.insert("A", 1.0).await.expect("insert");
        repo.insert("C", 3.0).await.expect("insert");
        let products = repo.list().await.expect("list");
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(products.len(), 3);
    }

    #[tokio::test]
    async fn negative_and_zero_prices_are_accepted() {
        let (_dir, repo) = test_repo().await;
        let free = repo.insert("Freebie", 0.0).await.expect("insert");
        let refund = repo.insert("Refund", -10.5).await.expect("insert");
        assert_eq!(repo.get(free.id).await.expect("get").price, 0.0);
        assert_eq!(repo.get(refund.id).await.expect("get").price, -10.5);
    }
}
