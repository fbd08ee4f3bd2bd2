use sqlx::SqlitePool;

use crate::{error::Result, models::Product};

/// All products in the store's natural scan order.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, is_available, bar_code, category, created_at FROM products",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, is_available, bar_code, category, created_at
         FROM products
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Inserts a new row and returns the id assigned by the store.
pub async fn insert(pool: &SqlitePool, product: &Product) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO products (name, is_available, bar_code, category, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&product.name)
    .bind(product.is_available)
    .bind(&product.bar_code)
    .bind(&product.category)
    .bind(&product.created_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrites every column of the row and returns the number of rows affected.
pub async fn update(pool: &SqlitePool, id: i64, product: &Product) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE products
         SET name = ?, is_available = ?, bar_code = ?, category = ?, created_at = ?
         WHERE id = ?",
    )
    .bind(&product.name)
    .bind(product.is_available)
    .bind(&product.bar_code)
    .bind(&product.category)
    .bind(&product.created_at)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
