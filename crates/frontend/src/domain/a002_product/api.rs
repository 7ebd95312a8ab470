use contracts::domain::a002_product::{Product, ProductPayload};
use contracts::shared::error::DashboardError;
use serde_json::Value;

use crate::shared::http::{get_collection, post_json};

pub async fn fetch_products() -> Result<Vec<Product>, DashboardError> {
    get_collection("products", "/category/products/v1").await
}

/// Posts the validated form as JSON. The response body is not used beyond
/// the envelope check.
pub async fn create_product(payload: &ProductPayload) -> Result<(), DashboardError> {
    let _: Value = post_json("product", "/category/products/v1/createProduct", payload).await?;
    Ok(())
}
