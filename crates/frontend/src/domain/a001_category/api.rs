use contracts::domain::a001_category::{Category, Subcategory};
use contracts::shared::error::DashboardError;

use crate::shared::api_utils::scoped_path;
use crate::shared::cascade::{CascadeController, OptionsFuture};
use crate::shared::http::{get_collection, get_options};

pub const CATEGORY_SLOTS: [(&str, &str); 2] =
    [("category", "Category"), ("subCategory", "Sub-category")];

pub async fn fetch_categories() -> Result<Vec<Category>, DashboardError> {
    get_collection("categories", "/category/api/category").await
}

pub fn category_options() -> OptionsFuture {
    Box::pin(get_options::<Category>("categories", "/category/api/category"))
}

pub fn subcategories_by_category(category_id: String) -> OptionsFuture {
    Box::pin(async move {
        let path = scoped_path("/category/api/subCategory/by-category", &category_id);
        get_options::<Subcategory>("subcategories", &path).await
    })
}

/// Category → Sub-category; categories start loading right away.
pub fn category_cascade() -> CascadeController {
    CascadeController::new(&CATEGORY_SLOTS, category_options, vec![subcategories_by_category])
}
