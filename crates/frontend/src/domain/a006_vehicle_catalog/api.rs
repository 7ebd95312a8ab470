//! Vehicle catalog option sources and the Vehicle Type → Brand → Model →
//! Variant cascade.

use contracts::domain::a006_vehicle_catalog::{Brand, Model, Variant, VehicleType, YearRange};

use crate::shared::api_utils::scoped_path;
use crate::shared::cascade::{CascadeController, OptionsFuture};
use crate::shared::http::get_options;

pub const VEHICLE_SLOTS: [(&str, &str); 4] = [
    ("vehicleType", "Vehicle Type"),
    ("brand", "Brand"),
    ("model", "Model"),
    ("variant", "Variant"),
];

pub fn fetch_types() -> OptionsFuture {
    Box::pin(get_options::<VehicleType>("vehicle types", "/category/api/types"))
}

pub fn brands_by_type(type_id: String) -> OptionsFuture {
    Box::pin(async move {
        let path = scoped_path("/category/api/brands/brandByType", &type_id);
        get_options::<Brand>("brands", &path).await
    })
}

pub fn models_by_brand(brand_id: String) -> OptionsFuture {
    Box::pin(async move {
        let path = scoped_path("/category/api/model/brand", &brand_id);
        get_options::<Model>("models", &path).await
    })
}

pub fn variants_by_model(model_id: String) -> OptionsFuture {
    Box::pin(async move {
        let path = scoped_path("/category/variants/model", &model_id);
        get_options::<Variant>("variants", &path).await
    })
}

pub fn fetch_year_ranges() -> OptionsFuture {
    Box::pin(get_options::<YearRange>("year ranges", "/category/api/year"))
}

/// Starts loading vehicle types right away.
pub fn vehicle_cascade() -> CascadeController {
    CascadeController::new(
        &VEHICLE_SLOTS,
        fetch_types,
        vec![brands_by_type, models_by_brand, variants_by_model],
    )
}
