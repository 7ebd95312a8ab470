pub mod aggregate;

pub use aggregate::{Category, Subcategory, VEHICLE_TYPE_LOOKUP};
