pub mod aggregate;

pub use aggregate::{Brand, Model, Variant, VehicleType, YearRange};
