pub mod a001_category;
pub mod a002_product;
pub mod a003_ticket;
pub mod a004_employee;
pub mod a005_dealer;
pub mod a006_vehicle_catalog;
pub mod reference;
