pub mod aggregate;
pub mod form;

pub use aggregate::{Product, CATEGORY_LOOKUP};
pub use form::{DealerAssignment, DealerAssignmentForm, ProductForm, ProductPayload};
