//! Add-product form.
//!
//! - view_model.rs: form state, cascades, reference data and the submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
