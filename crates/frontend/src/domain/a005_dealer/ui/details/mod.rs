mod view;
mod view_model;

pub use view::DealerDetails;
pub use view_model::DealerDetailsViewModel;
