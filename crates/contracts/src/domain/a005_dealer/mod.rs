pub mod aggregate;
pub mod form;

pub use aggregate::{Address, ContactPerson, Dealer};
pub use form::{DealerForm, DealerPayload};
