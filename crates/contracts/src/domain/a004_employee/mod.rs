pub mod aggregate;
pub mod form;

pub use aggregate::Employee;
pub use form::{EmployeeForm, EmployeePayload};
