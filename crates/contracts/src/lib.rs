//! Shared contracts for the parts-marketplace operations dashboard.
//!
//! Everything here is framework independent: records exchanged with the
//! remote API, the client-side list processor, the cascading selection
//! resolver, form validation and configuration. The `frontend` crate wires
//! these into Leptos components.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
