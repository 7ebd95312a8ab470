pub mod cascade;
pub mod collation;
pub mod config;
pub mod error;
pub mod list_processor;
pub mod list_query;
pub mod lookup;
pub mod normalize;
pub mod notification;
pub mod select_option;
pub mod validation;
