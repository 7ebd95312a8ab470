pub mod api_utils;
pub mod cascade;
pub mod components;
pub mod config;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
