pub mod confirm_dialog;
pub mod filter_panel;
pub mod form_fields;
pub mod pagination_controls;
pub mod table;
