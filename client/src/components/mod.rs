pub mod auth_form;
pub mod footer;
pub mod header;
pub mod user_auth_form;
