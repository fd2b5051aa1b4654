pub mod use_admin_key;
pub mod use_page_config;

pub use use_admin_key::*;
pub use use_page_config::*;
