pub mod auth_tabs;
pub mod navbar;

pub use auth_tabs::*;
pub use navbar::*;
