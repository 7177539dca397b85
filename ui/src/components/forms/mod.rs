pub mod admin_account_form;
pub mod document_upload;
pub mod login_form;
pub mod org_verification_form;
pub mod role_selector;
pub mod traveler_form;
pub mod volunteer_form;

pub use admin_account_form::*;
pub use document_upload::*;
pub use login_form::*;
pub use org_verification_form::*;
pub use role_selector::*;
pub use traveler_form::*;
pub use volunteer_form::*;
