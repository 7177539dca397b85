//! Page-level views. Routing lives in the web crate; every page here is a
//! plain component the router mounts.

pub mod assistance_detail;
pub mod donate;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod volunteer_detail;

pub use assistance_detail::AssistanceDetailPage;
pub use donate::DonatePage;
pub use home::Home;
pub use login::Login;
pub use profile::Profile;
pub use register::Register;
pub use volunteer_detail::VolunteerDetail;
