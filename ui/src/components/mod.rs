//! User Interface Components
//!
//! Reusable Dioxus components for the Tweeza front-end:
//!
//! - **cards**: emergency, assistance, and event cards for the browse page
//! - **display**: map panel and other read-only widgets
//! - **forms**: registration wizard forms, document upload, and login
//! - **inputs**: validated input fields and form controls
//! - **layout**: navigation bar and auth tab strip

pub mod cards;
pub mod display;
pub mod forms;
pub mod inputs;
pub mod layout;
