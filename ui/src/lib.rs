//! This crate contains all shared UI for the Tweeza community aid app:
//! pages, components, the registration wizard core, and the mock service
//! layer. Routing and launch live in the `web` crate.

pub mod app;
pub mod components;
pub mod data;
pub mod features;
pub mod services;
pub mod utils;
