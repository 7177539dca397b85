//! Utility macros and cross-cutting helpers.
//!
//! - **console_macros**: WASM-compatible logging macros for browser console
//!   output, timestamped via `js_sys::Date`.

pub mod console_macros;
