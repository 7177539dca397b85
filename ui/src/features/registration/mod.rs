//! The registration wizard core: step state machine, field validation,
//! and the in-memory document attachment list.

pub mod attachments;
pub mod logic;
pub mod types;
pub mod validation;

pub use attachments::*;
pub use logic::prepare_submit;
pub use types::*;
