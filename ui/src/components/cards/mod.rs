pub mod assistance_card;
pub mod emergency_card;
pub mod event_card;

pub use assistance_card::*;
pub use emergency_card::*;
pub use event_card::*;
