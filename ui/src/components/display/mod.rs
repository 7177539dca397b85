pub mod map_panel;

pub use map_panel::*;
