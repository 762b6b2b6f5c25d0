//! Input handling for keyboard events and mark list keybindings.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::PickerEvent;
