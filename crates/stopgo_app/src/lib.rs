//! stopgo Player Screen
//!
//! The application-side glue: a screen that owns the play/stop toggle
//! button and a status label, with the tap streams bound to the label.
//!
//! # Example
//!
//! ```rust
//! use stopgo_app::PlayerScreen;
//!
//! let screen = PlayerScreen::new();
//!
//! screen.button().press_began();
//! screen.button().press_ended();
//! assert_eq!(screen.status_text(), "pressed play !");
//! ```

mod label;
mod screen;


pub use label::StatusLabel;
pub use screen::{PlayerScreen, PLAY_PRESSED_TEXT, STOP_PRESSED_TEXT};
