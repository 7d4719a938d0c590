//! stopgo Controls
//!
//! The play/stop toggle button widget, built on `stopgo_core` signals:
//!
//! - **ToggleButton**: the control — press/selection signals in, committed
//!   toggle and discrete play/stop tap events out
//! - **ToggleFsm**: the explicit two-state interaction machine behind it
//! - **ButtonVisual / VisualAssets**: the 2×2 (selected × highlighted)
//!   render-state keying over four named image assets
//! - **ControlArchive**: serialized-UI-state shape; restoring a toggle
//!   button from one is unsupported and fails fast
//!
//! # Example
//!
//! ```rust
//! use stopgo_controls::ToggleButton;
//!
//! let button = ToggleButton::default();
//! let _sub = button.play_tapped().subscribe(|_| println!("play!"));
//!
//! button.press_began(); // toggles at press-down, fires play_tapped
//! button.press_ended();
//! assert!(button.is_selected());
//! ```

pub mod archive;
pub mod fsm;
pub mod toggle_button;
pub mod visual;

pub use archive::{ArchiveError, ControlArchive};
pub use fsm::{Tap, ToggleFsm, ToggleState};
pub use toggle_button::ToggleButton;
pub use visual::{ButtonVisual, ImageAsset, VisualAssets};
