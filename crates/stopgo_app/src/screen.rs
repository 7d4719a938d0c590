//! Player screen
//!
//! The parent of the toggle control: it owns the button and the status
//! label and binds the two tap streams to fixed display strings. Bindings
//! live in the screen's subscription set and die with it.

use stopgo_controls::ToggleButton;
use stopgo_core::SubscriptionSet;

use crate::label::StatusLabel;

/// Label text after a play tap.
pub const PLAY_PRESSED_TEXT: &str = "pressed play !";
/// Label text after a stop tap.
pub const STOP_PRESSED_TEXT: &str = "pressed stop !";

pub struct PlayerScreen {
    button: ToggleButton,
    status: StatusLabel,
    _subscriptions: SubscriptionSet,
}

impl PlayerScreen {
    pub fn new() -> Self {
        let button = ToggleButton::default();
        let status = StatusLabel::new();

        let mut subscriptions = SubscriptionSet::new();
        {
            let text = status.text().clone();
            subscriptions.add(
                button
                    .play_tapped()
                    .subscribe(move |_| text.set(PLAY_PRESSED_TEXT.to_owned())),
            );
        }
        {
            let text = status.text().clone();
            subscriptions.add(
                button
                    .stop_tapped()
                    .subscribe(move |_| text.set(STOP_PRESSED_TEXT.to_owned())),
            );
        }

        Self {
            button,
            status,
            _subscriptions: subscriptions,
        }
    }

    pub fn button(&self) -> &ToggleButton {
        &self.button
    }

    pub fn status(&self) -> &StatusLabel {
        &self.status
    }

    /// Current label text.
    pub fn status_text(&self) -> String {
        self.status.current()
    }
}

impl Default for PlayerScreen {
    fn default() -> Self {
        Self::new()
    }
}
