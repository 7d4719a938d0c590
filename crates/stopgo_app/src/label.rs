//! Status label

use stopgo_core::Signal;
use tracing::debug;

/// A text element whose content is observable.
///
/// The screen writes it; a renderer (or a test) subscribes to the text
/// signal.
pub struct StatusLabel {
    text: Signal<String>,
}

impl StatusLabel {
    pub fn new() -> Self {
        Self {
            text: Signal::named("label-text", String::new()),
        }
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        debug!(%text, "label updated");
        self.text.set(text);
    }

    pub fn current(&self) -> String {
        self.text.get()
    }

    pub fn text(&self) -> &Signal<String> {
        &self.text
    }
}

impl Default for StatusLabel {
    fn default() -> Self {
        Self::new()
    }
}
