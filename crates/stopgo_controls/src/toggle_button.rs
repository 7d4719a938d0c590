//! The play/stop toggle button
//!
//! A two-state pressable control. The platform input layer drives the
//! `highlighted` signal (true while the pointer is down); the control
//! derives everything else: the committed selection, the render state, and
//! the discrete `play_tapped` / `stop_tapped` events a parent binds to.
//!
//! The toggle fires on the press-*down* edge, not on release. That is the
//! contract of the control (selection and visual flip the moment the finger
//! lands) and it does surprise people used to release-triggered buttons;
//! release only clears the pressed visual.

use std::sync::{Arc, Mutex};

use tracing::debug;

use stopgo_core::{EventStream, Signal, SubscriptionSet};

use crate::archive::ControlArchive;
use crate::fsm::{Tap, ToggleFsm, ToggleState};
use crate::visual::{ButtonVisual, ImageAsset, VisualAssets};

/// The play/stop toggle control.
///
/// Owns its observable state and the subscriptions wiring it together; both
/// are released when the control is dropped, so no observer outlives it.
pub struct ToggleButton {
    highlighted: Signal<bool>,
    selected: Signal<bool>,
    visual: Signal<ButtonVisual>,
    committed_toggle: EventStream<bool>,
    play_tapped: EventStream<()>,
    stop_tapped: EventStream<()>,
    assets: VisualAssets,
    _subscriptions: SubscriptionSet,
}

impl ToggleButton {
    /// Archive kind tag for this control.
    pub const KIND: &'static str = "toggle-button";

    pub fn new(assets: VisualAssets) -> Self {
        let highlighted = Signal::named("highlighted", false);
        let selected = Signal::named("selected", false);
        let visual = Signal::named("visual", ButtonVisual::Play);
        let committed_toggle = EventStream::<bool>::named("committed-toggle");
        let play_tapped = EventStream::named("play-tapped");
        let stop_tapped = EventStream::named("stop-tapped");

        // The machine is the single writer of `selected`, so its state and
        // the signal can never disagree; "latest selected" is machine state.
        let fsm = Arc::new(Mutex::new(ToggleFsm::new(ToggleState::Play)));

        let mut subscriptions = SubscriptionSet::new();

        // Toggle pipeline. Registered before the visual observer so the
        // selection bind lands before the render state recomputes for the
        // same press edge.
        {
            let fsm = fsm.clone();
            let selected = selected.clone();
            let committed_toggle = committed_toggle.clone();
            let play_tapped = play_tapped.clone();
            let stop_tapped = stop_tapped.clone();
            subscriptions.add(highlighted.subscribe(move |&down| {
                if !down {
                    return;
                }
                let (tap, next) = {
                    let mut fsm = fsm.lock().unwrap();
                    let tap = fsm.press_down();
                    (tap, fsm.state().is_selected())
                };

                // Selection bind first, then the discrete events, so tap
                // observers read the post-tap selection.
                selected.set(next);
                committed_toggle.emit(next);
                debug!(?tap, selected = next, "toggle tapped");
                match tap {
                    Tap::Play => play_tapped.fire(),
                    Tap::Stop => stop_tapped.fire(),
                }
            }));
        }

        // Render state tracks (selected, highlighted); dedup in the visual
        // signal drops no-op recomputes.
        {
            let visual = visual.clone();
            let highlighted_src = highlighted.clone();
            subscriptions.add(selected.subscribe(move |&sel| {
                visual.set(ButtonVisual::for_state(sel, highlighted_src.get()));
            }));
        }
        {
            let visual = visual.clone();
            let selected_src = selected.clone();
            subscriptions.add(highlighted.subscribe(move |&down| {
                visual.set(ButtonVisual::for_state(selected_src.get(), down));
            }));
        }

        Self {
            highlighted,
            selected,
            visual,
            committed_toggle,
            play_tapped,
            stop_tapped,
            assets,
            _subscriptions: subscriptions,
        }
    }

    /// Restoring from a serialized screen archive is unsupported.
    ///
    /// The control is always constructed programmatically; it has no
    /// meaningful archived representation. This path fails fast.
    pub fn from_archive(archive: &ControlArchive) -> Self {
        panic!(
            "{} cannot be restored from a control archive (kind {:?})",
            Self::KIND,
            archive.kind
        );
    }

    /// Pointer/touch landed on the control.
    pub fn press_began(&self) {
        self.highlighted.set(true);
    }

    /// Pointer/touch lifted.
    pub fn press_ended(&self) {
        self.highlighted.set(false);
    }

    /// True while the pointer is down.
    pub fn highlighted(&self) -> &Signal<bool> {
        &self.highlighted
    }

    /// True while the control shows "stop". Changes only as the synchronous
    /// consequence of a press-down edge.
    pub fn selected(&self) -> &Signal<bool> {
        &self.selected
    }

    /// The current render state.
    pub fn visual(&self) -> &Signal<ButtonVisual> {
        &self.visual
    }

    /// The committed selection value of each press edge, in order.
    pub fn committed_toggle(&self) -> &EventStream<bool> {
        &self.committed_toggle
    }

    /// Fires when a press-down happens while showing "play".
    pub fn play_tapped(&self) -> &EventStream<()> {
        &self.play_tapped
    }

    /// Fires when a press-down happens while showing "stop".
    pub fn stop_tapped(&self) -> &EventStream<()> {
        &self.stop_tapped
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted.get()
    }

    pub fn is_selected(&self) -> bool {
        self.selected.get()
    }

    pub fn assets(&self) -> &VisualAssets {
        &self.assets
    }

    /// The image the control renders right now.
    pub fn current_asset(&self) -> &ImageAsset {
        self.assets.asset_for(self.visual.get())
    }
}

impl Default for ToggleButton {
    fn default() -> Self {
        Self::new(VisualAssets::default())
    }
}
