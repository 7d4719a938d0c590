//! Toggle interaction state machine
//!
//! The control has exactly two states, `Play` and `Stop`, and exactly one
//! transition: a press-down edge toggles the state and classifies the tap by
//! the state the control was in *before* the press. Release is not a
//! transition.

/// The two visual states of the control.
///
/// `Play` means the control offers to start playback (not selected);
/// `Stop` means it offers to stop it (selected).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Play,
    Stop,
}

impl ToggleState {
    /// Whether this state renders as "selected".
    pub fn is_selected(self) -> bool {
        matches!(self, ToggleState::Stop)
    }

    pub fn from_selected(selected: bool) -> Self {
        if selected {
            ToggleState::Stop
        } else {
            ToggleState::Play
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ToggleState::Play => ToggleState::Stop,
            ToggleState::Stop => ToggleState::Play,
        }
    }
}

/// A completed tap, classified by the state the control was in when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tap {
    /// Pressed while showing "play".
    Play,
    /// Pressed while showing "stop".
    Stop,
}

/// The toggle machine. One press-down edge, one transition, one tap.
#[derive(Debug)]
pub struct ToggleFsm {
    state: ToggleState,
}

impl ToggleFsm {
    pub fn new(initial: ToggleState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Take the press-down transition.
    ///
    /// Returns the tap classified by the prior state; the machine is in the
    /// toggled state afterwards.
    pub fn press_down(&mut self) -> Tap {
        let tap = match self.state {
            ToggleState::Play => Tap::Play,
            ToggleState::Stop => Tap::Stop,
        };
        self.state = self.state.toggled();
        tap
    }
}

impl Default for ToggleFsm {
    fn default() -> Self {
        Self::new(ToggleState::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_play() {
        let fsm = ToggleFsm::default();
        assert_eq!(fsm.state(), ToggleState::Play);
        assert!(!fsm.state().is_selected());
    }

    #[test]
    fn test_press_classifies_by_prior_state() {
        let mut fsm = ToggleFsm::default();

        assert_eq!(fsm.press_down(), Tap::Play);
        assert_eq!(fsm.state(), ToggleState::Stop);

        assert_eq!(fsm.press_down(), Tap::Stop);
        assert_eq!(fsm.state(), ToggleState::Play);
    }

    #[test]
    fn test_taps_alternate_starting_with_play() {
        let mut fsm = ToggleFsm::default();
        let taps: Vec<Tap> = (0..5).map(|_| fsm.press_down()).collect();
        assert_eq!(
            taps,
            vec![Tap::Play, Tap::Stop, Tap::Play, Tap::Stop, Tap::Play]
        );
    }

    #[test]
    fn test_selected_round_trip() {
        assert_eq!(ToggleState::from_selected(true), ToggleState::Stop);
        assert_eq!(ToggleState::from_selected(false), ToggleState::Play);
        assert!(ToggleState::Stop.is_selected());
    }
}
