//! Visual state and image assets
//!
//! The control renders one of four static images, keyed by the 2×2 cross
//! product of (selected, highlighted). Asset loading itself is the
//! platform's business; the control only resolves names.

/// The four render states of the control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVisual {
    #[default]
    Play,
    PlayPressed,
    Stop,
    StopPressed,
}

impl ButtonVisual {
    /// Resolve the render state for a (selected, highlighted) pair.
    pub fn for_state(selected: bool, highlighted: bool) -> Self {
        match (selected, highlighted) {
            (false, false) => ButtonVisual::Play,
            (false, true) => ButtonVisual::PlayPressed,
            (true, false) => ButtonVisual::Stop,
            (true, true) => ButtonVisual::StopPressed,
        }
    }
}

/// A named static image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    name: String,
}

impl ImageAsset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The asset table of the control, one image per render state.
#[derive(Clone, Debug)]
pub struct VisualAssets {
    pub play: ImageAsset,
    pub play_pressed: ImageAsset,
    pub stop: ImageAsset,
    pub stop_pressed: ImageAsset,
}

impl VisualAssets {
    pub fn asset_for(&self, visual: ButtonVisual) -> &ImageAsset {
        match visual {
            ButtonVisual::Play => &self.play,
            ButtonVisual::PlayPressed => &self.play_pressed,
            ButtonVisual::Stop => &self.stop,
            ButtonVisual::StopPressed => &self.stop_pressed,
        }
    }
}

impl Default for VisualAssets {
    fn default() -> Self {
        Self {
            play: ImageAsset::new("play"),
            play_pressed: ImageAsset::new("play-pressed"),
            stop: ImageAsset::new("stop"),
            stop_pressed: ImageAsset::new("stop-pressed"),
        }
    }
}
