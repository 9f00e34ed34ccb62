use std::cell::{Cell, RefCell};
use std::time::Instant;

use crate::animation::{Animatable, AnimationSpec};

/// Animated visibility state of a single overlay.
///
/// The visibility ratio lives in [0, 1]: 0 is fully hidden, 1 fully shown.
/// Intermediate values drive the proportional background effects during
/// show/hide animations. The range is a caller contract; `snap_to` does not
/// clamp.
///
/// All mutation happens on the single UI task, so the state uses interior
/// mutability and is shared between the caller and the registry via `Rc`.
#[derive(Debug)]
pub struct OverlayState {
    ratio: RefCell<Animatable>,
    index_in_stack: Cell<Option<usize>>,
}

/// The two scalars an overlay state reduces to for persistence across
/// process or activity recreation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedOverlayState {
    pub ratio: f32,
    pub index_in_stack: Option<usize>,
}

impl OverlayState {
    /// A fully hidden state.
    pub fn new() -> Self {
        Self::with_ratio(0.0)
    }

    pub fn with_ratio(initial_ratio: f32) -> Self {
        Self {
            ratio: RefCell::new(Animatable::new(initial_ratio)),
            index_in_stack: Cell::new(None),
        }
    }

    pub fn visible(initial_is_visible: bool) -> Self {
        Self::with_ratio(if initial_is_visible { 1.0 } else { 0.0 })
    }

    /// Set the visibility ratio immediately, cancelling any in-flight
    /// animation. `value` must be in [0, 1].
    pub fn snap_to(&self, value: f32) {
        self.ratio.borrow_mut().snap_to(value);
    }

    /// Animate the ratio toward 1 with the default spec.
    pub fn show(&self) {
        self.show_with(AnimationSpec::default());
    }

    pub fn show_with(&self, spec: AnimationSpec) {
        self.ratio.borrow_mut().animate_to(1.0, spec);
    }

    /// Animate the ratio toward 0 with the default spec.
    pub fn hide(&self) {
        self.hide_with(AnimationSpec::default());
    }

    pub fn hide_with(&self, spec: AnimationSpec) {
        self.ratio.borrow_mut().animate_to(0.0, spec);
    }

    /// Instantaneous visibility ratio.
    pub fn ratio(&self) -> f32 {
        self.ratio_at(Instant::now())
    }

    pub fn ratio_at(&self, now: Instant) -> f32 {
        self.ratio.borrow().value_at(now)
    }

    /// True while the ratio is above 0, including mid-animation.
    pub fn is_visible(&self) -> bool {
        self.ratio() > 0.0
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.ratio_at(now) > 0.0
    }

    pub fn is_animating(&self) -> bool {
        self.ratio.borrow().is_animating()
    }

    /// Zero-based position among registered overlays, published by the
    /// compositor on every compose pass. `None` until first composed.
    pub fn index_in_stack(&self) -> Option<usize> {
        self.index_in_stack.get()
    }

    pub(crate) fn set_index_in_stack(&self, index: Option<usize>) {
        self.index_in_stack.set(index);
    }

    pub(crate) fn tick(&self, now: Instant) {
        self.ratio.borrow_mut().tick(now);
    }

    pub fn save(&self) -> SavedOverlayState {
        SavedOverlayState {
            ratio: self.ratio(),
            index_in_stack: self.index_in_stack(),
        }
    }

    pub fn restore(saved: SavedOverlayState) -> Self {
        let state = Self::with_ratio(saved.ratio);
        state.index_in_stack.set(saved.index_in_stack);
        state
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}
