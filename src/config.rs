use crate::types::{Alignment, Color};

/// Per-entry configuration for how an overlay presents itself and dims
/// whatever sits beneath it.
///
/// All four quantities are the values at full visibility; the compositor
/// interpolates each one with the entry's current ratio, so a hidden entry
/// contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostConfig {
    /// Where the overlay content anchors within the host bounds.
    pub content_alignment: Alignment,
    /// Blur radius applied beneath the overlay at ratio 1.
    pub background_blur: f32,
    /// Tint drawn over everything beneath the overlay at ratio 1.
    pub background_tint: Color,
    /// Uniform scale applied beneath the overlay at ratio 1.
    pub background_scale_ratio: f32,
}

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_alignment(mut self, alignment: Alignment) -> Self {
        self.content_alignment = alignment;
        self
    }

    pub fn background_blur(mut self, blur: f32) -> Self {
        self.background_blur = blur;
        self
    }

    pub fn background_tint(mut self, tint: Color) -> Self {
        self.background_tint = tint;
        self
    }

    pub fn background_scale_ratio(mut self, ratio: f32) -> Self {
        self.background_scale_ratio = ratio;
        self
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            content_alignment: Alignment::BottomCenter,
            background_blur: 12.0,
            background_tint: Color::rgba(0, 0, 0, 0.1),
            background_scale_ratio: 0.95,
        }
    }
}
