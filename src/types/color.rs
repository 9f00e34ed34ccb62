#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8, a: f32 },
}

/// Resolved 8-bit color with a separate alpha channel, ready for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgb { r, g, b, a }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } | Self::Rgb { a, .. } => *a,
        }
    }

    /// Same color with the alpha channel replaced.
    pub fn with_alpha(self, alpha: f32) -> Self {
        match self {
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a: alpha },
            Self::Rgb { r, g, b, .. } => Self::Rgb { r, g, b, a: alpha },
        }
    }

    pub fn to_rgba(&self) -> Rgba {
        match self {
            Self::Rgb { r, g, b, a } => Rgba::new(*r, *g, *b, *a),
            Self::Oklch { l, c, h, a } => {
                let (r, g, b) = oklch_to_rgb8(*l, *c, *h);
                Rgba::new(r, g, b, *a)
            }
        }
    }
}

fn oklch_to_rgb8(l: f32, c: f32, h: f32) -> (u8, u8, u8) {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    srgb.into_format::<u8>().into_components()
}
