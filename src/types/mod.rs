mod color;
mod enums;

pub use color::{Color, Rgba};
pub use enums::Alignment;
