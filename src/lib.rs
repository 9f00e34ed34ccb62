pub mod animation;
pub mod compositor;
pub mod config;
pub mod element;
pub mod entry;
pub mod event;
pub mod host;
pub mod state;
pub mod types;

pub use animation::{Animatable, AnimationSpec, Easing, DEFAULT_ANIM_DURATION};
pub use compositor::{compose, LayerParams};
pub use config::HostConfig;
pub use element::{Content, Element};
pub use entry::OverlayEntry;
pub use event::Event;
pub use host::OverlayHost;
pub use state::{OverlayState, SavedOverlayState};
pub use types::*;
