use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::HostConfig;
use crate::element::Element;
use crate::state::OverlayState;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id() -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("overlay-{id}")
}

/// One registered overlay: identity, shared state, presentation config,
/// dismissal behavior, and the content it renders.
///
/// Dismissal gestures only ever invoke `on_dismiss`; the callback decides
/// what happens next (typically calling `hide()` on the state).
pub struct OverlayEntry {
    /// Unique identity within the registry. Generated unless overridden.
    pub id: String,
    pub state: Rc<OverlayState>,
    pub config: HostConfig,
    /// Intercept back-navigation gestures while visible.
    pub dismiss_on_back_press: bool,
    /// Dismiss when the scrim outside the content is clicked.
    pub dismiss_on_click_outside: bool,
    pub on_dismiss: Box<dyn Fn()>,
    pub content: Box<dyn Fn() -> Element>,
}

impl OverlayEntry {
    pub fn new(state: Rc<OverlayState>) -> Self {
        Self {
            id: generate_id(),
            state,
            config: HostConfig::default(),
            dismiss_on_back_press: true,
            dismiss_on_click_outside: true,
            on_dismiss: Box::new(|| {}),
            content: Box::new(Element::stack),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn config(mut self, config: HostConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dismiss_on_back_press(mut self, dismiss: bool) -> Self {
        self.dismiss_on_back_press = dismiss;
        self
    }

    pub fn dismiss_on_click_outside(mut self, dismiss: bool) -> Self {
        self.dismiss_on_click_outside = dismiss;
        self
    }

    pub fn on_dismiss(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_dismiss = Box::new(callback);
        self
    }

    pub fn content(mut self, content: impl Fn() -> Element + 'static) -> Self {
        self.content = Box::new(content);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }
}

impl fmt::Debug for OverlayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayEntry")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("config", &self.config)
            .field("dismiss_on_back_press", &self.dismiss_on_back_press)
            .field("dismiss_on_click_outside", &self.dismiss_on_click_outside)
            .finish_non_exhaustive()
    }
}
