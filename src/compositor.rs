use std::time::Instant;

use crate::animation::lerp;
use crate::element::Element;
use crate::entry::OverlayEntry;
use crate::event::Event;
use crate::host::OverlayHost;
use crate::types::Color;

/// Data key under which a scrim element carries its owning entry id.
pub const SCRIM_DATA_KEY: &str = "overlay";

/// Background effect contribution of one entry at its current ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerParams {
    pub blur: f32,
    pub scale: f32,
    pub tint: Color,
}

/// Compute each entry's effect contribution at `now`.
///
/// This is the start of a compose pass: completed animations are committed
/// and every entry's stack index is published back onto its state, equal to
/// its position in the registry.
pub fn layer_params(host: &OverlayHost, now: Instant) -> Vec<LayerParams> {
    host.entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.state.tick(now);
            entry.state.set_index_in_stack(Some(index));
            entry_params(entry, now)
        })
        .collect()
}

fn entry_params(entry: &OverlayEntry, now: Instant) -> LayerParams {
    let ratio = entry.state.ratio_at(now);
    let config = &entry.config;
    LayerParams {
        blur: config.background_blur * ratio,
        scale: lerp(1.0, config.background_scale_ratio, ratio),
        tint: config
            .background_tint
            .with_alpha(config.background_tint.alpha() * ratio),
    }
}

/// Aggregate (blur, scale) over a run of layers: blur radii add, scale
/// factors multiply. Empty input is the identity (0, 1).
pub fn background_effects(params: &[LayerParams]) -> (f32, f32) {
    let blur = params.iter().map(|p| p.blur).sum();
    let scale = params.iter().map(|p| p.scale).product();
    (blur, scale)
}

/// Aggregate effects of the entries above `index`, i.e. what entry
/// `index`'s own layer content receives. An entry never dims itself.
pub fn trailing_effects(params: &[LayerParams], index: usize) -> (f32, f32) {
    background_effects(&params[index + 1..])
}

/// Composite the application content and every registered overlay into a
/// single layered element tree.
///
/// The application content sits at the bottom, under the cumulative effects
/// of the whole stack. Each entry then wraps the next: an outer full-size
/// box carrying the entry's tint, and an inner box carrying the aggregate
/// blur/scale of the entries above it, holding (while visible) a clickable
/// scrim and the entry's content.
pub fn compose(host: &OverlayHost, content: Element, now: Instant) -> Element {
    let params = layer_params(host, now);
    let (blur, scale) = background_effects(&params);
    log::trace!(
        "[compose] {} overlays, content blur={blur:.2} scale={scale:.4}",
        host.len()
    );

    let mut root = Element::stack().id("overlay-root").child(
        Element::stack()
            .id("overlay-content")
            .blur(blur)
            .scale(scale)
            .child(content),
    );
    if let Some(layers) = compose_layers(host.entries(), &params, 0, now) {
        root = root.child(layers);
    }
    root
}

fn compose_layers(
    entries: &[OverlayEntry],
    params: &[LayerParams],
    index: usize,
    now: Instant,
) -> Option<Element> {
    let entry = entries.get(index)?;
    let param = params[index];
    let (blur, scale) = trailing_effects(params, index);

    let mut body = Element::stack()
        .id(format!("overlay-body-{}", entry.id))
        .alignment(entry.config.content_alignment)
        .blur(blur)
        .scale(scale);
    if entry.state.is_visible_at(now) {
        body = body
            .child(
                Element::stack()
                    .id(format!("overlay-scrim-{}", entry.id))
                    .clickable(true)
                    .data(SCRIM_DATA_KEY, entry.id.clone()),
            )
            .child((entry.content)());
    }

    let mut layer = Element::stack()
        .id(format!("overlay-layer-{}", entry.id))
        .background(param.tint)
        .child(body);
    if let Some(next) = compose_layers(entries, params, index + 1, now) {
        layer = layer.child(next);
    }
    Some(layer)
}

/// Dispatch a back-navigation gesture to the topmost visible entry that
/// intercepts it. Visible entries with `dismiss_on_back_press` unset never
/// intercept, so the gesture falls through to the next flagged entry below.
/// Returns whether the gesture was consumed.
pub fn dispatch_back(host: &OverlayHost) -> bool {
    for entry in host.entries().iter().rev() {
        if entry.is_visible() && entry.dismiss_on_back_press {
            log::debug!("[compose] back gesture dismisses {}", entry.id);
            (entry.on_dismiss)();
            return true;
        }
    }
    false
}

/// Dispatch an outside click to the topmost visible entry. Its scrim
/// consumes the click either way; the dismiss callback runs only when
/// `dismiss_on_click_outside` is set. Returns whether the click was
/// consumed.
pub fn dispatch_outside_click(host: &OverlayHost) -> bool {
    for entry in host.entries().iter().rev() {
        if entry.is_visible() {
            if entry.dismiss_on_click_outside {
                log::debug!("[compose] outside click dismisses {}", entry.id);
                (entry.on_dismiss)();
            }
            return true;
        }
    }
    false
}

/// Targeted variant of outside-click dispatch for embedders that hit-test
/// the composed tree themselves: `element` is the scrim the pointer landed
/// on. Returns whether the click was consumed.
pub fn dispatch_scrim_click(host: &OverlayHost, element: &Element) -> bool {
    let Some(id) = element.get_data(SCRIM_DATA_KEY) else {
        return false;
    };
    let Some(entry) = host.get(id) else {
        return false;
    };
    if !entry.is_visible() {
        return false;
    }
    if entry.dismiss_on_click_outside {
        log::debug!("[compose] scrim click dismisses {}", entry.id);
        (entry.on_dismiss)();
    }
    true
}

/// Route a gesture event through the host. Clicks are treated as scrim
/// hits; embedders that run their own hit-testing should call
/// `dispatch_scrim_click` with the hit element instead.
pub fn handle_event(host: &OverlayHost, event: &Event) -> bool {
    match event {
        Event::Back => dispatch_back(host),
        Event::Click { .. } => dispatch_outside_click(host),
        Event::Resize { .. } => false,
    }
}
