use crate::entry::OverlayEntry;

/// Ordered registry of mounted overlays.
///
/// Insertion order is visual stacking order: later entries render on top.
/// Registration follows the overlay's mount/unmount lifecycle, not its
/// visibility: a hidden entry stays registered so it can be shown later.
///
/// The host handle is passed explicitly to whatever needs to register or
/// composite overlays; there is no ambient lookup. All mutation happens on
/// the single UI task.
#[derive(Debug, Default)]
pub struct OverlayHost {
    entries: Vec<OverlayEntry>,
}

impl OverlayHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless one with the same id is already registered.
    /// Duplicate adds are silently ignored.
    pub fn add(&mut self, entry: OverlayEntry) {
        if self.entries.iter().any(|e| e.id == entry.id) {
            log::debug!("[host] ignoring duplicate overlay {}", entry.id);
            return;
        }
        log::debug!(
            "[host] registered overlay {} at index {}",
            entry.id,
            self.entries.len()
        );
        self.entries.push(entry);
    }

    /// Remove the entry with the given id. No-op when absent.
    pub fn remove(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() < before {
            log::debug!("[host] unregistered overlay {id}");
        }
    }

    /// Registered entries in stacking order (first = bottom).
    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&OverlayEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
