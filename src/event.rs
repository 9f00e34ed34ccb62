/// Gestures the host can dispatch to overlay entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Back-navigation / escape gesture.
    Back,
    /// Pointer press at the given cell coordinates.
    Click { x: u16, y: u16 },
    /// Host surface resized.
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Map a raw crossterm event into the host's gesture vocabulary.
    /// Returns `None` for events the host has no interest in.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

        match event {
            CtEvent::Key(key)
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc =>
            {
                Some(Event::Back)
            }
            CtEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Event::Click {
                    x: mouse.column,
                    y: mouse.row,
                }),
                _ => None,
            },
            CtEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}
