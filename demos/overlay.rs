use std::fs::File;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Instant;

use crossterm::event::{read, Event as CtEvent, KeyCode, KeyEventKind};
use crossterm::terminal;
use modalhost::{
    compositor, Alignment, Color, Element, Event, HostConfig, OverlayEntry, OverlayHost,
    OverlayState,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("overlay.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let sheet = Rc::new(OverlayState::new());
    let dialog = Rc::new(OverlayState::new());

    let mut host = OverlayHost::new();
    host.add(
        OverlayEntry::new(sheet.clone())
            .id("sheet")
            .on_dismiss({
                let sheet = sheet.clone();
                move || sheet.hide()
            })
            .content(|| Element::text("Bottom sheet")),
    );
    host.add(
        OverlayEntry::new(dialog.clone())
            .id("dialog")
            .config(
                HostConfig::new()
                    .content_alignment(Alignment::Center)
                    .background_tint(Color::rgba(0, 0, 0, 0.3)),
            )
            .on_dismiss({
                let dialog = dialog.clone();
                move || dialog.hide()
            })
            .content(|| Element::text("Dialog")),
    );

    terminal::enable_raw_mode()?;
    let result = run(&host, &sheet, &dialog);
    terminal::disable_raw_mode()?;
    result
}

fn run(host: &OverlayHost, sheet: &OverlayState, dialog: &OverlayState) -> io::Result<()> {
    print_frame(host)?;

    loop {
        let raw = read()?;
        if let Some(event) = Event::from_crossterm(&raw) {
            compositor::handle_event(host, &event);
        } else if let CtEvent::Key(key) = raw {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('1') => toggle(sheet),
                    KeyCode::Char('2') => toggle(dialog),
                    _ => {}
                }
            }
        }
        print_frame(host)?;
    }
}

fn toggle(state: &OverlayState) {
    if state.is_visible() {
        state.hide();
    } else {
        state.show();
    }
}

fn print_frame(host: &OverlayHost) -> io::Result<()> {
    let now = Instant::now();
    let params = compositor::layer_params(host, now);
    let (blur, scale) = compositor::background_effects(&params);

    let mut out = io::stdout();
    write!(out, "\r\n[1] sheet  [2] dialog  [esc] back  [q] quit\r\n")?;
    write!(out, "content: blur={blur:.1} scale={scale:.3}\r\n")?;
    for (entry, param) in host.entries().iter().zip(&params) {
        write!(
            out,
            "  {}: ratio={:.2} blur={:.1} scale={:.3} tint_alpha={:.2}\r\n",
            entry.id,
            entry.state.ratio(),
            param.blur,
            param.scale,
            param.tint.alpha(),
        )?;
    }
    out.flush()
}
