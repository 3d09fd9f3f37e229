//! Streaming Demo: a simulated agent streaming Markdown into the view.
//!
//! A producer thread pushes word-sized chunks through a `ChunkWriter`
//! while the main loop pumps the view and presents it.
//!
//! Keys: `q`/Esc quit, `f` finish the stream, `r` reset, Up/Down scroll.

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use driftmark::{MarkdownView, Presenter};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

const SAMPLE_TEXT: &str = r"# Driftmark

Streaming Markdown, rendered **as it arrives** — no re-parsing of what is
already on screen.

## How it works

1. A transport pushes text fragments into the capture inbox
2. The view pumps the inbox and feeds the engine, in order, exactly once
3. Finalized blocks never change; only the open tail is re-rendered

```rust
let mut view = MarkdownView::new();
let writer = view.writer();
view.attach();
writer.push_text(token);
view.pump();
```

> Scroll up while this streams: the view will not yank you back down
> until you are near the bottom again.

---

Settled output above the last blank line is *finalized*; the paragraph
still being typed is the provisional tail. That split is what keeps
incremental rendering cheap at hundreds of tokens per second.
";

fn init_logging() -> io::Result<()> {
    if std::env::var_os("DRIFTMARK_LOG").is_some() {
        let file = std::fs::File::create("driftmark-demo.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn run(view: &mut MarkdownView) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let content_rows = height.saturating_sub(1);
    view.set_viewport(width as usize, content_rows as usize);

    let writer = view.writer();
    std::thread::spawn(move || {
        for token in SAMPLE_TEXT.split_inclusive(' ') {
            writer.push_text(token);
            std::thread::sleep(Duration::from_millis(20));
        }
    });

    view.attach();

    let mut presenter = Presenter::new(io::stdout());
    loop {
        view.pump();
        presenter.draw(view.surface())?;

        let mut stdout = io::stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, content_rows),
            terminal::Clear(terminal::ClearType::UntilNewLine),
            Print("q quit | f finish | r reset | ↑/↓ scroll"),
        )?;
        stdout.flush()?;

        if !event::poll(Duration::from_millis(10))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('f') => view.finish(),
                KeyCode::Char('r') => view.reset(),
                KeyCode::Up => view.scroll_up(1),
                KeyCode::Down => view.scroll_down(1),
                _ => {}
            },
            Event::Resize(cols, rows) => {
                view.set_viewport(cols as usize, rows.saturating_sub(1) as usize);
            }
            _ => {}
        }
    }

    Ok(())
}

fn main() -> io::Result<()> {
    init_logging()?;

    let mut view = MarkdownView::new();

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut view);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
