mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sharp_shooter::config::ShooterConfig;
use sharp_shooter::controller::GameController;
use sharp_shooter::entities::Key;

use display::TerminalView;

// ── Input mapping ─────────────────────────────────────────────────────────────

enum Command {
    Game(Key),
    Quit,
}

fn command_for(key: &KeyEvent) -> Option<Command> {
    // Press and OS auto-repeat both count; releases never do
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(Command::Game(Key::Space)),
        KeyCode::Up => Some(Command::Game(Key::Up)),
        KeyCode::Down => Some(Command::Game(Key::Down)),
        KeyCode::Left => Some(Command::Game(Key::Left)),
        KeyCode::Right => Some(Command::Game(Key::Right)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file only; the terminal belongs to the game.
fn setup_logging(config: &ShooterConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("creating log directory {}", config.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, "sharp_shooter.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(log_dir = %config.log_dir.display(), "logging initialized");
    Ok(guard)
}

// ── Event loop ────────────────────────────────────────────────────────────────

/// Blocks on input and redraws after each processed event.  Keys pressed
/// during a glide wait in the channel until it has finished.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, config: &ShooterConfig) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (width, height) = terminal::size().context("querying terminal size")?;
    let view = TerminalView::new(out, width, height);
    let mut controller = GameController::new(view, rng, config.step_delay);

    let snap = controller.snapshot();
    controller.presenter_mut().redraw(&snap)?;

    // The reader thread hangs up when the terminal goes away
    while let Ok(ev) = rx.recv() {
        match ev {
            Event::Key(key) => match command_for(&key) {
                Some(Command::Quit) => {
                    tracing::info!("quit requested");
                    break;
                }
                Some(Command::Game(key)) => controller.handle_input(key),
                None => continue,
            },
            Event::Resize(width, height) => controller.presenter_mut().resize(width, height),
            _ => continue,
        }

        let snap = controller.snapshot();
        controller.presenter_mut().redraw(&snap)?;
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = ShooterConfig::from_env();
    let _guard = setup_logging(&config)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the controller thread owns all game state.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                tracing::error!(%err, "terminal event read failed");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}
