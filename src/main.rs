mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::ThreadRng;
use rand::thread_rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use arcade_loops::compute::{flappy, shooter, snake};
use arcade_loops::config::{self, ArcadeConfig, CONFIG_FILE};
use arcade_loops::input;
use arcade_loops::session::{Game, Session};
use arcade_loops::store::{HighScores, JsonFileStore, SCORES_FILE};

const FRAME: Duration = Duration::from_millis(50); // 20 FPS
const LOG_FILE: &str = "arcade.log";

// ── Setup ─────────────────────────────────────────────────────────────────────

/// `~/.arcade/`, or the working directory when there is no usable home.
fn data_dir() -> PathBuf {
    config::data_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Log to a file; the terminal belongs to the game.
fn init_logging(dir: &Path) {
    let Ok(file) = File::options().create(true).append(true).open(dir.join(LOG_FILE)) else {
        return;
    };
    let filter = EnvFilter::try_from_env("ARCADE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

fn load_config(dir: &Path) -> ArcadeConfig {
    ArcadeConfig::load(&dir.join(CONFIG_FILE)).unwrap_or_else(|e| {
        warn!(error = %e, "bad config, using defaults");
        ArcadeConfig::default()
    })
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Snake,
    Flappy,
    Shooter,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    scores_path: &Path,
) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  ARCADE  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(5),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let scores = HighScores::new(JsonFileStore::open(scores_path));
    let best = |key: &str| scores.read(key).unwrap_or(0);
    let options: [(&str, &str, Color, u32); 3] = [
        ("1", "Snake        ", Color::Green, best(snake_key())),
        ("2", "Flappy Bird  ", Color::Yellow, best(flappy_key())),
        ("3", "Space Shooter", Color::Red, best(shooter_key())),
    ];

    for (i, (key, label, color, high)) in options.iter().enumerate() {
        let row = cy.saturating_sub(2) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(14), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(label))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("  best {:>5}", high)))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(14), cy + 2))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("Q : Quit"))?;
    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        let Ok(event) = rx.recv() else {
            return Ok(MenuResult::Quit);
        };
        if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) = event {
            match code {
                KeyCode::Char('1') => return Ok(MenuResult::Snake),
                KeyCode::Char('2') => return Ok(MenuResult::Flappy),
                KeyCode::Char('3') => return Ok(MenuResult::Shooter),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

fn snake_key() -> &'static str {
    <arcade_loops::entities::SnakeState as Game>::HIGH_SCORE_KEY
}

fn flappy_key() -> &'static str {
    <arcade_loops::entities::FlappyState as Game>::HIGH_SCORE_KEY
}

fn shooter_key() -> &'static str {
    <arcade_loops::entities::ShooterState as Game>::HIGH_SCORE_KEY
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum Exit {
    Menu,
    Quit,
}

/// Drive one session until the player leaves.
///
/// Each frame drains every pending event, lets the session tick if its
/// loop driver says a tick is due, then renders. Input is applied the moment
/// it is read and shows up on the next tick.
fn game_loop<W, G, M, D>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    session: &mut display::Live<G>,
    rng: &mut ThreadRng,
    map: M,
    draw: D,
) -> std::io::Result<Exit>
where
    W: Write,
    G: Game,
    M: Fn(&Event) -> Option<G::Input>,
    D: Fn(&mut W, &display::Live<G>) -> std::io::Result<()>,
{
    session.start(Instant::now());

    loop {
        let frame_start = Instant::now();

        while let Ok(event) = rx.try_recv() {
            if let Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. }) = event {
                match code {
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        session.stop();
                        return Ok(Exit::Quit);
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        session.stop();
                        return Ok(Exit::Menu);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') if session.game().status().is_over() => {
                        session.reset(rng);
                        session.start(Instant::now());
                        continue;
                    }
                    KeyCode::Char('p') | KeyCode::Char('P') => {
                        session.toggle_pause();
                        continue;
                    }
                    _ => {}
                }
            }
            if let Some(input) = map(&event) {
                session.input(input, rng);
            }
        }

        session.pump(Instant::now(), rng);
        draw(out, session)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let dir = data_dir();
    init_logging(&dir);
    let config = load_config(&dir);
    info!(dir = %dir.display(), "arcade starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config, &dir.join(SCORES_FILE));

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        warn!(error = %e, "terminal error");
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &ArcadeConfig,
    scores_path: &Path,
) -> std::io::Result<()> {
    let mut rng = thread_rng();

    loop {
        let exit = match show_menu(out, rx, scores_path)? {
            MenuResult::Quit => break,
            MenuResult::Snake => {
                let game = snake::init_state(config.snake.clone(), &mut rng);
                let mut session = Session::new(game, JsonFileStore::open(scores_path));
                game_loop(out, rx, &mut session, &mut rng, input::snake_input, display::render_snake)?
            }
            MenuResult::Flappy => {
                let game = flappy::init_state(config.flappy.clone());
                let mut session = Session::new(game, JsonFileStore::open(scores_path));
                game_loop(out, rx, &mut session, &mut rng, input::flappy_input, display::render_flappy)?
            }
            MenuResult::Shooter => {
                let game = shooter::init_state(config.shooter.clone());
                let mut session = Session::new(game, JsonFileStore::open(scores_path));
                let viewport = display::shooter_viewport();
                game_loop(
                    out,
                    rx,
                    &mut session,
                    &mut rng,
                    |event: &Event| input::shooter_input(event, viewport),
                    display::render_shooter,
                )?
            }
        };
        if let Exit::Quit = exit {
            break;
        }
    }
    Ok(())
}
