//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of a
//! session. No game logic is performed; this module only translates state
//! into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use arcade_loops::entities::{FlappyState, GameStatus, ShooterState, SnakeState};
use arcade_loops::input::Viewport;
use arcade_loops::session::Session;
use arcade_loops::store::JsonFileStore;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_SNAKE_HEAD: Color = Color::Green;
const C_SNAKE_BODY: Color = Color::DarkGreen;
const C_FOOD: Color = Color::Red;
const C_BIRD: Color = Color::Yellow;
const C_PIPE: Color = Color::Green;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_LASER: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

// ── Playfield sizes (terminal cells) ──────────────────────────────────────────

/// Flappy Bird's 400×600 px field squeezed into the terminal.
const FLAPPY_COLS: u16 = 40;
const FLAPPY_ROWS: u16 = 30;

const SHOOTER_COLS: u16 = 50;
const SHOOTER_ROWS: u16 = 25;

/// Top-left interior cell of every playfield; row 0 is the HUD, row 1 the
/// top border.
const ORIGIN_X: u16 = 1;
const ORIGIN_Y: u16 = 2;

/// Where the shooter playfield sits, for mapping mouse columns.
pub fn shooter_viewport() -> Viewport {
    Viewport {
        left: ORIGIN_X,
        width: SHOOTER_COLS,
    }
}

pub type Live<G> = Session<G, JsonFileStore>;

// ── Public entry points ───────────────────────────────────────────────────────

pub fn render_snake<W: Write>(out: &mut W, session: &Live<SnakeState>) -> std::io::Result<()> {
    let game = session.game();
    let cols = (game.config.grid_width.max(0) as u16) * 2;
    let rows = game.config.grid_height.max(0) as u16;

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out, cols, rows)?;
    draw_hud(out, cols, game.score, session.high_score(), None)?;

    out.queue(style::SetForegroundColor(C_FOOD))?;
    out.queue(cursor::MoveTo(
        ORIGIN_X + game.food.x as u16 * 2,
        ORIGIN_Y + game.food.y as u16,
    ))?;
    out.queue(Print("●"))?;

    for (i, seg) in game.body.iter().enumerate() {
        if seg.x < 0 || seg.y < 0 {
            continue;
        }
        let color = if i == 0 { C_SNAKE_HEAD } else { C_SNAKE_BODY };
        out.queue(style::SetForegroundColor(color))?;
        out.queue(cursor::MoveTo(
            ORIGIN_X + seg.x as u16 * 2,
            ORIGIN_Y + seg.y as u16,
        ))?;
        out.queue(Print("██"))?;
    }

    draw_hint(out, rows, "↑ ↓ ← → : Steer   SPACE : Pause   Q : Menu")?;
    draw_status(out, cols, rows, game.status, game.score, session.high_score())?;
    finish(out, rows)
}

pub fn render_flappy<W: Write>(out: &mut W, session: &Live<FlappyState>) -> std::io::Result<()> {
    let game = session.game();
    let config = &game.config;
    let sx = |x: f32| (x / config.width * FLAPPY_COLS as f32).floor();
    let sy = |y: f32| (y / config.height * FLAPPY_ROWS as f32).floor();

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out, FLAPPY_COLS, FLAPPY_ROWS)?;
    draw_hud(out, FLAPPY_COLS, game.score, session.high_score(), None)?;

    out.queue(style::SetForegroundColor(C_PIPE))?;
    for pipe in &game.pipes {
        let left = sx(pipe.x).max(0.0) as u16;
        let right = (sx(pipe.x + config.pipe_width) as u16).min(FLAPPY_COLS);
        if left >= right {
            continue;
        }
        let gap_top = sy(pipe.gap_top) as u16;
        let gap_bottom = sy(pipe.gap_top + config.pipe_gap) as u16;
        let slab = "█".repeat((right - left) as usize);
        for row in (0..gap_top).chain(gap_bottom..FLAPPY_ROWS) {
            out.queue(cursor::MoveTo(ORIGIN_X + left, ORIGIN_Y + row))?;
            out.queue(Print(&slab))?;
        }
    }

    out.queue(style::SetForegroundColor(C_BIRD))?;
    let bird_col = sx(config.bird_left()) as u16;
    let bird_row = (sy(game.bird.y).max(0.0) as u16).min(FLAPPY_ROWS - 1);
    out.queue(cursor::MoveTo(ORIGIN_X + bird_col, ORIGIN_Y + bird_row))?;
    out.queue(Print(if game.bird.velocity < 0.0 { "^>" } else { "v>" }))?;

    draw_hint(out, FLAPPY_ROWS, "SPACE / click : Flap   P : Pause   Q : Menu")?;
    if game.status == GameStatus::Ready {
        draw_centered(out, FLAPPY_COLS, FLAPPY_ROWS / 2, "Press SPACE to start", Color::White)?;
    }
    draw_status(out, FLAPPY_COLS, FLAPPY_ROWS, game.status, game.score, session.high_score())?;
    finish(out, FLAPPY_ROWS)
}

pub fn render_shooter<W: Write>(out: &mut W, session: &Live<ShooterState>) -> std::io::Result<()> {
    let game = session.game();
    let sx = |x: f32| (x / 100.0 * SHOOTER_COLS as f32).floor().max(0.0) as u16;
    let sy = |y: f32| (y / 100.0 * SHOOTER_ROWS as f32).floor();

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out, SHOOTER_COLS, SHOOTER_ROWS)?;
    let lives = format!("Lives:{}", "♥".repeat(game.lives as usize));
    draw_hud(out, SHOOTER_COLS, game.score, session.high_score(), Some(lives.as_str()))?;

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    for enemy in &game.enemies {
        let row = sy(enemy.y);
        if row < 0.0 || row >= SHOOTER_ROWS as f32 {
            continue;
        }
        out.queue(cursor::MoveTo(ORIGIN_X + sx(enemy.x), ORIGIN_Y + row as u16))?;
        out.queue(Print("«▼»"))?;
    }

    out.queue(style::SetForegroundColor(C_LASER))?;
    for laser in &game.lasers {
        let row = sy(laser.y);
        if row < 0.0 || row >= SHOOTER_ROWS as f32 {
            continue;
        }
        out.queue(cursor::MoveTo(ORIGIN_X + sx(laser.x) + 1, ORIGIN_Y + row as u16))?;
        out.queue(Print("║"))?;
    }

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    let player_row = ORIGIN_Y + SHOOTER_ROWS - 2;
    out.queue(cursor::MoveTo(ORIGIN_X + sx(game.player_x) + 1, player_row))?;
    out.queue(Print("▲"))?;
    out.queue(cursor::MoveTo(ORIGIN_X + sx(game.player_x), player_row + 1))?;
    out.queue(Print("/█\\"))?;

    draw_hint(out, SHOOTER_ROWS, "Mouse / ← → : Move   Click / SPACE : Shoot   Q : Menu")?;
    draw_status(out, SHOOTER_COLS, SHOOTER_ROWS, game.status, game.score, session.high_score())?;
    finish(out, SHOOTER_ROWS)
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, ORIGIN_Y - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, ORIGIN_Y + rows))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in ORIGIN_Y..ORIGIN_Y + rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(ORIGIN_X + cols, row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    cols: u16,
    score: u32,
    high_score: u32,
    right: Option<&str>,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}  Hi:{:>6}", score, high_score)))?;

    if let Some(text) = right {
        let x = (cols + 2).saturating_sub(text.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(x, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
        out.queue(Print(text))?;
    }
    Ok(())
}

fn draw_hint<W: Write>(out: &mut W, rows: u16, hint: &str) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, ORIGIN_Y + rows + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

fn draw_centered<W: Write>(
    out: &mut W,
    cols: u16,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (ORIGIN_X + cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, ORIGIN_Y + row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_status<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    status: GameStatus,
    score: u32,
    high_score: u32,
) -> std::io::Result<()> {
    match status {
        GameStatus::Paused => draw_centered(out, cols, rows / 2, "PAUSED", Color::White),
        GameStatus::Over => draw_game_over(out, cols, rows, score, high_score),
        GameStatus::Ready | GameStatus::Running => Ok(()),
    }
}

fn draw_game_over<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    score: u32,
    high_score: u32,
) -> std::io::Result<()> {
    let new_best = score >= high_score && score > 0;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>6} ★", high_score)
    } else {
        format!("Best Score:  {:>6}", high_score)
    };
    let lines: [(String, Color); 6] = [
        ("╔════════════════════╗".to_string(), Color::Red),
        ("║    GAME  OVER      ║".to_string(), Color::Red),
        ("╚════════════════════╝".to_string(), Color::Red),
        (format!("Final Score: {:>6}", score), Color::Yellow),
        (best_line, if new_best { Color::Yellow } else { Color::DarkGrey }),
        ("R - Play Again  Q - Menu".to_string(), Color::White),
    ];

    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (text, color)) in lines.iter().enumerate() {
        draw_centered(out, cols, start_row + i as u16, text, *color)?;
    }
    Ok(())
}

/// Park cursor in a harmless spot and flush.
fn finish<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, ORIGIN_Y + rows + 2))?;
    out.flush()
}
