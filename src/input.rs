//! Input adapter: terminal key and mouse events to per-game inputs.
//!
//! Only unmodified key presses are recognised. Legality (no reversing the
//! snake, no shooting after game over) is enforced by the game logic, not
//! here.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::entities::Direction;

/// Columns an arrow key moves the ship, in percent.
pub const NUDGE_STEP: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnakeInput {
    Turn(Direction),
    Pause,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlappyInput {
    Jump,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShooterInput {
    /// Absolute position in percent of the playfield width.
    Steer(f32),
    /// Relative move in percent.
    Nudge(f32),
    Shoot,
}

/// The screen columns the shooter playfield occupies, for turning a mouse
/// column into a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub left: u16,
    pub width: u16,
}

impl Viewport {
    pub fn percent(&self, column: u16) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        let relative = column.saturating_sub(self.left) as f32;
        relative / self.width as f32 * 100.0
    }
}

/// Modifiers that turn a key into a chord we do not recognise. Shift is
/// allowed through since terminals report it on some plain characters.
const CHORD: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SUPER);

/// The key code of an unmodified press, or `None` for anything else.
fn plain_press(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if !modifiers.intersects(CHORD) => Some(*code),
        _ => None,
    }
}

fn is_left_click(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        })
    )
}

pub fn snake_input(event: &Event) -> Option<SnakeInput> {
    match plain_press(event)? {
        KeyCode::Up => Some(SnakeInput::Turn(Direction::Up)),
        KeyCode::Down => Some(SnakeInput::Turn(Direction::Down)),
        KeyCode::Left => Some(SnakeInput::Turn(Direction::Left)),
        KeyCode::Right => Some(SnakeInput::Turn(Direction::Right)),
        KeyCode::Char(' ') => Some(SnakeInput::Pause),
        _ => None,
    }
}

pub fn flappy_input(event: &Event) -> Option<FlappyInput> {
    if is_left_click(event) {
        return Some(FlappyInput::Jump);
    }
    match plain_press(event)? {
        KeyCode::Char(' ') | KeyCode::Up => Some(FlappyInput::Jump),
        _ => None,
    }
}

pub fn shooter_input(event: &Event, viewport: Viewport) -> Option<ShooterInput> {
    if is_left_click(event) {
        return Some(ShooterInput::Shoot);
    }
    if let Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved | MouseEventKind::Drag(_),
        column,
        ..
    }) = event
    {
        return Some(ShooterInput::Steer(viewport.percent(*column)));
    }
    match plain_press(event)? {
        KeyCode::Char(' ') => Some(ShooterInput::Shoot),
        KeyCode::Left => Some(ShooterInput::Nudge(-NUDGE_STEP)),
        KeyCode::Right => Some(ShooterInput::Nudge(NUDGE_STEP)),
        _ => None,
    }
}
