use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::presenter::Ack;

/// Canonical movement directions on the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit `(dx, dy)` step; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Directional keys currently held down.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    /// Builds a set with exactly one key held.
    #[must_use]
    pub fn only(direction: Direction) -> Self {
        let mut held = Self::default();
        held.set(direction, true);
        held
    }

    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// Derives this tick's direction from the held keys.
    ///
    /// Left wins over Right, Right over Up, Up over Down. Opposite keys are not
    /// filtered against the current heading.
    #[must_use]
    pub fn resolve(self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Input sampled once per tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InputFrame {
    pub held: HeldKeys,
    pub quit: bool,
}

/// Meaning of a single key event.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KeyAction {
    Steer(Direction),
    Quit,
    Other,
}

/// Maps a key event onto a game action.
#[must_use]
pub fn classify_key(key: &KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a' | 'A') => KeyAction::Steer(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => KeyAction::Steer(Direction::Right),
        KeyCode::Up | KeyCode::Char('w' | 'W') => KeyAction::Steer(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => KeyAction::Steer(Direction::Down),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => KeyAction::Quit,
        _ => KeyAction::Other,
    }
}

/// Tracks held directional keys across crossterm events.
///
/// Terminals that report key releases keep an exact held set. Elsewhere every
/// key pressed since the previous poll counts as held for one tick, which the
/// terminal's auto-repeat keeps alive while a key stays down.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: HeldKeys,
    reports_release: bool,
}

impl InputHandler {
    #[must_use]
    pub fn new(reports_release: bool) -> Self {
        Self {
            held: HeldKeys::default(),
            reports_release,
        }
    }

    /// Drains pending events without blocking and returns this tick's input.
    pub fn poll_frame(&mut self) -> io::Result<InputFrame> {
        if !self.reports_release {
            self.held = HeldKeys::default();
        }

        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            quit |= self.apply_event(&event::read()?);
        }

        Ok(InputFrame {
            held: self.held,
            quit,
        })
    }

    /// Folds one event into the held set. Returns true on a quit request.
    pub fn apply_event(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        match (classify_key(key), key.kind) {
            (KeyAction::Quit, KeyEventKind::Press) => true,
            (KeyAction::Steer(direction), KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.held.set(direction, true);
                false
            }
            (KeyAction::Steer(direction), KeyEventKind::Release) => {
                self.held.set(direction, false);
                false
            }
            _ => false,
        }
    }

    /// Discards queued events, then blocks until one key press arrives.
    pub fn wait_for_key(&mut self) -> io::Result<Ack> {
        while event::poll(Duration::ZERO)? {
            let _ = event::read()?;
        }

        let ack = loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                break match classify_key(&key) {
                    KeyAction::Quit => Ack::Quit,
                    _ => Ack::Continue,
                };
            }
        };

        self.held = HeldKeys::default();
        Ok(ack)
    }

    #[must_use]
    pub fn held(&self) -> HeldKeys {
        self.held
    }
}
