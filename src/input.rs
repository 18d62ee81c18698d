//! Keyboard and game controller input, folded into one button set.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gilrs::{EventType, Gilrs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    PrevLight,
    NextLight,
    Save,
    Quit,
}

pub fn from_key(k: KeyEvent) -> Option<Button> {
    if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') {
        return Some(Button::Quit);
    }
    let b = match k.code {
        KeyCode::Up | KeyCode::Char('k') => Button::Up,
        KeyCode::Down | KeyCode::Char('j') => Button::Down,
        KeyCode::Left | KeyCode::Char('h') => Button::Left,
        KeyCode::Right | KeyCode::Char('l') => Button::Right,
        KeyCode::BackTab | KeyCode::Char('[') => Button::PrevLight,
        KeyCode::Tab | KeyCode::Char(']') => Button::NextLight,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Button::Save
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Button::Quit,
        _ => return None,
    };
    Some(b)
}

pub fn from_pad(b: gilrs::Button) -> Option<Button> {
    use gilrs::Button as Pad;
    let b = match b {
        Pad::DPadUp => Button::Up,
        Pad::DPadDown => Button::Down,
        Pad::DPadLeft => Button::Left,
        Pad::DPadRight => Button::Right,
        Pad::LeftTrigger => Button::PrevLight,
        Pad::RightTrigger => Button::NextLight,
        Pad::South => Button::Save,
        Pad::East => Button::Quit,
        _ => return None,
    };
    Some(b)
}

// ─── Game controller ────────────────────────────────────────────────────────

pub struct Gamepad {
    gilrs: Gilrs,
}

impl Gamepad {
    /// Start the controller subsystem. `None` when it is unavailable; the
    /// editor then runs on the keyboard alone.
    pub fn open() -> Option<Self> {
        let gilrs = match Gilrs::new() {
            Ok(g) => g,
            Err(e) => {
                tracing::warn!(error = %e, "game controller support unavailable");
                return None;
            }
        };

        match gilrs.gamepads().next() {
            Some((_, pad)) => tracing::info!(name = pad.name(), "game controller connected"),
            None => tracing::warn!("no game controller available"),
        }
        Some(Self { gilrs })
    }

    /// Drain pending controller events without blocking.
    pub fn poll(&mut self) -> Vec<Button> {
        let mut pressed = Vec::new();
        while let Some(ev) = self.gilrs.next_event() {
            match ev.event {
                EventType::ButtonPressed(b, _) => pressed.extend(from_pad(b)),
                EventType::Connected => {
                    let pad = self.gilrs.gamepad(ev.id);
                    tracing::info!(name = pad.name(), "game controller connected");
                }
                EventType::Disconnected => tracing::info!("game controller disconnected"),
                _ => {}
            }
        }
        pressed
    }
}
