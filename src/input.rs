use crate::model::{Scene, Theme};
use crate::sim::PlayerAction;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub(crate) enum InputEvent {
    Key(KeyCode),
    MouseDown { col: u16, row: u16 },
    MouseDrag { col: u16, row: u16 },
    MouseMove { col: u16, row: u16 },
}

/// Drain whatever the terminal has queued without blocking the frame.
pub(crate) fn collect_input_nonblocking(
    max_frame_time: Duration,
) -> anyhow::Result<Vec<InputEvent>> {
    let mut out = Vec::new();

    // poll with a tiny timeout so we stay responsive
    let timeout = std::cmp::min(Duration::from_millis(1), max_frame_time);
    while event::poll(timeout)? {
        match event::read()? {
            Event::Key(k) => {
                if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                    out.push(InputEvent::Key(k.code));
                }
            }
            Event::Mouse(m) => match m.kind {
                MouseEventKind::Down(MouseButton::Left) => out.push(InputEvent::MouseDown {
                    col: m.column,
                    row: m.row,
                }),
                MouseEventKind::Drag(MouseButton::Left) => out.push(InputEvent::MouseDrag {
                    col: m.column,
                    row: m.row,
                }),
                MouseEventKind::Moved => out.push(InputEvent::MouseMove {
                    col: m.column,
                    row: m.row,
                }),
                _ => {}
            },
            _ => {}
        }
        if out.len() >= 64 {
            break;
        }
    }
    Ok(out)
}

/// Keyboard side of the controls. Mouse presses are routed by the app loop
/// because they need the HUD layout; both paths end in the same actions.
pub(crate) fn map_key_to_action(scene: Scene, key: KeyCode) -> Option<PlayerAction> {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Some(PlayerAction::Quit);
    }

    match scene {
        Scene::Garden => match key {
            KeyCode::Char('1') => Some(PlayerAction::SetTheme(Theme::Sight)),
            KeyCode::Char('2') => Some(PlayerAction::SetTheme(Theme::Sound)),
            KeyCode::Char('3') => Some(PlayerAction::SetTheme(Theme::Smell)),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(PlayerAction::SetTheme(Theme::Mixed)),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(PlayerAction::RequestEnd),
            KeyCode::Char('-') => Some(PlayerAction::SpeedDelta(-0.1)),
            KeyCode::Char('=') | KeyCode::Char('+') => Some(PlayerAction::SpeedDelta(0.1)),
            _ => None,
        },
        Scene::EndingA | Scene::EndingB => match key {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerAction::RequestRestart),
            _ => None,
        },
    }
}
