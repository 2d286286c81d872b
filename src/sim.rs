use crate::fragments;
use crate::model::{
    Flower, GameState, Scene, Theme, ENDING_THRESHOLD, REVEAL_DEBOUNCE_MS, SPEED_MAX, SPEED_MIN,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerAction {
    Plant(f32, f32),
    SetTheme(Theme),
    SpeedDelta(f32),
    SetSpeed(f32),
    RequestEnd,
    RequestRestart,
    Quit,
}

impl GameState {
    pub(crate) fn apply(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::Plant(x, y) => {
                if self.scene == Scene::Garden {
                    let f = Flower::new(x, y, &mut self.rng);
                    self.garden.flowers.push(f);
                    self.garden.planted += 1;
                }
            }
            PlayerAction::SetTheme(theme) => {
                if self.scene == Scene::Garden {
                    self.garden.theme = theme;
                }
            }
            PlayerAction::SpeedDelta(delta) => {
                self.growth_speed = (self.growth_speed + delta).clamp(SPEED_MIN, SPEED_MAX);
            }
            PlayerAction::SetSpeed(value) => {
                self.growth_speed = value.clamp(SPEED_MIN, SPEED_MAX);
            }
            PlayerAction::RequestEnd => {
                if self.scene == Scene::Garden {
                    self.scene = select_ending(self.garden.planted, self.garden.revealed);
                }
            }
            PlayerAction::RequestRestart => {
                if self.scene != Scene::Garden {
                    self.garden.init(&mut self.rng);
                    self.scene = Scene::Garden;
                }
            }
            // quitting belongs to the app loop, not the session state
            PlayerAction::Quit => {}
        }
    }

    /// One garden frame: advance the frame counter and grow every flower.
    pub(crate) fn tick_garden(&mut self) {
        if self.scene != Scene::Garden {
            return;
        }
        self.garden.frame += 1;
        let frame = self.garden.frame;
        for f in &mut self.garden.flowers {
            f.update(self.growth_speed, frame);
        }
    }

    /// Hover resolution for this frame. Reveals a fresh fragment at most once
    /// per debounce window; inside the window the previous text keeps showing,
    /// even if the pointer slid onto a different flower.
    pub(crate) fn hover_frame(&mut self, px: f32, py: f32, now_ms: u64) -> Option<&'static str> {
        if self.scene != Scene::Garden {
            return None;
        }
        self.garden.hovered_index(px, py)?;

        if now_ms.saturating_sub(self.garden.last_reveal_ms) > REVEAL_DEBOUNCE_MS {
            self.garden.last_fragment = fragments::pick(self.garden.theme, &mut self.rng);
            self.garden.last_reveal_ms = now_ms;
            self.garden.revealed += 1;
        }
        Some(self.garden.last_fragment)
    }
}

/// Evaluated once, at the moment the end action fires.
pub(crate) fn select_ending(planted: u32, revealed: u32) -> Scene {
    if planted >= ENDING_THRESHOLD || revealed >= ENDING_THRESHOLD {
        Scene::EndingB
    } else {
        Scene::EndingA
    }
}
