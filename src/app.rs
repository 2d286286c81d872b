use crate::config::{load_settings, project_paths, save_settings_atomic, Settings};
use crate::input::{collect_input_nonblocking, map_key_to_action, InputEvent};
use crate::model::{GameState, Scene};
use crate::render::{
    background_rows, canvas_to_cells, dim_color, draw_bubble, draw_dust, draw_ending, draw_flower,
    draw_hud, hud_layout, slider_value_at, HudLayout, Terminal, WorldView, ENDING_DIM_ALPHA,
};
use crate::sim::PlayerAction;
use crate::Args;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

pub(crate) struct App {
    settings: Settings,
    paths: crate::config::Paths,
    state: GameState,
    term: Terminal,
    pointer: Option<(u16, u16)>,
    anim_frame: u64,
    should_quit: bool,
    started: Instant,
}

impl App {
    fn init(args: &Args) -> anyhow::Result<Self> {
        let paths = project_paths()?;
        let mut settings = load_settings(&paths.settings_path);

        if let Some(seed) = args.seed {
            settings.seed = seed;
        }
        if let Some(fps) = args.fps {
            settings.fps_cap = fps;
        }
        if args.no_color {
            settings.enable_color = false;
        }

        let seed = if settings.seed == 0 {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0xC0FFEE)
        } else {
            settings.seed
        };

        let state = GameState::new(seed);
        let term = Terminal::begin()?;

        Ok(Self {
            settings,
            paths,
            state,
            term,
            pointer: None,
            anim_frame: 0,
            should_quit: false,
            started: Instant::now(),
        })
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let fps = self.settings.fps_cap.clamp(10, 240);
        let frame_dt = Duration::from_secs_f32(1.0 / fps as f32);
        let layout = hud_layout();
        let mut last_present = Instant::now();

        while !self.should_quit {
            self.term.resize_if_needed()?;

            for ev in collect_input_nonblocking(frame_dt)? {
                match ev {
                    InputEvent::Key(code) => {
                        if let Some(action) = map_key_to_action(self.state.scene, code) {
                            if matches!(action, PlayerAction::Quit) {
                                self.should_quit = true;
                                break;
                            }
                            self.state.apply(action);
                        }
                    }
                    InputEvent::MouseMove { col, row } => {
                        self.pointer = Some((col, row));
                    }
                    InputEvent::MouseDrag { col, row } => {
                        self.pointer = Some((col, row));
                        if self.state.scene == Scene::Garden && layout.slider.contains(col, row) {
                            self.state
                                .apply(PlayerAction::SetSpeed(slider_value_at(&layout, col)));
                        }
                    }
                    InputEvent::MouseDown { col, row } => {
                        self.pointer = Some((col, row));
                        if let Some(action) = self.route_press(col, row, &layout) {
                            self.state.apply(action);
                        }
                    }
                }
            }

            self.anim_frame += 1;
            self.state.tick_garden();

            let now_ms = self.started.elapsed().as_millis() as u64;
            let hover = match self.pointer {
                Some((col, row)) if self.state.scene == Scene::Garden => {
                    let view = WorldView::new(self.term.canvas.w, self.term.canvas.h);
                    let (wx, wy) = view.cell_to_world(col, row);
                    self.state.hover_frame(wx, wy, now_ms)
                }
                _ => None,
            };

            self.render_frame(hover, &layout)?;

            // frame cap
            let elapsed = last_present.elapsed();
            if elapsed < frame_dt {
                std::thread::sleep(frame_dt - elapsed);
            }
            last_present = Instant::now();
        }

        self.term.end()?;
        save_settings_atomic(&self.paths.settings_path, &self.settings)?;
        Ok(())
    }

    /// Mouse presses are contextual: HUD controls first, then the soil.
    fn route_press(&self, col: u16, row: u16, layout: &HudLayout) -> Option<PlayerAction> {
        match self.state.scene {
            Scene::Garden => {
                if layout.btn_end.contains(col, row) {
                    Some(PlayerAction::RequestEnd)
                } else if layout.slider.contains(col, row) {
                    Some(PlayerAction::SetSpeed(slider_value_at(layout, col)))
                } else {
                    let view = WorldView::new(self.term.canvas.w, self.term.canvas.h);
                    let (wx, wy) = view.cell_to_world(col, row);
                    Some(PlayerAction::Plant(wx, wy))
                }
            }
            Scene::EndingA | Scene::EndingB => layout
                .btn_restart
                .contains(col, row)
                .then_some(PlayerAction::RequestRestart),
        }
    }

    fn render_frame(
        &mut self,
        hover: Option<&'static str>,
        layout: &HudLayout,
    ) -> anyhow::Result<()> {
        let mut row_bg = background_rows(self.term.rows, self.anim_frame, self.settings.enable_color);

        self.term.canvas.clear();
        draw_dust(&mut self.term.canvas, self.anim_frame);

        let view = WorldView::new(self.term.canvas.w, self.term.canvas.h);
        for f in &self.state.garden.flowers {
            draw_flower(&mut self.term.canvas, &view, f);
        }

        let ending = self.state.scene != Scene::Garden;
        if ending {
            self.term.canvas.dim(ENDING_DIM_ALPHA);
            for c in &mut row_bg {
                *c = dim_color(*c);
            }
        }

        canvas_to_cells(
            &self.term.canvas,
            &mut self.term.cur,
            self.settings.enable_color,
            &row_bg,
        );

        if ending {
            draw_ending(&mut self.term.cur, self.state.scene, layout);
        } else {
            draw_hud(
                &mut self.term.cur,
                &self.state.garden,
                self.state.growth_speed,
                layout,
            );
            if let (Some(text), Some((col, row))) = (hover, self.pointer) {
                draw_bubble(&mut self.term.cur, text, col, row);
            }
        }

        self.term.present(true)?;
        Ok(())
    }
}

pub(crate) fn run(args: &Args) -> anyhow::Result<()> {
    let mut app = App::init(args)?;
    app.run()?;
    Ok(())
}
