use crate::model::{Flower, GardenState, Scene, SPEED_MAX, SPEED_MIN, WORLD_H, WORLD_W};
use crate::noise::{value_noise1, value_noise2};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::f32::consts::TAU;
use std::io::{self, Write};

const DUST_SPECKS: u32 = 120;
pub(crate) const ENDING_DIM_ALPHA: u8 = 180;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Color,
    pub(crate) bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::White,
            bg: Color::Black,
        }
    }
}

pub(crate) struct CellBuffer {
    pub(crate) w: u16,
    pub(crate) h: u16,
    pub(crate) cells: Vec<Cell>,
}

impl CellBuffer {
    pub(crate) fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }

    pub(crate) fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }

    pub(crate) fn set(&mut self, x: u16, y: u16, c: Cell) {
        if x < self.w && y < self.h {
            let i = self.idx(x, y);
            self.cells[i] = c;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Pixel {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

pub(crate) struct PixelCanvas {
    pub(crate) w: u32,
    pub(crate) h: u32,
    pub(crate) px: Vec<Pixel>,
}

impl PixelCanvas {
    pub(crate) fn new(w: u32, h: u32) -> Self {
        Self {
            w,
            h,
            px: vec![Pixel::default(); (w as usize) * (h as usize)],
        }
    }

    pub(crate) fn idx(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }

    pub(crate) fn clear(&mut self) {
        self.px.fill(Pixel::default());
    }

    /// Source-over alpha blend of one pixel; off-canvas writes are dropped.
    pub(crate) fn blend_over(&mut self, x: i32, y: i32, src: Pixel) {
        if x < 0 || y < 0 || x as u32 >= self.w || y as u32 >= self.h {
            return;
        }
        let i = self.idx(x as u32, y as u32);
        let dst = self.px[i];

        let sa = src.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 1e-6 {
            self.px[i] = Pixel::default();
            return;
        }

        let ch = |s: u8, d: u8| -> u8 {
            let s = s as f32 / 255.0;
            let d = d as f32 / 255.0;
            let out = (s * sa + d * da * (1.0 - sa)) / out_a;
            (out.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
        };

        self.px[i] = Pixel {
            r: ch(src.r, dst.r),
            g: ch(src.g, dst.g),
            b: ch(src.b, dst.b),
            a: (out_a.clamp(0.0, 1.0) * 255.0 + 0.5) as u8,
        };
    }

    /// Darken everything in place, as if a translucent black sheet were laid
    /// over the canvas.
    pub(crate) fn dim(&mut self, alpha: u8) {
        let keep = (255 - alpha) as u16;
        for p in &mut self.px {
            p.r = (p.r as u16 * keep / 255) as u8;
            p.g = (p.g as u16 * keep / 255) as u8;
            p.b = (p.b as u16 * keep / 255) as u8;
        }
    }
}

/* -----------------------------
   Terminal surface
------------------------------ */

pub(crate) struct Terminal {
    pub(crate) out: io::Stdout,
    pub(crate) cols: u16,
    pub(crate) rows: u16,
    pub(crate) prev: CellBuffer,
    pub(crate) cur: CellBuffer,
    pub(crate) canvas: PixelCanvas,
}

impl Terminal {
    pub(crate) fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            DisableLineWrap,
            Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;

        let (cols, rows) = terminal::size()?;
        let prev = CellBuffer::new(cols, rows);
        let cur = CellBuffer::new(cols, rows);

        // braille: 2×4 subpixels per cell
        let canvas = PixelCanvas::new(cols as u32 * 2, rows as u32 * 4);

        Ok(Self {
            out,
            cols,
            rows,
            prev,
            cur,
            canvas,
        })
    }

    pub(crate) fn end(&mut self) -> anyhow::Result<()> {
        queue!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub(crate) fn resize_if_needed(&mut self) -> anyhow::Result<bool> {
        let (c, r) = terminal::size()?;
        if c == self.cols && r == self.rows {
            return Ok(false);
        }
        self.cols = c;
        self.rows = r;
        self.prev = CellBuffer::new(c, r);
        self.cur = CellBuffer::new(c, r);
        self.canvas = PixelCanvas::new(c as u32 * 2, r as u32 * 4);
        execute!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(true)
    }

    pub(crate) fn present(&mut self, diff_only: bool) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        let mut last_fg = None;
        let mut last_bg = None;

        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = self.cur.idx(x, y);
                let c = self.cur.cells[i];
                if diff_only && c == self.prev.cells[i] {
                    continue;
                }

                queue!(self.out, cursor::MoveTo(x, y))?;
                if last_fg != Some(c.fg) {
                    queue!(self.out, SetForegroundColor(c.fg))?;
                    last_fg = Some(c.fg);
                }
                if last_bg != Some(c.bg) {
                    queue!(self.out, SetBackgroundColor(c.bg))?;
                    last_bg = Some(c.bg);
                }
                queue!(self.out, Print(c.ch))?;
            }
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.prev.cells.copy_from_slice(&self.cur.cells);
        Ok(())
    }
}

/* -----------------------------
   Braille encoding: 2×4 subpixels -> U+2800..U+28FF
------------------------------ */

fn braille_bit(dx: u32, dy: u32) -> u8 {
    // Dot mapping:
    // (0,0)=1 (0,1)=2 (0,2)=4 (0,3)=64
    // (1,0)=8 (1,1)=16 (1,2)=32 (1,3)=128
    match (dx, dy) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0x00,
    }
}

pub(crate) fn canvas_to_cells(
    canvas: &PixelCanvas,
    out: &mut CellBuffer,
    enable_color: bool,
    row_bg: &[Color],
) {
    let cols = out.w as u32;
    let rows = out.h as u32;

    for cy in 0..rows {
        let bg = row_bg.get(cy as usize).copied().unwrap_or(Color::Black);

        for cx in 0..cols {
            let px0 = cx * 2;
            let py0 = cy * 4;

            let mut mask: u8 = 0;
            let mut sum_r: u32 = 0;
            let mut sum_g: u32 = 0;
            let mut sum_b: u32 = 0;
            let mut ink: u32 = 0;

            for dy in 0..4 {
                for dx in 0..2 {
                    let x = px0 + dx;
                    let y = py0 + dy;
                    if x >= canvas.w || y >= canvas.h {
                        continue;
                    }
                    let p = canvas.px[canvas.idx(x, y)];
                    // alpha is ink
                    if p.a >= 32 {
                        mask |= braille_bit(dx, dy);
                        sum_r += p.r as u32;
                        sum_g += p.g as u32;
                        sum_b += p.b as u32;
                        ink += 1;
                    }
                }
            }

            let ch = char::from_u32(0x2800 + mask as u32).unwrap_or(' ');
            let fg = if enable_color && ink > 0 {
                Color::Rgb {
                    r: (sum_r / ink) as u8,
                    g: (sum_g / ink) as u8,
                    b: (sum_b / ink) as u8,
                }
            } else {
                Color::White
            };

            out.set(cx as u16, cy as u16, Cell { ch, fg, bg });
        }
    }
}

/* -----------------------------
   World mapping
------------------------------ */

// The garden's 960×540 world stretched over the subpixel canvas, each axis
// independently, the same way the original stretched over the window.
pub(crate) struct WorldView {
    sx: f32,
    sy: f32,
}

impl WorldView {
    pub(crate) fn new(canvas_w: u32, canvas_h: u32) -> Self {
        Self {
            sx: (canvas_w as f32).max(2.0) / WORLD_W,
            sy: (canvas_h as f32).max(2.0) / WORLD_H,
        }
    }

    fn to_px(&self, wx: f32, wy: f32) -> (i32, i32) {
        ((wx * self.sx).round() as i32, (wy * self.sy).round() as i32)
    }

    /// World position under the middle of a terminal cell.
    pub(crate) fn cell_to_world(&self, col: u16, row: u16) -> (f32, f32) {
        let px = col as f32 * 2.0 + 1.0;
        let py = row as f32 * 4.0 + 2.0;
        (px / self.sx, py / self.sy)
    }
}

/* -----------------------------
   Garden drawing
------------------------------ */

/// Per-row background colors: a slow vertical noise gradient in near-black
/// blue-grey, drifting with time.
pub(crate) fn background_rows(rows: u16, frame: u64, enable_color: bool) -> Vec<Color> {
    let t = frame as f32 * 0.002;
    (0..rows)
        .map(|row| {
            if !enable_color {
                return Color::Black;
            }
            let n = value_noise2(row as f32 * 4.0 * 0.003, t);
            let base = 8.0 + n * 20.0;
            Color::Rgb {
                r: (base + 10.0) as u8,
                g: (base + 12.0) as u8,
                b: (base + 14.0) as u8,
            }
        })
        .collect()
}

pub(crate) fn dim_color(c: Color) -> Color {
    let keep = (255 - ENDING_DIM_ALPHA) as u16;
    match c {
        Color::Rgb { r, g, b } => Color::Rgb {
            r: (r as u16 * keep / 255) as u8,
            g: (g as u16 * keep / 255) as u8,
            b: (b as u16 * keep / 255) as u8,
        },
        other => other,
    }
}

/// Twinkling dust drifting across the canvas.
pub(crate) fn draw_dust(canvas: &mut PixelCanvas, frame: u64) {
    let speck = Pixel {
        r: 230,
        g: 230,
        b: 230,
        a: 120,
    };
    for i in 0..DUST_SPECKS {
        let x = ((i * 79) as f32 + frame as f32 * 0.15) % canvas.w.max(1) as f32;
        let y = value_noise2(i as f32 * 0.07, frame as f32 * 0.01) * canvas.h as f32;
        canvas.blend_over(x as i32, y as i32, speck);
    }
}

pub(crate) fn draw_flower(canvas: &mut PixelCanvas, view: &WorldView, f: &Flower) {
    // stem: a 2-world-px wide line dropping below the bloom
    let stem = Pixel {
        r: 60,
        g: 120,
        b: 70,
        a: 255,
    };
    let (x0, y0) = view.to_px(f.x - 1.0, f.y);
    let (x1, y1) = view.to_px(f.x + 1.0, f.y + 30.0 * f.scale);
    for py in y0..=y1 {
        for px in x0..=x1 {
            canvas.blend_over(px, py, stem);
        }
    }

    // petals: tone lands on the red channel, as the original drew it
    let petal = Pixel {
        r: f.tone.min(255) as u8,
        g: 120,
        b: 200,
        a: 160,
    };
    let ring = f.radius * 6.0 * f.scale;
    let a = f.radius * 1.1 * f.scale;
    let b = f.radius * 3.0 * f.scale;
    for i in 0..f.petals {
        let ang = (TAU / f.petals as f32) * i as f32 + value_noise1(f.seed + i as f32) * 0.2;
        let (sin, cos) = ang.sin_cos();
        let cx = f.x + cos * ring;
        let cy = f.y + sin * ring;
        fill_ellipse_rot(canvas, view, cx, cy, a, b, ang, petal);
    }

    // center disc
    let core = Pixel {
        r: 250,
        g: 230,
        b: 120,
        a: 220,
    };
    let cr = f.radius * 2.5 * f.scale;
    fill_ellipse_rot(canvas, view, f.x, f.y, cr, cr, 0.0, core);
}

/// Filled ellipse with semi-axis `a` along `ang` and `b` across it, tested
/// per subpixel in world space so anisotropic mapping stays correct.
fn fill_ellipse_rot(
    canvas: &mut PixelCanvas,
    view: &WorldView,
    cx: f32,
    cy: f32,
    a: f32,
    b: f32,
    ang: f32,
    color: Pixel,
) {
    if a <= 0.0 || b <= 0.0 {
        return;
    }
    let m = a.max(b);
    let (px0, py0) = view.to_px(cx - m, cy - m);
    let (px1, py1) = view.to_px(cx + m, cy + m);
    let (sin, cos) = ang.sin_cos();

    for py in py0..=py1 {
        for px in px0..=px1 {
            let wx = (px as f32 + 0.5) / view.sx;
            let wy = (py as f32 + 0.5) / view.sy;
            let dx = wx - cx;
            let dy = wy - cy;
            let u = dx * cos + dy * sin;
            let v = dy * cos - dx * sin;
            if (u * u) / (a * a) + (v * v) / (b * b) <= 1.0 {
                canvas.blend_over(px, py, color);
            }
        }
    }
}

/* -----------------------------
   HUD, bubble, endings
------------------------------ */

const SLIDER_TRACK_W: u16 = 22;
const BUTTON_BG: Color = Color::Rgb {
    r: 34,
    g: 34,
    b: 34,
};

#[derive(Clone, Copy, Debug)]
pub(crate) struct CellRect {
    pub(crate) x: u16,
    pub(crate) y: u16,
    pub(crate) w: u16,
    pub(crate) h: u16,
}

impl CellRect {
    pub(crate) fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.x + self.w && row >= self.y && row < self.y + self.h
    }
}

pub(crate) struct HudLayout {
    pub(crate) slider: CellRect,
    pub(crate) btn_end: CellRect,
    pub(crate) btn_restart: CellRect,
}

pub(crate) fn hud_layout() -> HudLayout {
    // row 0: Growth [......................] 1.00        Planted/Revealed
    // row 1: Theme: ...          [ End ] / [ Restart ]
    HudLayout {
        slider: CellRect {
            x: 9,
            y: 0,
            w: SLIDER_TRACK_W,
            h: 1,
        },
        btn_end: CellRect {
            x: 24,
            y: 1,
            w: 7,
            h: 1,
        },
        btn_restart: CellRect {
            x: 24,
            y: 1,
            w: 11,
            h: 1,
        },
    }
}

/// Growth speed for a click on the slider track, clamped to the range ends.
pub(crate) fn slider_value_at(layout: &HudLayout, col: u16) -> f32 {
    let span = layout.slider.w.saturating_sub(1).max(1) as f32;
    let t = (col.saturating_sub(layout.slider.x) as f32 / span).clamp(0.0, 1.0);
    SPEED_MIN + t * (SPEED_MAX - SPEED_MIN)
}

/// Text over whatever is already in the buffer; `bg: None` keeps each cell's
/// background so overlays don't punch black boxes into the gradient.
pub(crate) fn draw_text(
    buf: &mut CellBuffer,
    x: u16,
    y: u16,
    s: &str,
    fg: Color,
    bg: Option<Color>,
) {
    for (i, ch) in s.chars().enumerate() {
        let xx = x.saturating_add(i as u16);
        if xx >= buf.w || y >= buf.h {
            break;
        }
        let at = buf.idx(xx, y);
        let cell_bg = bg.unwrap_or(buf.cells[at].bg);
        buf.cells[at] = Cell {
            ch,
            fg,
            bg: cell_bg,
        };
    }
}

fn draw_text_centered(buf: &mut CellBuffer, y: u16, s: &str, fg: Color, bg: Option<Color>) {
    let len = s.chars().count() as u16;
    let x = (buf.w.saturating_sub(len)) / 2;
    draw_text(buf, x, y, s, fg, bg);
}

pub(crate) fn draw_hud(buf: &mut CellBuffer, g: &GardenState, speed: f32, layout: &HudLayout) {
    let dim = Color::Grey;
    let bright = Color::White;

    draw_text(buf, 1, 0, "Growth", dim, None);
    let t = (speed - SPEED_MIN) / (SPEED_MAX - SPEED_MIN);
    let fill = (t * layout.slider.w as f32 + 0.5) as u16;
    let mut track = String::from("[");
    for i in 0..layout.slider.w {
        track.push(if i < fill { '█' } else { ' ' });
    }
    track.push(']');
    draw_text(buf, layout.slider.x - 1, 0, &track, bright, None);
    draw_text(
        buf,
        layout.slider.x + layout.slider.w + 2,
        0,
        &format!("{speed:.2}"),
        dim,
        None,
    );

    let counters = format!("Planted: {}  Revealed: {}", g.planted, g.revealed);
    let cx = (buf.w as i32 - counters.chars().count() as i32 - 2).max(0) as u16;
    draw_text(buf, cx, 0, &counters, dim, None);

    draw_text(buf, 1, 1, &format!("Theme: {}", g.theme.label()), bright, None);
    draw_text(
        buf,
        layout.btn_end.x,
        layout.btn_end.y,
        "[ End ]",
        bright,
        Some(BUTTON_BG),
    );

    let help = "click to plant • hover to read • 1/2/3 switch theme • m mixed • -/= speed • e end • q quit";
    draw_text(buf, 1, buf.h.saturating_sub(1), help, dim, None);
}

/// Clamped top-left corner for the floating fragment strip: two columns
/// right and one row up from the pointer, kept fully inside the buffer.
pub(crate) fn bubble_origin(pc: u16, pr: u16, text_w: u16, cols: u16, rows: u16) -> (u16, u16) {
    let max_x = cols.saturating_sub(text_w + 1).max(1);
    let bx = (pc.saturating_add(2)).clamp(1, max_x);
    let by = pr
        .saturating_sub(1)
        .clamp(1, rows.saturating_sub(2).max(1));
    (bx, by)
}

pub(crate) fn draw_bubble(buf: &mut CellBuffer, text: &str, pc: u16, pr: u16) {
    let padded = format!(" {text} ");
    let w = padded.chars().count() as u16;
    let (bx, by) = bubble_origin(pc, pr, w, buf.w, buf.h);
    draw_text(
        buf,
        bx,
        by,
        &padded,
        Color::Rgb {
            r: 235,
            g: 235,
            b: 235,
        },
        Some(Color::Rgb {
            r: 30,
            g: 30,
            b: 30,
        }),
    );
}

pub(crate) fn ending_title(scene: Scene) -> &'static str {
    match scene {
        Scene::EndingB => "The garden keeps what you planted.",
        _ => "Some seeds prefer the next rain.",
    }
}

pub(crate) fn ending_body(scene: Scene) -> [&'static str; 2] {
    match scene {
        Scene::EndingB => [
            "With enough blooms, the city breathes through leaves.",
            "You leave a small light behind for anyone passing.",
        ],
        _ => [
            "You carry a pocket of soil and a list of names.",
            "Tomorrow, the stems will remember you.",
        ],
    }
}

pub(crate) fn draw_ending(buf: &mut CellBuffer, scene: Scene, layout: &HudLayout) {
    let mid = buf.h / 2;

    draw_text_centered(buf, mid.saturating_sub(3), ending_title(scene), Color::White, None);
    for (i, line) in ending_body(scene).iter().enumerate() {
        draw_text_centered(buf, mid.saturating_sub(1) + i as u16, line, Color::Grey, None);
    }
    draw_text_centered(
        buf,
        mid + 3,
        "Press R or click Restart to plant again",
        Color::DarkGrey,
        None,
    );

    draw_text(
        buf,
        layout.btn_restart.x,
        layout.btn_restart.y,
        "[ Restart ]",
        Color::White,
        Some(BUTTON_BG),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_stays_inside_the_buffer() {
        // pointer at the far right edge: the strip is pushed back in
        let (bx, by) = bubble_origin(79, 0, 20, 80, 24);
        assert_eq!(bx, 80 - 21);
        assert_eq!(by, 1);

        // pointer bottom-left: clamps to the inner margin
        let (bx, by) = bubble_origin(0, 23, 10, 80, 24);
        assert_eq!(bx, 2);
        assert_eq!(by, 22);
    }

    #[test]
    fn slider_maps_track_ends_to_the_speed_range() {
        let layout = hud_layout();
        let lo = slider_value_at(&layout, layout.slider.x);
        let hi = slider_value_at(&layout, layout.slider.x + layout.slider.w - 1);
        assert!((lo - SPEED_MIN).abs() < 1e-6);
        assert!((hi - SPEED_MAX).abs() < 1e-6);

        // clicks past either end clamp
        assert!((slider_value_at(&layout, 0) - SPEED_MIN).abs() < 1e-6);
        assert!((slider_value_at(&layout, 200) - SPEED_MAX).abs() < 1e-6);
    }

    #[test]
    fn braille_mask_covers_all_eight_dots_once() {
        let mut seen = 0u8;
        for dy in 0..4 {
            for dx in 0..2 {
                let bit = braille_bit(dx, dy);
                assert_ne!(bit, 0);
                assert_eq!(seen & bit, 0);
                seen |= bit;
            }
        }
        assert_eq!(seen, 0xFF);
    }

    #[test]
    fn opaque_ink_lands_in_the_right_cell() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.blend_over(
            3,
            5,
            Pixel {
                r: 200,
                g: 100,
                b: 50,
                a: 255,
            },
        );
        let mut buf = CellBuffer::new(4, 2);
        canvas_to_cells(&canvas, &mut buf, true, &[Color::Black, Color::Black]);

        // subpixel (3,5) sits in cell (1,1), dot (1,1) => bit 0x10
        let c = buf.cells[buf.idx(1, 1)];
        assert_eq!(c.ch, char::from_u32(0x2800 + 0x10).unwrap());
        assert_eq!(
            c.fg,
            Color::Rgb {
                r: 200,
                g: 100,
                b: 50
            }
        );
        // neighbors stay blank braille
        assert_eq!(buf.cells[buf.idx(0, 0)].ch, char::from_u32(0x2800).unwrap());
    }

    #[test]
    fn dimming_darkens_without_touching_alpha() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.blend_over(
            0,
            0,
            Pixel {
                r: 200,
                g: 200,
                b: 200,
                a: 220,
            },
        );
        let before = canvas.px[0];
        canvas.dim(ENDING_DIM_ALPHA);
        let after = canvas.px[0];
        assert!(after.r < before.r);
        assert_eq!(after.a, before.a);
    }

    #[test]
    fn cell_to_world_round_trips_through_the_view() {
        let view = WorldView::new(160, 96);
        let (wx, wy) = view.cell_to_world(40, 12);
        let (px, py) = view.to_px(wx, wy);
        assert_eq!(px, 40 * 2 + 1);
        assert_eq!(py, 12 * 4 + 2);
    }

    #[test]
    fn full_bloom_leaves_ink_on_the_canvas() {
        use rand::{rngs::StdRng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(5);
        let mut f = Flower::new(WORLD_W / 2.0, WORLD_H / 2.0, &mut rng);
        f.scale = 1.0;

        let mut canvas = PixelCanvas::new(160, 96);
        let view = WorldView::new(canvas.w, canvas.h);
        draw_flower(&mut canvas, &view, &f);

        let ink = canvas.px.iter().filter(|p| p.a >= 32).count();
        assert!(ink > 0, "a grown flower draws nothing");
    }
}
