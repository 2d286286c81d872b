use crate::noise::value_noise1;
use rand::{rngs::StdRng, Rng, SeedableRng};

// The garden lives on a fixed virtual canvas; the renderer maps it onto
// whatever terminal it gets. Resize never touches this space.
pub(crate) const WORLD_W: f32 = 960.0;
pub(crate) const WORLD_H: f32 = 540.0;

pub(crate) const INITIAL_FLOWERS: usize = 8;
pub(crate) const REVEAL_DEBOUNCE_MS: u64 = 400;
pub(crate) const ENDING_THRESHOLD: u32 = 12;

pub(crate) const SPEED_MIN: f32 = 0.2;
pub(crate) const SPEED_MAX: f32 = 3.0;
pub(crate) const SPEED_DEFAULT: f32 = 1.0;

// Cool palette of the original piece, applied as the red channel over
// green 120 / blue 200 (values past 255 saturate).
pub(crate) const PETAL_TONES: [u16; 4] = [180, 210, 260, 300];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Scene {
    Garden,
    EndingA,
    EndingB,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Theme {
    Sight,
    Sound,
    Smell,
    Mixed,
}

impl Theme {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Theme::Sight => "Sight [1]",
            Theme::Sound => "Sound [2]",
            Theme::Smell => "Smell [3]",
            Theme::Mixed => "Mixed",
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Flower {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) seed: f32,
    pub(crate) radius: f32,
    pub(crate) petals: u32,
    pub(crate) tone: u16,
    pub(crate) scale: f32,
}

impl Flower {
    pub(crate) fn new(x: f32, y: f32, rng: &mut StdRng) -> Self {
        Self {
            x,
            y,
            seed: rng.gen_range(0.0..10_000.0),
            radius: rng.gen_range(6.0..10.0),
            petals: rng.gen_range(5..9),
            tone: PETAL_TONES[rng.gen_range(0..PETAL_TONES.len())],
            scale: 0.2,
        }
    }

    /// Grow toward full bloom and bob on the noise field. Scale saturates at
    /// 1.0 and never comes back down.
    pub(crate) fn update(&mut self, speed: f32, frame: u64) {
        self.scale = (self.scale + 0.002 * speed).min(1.0);
        let n = value_noise1(self.seed + frame as f32 * 0.01);
        self.y += (n * 0.1 - 0.05) * speed;
    }

    /// Hit radius blooms with the flower: young ones are hard to catch.
    pub(crate) fn is_hover(&self, px: f32, py: f32) -> bool {
        let dx = px - self.x;
        let dy = py - self.y;
        (dx * dx + dy * dy).sqrt() < self.radius * 10.0 * self.scale
    }
}

#[derive(Clone, Debug)]
pub(crate) struct GardenState {
    pub(crate) flowers: Vec<Flower>,
    pub(crate) theme: Theme,
    pub(crate) planted: u32,
    pub(crate) revealed: u32,
    pub(crate) last_fragment: &'static str,
    pub(crate) last_reveal_ms: u64,
    pub(crate) frame: u64,
}

impl GardenState {
    pub(crate) fn empty() -> Self {
        Self {
            flowers: Vec::new(),
            theme: Theme::Mixed,
            planted: 0,
            revealed: 0,
            last_fragment: "",
            last_reveal_ms: 0,
            frame: 0,
        }
    }

    /// Fresh garden: eight blooms scattered over the middle band, everything
    /// else zeroed.
    pub(crate) fn init(&mut self, rng: &mut StdRng) {
        *self = Self::empty();
        for _ in 0..INITIAL_FLOWERS {
            let x = rng.gen_range(0.0..WORLD_W);
            let y = rng.gen_range(WORLD_H * 0.25..WORLD_H * 0.9);
            self.flowers.push(Flower::new(x, y, rng));
        }
    }

    /// Topmost hovered flower, i.e. the most recently planted one that
    /// contains the point. Search runs back-to-front.
    pub(crate) fn hovered_index(&self, px: f32, py: f32) -> Option<usize> {
        self.flowers.iter().rposition(|f| f.is_hover(px, py))
    }
}

pub(crate) struct GameState {
    pub(crate) scene: Scene,
    pub(crate) garden: GardenState,
    pub(crate) growth_speed: f32,
    pub(crate) rng: StdRng,
}

impl GameState {
    pub(crate) fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut garden = GardenState::empty();
        garden.init(&mut rng);
        Self {
            scene: Scene::Garden,
            garden,
            growth_speed: SPEED_DEFAULT,
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0FFEE)
    }

    #[test]
    fn creation_parameters_stay_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let f = Flower::new(100.0, 100.0, &mut rng);
            assert!((6.0..10.0).contains(&f.radius));
            assert!((5..9).contains(&f.petals));
            assert!(PETAL_TONES.contains(&f.tone));
            assert!((0.0..10_000.0).contains(&f.seed));
            assert_eq!(f.scale, 0.2);
        }
    }

    #[test]
    fn scale_is_clamped_and_non_decreasing() {
        let mut rng = rng();
        let mut f = Flower::new(0.0, 0.0, &mut rng);
        let mut prev = f.scale;
        for frame in 0..2000 {
            f.update(3.0, frame);
            assert!(f.scale >= prev);
            assert!((0.2..=1.0).contains(&f.scale));
            prev = f.scale;
        }
        assert_eq!(f.scale, 1.0);
    }

    #[test]
    fn hit_radius_grows_five_fold_over_a_full_bloom() {
        let mut rng = rng();
        let mut f = Flower::new(0.0, 0.0, &mut rng);

        let young = f.radius * 10.0 * 0.2;
        assert!(f.is_hover(young - 0.01, 0.0));
        assert!(!f.is_hover(young + 0.01, 0.0));

        f.scale = 1.0;
        let grown = f.radius * 10.0;
        assert!((grown / young - 5.0).abs() < 1e-5);
        assert!(f.is_hover(grown - 0.01, 0.0));
        assert!(!f.is_hover(grown + 0.01, 0.0));
    }

    #[test]
    fn bobbing_drift_is_bounded_per_update() {
        let mut rng = rng();
        let mut f = Flower::new(0.0, 200.0, &mut rng);
        let speed = 2.5;
        for frame in 0..500 {
            let before = f.y;
            f.update(speed, frame);
            assert!((f.y - before).abs() <= 0.05 * speed + 1e-6);
        }
    }

    #[test]
    fn init_seeds_eight_flowers_in_the_vertical_band() {
        let mut rng = rng();
        let mut g = GardenState::empty();
        g.planted = 9;
        g.theme = Theme::Smell;
        g.init(&mut rng);

        assert_eq!(g.flowers.len(), INITIAL_FLOWERS);
        assert_eq!(g.planted, 0);
        assert_eq!(g.revealed, 0);
        assert_eq!(g.theme, Theme::Mixed);
        assert_eq!(g.last_fragment, "");
        for f in &g.flowers {
            assert!((0.0..WORLD_W).contains(&f.x));
            assert!(f.y >= WORLD_H * 0.25 && f.y < WORLD_H * 0.9);
        }
    }

    #[test]
    fn hover_resolves_to_the_most_recently_planted_flower() {
        let mut rng = rng();
        let mut g = GardenState::empty();
        let mut a = Flower::new(100.0, 100.0, &mut rng);
        let mut b = Flower::new(102.0, 100.0, &mut rng);
        a.scale = 1.0;
        b.scale = 1.0;
        g.flowers.push(a);
        g.flowers.push(b);

        // both contain the probe point; the later insertion wins
        assert_eq!(g.hovered_index(101.0, 100.0), Some(1));
        assert_eq!(g.hovered_index(-500.0, -500.0), None);
    }
}
