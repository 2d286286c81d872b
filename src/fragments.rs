use crate::model::Theme;
use rand::{rngs::StdRng, Rng};

// Short sensory fragments revealed while hovering a bloom. Three pools of
// five; Mixed draws from all fifteen at once.

pub(crate) const SIGHT: [&str; 5] = [
    "Neon glow, refracting off puddles",
    "A clear window displaying a beautiful city",
    "Distant cities portrayed under the orange skyline",
    "Paper cranes resting on a window sill",
    "Keys shining like stars",
];

pub(crate) const SOUND: [&str; 5] = [
    "Subway roaring underfoot",
    "Distant sirens quickly getting louder",
    "A kettle murmuring softly",
    "Shoes squeaking",
    "Coins making their presence known",
];

pub(crate) const SMELL: [&str; 5] = [
    "Fresh rain and grass, leaving the environment earthy",
    "Pungent citrus aroma wafting from the juice",
    "Laundry freshening up the stairwell",
    "Buttery popcorn smell, cutting through the air",
    "Thick tires, recently burned",
];

/// One fragment for the given theme. Mixed is uniform over the pooled set,
/// so each category contributes its own list length.
pub(crate) fn pick(theme: Theme, rng: &mut StdRng) -> &'static str {
    match theme {
        Theme::Sight => SIGHT[rng.gen_range(0..SIGHT.len())],
        Theme::Sound => SOUND[rng.gen_range(0..SOUND.len())],
        Theme::Smell => SMELL[rng.gen_range(0..SMELL.len())],
        Theme::Mixed => {
            let total = SIGHT.len() + SOUND.len() + SMELL.len();
            let i = rng.gen_range(0..total);
            if i < SIGHT.len() {
                SIGHT[i]
            } else if i < SIGHT.len() + SOUND.len() {
                SOUND[i - SIGHT.len()]
            } else {
                SMELL[i - SIGHT.len() - SOUND.len()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sight_pick_is_a_sight_fragment() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let s = pick(Theme::Sight, &mut rng);
            assert!(SIGHT.contains(&s));
        }
    }

    #[test]
    fn mixed_pick_covers_the_pooled_set() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..2000 {
            let s = pick(Theme::Mixed, &mut rng);
            let pooled = SIGHT.contains(&s) || SOUND.contains(&s) || SMELL.contains(&s);
            assert!(pooled, "mixed pick outside the pool: {s}");
            seen.insert(s);
        }
        // 2000 uniform draws over 15 strings hit every one of them
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn pools_are_five_each() {
        assert_eq!(SIGHT.len(), 5);
        assert_eq!(SOUND.len(), 5);
        assert_eq!(SMELL.len(), 5);
    }
}
