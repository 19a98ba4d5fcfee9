use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded source of randomness for one game session, so a reported seed replays the same bot choices.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniformly picks one element, or `None` when `items` is empty.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.random_range(0..items.len());
        Some(items[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_choices() {
        let items = [0usize, 2, 5, 7, 8];
        let mut first = SessionRng::new(7);
        let mut second = SessionRng::new(7);
        for _ in 0..20 {
            assert_eq!(first.choose(&items), second.choose(&items));
        }
    }

    #[test]
    fn test_choose_from_empty_is_none() {
        let mut rng = SessionRng::new(1);
        let items: [usize; 0] = [];
        assert_eq!(rng.choose(&items), None);
    }

    #[test]
    fn test_choose_stays_within_items() {
        let items = [3usize, 4];
        let mut rng = SessionRng::from_random();
        for _ in 0..50 {
            let picked = rng.choose(&items).unwrap();
            assert!(items.contains(&picked));
        }
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(SessionRng::new(1234).seed(), 1234);
    }
}
