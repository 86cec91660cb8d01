use crate::graph::NeighborPair;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Picks which neighbor a hub walk follows next.
///
/// `candidates` only holds eligible neighbors and is never empty when a walk
/// asks. Returning `None` or an out-of-range index ends the walk without a path.
pub trait NeighborChooser {
    fn choose(&mut self, candidates: &[NeighborPair]) -> Option<usize>;
}

/// Uniform choice backed by a [`StdRng`].
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl NeighborChooser for RandomChooser {
    fn choose(&mut self, candidates: &[NeighborPair]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(self.rng.random_range(0..candidates.len()))
    }
}

/// Always takes the first candidate in `(film, person)` order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstChooser;

impl NeighborChooser for FirstChooser {
    fn choose(&mut self, candidates: &[NeighborPair]) -> Option<usize> {
        if candidates.is_empty() { None } else { Some(0) }
    }
}

/// Adapts a closure into a chooser.
pub struct FnChooser<F>(pub F);

impl<F> FnChooser<F>
where
    F: FnMut(&[NeighborPair]) -> Option<usize>,
{
    pub fn new(choose: F) -> Self {
        Self(choose)
    }
}

impl<F> NeighborChooser for FnChooser<F>
where
    F: FnMut(&[NeighborPair]) -> Option<usize>,
{
    fn choose(&mut self, candidates: &[NeighborPair]) -> Option<usize> {
        (self.0)(candidates)
    }
}
