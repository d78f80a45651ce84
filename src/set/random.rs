use rand::{seq::IteratorRandom, Rng};

use super::Set;

impl<T: Clone, S> Set<T, S> {
    /// Picks a member uniformly at random, or `None` when the set is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        self.read().keys().choose(rng).cloned()
    }
}
