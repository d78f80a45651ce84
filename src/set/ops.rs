use std::{
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
    ops::{BitAnd, BitOr, BitXor, Sub},
};

use super::{IntoIter, Iter, Set};

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elems(iter)
    }
}

impl<T, const N: usize> From<[T; N]> for Set<T, RandomState>
where
    T: Eq + Hash,
{
    fn from(elems: [T; N]) -> Self {
        Self::from_elems(elems)
    }
}

impl<T, S> From<Vec<T>> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(elems: Vec<T>) -> Self {
        Self::from_elems(elems)
    }
}

/// `Extend` goes through `&mut self`; shared holders use [`Set::add`].
impl<T, S> Extend<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_members().into_keys())
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T, S> BitOr<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.union(rhs)
    }
}

impl<T, S> BitAnd<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitand(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.intersect(rhs)
    }
}

impl<T, S> BitXor<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitxor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.sym_diff(rhs)
    }
}

impl<T, S> Sub<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn sub(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.diff(rhs)
    }
}
