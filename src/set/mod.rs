use std::{
    borrow::Borrow,
    collections::{hash_map::RandomState, HashMap},
    fmt::{self, Debug, Display},
    hash::{BuildHasher, Hash},
    ptr,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use log::trace;
use smallvec::SmallVec;

mod iter;
mod ops;
#[cfg(feature = "rand")]
mod random;
#[cfg(feature = "serde")]
mod serialize;

pub use iter::{IntoIter, Iter};

type Members<T, S> = HashMap<T, (), S>;

/// Arguments of a variadic call are staged here before the lock is taken, so
/// an argument iterator that reads the set itself cannot block on our guard.
type Staged<T> = SmallVec<[T; 8]>;

/// A thread-safe set of unique elements.
///
/// Every operation takes `&self`: mutations lock the members exclusively,
/// queries share the lock. Share a set between threads with `Arc<Set<T>>`.
///
/// Operations involving two sets never hold both locks at once. The other
/// set is copied under its own read lock first, then the receiver is
/// inspected, so `a.equals(&b)` and `b.equals(&a)` racing with writers on
/// either side cannot deadlock.
pub struct Set<T, S = RandomState> {
    inner: RwLock<Members<T, S>>,
}

/// A [`Set`] hashing with `rustc_hash`'s Fx hasher.
pub type FxSet<T> = Set<T, rustc_hash::FxBuildHasher>;

impl<T> Set<T, RandomState> {
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<T, S> Set<T, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self::from_members(HashMap::with_hasher(hasher))
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::from_members(HashMap::with_capacity_and_hasher(capacity, hasher))
    }

    fn from_members(members: Members<T, S>) -> Self {
        Self {
            inner: RwLock::new(members),
        }
    }

    // A poisoned lock is still usable: the map itself is never corrupted, and
    // `retain` runs caller code before changing anything. A panicking `Hash`
    // or `Eq` impl can still leave an `add` or `remove` partially applied.
    fn read(&self) -> RwLockReadGuard<'_, Members<T, S>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Members<T, S>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn into_members(self) -> Members<T, S> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of distinct elements.
    pub fn size(&self) -> usize {
        self.read().len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        let mut members = self.write();
        trace!("clearing {} element(s)", members.len());
        members.clear();
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Builds a set from `elems`, collapsing duplicates.
    pub fn from_elems<I>(elems: I) -> Self
    where
        I: IntoIterator<Item = T>,
        S: Default,
    {
        Self::from_members(elems.into_iter().map(|elem| (elem, ())).collect())
    }

    /// Inserts a single element, returning whether it was absent.
    pub fn insert(&self, elem: T) -> bool {
        self.write().insert(elem, ()).is_none()
    }

    /// Inserts every element of `elems` under one write lock.
    pub fn add<I>(&self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        let elems: Staged<T> = elems.into_iter().collect();
        let mut members = self.write();
        let before = members.len();
        members.extend(elems.into_iter().map(|elem| (elem, ())));
        trace!("added {} new element(s)", members.len() - before);
    }

    /// Removes every element of `elems` under one write lock. Returns `true`
    /// if at least one of them was a member.
    pub fn remove<'a, Q, I>(&self, elems: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let elems: Staged<&Q> = elems.into_iter().collect();
        let mut members = self.write();
        let removed = elems
            .into_iter()
            .filter(|elem| members.remove(*elem).is_some())
            .count();
        trace!("removed {removed} element(s)");
        removed > 0
    }

    /// Whether every element of `elems` is a member. An empty `elems` is
    /// trivially contained.
    pub fn contains<'a, Q, I>(&self, elems: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let elems: Staged<&Q> = elems.into_iter().collect();
        let members = self.read();
        elems.into_iter().all(|elem| members.contains_key(elem))
    }

    pub fn contains_one<Q>(&self, elem: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read().contains_key(elem)
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Copies the current members into a `Vec`, in no particular order.
    pub fn to_vec(&self) -> Vec<T> {
        self.read().keys().cloned().collect()
    }

    /// Iterates over a snapshot of the current members.
    ///
    /// No lock is held while the iterator is alive, so the set can be
    /// mutated from inside the loop. Such changes are not observed by it.
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.to_vec())
    }

    /// Keeps only the elements for which `keep` returns `true`, atomically.
    ///
    /// `keep` is evaluated on every member before any is removed, so a panic
    /// inside it leaves the set untouched. It runs under the write lock and
    /// must not touch this set.
    pub fn retain<F>(&self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut members = self.write();
        let doomed: Vec<T> = members
            .keys()
            .filter(|elem| !keep(*elem))
            .cloned()
            .collect();
        for elem in &doomed {
            members.remove(elem);
        }
        trace!("retain dropped {} element(s)", doomed.len());
    }

    fn snapshot(&self) -> Members<T, S> {
        self.read().clone()
    }

    fn is_same(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }

    /// Whether both sets hold exactly the same elements.
    pub fn equals(&self, other: &Self) -> bool {
        if self.is_same(other) {
            return true;
        }
        let theirs = other.snapshot();
        let ours = self.read();
        ours.len() == theirs.len() && ours.keys().all(|elem| theirs.contains_key(elem))
    }

    /// Whether every element of `self` is a member of `other`.
    pub fn subset(&self, other: &Self) -> bool {
        if self.is_same(other) {
            return true;
        }
        let theirs = other.snapshot();
        let ours = self.read();
        ours.len() <= theirs.len() && ours.keys().all(|elem| theirs.contains_key(elem))
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.subset(other)
    }

    /// Whether every element of `other` is a member of `self`.
    pub fn superset(&self, other: &Self) -> bool {
        other.subset(self)
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        self.superset(other)
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        let theirs = other.snapshot();
        let ours = self.read();
        !ours.keys().any(|elem| theirs.contains_key(elem))
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut members = other.snapshot();
        members.extend(self.read().keys().map(|elem| (elem.clone(), ())));
        Self::from_members(members)
    }

    pub fn intersect(&self, other: &Self) -> Self {
        let theirs = other.snapshot();
        let ours = self.read();
        let (smaller, larger) = if ours.len() < theirs.len() {
            (&*ours, &theirs)
        } else {
            (&theirs, &*ours)
        };
        let mut members = HashMap::with_hasher(ours.hasher().clone());
        members.extend(
            smaller
                .keys()
                .filter(|elem| larger.contains_key(*elem))
                .map(|elem| (elem.clone(), ())),
        );
        Self::from_members(members)
    }

    /// Elements of `self` that are not in `other`.
    pub fn diff(&self, other: &Self) -> Self {
        let theirs = other.snapshot();
        let ours = self.read();
        let mut members = HashMap::with_hasher(ours.hasher().clone());
        members.extend(
            ours.keys()
                .filter(|elem| !theirs.contains_key(*elem))
                .map(|elem| (elem.clone(), ())),
        );
        Self::from_members(members)
    }

    /// Elements in exactly one of `self` and `other`.
    pub fn sym_diff(&self, other: &Self) -> Self {
        let theirs = other.snapshot();
        let ours = self.read();
        let mut members = HashMap::with_hasher(ours.hasher().clone());
        members.extend(
            ours.keys()
                .filter(|elem| !theirs.contains_key(*elem))
                .map(|elem| (elem.clone(), ())),
        );
        members.extend(theirs.into_iter().filter(|(elem, _)| !ours.contains_key(elem)));
        Self::from_members(members)
    }
}

impl<T, S> Clone for Set<T, S>
where
    T: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self::from_members(self.read().clone())
    }
}

impl<T, S: Default> Default for Set<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Debug, S> Debug for Set<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.read().keys()).finish()
    }
}

/// Renders the members as `[a, b, c]`, in no particular order.
impl<T: Display, S> Display for Set<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = self.read();
        f.write_str("[")?;
        for (i, elem) in members.keys().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str("]")
    }
}

impl<T, S> PartialEq for Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T, S> Eq for Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
}
