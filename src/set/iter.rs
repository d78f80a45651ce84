use std::{collections::hash_map::IntoKeys, iter::FusedIterator, vec};

/// Iterator over a snapshot of a [`Set`](super::Set), see [`Set::iter`](super::Set::iter).
#[derive(Debug, Clone)]
pub struct Iter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iter<T> {
    pub(super) fn new(snapshot: Vec<T>) -> Self {
        Self {
            inner: snapshot.into_iter(),
        }
    }
}

impl<T> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<T> {}

impl<T> FusedIterator for Iter<T> {}

/// Owning iterator, produced by consuming a [`Set`](super::Set).
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: IntoKeys<T, ()>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(inner: IntoKeys<T, ()>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
