use std::iter::Flatten;
use std::iter::FusedIterator;
use std::slice;

use crate::chunk::Chunk;
use crate::{ChunkCapacity, StableVector, Usize};

/// A mutable iterator over the elements of a StableVector.
///
/// This struct is created by StableVector::iter_mut().
pub struct IterMut<'a, T, const N: usize>
where
    Usize<N>: ChunkCapacity,
{
    delegate: Flatten<slice::IterMut<'a, Chunk<T, N>>>,
    len: usize,
}

impl<T, const N: usize> Default for IterMut<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn default() -> Self {
        Self {
            delegate: Flatten::default(),
            len: 0,
        }
    }
}

impl<'a, T, const N: usize> IterMut<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_list(list: &'a mut StableVector<T, N>) -> Self {
        Self {
            delegate: list.chunks.iter_mut().flatten(),
            len: list.len,
        }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next()?;
        self.len -= 1;
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T, const N: usize> DoubleEndedIterator for IterMut<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }

    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.rfold(init, f)
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> core::fmt::Debug for IterMut<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}
