use core::iter::FusedIterator;
use std::iter::Flatten;
use std::vec;

use crate::chunk::Chunk;
use crate::{ChunkCapacity, StableVector, Usize};

/// An owning iterator over the elements of a StableVector.
///
/// This struct is created by StableVector::into_iter().
pub struct IntoIter<T, const N: usize>
where
    Usize<N>: ChunkCapacity,
{
    delegate: Flatten<vec::IntoIter<Chunk<T, N>>>,
    len: usize,
}

impl<T, const N: usize> Default for IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn default() -> Self {
        Self {
            delegate: Vec::new().into_iter().flatten(),
            len: 0,
        }
    }
}

impl<T, const N: usize> IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_list(list: StableVector<T, N>) -> Self {
        Self {
            delegate: list.chunks.into_iter().flatten(),
            len: list.len,
        }
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            len: self.len,
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = T;

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

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N>
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

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> core::fmt::Debug for IntoIter<T, N>
where
    T: core::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.delegate)
    }
}
