use core::iter::FusedIterator;

use crate::chunk::Chunk;
use crate::{ChunkCapacity, StableVector, Usize};

/// An iterator over the elements of a StableVector.
///
/// This struct is created by StableVector::iter() and Cursor::iter_until().
pub struct Iter<'a, T, const N: usize>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    chunks: &'a [Chunk<T, N>],
    front: usize,
    back: usize,
}

const _: [(); core::mem::size_of::<usize>() * 4] = [(); core::mem::size_of::<Iter<usize, 2>>()];

impl<T, const N: usize> Default for Iter<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn default() -> Self {
        Self {
            chunks: &[],
            front: 0,
            back: 0,
        }
    }
}

impl<'a, T, const N: usize> Iter<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_list(list: &'a StableVector<T, N>) -> Self {
        Self::between(list, 0, list.len)
    }

    /// Iterates the logical indices `[front, back)`, both clamped to the vector's length.
    pub(crate) fn between(list: &'a StableVector<T, N>, front: usize, back: usize) -> Self {
        let back = back.min(list.len);

        Self {
            chunks: &list.chunks,
            front: front.min(back),
            back,
        }
    }

    #[inline]
    fn element(&self, index: usize) -> &'a T {
        let chunks: &'a [Chunk<T, N>] = self.chunks;
        &chunks[index / N][index % N]
    }
}

impl<T, const N: usize> Clone for Iter<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let out = self.element(self.front);
        self.front += 1;
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.back - self.front
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T, const N: usize> DoubleEndedIterator for Iter<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        Some(self.element(self.back))
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> core::fmt::Debug for Iter<'_, T, N>
where
    T: core::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let remaining: Vec<&T> = self.clone().collect();

        f.debug_tuple("Iter")
            .field(&remaining)
            .field(&self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{ChunkCapacity, StableVector, Usize};

    use super::Iter;

    #[test]
    fn default_iterator_yelds_nothing() {
        let mut sut: Iter<i32, 2> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn iter_forward() {
        let list = StableVector::<usize, 2>::from([0, 1, 2, 3, 4]);
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        let list = StableVector::<usize, 2>::new();
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[]);
    }

    #[test]
    fn iter_backward() {
        let list = StableVector::<usize, 2>::from([0, 1, 2, 3, 4]);
        let sut = list.iter().rev();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[4, 3, 2, 1, 0]);

        let list = StableVector::<usize, 2>::with_capacity(6);
        let sut = list.iter().rev();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[]);
    }

    #[test]
    fn double_ended_iterator_works_correctly() {
        let list = StableVector::<usize, 2>::from([0, 1, 2, 3, 4]);

        let mut sut = list.iter();
        assert_eq!(sut.len(), 5);

        assert_eq!(sut.next(), Some(&0));
        assert_eq!(sut.len(), 4);

        assert_eq!(sut.next_back(), Some(&4));
        assert_eq!(sut.len(), 3);

        assert_eq!(sut.next(), Some(&1));
        assert_eq!(sut.len(), 2);

        assert_eq!(sut.next_back(), Some(&3));
        assert_eq!(sut.len(), 1);

        assert_eq!(sut.next(), Some(&2));
        assert_eq!(sut.len(), 0);

        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.len(), 0);

        assert_eq!(sut.next(), None);
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn nth_skips_across_chunks() {
        let list = StableVector::<usize, 4>::from_iter(0..20);

        let mut sut = list.iter();
        assert_eq!(sut.nth(5), Some(&5));
        assert_eq!(sut.nth(0), Some(&6));
        assert_eq!(sut.nth_back(3), Some(&16));
        assert_eq!(sut.len(), 9);
        assert_eq!(sut.nth(100), None);
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn last_works_correctly() {
        let array = [0, 1, 2, 3, 4];
        let list = StableVector::<usize, 2>::from(array);
        let sut = list.iter();
        assert_eq!(sut.last(), Some(&4));
    }

    #[test]
    fn clone_works_correctly() {
        let list = StableVector::<usize, 2>::from([0, 1, 2, 3, 4]);

        let mut base = list.iter();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        base.next();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2, 3, 4]);

        base.next_back();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2, 3]);
    }

    #[test]
    fn debug_works_correctly() {
        let array = [0, 1, 2, 3, 4];
        let list = StableVector::<usize, 2>::from(array);
        let sut = list.iter();
        assert_eq!(
            format!("{sut:?}"),
            format!("Iter({:?}, {})", array, array.len())
        );
    }

    #[quickcheck]
    fn iter_matches_slice_iter(seed: Vec<i32>) {
        fn _test<const N: usize>(expected: &[i32])
        where
            Usize<N>: ChunkCapacity,
        {
            let actual = StableVector::<_, N>::from(expected);

            assert!(actual.iter().eq(expected.iter()));
            assert!(actual.iter().rev().eq(expected.iter().rev()));
            assert_eq!(actual.iter().count(), expected.len());
            assert_eq!(actual.iter().max(), expected.iter().max());
            assert_eq!(actual.iter().min(), expected.iter().min());
            assert_eq!(actual.iter().nth(expected.len() / 2), expected.get(expected.len() / 2));
        }

        _test::<2>(&seed);
        _test::<4>(&seed);
        _test::<8>(&seed);
        _test::<16>(&seed);
        _test::<512>(&seed);
    }
}
