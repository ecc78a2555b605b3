use core::cmp::Ordering;

use crate::cursor_mut::CursorMut;
use crate::iter::Iter;
use crate::position::{Position, impl_position_ops};
use crate::{ChunkCapacity, StableVector, Usize};

/// A read-only random access position in a StableVector.
///
/// A Cursor is a pair of a vector and a logical index; it never caches an element's
/// address and resolves [`current`](Cursor::current) through the vector's indexing. The
/// position one past the last element is the end position, where `current` yields `None`.
///
/// Cursors over the same vector compare by index, cursors over different vectors are never
/// equal and are unordered.
pub struct Cursor<'a, T, const N: usize>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    list: &'a StableVector<T, N>,
    index: usize,
}

const _: [(); core::mem::size_of::<usize>() * 2] = [(); core::mem::size_of::<Cursor<usize, 2>>()];

impl<'a, T, const N: usize> Cursor<'a, T, N>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn new(list: &'a StableVector<T, N>, index: usize) -> Self {
        Self { list, index }
    }

    pub fn as_list(&self) -> &'a StableVector<T, N> {
        self.list
    }

    /// Returns the element at this position, `None` at or past the end.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let vector: StableVector<_, 2> = StableVector::from([1, 2, 3]);
    ///
    /// assert_eq!(vector.cursor(2).current(), Some(&3));
    /// assert_eq!(vector.cursor_end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        self.list.get(self.index)
    }

    /// Returns the element `offset` steps away from this position, if any.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let vector: StableVector<_, 2> = StableVector::from([1, 2, 3]);
    /// let sut = vector.cursor(1);
    ///
    /// assert_eq!(sut.peek(-1), Some(&1));
    /// assert_eq!(sut.peek(1), Some(&3));
    /// assert_eq!(sut.peek(-2), None);
    /// assert_eq!(sut.peek(2), None);
    /// ```
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        self.list.get(self.index.checked_add_signed(offset)?)
    }

    pub fn peek_next(&self) -> Option<&'a T> {
        self.peek(1)
    }

    pub fn peek_prev(&self) -> Option<&'a T> {
        self.peek(-1)
    }

    pub fn front(&self) -> Option<&'a T> {
        self.list.front()
    }

    pub fn back(&self) -> Option<&'a T> {
        self.list.back()
    }

    /// Iterates the elements from this position up to, but excluding, `end`.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let vector: StableVector<_, 2> = StableVector::from([1, 2, 3, 4, 5]);
    ///
    /// let first = vector.cursor(1);
    /// let last = vector.cursor(4);
    /// let copy: StableVector<_, 2> = first.iter_until(&last).copied().collect();
    ///
    /// assert_eq!(copy, [2, 3, 4]);
    /// ```
    pub fn iter_until(&self, end: &Self) -> Iter<'a, T, N> {
        debug_assert!(
            core::ptr::eq(self.list, end.list),
            "cursors belong to different vectors"
        );

        Iter::between(self.list, self.index, end.index)
    }

    fn same_list(&self, other: &StableVector<T, N>) -> bool {
        core::ptr::eq(self.list, other)
    }
}

impl<T, const N: usize> Position for Cursor<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    #[inline]
    fn index(&self) -> usize {
        self.index
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.index += n;
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.index -= n;
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> isize {
        debug_assert!(
            self.same_list(origin.list),
            "cursors belong to different vectors"
        );
        (self.index as isize).wrapping_sub(origin.index as isize)
    }

    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        debug_assert!(
            self.same_list(other.list),
            "cursors belong to different vectors"
        );
        self.index < other.index
    }

    #[inline]
    fn same_as(&self, other: &Self) -> bool {
        self.same_list(other.list) && self.index == other.index
    }
}

impl_position_ops!(Cursor);

impl<T, const N: usize> core::ops::Sub for Cursor<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> Self::Output {
        self.distance_from(&origin)
    }
}

impl<'a, T, const N: usize> From<CursorMut<'a, T, N>> for Cursor<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn from(cursor: CursorMut<'a, T, N>) -> Self {
        cursor.into_cursor()
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Cursor<'_, T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T, const N: usize> Eq for Cursor<'_, T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> PartialEq<CursorMut<'_, T, N>> for Cursor<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &CursorMut<'_, T, N>) -> bool {
        self.same_list(other.as_list()) && self.index == other.index()
    }
}

impl<T, const N: usize> PartialOrd for Cursor<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_list(other.list)
            .then(|| self.index.cmp(&other.index))
    }
}

impl<T, const N: usize> PartialOrd<CursorMut<'_, T, N>> for Cursor<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn partial_cmp(&self, other: &CursorMut<'_, T, N>) -> Option<Ordering> {
        self.same_list(other.as_list())
            .then(|| self.index.cmp(&other.index()))
    }
}

impl<T, const N: usize> core::fmt::Debug for Cursor<'_, T, N>
where
    T: core::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Cursor")
            .field(self.list)
            .field(&self.index)
            .finish()
    }
}
