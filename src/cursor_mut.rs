use core::cmp::Ordering;

use crate::cursor::Cursor;
use crate::position::{Position, impl_position_ops};
use crate::{ChunkCapacity, StableVector, Usize};

/// A random access position with exclusive access to a StableVector.
///
/// Besides reading and writing the element at its position, a CursorMut can append to the
/// vector. Appending never invalidates the position: it keeps referring to the same index,
/// and the element there keeps its address.
///
/// A CursorMut widens into a [`Cursor`] through `From`, the reverse is not possible.
pub struct CursorMut<'a, T, const N: usize>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    list: &'a mut StableVector<T, N>,
    index: usize,
}

const _: [(); core::mem::size_of::<usize>() * 2] =
    [(); core::mem::size_of::<CursorMut<usize, 2>>()];

impl<'a, T, const N: usize> CursorMut<'a, T, N>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn new(list: &'a mut StableVector<T, N>, index: usize) -> Self {
        Self { list, index }
    }

    pub fn as_list(&self) -> &StableVector<T, N> {
        &*self.list
    }

    /// Returns a read-only cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(&*self.list, self.index)
    }

    /// Turns this cursor into a read-only cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T, N> {
        Cursor::new(self.list, self.index)
    }

    /// Returns the element at this position, `None` at or past the end.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<_, 2> = StableVector::from([1, 2, 3]);
    ///
    /// let mut sut = vector.cursor_mut(1);
    /// if let Some(value) = sut.current() {
    ///     *value *= 10;
    /// }
    ///
    /// assert_eq!(vector, [1, 20, 3]);
    /// ```
    pub fn current(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.index)
    }

    /// Returns the element `offset` steps away from this position, if any.
    pub fn peek(&self, offset: isize) -> Option<&T> {
        self.list.get(self.index.checked_add_signed(offset)?)
    }

    /// Returns the element `offset` steps away from this position mutably, if any.
    pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
        self.list.get_mut(self.index.checked_add_signed(offset)?)
    }

    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// Appends an element to the back of the vector, keeping this position.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<_, 2> = StableVector::new();
    ///
    /// let mut sut = vector.cursor_end_mut();
    /// assert_eq!(sut.current(), None);
    ///
    /// sut.push_back(7);
    /// assert_eq!(sut.current(), Some(&mut 7));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Constructs an element at the back of the vector from `f`, keeping this position.
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.list.emplace_back(f)
    }

    fn same_list(&self, other: &StableVector<T, N>) -> bool {
        core::ptr::eq(&*self.list, other)
    }
}

impl<T, const N: usize> Position for CursorMut<'_, T, N>
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

impl_position_ops!(CursorMut);

impl<T, const N: usize> PartialEq for CursorMut<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T, const N: usize> Eq for CursorMut<'_, T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> PartialEq<Cursor<'_, T, N>> for CursorMut<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &Cursor<'_, T, N>) -> bool {
        other == self
    }
}

impl<T, const N: usize> PartialOrd for CursorMut<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_list(other.list)
            .then(|| self.index.cmp(&other.index))
    }
}

impl<T, const N: usize> PartialOrd<Cursor<'_, T, N>> for CursorMut<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn partial_cmp(&self, other: &Cursor<'_, T, N>) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl<T, const N: usize> core::fmt::Debug for CursorMut<'_, T, N>
where
    T: core::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&*self.list)
            .field(&self.index)
            .finish()
    }
}
