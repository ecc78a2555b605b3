//! # stable_vector
//!
//! `stable_vector` implements an append-only sequence whose elements **never move** once
//! they have been inserted, while still offering constant time indexed access.
//!
//! ## Features
//! - Chunked storage: elements live in independently allocated chunks of `N` slots each,
//!   growing the vector only ever allocates a new chunk and never relocates old ones.
//! - Reference stability: the address of an element stays valid for the whole lifetime of
//!   the vector, no matter how many elements are appended afterwards.
//! - Constant time indexing: index `i` lives in chunk `i / N` at offset `i % N`.
//! - Random access positions (`Cursor` and `CursorMut`) that resolve through indexing
//!   instead of caching addresses, so they stay usable while the vector grows.
//!
//! ## Use Cases
//! `stable_vector` is ideal for scenarios where:
//! - Other code keeps raw pointers or handles into the collection while it keeps growing
//!   (observer lists, interned records, arenas of long lived objects).
//! - Elements are only ever appended.
//!
//! ## Example
//! ```rust
//! use stable_vector::StableVector;
//!
//! let mut vector: StableVector<i64, 4> = StableVector::new();
//! vector.push_back(1);
//!
//! let first: *const i64 = &vector[0];
//! vector.extend(2..=100);
//!
//! assert!(std::ptr::eq(first, &vector[0]));
//! assert_eq!(vector.len(), 100);
//! assert_eq!(vector.capacity(), 100);
//! assert_eq!(vector.at(99), Ok(&100));
//! assert!(vector.at(100).is_err());
//! ```

mod chunk;
mod cursor;
mod cursor_mut;
mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod position;
mod sailed;

pub use cursor::Cursor;
pub use cursor_mut::CursorMut;
pub use error::OutOfRange;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use position::Position;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::chunk::Chunk;

/// The chunk capacity used when none is given explicitly.
pub const DEFAULT_CHUNK_SIZE: usize = 512;

pub enum Usize<const N: usize> {}

/// Marks the chunk capacities a [`StableVector`] accepts.
///
/// The capacity must be non-zero and a multiple of two, a violation is reported when the
/// vector type is first used.
///
/// ```compile_fail
/// use stable_vector::StableVector;
///
/// let vector: StableVector<i32, 3> = StableVector::new();
/// ```
pub trait ChunkCapacity: crate::sailed::Sailed {
    const CAPACITY: usize;
}

impl<const N: usize> ChunkCapacity for Usize<N> {
    const CAPACITY: usize = {
        assert!(N > 0, "chunk capacity must be greater than zero");
        assert!(N % 2 == 0, "chunk capacity must be a multiple of two");
        N
    };
}

/// An append-only vector whose elements keep their address for as long as it lives.
///
/// # Features
/// - **Chunked Storage**: Each chunk holds up to `N` elements in its own heap allocation;
///   the directory of chunks may grow but the chunks themselves never move their contents.
/// - **Indexed Access**: Index based lookups in constant time.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the vector.
/// - `N`: The number of elements each chunk can hold, an even number, `512` by default.
///
/// # Example
/// ```rust
/// use stable_vector::StableVector;
///
/// let mut vector: StableVector<i64, 4> = StableVector::new();
/// vector.push_back(1);
/// vector.push_back(2);
/// *vector.emplace_back(|| 3) += 1;
///
/// assert!(!vector.is_empty());
/// assert_eq!(vector.len(), 3);
/// assert_eq!(vector, [1, 2, 4]);
/// ```
pub struct StableVector<T, const N: usize = DEFAULT_CHUNK_SIZE>
where
    Usize<N>: ChunkCapacity,
{
    chunks: Vec<Chunk<T, N>>,
    len: usize,
}

impl<T, const N: usize, const M: usize> From<[T; M]> for StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<&[T]> for StableVector<T, N>
where
    T: Clone,
    Usize<N>: ChunkCapacity,
{
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T, const N: usize> From<Vec<T>> for StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> FromIterator<T> for StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T, const N: usize> Extend<T> for StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        let (lower, _) = iter.size_hint();
        self.reserve(self.len.saturating_add(lower));

        iter.for_each(|value| self.push_back(value));
    }
}

impl<'a, T, const N: usize> Extend<&'a T> for StableVector<T, N>
where
    T: Clone,
    Usize<N>: ChunkCapacity,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize> Default for StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    /// The number of elements each chunk holds.
    pub const CHUNK_SIZE: usize = <Usize<N> as ChunkCapacity>::CAPACITY;

    /// Creates a new, empty `StableVector` with no elements and no allocated chunks.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let vector: StableVector<i64, 6> = StableVector::new();
    ///
    /// assert!(vector.is_empty());
    /// assert_eq!(vector.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        let _ = Self::CHUNK_SIZE;

        Self {
            chunks: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty `StableVector` with room for at least `capacity` elements.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let vector: StableVector<i64, 4> = StableVector::with_capacity(5);
    ///
    /// assert!(vector.is_empty());
    /// assert_eq!(vector.capacity(), 8);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let mut this = Self::new();
        this.reserve(capacity);
        this
    }

    /// Creates a `StableVector` holding `count` clones of `value`.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let vector: StableVector<&str, 2> = StableVector::from_elem("x", 3);
    ///
    /// assert_eq!(vector, ["x", "x", "x"]);
    /// ```
    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        std::iter::repeat_n(value, count).collect()
    }

    /// Creates a `StableVector` holding `count` default constructed elements.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let vector: StableVector<u8, 2> = StableVector::with_default(3);
    ///
    /// assert_eq!(vector, [0, 0, 0]);
    /// ```
    pub fn with_default(count: usize) -> Self
    where
        T: Default,
    {
        let mut this = Self::with_capacity(count);
        for _ in 0..count {
            this.emplace_back(T::default);
        }
        this
    }

    /// Adds an element to the back of the `StableVector`.
    ///
    /// If the current chunk is full, a new one will be allocated to
    /// accommodate the element. Existing elements are never moved.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 2> = StableVector::new();
    /// vector.push_back(10);
    /// vector.push_back(20);
    /// vector.push_back(30);
    ///
    /// assert_eq!(vector.len(), 3);
    /// assert_eq!(vector.chunk_count(), 2);
    /// assert_eq!(vector, [10, 20, 30]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        let chunk_index = self.current_chunk_index();
        self.chunks[chunk_index].push(value);
        self.len += 1;
    }

    /// Constructs a new element at the back of the `StableVector` from `f` and returns a
    /// reference to it.
    ///
    /// If `f` panics the vector keeps its previous elements, though a fresh chunk may
    /// already have been allocated for the element.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<String, 2> = StableVector::new();
    /// vector.emplace_back(|| String::from("hello")).push_str(", world");
    ///
    /// assert_eq!(vector[0], "hello, world");
    /// ```
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let chunk_index = self.current_chunk_index();
        let value = self.chunks[chunk_index].push_with(f);
        self.len += 1;
        value
    }

    /// Makes sure the `StableVector` can hold at least `new_capacity` elements by
    /// appending empty chunks. It never shrinks and never initializes elements.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 4> = StableVector::new();
    /// vector.reserve(9);
    /// assert_eq!(vector.capacity(), 12);
    ///
    /// vector.reserve(2);
    /// assert_eq!(vector.capacity(), 12);
    /// assert!(vector.is_empty());
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        let missing = new_capacity.saturating_sub(self.capacity()).div_ceil(N);
        if missing == 0 {
            return;
        }

        tracing::debug!(
            chunks = missing,
            capacity = new_capacity,
            chunk_size = N,
            "reserving chunks"
        );

        self.chunks.reserve(missing);
        for _ in 0..missing {
            self.add_chunk();
        }
    }

    /// Returns a reference to the element at the specified index, if any.
    ///
    /// # Examples
    /// ```
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 4> = StableVector::new();
    /// vector.push_back(10);
    /// vector.push_back(20);
    ///
    /// assert_eq!(vector.get(0), Some(&10));
    /// assert_eq!(vector.get(1), Some(&20));
    /// assert_eq!(vector.get(2), None); // Out of bounds
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.chunks.get(index / N)?.get(index % N)
    }

    /// Returns a mutable reference to the element at the specified index, if any.
    ///
    /// # Examples
    /// ```
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 4> = StableVector::new();
    /// vector.push_back(10);
    ///
    /// *vector.get_mut(0).unwrap() += 1;
    /// assert_eq!(vector.get_mut(0), Some(&mut 11));
    /// assert_eq!(vector.get_mut(1), None); // Out of bounds
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.chunks.get_mut(index / N)?.get_mut(index % N)
    }

    /// Returns a reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](StableVector::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees `index < len`, so the chunk exists and holds the
        // offset.
        unsafe {
            self.chunks
                .get_unchecked(index / N)
                .as_slice()
                .get_unchecked(index % N)
        }
    }

    /// Returns a mutable reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](StableVector::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: see `get_unchecked`.
        unsafe {
            self.chunks
                .get_unchecked_mut(index / N)
                .as_mut_slice()
                .get_unchecked_mut(index % N)
        }
    }

    /// Returns a reference to the element at `index`, or an [`OutOfRange`] error when
    /// `index` is not below the length.
    ///
    /// # Examples
    /// ```
    /// use stable_vector::{OutOfRange, StableVector};
    ///
    /// let vector: StableVector<i64, 2> = StableVector::from([1, 2, 3]);
    ///
    /// assert_eq!(vector.at(2), Ok(&3));
    /// assert_eq!(vector.at(3), Err(OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.get(index).ok_or(OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `index`, or an [`OutOfRange`] error
    /// when `index` is not below the length.
    ///
    /// # Examples
    /// ```
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 2> = StableVector::from([1, 2, 3]);
    ///
    /// *vector.at_mut(0)? = 7;
    /// assert_eq!(vector, [7, 2, 3]);
    /// assert!(vector.at_mut(3).is_err());
    /// # Ok::<(), stable_vector::OutOfRange>(())
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.get_mut(index).ok_or(OutOfRange { index, len })
    }

    /// Returns a reference to the first element of the `StableVector`, if any.
    ///
    /// # Examples
    /// ```
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 2> = StableVector::new();
    /// assert_eq!(vector.front(), None);
    ///
    /// vector.push_back(10);
    /// vector.push_back(20);
    /// assert_eq!(vector.front(), Some(&10));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the first element of the `StableVector`, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the last element of the `StableVector`, if any.
    ///
    /// # Examples
    /// ```
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 2> = StableVector::new();
    /// assert_eq!(vector.back(), None);
    ///
    /// vector.push_back(10);
    /// vector.push_back(20);
    /// vector.push_back(30);
    /// assert_eq!(vector.back(), Some(&30));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Returns a mutable reference to the last element of the `StableVector`, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.checked_sub(1)?)
    }

    /// Returns the number of elements currently stored in the `StableVector`.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 6> = StableVector::new();
    /// vector.push_back(1);
    /// vector.push_back(2);
    ///
    /// assert_eq!(vector.len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `StableVector` holds no elements, reserved chunks notwithstanding.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 6> = StableVector::with_capacity(6);
    /// assert!(vector.is_empty());
    ///
    /// vector.push_back(1);
    /// assert!(!vector.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the allocated chunks can hold.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<i64, 4> = StableVector::new();
    /// vector.extend(1..=10);
    ///
    /// assert_eq!(vector.capacity(), 12);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.chunks.len() * N
    }

    /// Returns the number of elements each chunk holds.
    #[inline]
    pub const fn chunk_size(&self) -> usize {
        Self::CHUNK_SIZE
    }

    /// Returns the number of allocated chunks, reserved ones included.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns an upper bound on the number of elements; the allocator gives out long
    /// before this is reached.
    #[inline]
    pub const fn max_len(&self) -> usize {
        let size = size_of::<T>();
        if size == 0 {
            usize::MAX
        } else {
            isize::MAX as usize / size
        }
    }

    /// Swaps the contents of two vectors in constant time. No element is moved.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::StableVector;
    ///
    /// let mut a: StableVector<i64, 2> = StableVector::from([1, 2, 3]);
    /// let mut b: StableVector<i64, 2> = StableVector::from([4]);
    /// let first: *const i64 = &a[0];
    ///
    /// a.swap(&mut b);
    ///
    /// assert_eq!(a, [4]);
    /// assert_eq!(b, [1, 2, 3]);
    /// assert!(std::ptr::eq(first, &b[0]));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Provides an iterator over the vector's elements.
    ///
    /// # Examples
    /// ```
    /// use stable_vector::StableVector;
    ///
    /// let vector: StableVector<_, 2> = StableVector::from([0, 1, 2]);
    ///
    /// let mut iter = vector.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over the vector's elements.
    ///
    /// # Examples
    /// ```
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<_, 2> = StableVector::from([0, 1, 2]);
    ///
    /// vector.iter_mut().for_each(|value| *value *= 2);
    /// assert_eq!(vector, [0, 2, 4]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::from_list(self)
    }

    /// Provides an iterator over the occupied chunks, each one as a slice.
    ///
    /// # Examples
    /// ```
    /// use stable_vector::StableVector;
    ///
    /// let mut vector: StableVector<_, 2> = StableVector::with_capacity(8);
    /// vector.extend([0, 1, 2]);
    ///
    /// let chunks: Vec<&[i32]> = vector.chunks().collect();
    /// assert_eq!(chunks, [&[0, 1][..], &[2][..]]);
    /// ```
    pub fn chunks(&self) -> impl ExactSizeIterator<Item = &[T]> + DoubleEndedIterator {
        self.chunks[..self.len.div_ceil(N)]
            .iter()
            .map(Chunk::as_slice)
    }

    /// Provides a cursor at the element with the given index, or at the end position if
    /// `index` is not below the length.
    #[inline]
    pub fn cursor(&self, index: usize) -> Cursor<'_, T, N> {
        Cursor::new(self, index.min(self.len))
    }

    /// Provides a cursor at the front element; the end position if the vector is empty.
    ///
    /// # Example
    /// ```rust
    /// use stable_vector::{Position, StableVector};
    ///
    /// let vector: StableVector<_, 2> = StableVector::from([1, 2, 3]);
    ///
    /// let begin = vector.cursor_front();
    /// let end = vector.cursor_end();
    /// assert_eq!(end - begin, 3);
    /// assert_eq!((begin + 2).current(), Some(&3));
    /// assert_eq!(end.current(), None);
    /// ```
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, 0)
    }

    /// Provides a cursor one past the last element.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.len)
    }

    /// Provides a mutable cursor at the element with the given index, or at the end
    /// position if `index` is not below the length.
    #[inline]
    pub fn cursor_mut(&mut self, index: usize) -> CursorMut<'_, T, N> {
        let index = index.min(self.len);
        CursorMut::new(self, index)
    }

    /// Provides a mutable cursor at the front element; the end position if the vector is
    /// empty.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut::new(self, 0)
    }

    /// Provides a mutable cursor one past the last element.
    #[inline]
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T, N> {
        let len = self.len;
        CursorMut::new(self, len)
    }

    /// Returns the index of the chunk the next element goes into, allocating it if needed.
    fn current_chunk_index(&mut self) -> usize {
        let chunk_index = self.len / N;
        if chunk_index >= self.chunks.len() {
            self.add_chunk();
        }

        chunk_index
    }

    #[cold]
    fn add_chunk(&mut self) {
        tracing::trace!(chunk = self.chunks.len(), chunk_size = N, "allocating chunk");
        self.chunks.push(Chunk::new());
    }
}

/// Swaps the contents of two vectors in constant time. See [`StableVector::swap`].
#[inline]
pub fn swap<T, const N: usize>(a: &mut StableVector<T, N>, b: &mut StableVector<T, N>)
where
    Usize<N>: ChunkCapacity,
{
    a.swap(b);
}

#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<T, const N: usize> Index<usize> for StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, self.len),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T: Clone, const N: usize> Clone for StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
            len: self.len,
        }
    }
}

impl<T, const N: usize, const M: usize> PartialEq<[T; M]> for StableVector<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const N: usize> PartialEq<&[T]> for StableVector<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, const N: usize> PartialEq<[T]> for StableVector<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const N: usize> PartialEq for StableVector<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const N: usize> Eq for StableVector<T, N>
where
    T: Eq,
    Usize<N>: ChunkCapacity,
{
}

impl<T, const N: usize> PartialOrd for StableVector<T, N>
where
    T: PartialOrd,
    Usize<N>: ChunkCapacity,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T, const N: usize> Ord for StableVector<T, N>
where
    T: Ord,
    Usize<N>: ChunkCapacity,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T, const N: usize> Hash for StableVector<T, N>
where
    T: Hash,
    Usize<N>: ChunkCapacity,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T, const N: usize> std::fmt::Debug for StableVector<T, N>
where
    T: std::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> IntoIterator for StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StableVector<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub(crate) mod test_utils {
    /// Initialize a tracing subscriber for tests, `RUST_LOG` overrides the `trace` default.
    /// Call this at the start of tests where you want to see chunk allocations.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
