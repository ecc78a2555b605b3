use core::ops::{Index, IndexMut};
use core::slice;

use crate::{ChunkCapacity, Usize};

/// A fixed capacity block holding up to `N` elements.
///
/// The backing buffer is reserved for `N` slots when the chunk is created and it is never
/// grown afterwards, so an element keeps its address for as long as the chunk lives.
pub(crate) struct Chunk<T, const N: usize>
where
    Usize<N>: ChunkCapacity,
{
    items: Vec<T>,
}

impl<T, const N: usize> Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(<Usize<N> as ChunkCapacity>::CAPACITY),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() >= N
    }

    /// Appends `value` and returns a reference to the slot it now occupies.
    ///
    /// The caller guarantees the chunk is not full.
    #[inline]
    pub fn push(&mut self, value: T) -> &mut T {
        self.push_with(|| value)
    }

    /// Constructs the next element in place from `f`.
    ///
    /// The caller guarantees the chunk is not full. If `f` panics the chunk is untouched.
    pub fn push_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        debug_assert!(!self.is_full(), "chunk is full");

        let offset = self.items.len();
        self.items.push(f());
        debug_assert!(self.items.capacity() >= N);

        &mut self.items[offset]
    }

    #[inline]
    pub fn get(&self, offset: usize) -> Option<&T> {
        self.items.get(offset)
    }

    #[inline]
    pub fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.items.get_mut(offset)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T: Clone, const N: usize> Clone for Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        // `Vec::clone` would shrink the buffer to the current length, a partially filled
        // clone must still be able to take `N` elements without reallocating.
        let mut chunk = Self::new();
        chunk.items.extend(self.items.iter().cloned());
        chunk
    }
}

impl<T, const N: usize> Index<usize> for Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Output = T;

    #[inline]
    fn index(&self, offset: usize) -> &Self::Output {
        &self.items[offset]
    }
}

impl<T, const N: usize> IndexMut<usize> for Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    #[inline]
    fn index_mut(&mut self, offset: usize) -> &mut Self::Output {
        &mut self.items[offset]
    }
}

impl<T, const N: usize> IntoIterator for Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Chunk<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T, const N: usize> core::fmt::Debug for Chunk<T, N>
where
    T: core::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Chunk;

    #[test]
    fn chunk_new_is_empty_and_reserves_all_slots() {
        let sut: Chunk<i64, 6> = Chunk::new();
        assert_eq!(sut.len(), 0);
        assert!(!sut.is_full());
        assert!(sut.items.capacity() >= 6);
        assert_eq!(sut.get(0), None);
    }

    #[test]
    fn chunk_push_appends_in_order_until_full() {
        let mut sut: Chunk<i64, 4> = Chunk::new();

        assert_eq!(*sut.push(10), 10);
        assert_eq!(*sut.push(20), 20);
        assert_eq!(*sut.push_with(|| 30), 30);
        assert!(!sut.is_full());

        sut.push(40);
        assert!(sut.is_full());
        assert_eq!(sut.len(), 4);
        assert_eq!(sut.as_slice(), &[10, 20, 30, 40]);

        assert_eq!(sut.get(3), Some(&40));
        assert_eq!(sut.get(4), None);
        assert_eq!(sut[1], 20);

        sut[1] = 25;
        *sut.get_mut(2).unwrap() += 5;
        assert_eq!(sut.as_mut_slice(), &mut [10, 25, 35, 40]);
    }

    #[test]
    fn chunk_push_never_moves_existing_elements() {
        let mut sut: Chunk<String, 8> = Chunk::new();
        let first: *const String = sut.push(String::from("first"));

        for i in 1..8 {
            sut.push(i.to_string());
        }

        assert!(std::ptr::eq(first, &sut[0]));
        assert_eq!(sut[0], "first");
    }

    #[test]
    fn chunk_clone_is_deep_and_keeps_room_for_all_slots() {
        let mut base: Chunk<String, 4> = Chunk::new();
        base.push(String::from("a"));
        base.push(String::from("b"));

        let mut sut = base.clone();
        assert_eq!(sut.as_slice(), base.as_slice());
        assert!(sut.items.capacity() >= 4);

        let first: *const String = &sut[0];
        sut.push(String::from("c"));
        sut.push(String::from("d"));
        assert!(std::ptr::eq(first, &sut[0]));

        sut[0].push('!');
        assert_eq!(base[0], "a");
        assert_eq!(sut[0], "a!");
    }

    #[test]
    fn chunk_push_with_panicking_constructor_leaves_chunk_untouched() {
        let mut sut: Chunk<i32, 2> = Chunk::new();
        sut.push(1);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            sut.push_with(|| panic!("boom"));
        }));
        assert!(result.is_err());
        assert_eq!(sut.as_slice(), &[1]);
    }

    #[test]
    #[cfg(debug_assertions)]
    fn chunk_push_into_full_chunk_is_caught_in_debug_builds() {
        let mut sut: Chunk<i32, 2> = Chunk::new();
        sut.push(1);
        sut.push(2);

        let result = std::panic::catch_unwind(move || {
            sut.push(3);
        });
        assert!(result.is_err());
    }

    #[test]
    fn chunk_iterates_by_value_and_by_mutable_reference() {
        let mut sut: Chunk<i32, 4> = Chunk::new();
        sut.push(1);
        sut.push(2);
        sut.push(3);

        for value in &mut sut {
            *value *= 10;
        }

        assert_eq!(format!("{sut:?}"), "[10, 20, 30]");
        assert_eq!(sut.into_iter().collect::<Vec<_>>(), vec![10, 20, 30]);
    }
}
