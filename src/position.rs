use core::cmp::Ordering;

/// A position in a random access sequence.
///
/// Implementors provide the minimal set of operations: reading the index, moving by an
/// offset, measuring the distance to another position and comparing positions. Everything
/// else a random access position offers (stepping, seeking, relational helpers and the
/// `+`, `-`, `+=`, `-=` operators on the cursors of this crate) is derived from that set.
///
/// Positions are only meaningful relative to positions over the same sequence; measuring
/// or ordering positions over different sequences is a logic error.
///
/// # Example
/// ```rust
/// use stable_vector::{Position, StableVector};
///
/// let vector: StableVector<_, 2> = StableVector::from([10, 20, 30, 40]);
///
/// let mut sut = vector.cursor_front();
/// sut.move_next();
/// assert_eq!(sut.index(), 1);
///
/// let previous = sut.post_advance();
/// assert_eq!(previous.current(), Some(&20));
/// assert_eq!(sut.current(), Some(&30));
///
/// sut.seek(-2);
/// assert_eq!(sut.current(), Some(&10));
/// assert!(sut.precedes(&previous));
/// assert_eq!(vector.cursor_end().distance_from(&sut), 4);
/// ```
pub trait Position {
    /// The logical index this position refers to.
    fn index(&self) -> usize;

    /// Moves the position `n` steps towards the end.
    fn advance_by(&mut self, n: usize);

    /// Moves the position `n` steps towards the front.
    ///
    /// Retreating before the first index is a logic error.
    fn retreat_by(&mut self, n: usize);

    /// The signed number of steps from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> isize;

    /// Whether `self` comes strictly before `other`.
    fn precedes(&self, other: &Self) -> bool;

    /// Whether `self` and `other` refer to the same index of the same sequence.
    fn same_as(&self, other: &Self) -> bool;

    #[inline]
    fn move_next(&mut self) {
        self.advance_by(1);
    }

    #[inline]
    fn move_prev(&mut self) {
        self.retreat_by(1);
    }

    /// Steps forward and returns the position held before the step.
    fn post_advance(&mut self) -> Self
    where
        Self: Clone,
    {
        let previous = self.clone();
        self.move_next();
        previous
    }

    /// Steps backward and returns the position held before the step.
    fn post_retreat(&mut self) -> Self
    where
        Self: Clone,
    {
        let previous = self.clone();
        self.move_prev();
        previous
    }

    /// Moves the position by a signed offset.
    fn seek(&mut self, offset: isize) {
        if offset < 0 {
            self.retreat_by(offset.unsigned_abs());
        } else {
            self.advance_by(offset.unsigned_abs());
        }
    }

    #[inline]
    fn advanced(mut self, n: usize) -> Self
    where
        Self: Sized,
    {
        self.advance_by(n);
        self
    }

    #[inline]
    fn retreated(mut self, n: usize) -> Self
    where
        Self: Sized,
    {
        self.retreat_by(n);
        self
    }

    #[inline]
    fn follows(&self, other: &Self) -> bool {
        other.precedes(self)
    }

    #[inline]
    fn precedes_or_same(&self, other: &Self) -> bool {
        !other.precedes(self)
    }

    #[inline]
    fn follows_or_same(&self, other: &Self) -> bool {
        !self.precedes(other)
    }

    fn compare(&self, other: &Self) -> Ordering {
        if self.precedes(other) {
            Ordering::Less
        } else if other.precedes(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Derives `+=`, `-=`, `+` and `-` by `usize` for a cursor type from its [`Position`]
/// implementation.
macro_rules! impl_position_ops {
    ($cursor:ident) => {
        impl<T, const N: usize> core::ops::AddAssign<usize> for $cursor<'_, T, N>
        where
            $crate::Usize<N>: $crate::ChunkCapacity,
        {
            #[inline]
            fn add_assign(&mut self, n: usize) {
                $crate::Position::advance_by(self, n);
            }
        }

        impl<T, const N: usize> core::ops::SubAssign<usize> for $cursor<'_, T, N>
        where
            $crate::Usize<N>: $crate::ChunkCapacity,
        {
            #[inline]
            fn sub_assign(&mut self, n: usize) {
                $crate::Position::retreat_by(self, n);
            }
        }

        impl<T, const N: usize> core::ops::Add<usize> for $cursor<'_, T, N>
        where
            $crate::Usize<N>: $crate::ChunkCapacity,
        {
            type Output = Self;

            #[inline]
            fn add(self, n: usize) -> Self::Output {
                $crate::Position::advanced(self, n)
            }
        }

        impl<T, const N: usize> core::ops::Sub<usize> for $cursor<'_, T, N>
        where
            $crate::Usize<N>: $crate::ChunkCapacity,
        {
            type Output = Self;

            #[inline]
            fn sub(self, n: usize) -> Self::Output {
                $crate::Position::retreated(self, n)
            }
        }
    };
}

pub(crate) use impl_position_ops;
