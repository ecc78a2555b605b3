pub trait Sailed {}

impl<const N: usize> Sailed for crate::Usize<N> {}
