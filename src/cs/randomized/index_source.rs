use rand::Rng;

/// A source of uniformly distributed positions, used when sampling a collection.
///
/// Every [`rand::Rng`] is an `IndexSource`. Implement it directly to drive
/// sampling from a fixed sequence, e.g. in tests that assert which slot is read.
pub trait IndexSource {
    /// Returns an index in `[0, len)`. Only called with `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
