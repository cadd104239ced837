use oorandom::Rand32;
use tracing::Level as LogLevel;


/// The maximum height of nodes in a [`RankedSkiplist`], and the height of its head.
///
/// With the branching probability of `1/2` used by this crate, one node is generated with this
/// maximum height per approximately half a million entries inserted into the skiplist
/// (on average). Lists of up to about `2^20` entries keep their expected `O(log n)` bounds.
///
/// [`RankedSkiplist`]: crate::RankedSkiplist
pub const MAX_HEIGHT: usize = 20;


/// A simple PRNG trait, used for generating random heights for nodes in a skiplist.
pub(crate) trait Prng32 {
    /// Produces a random `u32` in the range `[0, u32::MAX]`.
    ///
    /// (See [`oorandom::Rand32::rand_u32`]; this function is the same interface.)
    #[must_use]
    fn rand_u32(&mut self) -> u32;
}

impl Prng32 for Rand32 {
    #[inline]
    fn rand_u32(&mut self) -> u32 {
        // Inherent impls take priority over traits, so this is the inherent method
        // of `Rand32` a.k.a. `Self`
        Self::rand_u32(self)
    }
}

/// Return a random value in `1..=MAX_HEIGHT`, in a geometric distribution: a height of `h`
/// (below the cap) has probability `2^-h`.
///
/// Values which would exceed `MAX_HEIGHT` are capped to it.
pub(crate) fn random_node_height<P: Prng32>(prng: &mut P) -> usize {
    let mut height = 1;
    while height < MAX_HEIGHT && prng.rand_u32() % 2 == 0 {
        height += 1;
    }

    if height == MAX_HEIGHT {
        tracing::event!(LogLevel::TRACE, "drew a skiplist node of the maximum height {MAX_HEIGHT}");
    }

    height
}
