//! Multiplicative integer mixing and the incremental hasher built on it
//!
//! Solver runs must be reproducible, so container hashing cannot depend on
//! per-process randomness. The mixer here is the classic rotate-xor-multiply
//! step with a golden-ratio-derived odd multiplier per word width: cheap
//! enough for hot loops, well distributed for machine integers, and a pure
//! function of its inputs.
//!
//! State widths are restricted to 32 and 64 bits at compile time through the
//! sealed [`HashWord`] trait. The 64-bit variant also implements
//! [`core::hash::Hasher`] so it can drive the container family in
//! [`crate::containers`].

use num_traits::{AsPrimitive, PrimInt, WrappingMul};
use std::hash::{BuildHasher, Hasher};

/// Prevents downstream [`HashWord`] impls for unsupported state widths.
mod sealed {
    /// Implemented for the two supported hash state types only.
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned state words the hasher can mix over
///
/// Implemented for exactly `u32` and `u64`; any other state width fails to
/// compile. Rotation and wrapping arithmetic come from the `num_traits`
/// supertraits, the per-width multiplier constant lives here.
pub trait HashWord: sealed::Sealed + PrimInt + WrappingMul + 'static {
    /// Odd multiplicative constant derived from the golden ratio,
    /// sized to the word width
    const FIBONACCI: Self;
}

impl HashWord for u32 {
    const FIBONACCI: u32 = 0x9e37_79b9;
}

impl HashWord for u64 {
    const FIBONACCI: u64 = 0x9e37_79b9_7f4a_7c15;
}

/// Incremental hasher over a sequence of machine integers
///
/// The state is updated once per appended value:
/// `state = (rotl(state, 5) ^ value).wrapping_mul(FIBONACCI)`.
///
/// Identical seeds and identical append sequences always produce identical
/// results, and the mix is order-sensitive: `[1, 2]` and `[2, 1]` hash
/// differently. There is no hidden randomness anywhere in the state.
#[derive(Debug, Clone)]
pub struct FibHasher<W: HashWord = u64> {
    /// Running hash state, reported verbatim by [`Self::value`]
    state: W,
}

impl<W: HashWord> FibHasher<W> {
    /// Bit rotation applied to the state ahead of each mix
    pub const ROTATE: u32 = 5;

    /// Start a new hash computation from the default seed of zero.
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_seed(W::zero())
    }

    /// Start a new hash computation from an explicit seed.
    #[inline(always)]
    pub fn with_seed(seed: W) -> Self {
        Self { state: seed }
    }

    /// Mix one integer value into the state.
    ///
    /// Accepts any primitive integer type. The value is converted to the
    /// state width with `as` semantics: narrow signed inputs sign-extend,
    /// wide inputs truncate.
    #[inline(always)]
    pub fn add<V: AsPrimitive<W>>(&mut self, value: V) {
        self.state = (self.state.rotate_left(Self::ROTATE) ^ value.as_()).wrapping_mul(&W::FIBONACCI);
    }

    /// Current hash of the sequence appended so far.
    ///
    /// Read-only; may be called between [`Self::add`] calls.
    #[inline(always)]
    pub fn value(&self) -> W {
        self.state
    }
}

impl<W: HashWord> Default for FibHasher<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FibHasher<u64> {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.value()
    }

    /// Mix a byte stream, one native-endian word at a time.
    ///
    /// Full 8-byte chunks take the same mixing step as [`FibHasher::add`]
    /// of the corresponding `u64`; trailing bytes are mixed individually.
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(8);
        for chunk in &mut chunks {
            let word = u64::from_ne_bytes(chunk.try_into().expect("exact chunks have length 8"));
            self.add(word);
        }
        for &byte in chunks.remainder() {
            self.add(byte);
        }
    }

    #[inline(always)]
    fn write_u8(&mut self, i: u8) {
        self.add(i);
    }

    #[inline(always)]
    fn write_u16(&mut self, i: u16) {
        self.add(i);
    }

    #[inline(always)]
    fn write_u32(&mut self, i: u32) {
        self.add(i);
    }

    #[inline(always)]
    fn write_u64(&mut self, i: u64) {
        self.add(i);
    }

    #[inline(always)]
    fn write_usize(&mut self, i: usize) {
        self.add(i);
    }
}

/// Seeded [`BuildHasher`] for the container family
///
/// The default seed is zero, so maps and sets hash identically across
/// processes and runs. An explicit seed produces an alternate but equally
/// deterministic hash stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FibBuildHasher {
    /// Initial state handed to each new hasher
    seed: u64,
}

impl FibBuildHasher {
    /// Build hashers that start from `seed` instead of zero.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl BuildHasher for FibBuildHasher {
    type Hasher = FibHasher<u64>;

    #[inline(always)]
    fn build_hasher(&self) -> FibHasher<u64> {
        FibHasher::with_seed(self.seed)
    }
}
