//! Hash container aliases for solver state tables
//!
//! One logical map/set type, two interchangeable backends. The default is
//! `hashbrown`'s open-addressing table, which has the cache behavior the hot
//! loops want and accepts an allocator parameter, so every internal bucket
//! allocation can be routed through a caller-supplied allocator. The
//! `std-table` cargo feature swaps the aliases to `std::collections` for
//! debugging and backend comparison.
//!
//! Both backends provide unique keys, the seeded deterministic
//! [`FibBuildHasher`] by default, and key equality via the `Eq + Hash`
//! bounds on `K`. Neither guarantees iteration order; callers must not
//! depend on it, or on any other backend internals.

use crate::hash::FibBuildHasher;

#[cfg(not(feature = "std-table"))]
use allocator_api2::alloc::{Allocator, Global};

/// Unique-key hash map used throughout the solver
///
/// All internal storage is obtained through the allocator parameter `A`.
#[cfg(not(feature = "std-table"))]
pub type HashMap<K, V, S = FibBuildHasher, A = Global> = hashbrown::HashMap<K, V, S, A>;

/// Hash set sharing the map's backend, hasher, and allocator threading
#[cfg(not(feature = "std-table"))]
pub type HashSet<T, S = FibBuildHasher, A = Global> = hashbrown::HashSet<T, S, A>;

/// Construct an empty [`HashMap`] whose buckets live in `alloc`.
///
/// Uses the default deterministic hasher. The map never allocates from
/// anywhere else, including on resize.
#[cfg(not(feature = "std-table"))]
pub fn hashmap_in<K, V, A: Allocator>(alloc: A) -> HashMap<K, V, FibBuildHasher, A> {
    HashMap::with_hasher_in(FibBuildHasher::default(), alloc)
}

/// Construct an empty [`HashSet`] whose buckets live in `alloc`.
#[cfg(not(feature = "std-table"))]
pub fn hashset_in<T, A: Allocator>(alloc: A) -> HashSet<T, FibBuildHasher, A> {
    HashSet::with_hasher_in(FibBuildHasher::default(), alloc)
}

/// Unique-key hash map backed by the standard library table
///
/// The stable `std` collections take no allocator parameter; this backend
/// uses the global allocator.
#[cfg(feature = "std-table")]
pub type HashMap<K, V, S = FibBuildHasher> = std::collections::HashMap<K, V, S>;

/// Hash set sharing the map's backend and hasher
#[cfg(feature = "std-table")]
pub type HashSet<T, S = FibBuildHasher> = std::collections::HashSet<T, S>;
