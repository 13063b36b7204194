#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(noop_method_call)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::unwrap_used)]

mod buffer;
mod containers;
mod err;
mod hash;

pub use buffer::FixedBuffer;
pub use containers::{HashMap, HashSet};
pub use err::Error;
pub use hash::{FibBuildHasher, FibHasher, HashWord};

#[cfg(not(feature = "std-table"))]
pub use containers::{hashmap_in, hashset_in};

// The allocator contract consumed by the buffer and container types.
// Re-exported so callers can implement or name it without depending on
// allocator-api2 directly.
pub use allocator_api2::alloc::{AllocError, Allocator, Global};
