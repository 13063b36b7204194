//! Error types for the `solvx` crate

/// Errors surfaced while constructing allocator-backed storage
///
/// Element access and hashing are total and have no error path; the only
/// fallible operations in this crate are the ones that ask an allocator
/// for memory.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested element count does not describe a valid allocation.
    ///
    /// Computing the array layout for the requested length overflowed
    /// `isize::MAX` bytes. No allocator call was made.
    #[error("requested buffer length overflows the maximum allocation size")]
    Capacity,

    /// The allocator declined to provide the requested block.
    ///
    /// Construction was abandoned with no memory retained; the caller may
    /// retry with reduced demand or give up. No partially constructed
    /// buffer is observable.
    #[error("allocator failed to provide {bytes} bytes of storage")]
    Alloc {
        /// Size of the refused request, in bytes
        bytes: usize,
    },
}
