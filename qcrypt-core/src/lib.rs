//!
//! qcrypt-core - Host Value Runtime
//!
//! This crate provides the fundamental types shared between the embedding
//! host and the qcrypt bridge:
//!
//! - `HeapHeader` and `ValTag` for reference-counted tagged heap values
//! - `QVal`, the host's vector/atom value: byte vector, char vector or
//!   integer atom, always carrying an explicit element count
//! - The thread-local error channel through which bridge entry points
//!   report typed failures (type mismatch, unsupported algorithm, ...)
//!
//! Heap values use atomic reference counting. A value's `len` field is
//! authoritative: data may contain zero bytes anywhere and no consumer is
//! permitted to re-measure a buffer by scanning for a terminator.
//!

pub mod error;
pub mod value;

pub use error::*;
pub use value::*;
