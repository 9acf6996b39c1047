//! Compile-time capabilities of sequential traversal.
//!
//! A type becomes a sequence by registering a trait table that describes how
//! to walk it with cursors. The crate derives the element types from the
//! table and classifies the type into the capability lattice: multipass,
//! bidirectional, random access, bounded, sized, contiguous, infinite,
//! read-only and writable.

mod adapt;
mod concepts;
mod cursor;
mod element;
mod flags;
mod traits;

pub mod access;
pub mod config;
pub mod impls;

#[cfg(test)]
mod fixtures;

pub use adapt::{AdaptableSequence, ByCopy, ByValue, adapt};
pub use concepts::{
    BidirectionalSequence, BoundedSequence, Capabilities, CommonElementOf, ConstElementOf,
    ContiguousSequence, CursorOf, ElementOf, FlagsOf, InfiniteSequence, KindOf,
    MultipassSequence, RandomAccessSequence, ReadOnlySequence, RvalueElementOf, Sequence,
    SizedSequence, ValueOf, WritableSequenceOf,
};
pub use config::{Distance, Index};
pub use cursor::{Cursor, OrderedCursor, RegularCursor};
pub use element::{
    Category, ElementKind, Lvalue, LvalueKind, MoveAs, Moved, Mut, Prvalue, Proxy, RawPointer,
    ReadValue, Ref, Val, WritableKind,
};
pub use flags::{
    Bool, Defaults, False, FlagSet, SequenceFlags, SinglePass, True, Unbounded,
    UnboundedSinglePass, disables_multipass, is_infinite,
};
pub use impls::{
    iota::{Iota, IotaFrom},
    slice::{Slice, SliceTraits},
};
pub use traits::{
    BidirectionalTraits, BoundedTraits, ContiguousTraits, Describe, RandomAccessTraits,
    SequenceTraits, SizedTraits, TraitsOf,
};
