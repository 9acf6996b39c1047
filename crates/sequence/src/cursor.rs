//! Requirements on cursor values.
//!
//! A cursor is an opaque position handed back to the sequence that produced
//! it. Single-pass traversal only moves cursors around; multipass traversal
//! saves and compares them; random access orders them.

/// Any movable value can serve as a single-pass cursor.
pub trait Cursor: Sized {}

impl<T> Cursor for T {}

pub trait RegularCursor: Cursor + Clone + Eq {}

impl<T: Clone + Eq> RegularCursor for T {}

pub trait OrderedCursor: RegularCursor + Ord {}

impl<T: Clone + Ord> OrderedCursor for T {}
