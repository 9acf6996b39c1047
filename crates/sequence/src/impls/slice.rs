//! Slices and read-only slice views.

use std::fmt;

use crate::config::{Distance, Index, check_dec, check_inc, check_offset, check_read};
use crate::element::{Mut, Ref};
use crate::flags::Defaults;
use crate::traits::{
    BidirectionalTraits, BoundedTraits, ContiguousTraits, Describe, RandomAccessTraits,
    SequenceTraits,
};

#[inline(always)]
fn len_of<T>(items: &[T]) -> Index {
    items.len() as Index
}

/// Trait table of `[T]`: unique-reference elements addressed by index.
pub enum SliceTraits {}

impl<T> Describe for [T] {
    type Traits = SliceTraits;
}

impl<T> SequenceTraits<[T]> for SliceTraits {
    type Cursor = Index;
    type Value = T;
    type Kind = Mut;
    type Flags = Defaults;

    #[inline(always)]
    fn first(_: &mut [T]) -> Index {
        0
    }

    #[inline(always)]
    fn is_last(seq: &mut [T], cur: &Index) -> bool {
        *cur == len_of(seq)
    }

    #[inline(always)]
    #[track_caller]
    fn read_at<'a>(seq: &'a mut [T], cur: &Index) -> &'a mut T
    where
        T: 'a,
    {
        check_read(*cur, len_of(seq));
        &mut seq[*cur as usize]
    }

    #[inline(always)]
    #[track_caller]
    fn inc(seq: &mut [T], cur: &mut Index) {
        check_inc(*cur, len_of(seq));
        *cur += 1;
    }
}

impl<T> BidirectionalTraits<[T]> for SliceTraits {
    #[inline(always)]
    #[track_caller]
    fn dec(_: &mut [T], cur: &mut Index) {
        check_dec(*cur, 0);
        *cur -= 1;
    }
}

impl<T> RandomAccessTraits<[T]> for SliceTraits {
    #[inline(always)]
    #[track_caller]
    fn inc_by(seq: &mut [T], cur: &mut Index, offset: Distance) {
        check_offset(*cur, offset, 0, len_of(seq));
        *cur += offset;
    }

    #[inline(always)]
    fn distance(_: &mut [T], from: &Index, to: &Index) -> Distance {
        to - from
    }
}

impl<T> BoundedTraits<[T]> for SliceTraits {
    #[inline(always)]
    fn last(seq: &mut [T]) -> Index {
        len_of(seq)
    }
}

// SAFETY: the cursor is the offset from the start of the slice.
unsafe impl<T> ContiguousTraits<[T]> for SliceTraits {
    type Pointer = *mut T;

    #[inline(always)]
    fn data(seq: &mut [T]) -> *mut T {
        seq.as_mut_ptr()
    }
}

/// A shared view of a slice. Elements are shared references, so the view is
/// read-only, and it is `Copy`, so adaptors may store it from a borrow.
pub struct Slice<'s, T> {
    items: &'s [T],
}

impl<'s, T> Slice<'s, T> {
    pub fn new(items: &'s [T]) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &'s [T] {
        self.items
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slice").field(&self.items).finish()
    }
}

impl<'s, T> From<&'s [T]> for Slice<'s, T> {
    fn from(items: &'s [T]) -> Self {
        Self::new(items)
    }
}

impl<'s, T> SequenceTraits<Slice<'s, T>> for Slice<'s, T> {
    type Cursor = Index;
    type Value = T;
    type Kind = Ref;
    type Flags = Defaults;

    #[inline(always)]
    fn first(_: &mut Self) -> Index {
        0
    }

    #[inline(always)]
    fn is_last(seq: &mut Self, cur: &Index) -> bool {
        *cur == len_of(seq.items)
    }

    #[inline(always)]
    #[track_caller]
    fn read_at<'a>(seq: &'a mut Self, cur: &Index) -> &'a T
    where
        T: 'a,
    {
        check_read(*cur, len_of(seq.items));
        &seq.items[*cur as usize]
    }

    #[inline(always)]
    #[track_caller]
    fn inc(seq: &mut Self, cur: &mut Index) {
        check_inc(*cur, len_of(seq.items));
        *cur += 1;
    }
}

impl<'s, T> BidirectionalTraits<Slice<'s, T>> for Slice<'s, T> {
    #[inline(always)]
    #[track_caller]
    fn dec(_: &mut Self, cur: &mut Index) {
        check_dec(*cur, 0);
        *cur -= 1;
    }
}

impl<'s, T> RandomAccessTraits<Slice<'s, T>> for Slice<'s, T> {
    #[inline(always)]
    #[track_caller]
    fn inc_by(seq: &mut Self, cur: &mut Index, offset: Distance) {
        check_offset(*cur, offset, 0, len_of(seq.items));
        *cur += offset;
    }

    #[inline(always)]
    fn distance(_: &mut Self, from: &Index, to: &Index) -> Distance {
        to - from
    }
}

impl<'s, T> BoundedTraits<Slice<'s, T>> for Slice<'s, T> {
    #[inline(always)]
    fn last(seq: &mut Self) -> Index {
        len_of(seq.items)
    }
}

// SAFETY: the cursor is the offset from the start of the viewed slice.
unsafe impl<'s, T> ContiguousTraits<Slice<'s, T>> for Slice<'s, T> {
    type Pointer = *const T;

    #[inline(always)]
    fn data(seq: &mut Self) -> *const T {
        seq.items.as_ptr()
    }
}
