//! Trait tables and their resolution.
//!
//! A trait table is a type implementing [`SequenceTraits<S>`] for the
//! sequence type `S`. It is attached to `S` in one of two ways:
//!
//! - self registration: `S` implements `SequenceTraits<S>` itself and the
//!   blanket [`Describe`] impl picks it up;
//! - external registration: a separate descriptor implements
//!   `SequenceTraits<S>` and `impl Describe for S { type Traits = D; }`
//!   attaches it. This is the only way to register a foreign type.
//!
//! Coherence guarantees at most one table per type.

use crate::config::Distance;
use crate::cursor::Cursor;
use crate::element::{ElementKind, RawPointer};
use crate::flags::SequenceFlags;

pub trait SequenceTraits<S: ?Sized> {
    type Cursor: Cursor;
    type Value: ?Sized;
    type Kind: ElementKind<Self::Value>;
    type Flags: SequenceFlags;

    fn first(seq: &mut S) -> Self::Cursor;

    fn is_last(seq: &mut S, cur: &Self::Cursor) -> bool;

    fn read_at<'a>(
        seq: &'a mut S,
        cur: &Self::Cursor,
    ) -> <Self::Kind as ElementKind<Self::Value>>::Element<'a>
    where
        Self::Value: 'a;

    /// Defaults to converting the result of `read_at`.
    fn move_at<'a>(
        seq: &'a mut S,
        cur: &Self::Cursor,
    ) -> <Self::Kind as ElementKind<Self::Value>>::Rvalue<'a>
    where
        Self::Value: 'a,
    {
        <Self::Kind as ElementKind<Self::Value>>::into_rvalue(Self::read_at(seq, cur))
    }

    fn inc(seq: &mut S, cur: &mut Self::Cursor);
}

pub trait BidirectionalTraits<S: ?Sized>: SequenceTraits<S> {
    fn dec(seq: &mut S, cur: &mut Self::Cursor);
}

pub trait RandomAccessTraits<S: ?Sized>: BidirectionalTraits<S> {
    fn inc_by(seq: &mut S, cur: &mut Self::Cursor, offset: Distance);

    fn distance(seq: &mut S, from: &Self::Cursor, to: &Self::Cursor) -> Distance;
}

pub trait BoundedTraits<S: ?Sized>: SequenceTraits<S> {
    /// The cursor one past the final element.
    fn last(seq: &mut S) -> Self::Cursor;
}

/// Tables of sequences with a known element count.
///
/// Implemented automatically for random access and bounded tables as the
/// distance from `first` to `last`. Other tables implement it by hand.
pub trait SizedTraits<S: ?Sized>: SequenceTraits<S> {
    fn size(seq: &mut S) -> Distance;
}

impl<S, T> SizedTraits<S> for T
where
    S: ?Sized,
    T: RandomAccessTraits<S> + BoundedTraits<S>,
{
    #[inline(always)]
    fn size(seq: &mut S) -> Distance {
        let first = T::first(seq);
        let last = T::last(seq);
        T::distance(seq, &first, &last)
    }
}

/// Tables of sequences stored as one contiguous run of values.
///
/// # Safety
///
/// `data` must return a pointer to the element at `first`, valid for reads
/// of `size` consecutive values for as long as the sequence is not moved or
/// mutated through another path, and the element at any cursor `c` must be
/// the value at offset `distance(first, c)` from it. The sequence is only
/// contiguous when `Kind` is an `LvalueKind` with the same `Pointer`.
pub unsafe trait ContiguousTraits<S: ?Sized>: RandomAccessTraits<S> + BoundedTraits<S> {
    type Pointer: RawPointer<Self::Value>;

    fn data(seq: &mut S) -> Self::Pointer;
}

/// Resolves a type to its trait table.
pub trait Describe {
    type Traits: ?Sized + SequenceTraits<Self>;
}

impl<T: ?Sized + SequenceTraits<T>> Describe for T {
    type Traits = T;
}

pub type TraitsOf<S> = <S as Describe>::Traits;
