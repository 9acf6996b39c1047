//! Free traversal functions.
//!
//! Each function forwards to the capability that provides it. They read
//! better than method calls in generic code and avoid collisions with
//! inherent methods of the same name (`<[T]>::first`, `<[T]>::last`).

use crate::concepts::{
    BidirectionalSequence, BoundedSequence, ContiguousSequence, ElementOf, MultipassSequence,
    RandomAccessSequence, RvalueElementOf, Sequence, SizedSequence,
};
use crate::config::Distance;
use crate::element::{ReadValue, RawPointer};
use crate::flags::is_infinite;

#[inline(always)]
pub fn first<S: ?Sized + Sequence>(seq: &mut S) -> S::Cursor {
    seq.first()
}

#[inline(always)]
pub fn is_last<S: ?Sized + Sequence>(seq: &mut S, cur: &S::Cursor) -> bool {
    seq.is_last(cur)
}

#[inline(always)]
pub fn read_at<'a, S>(seq: &'a mut S, cur: &S::Cursor) -> ElementOf<'a, S>
where
    S: ?Sized + Sequence,
    S::Value: 'a,
{
    seq.read_at(cur)
}

#[inline(always)]
pub fn move_at<'a, S>(seq: &'a mut S, cur: &S::Cursor) -> RvalueElementOf<'a, S>
where
    S: ?Sized + Sequence,
    S::Value: 'a,
{
    seq.move_at(cur)
}

/// Reads the element at `cur` as an owned value.
#[inline(always)]
pub fn read_value<S>(seq: &mut S, cur: &S::Cursor) -> S::Value
where
    S: ?Sized + Sequence<Value: Sized>,
    S::Kind: ReadValue<S::Value>,
{
    let element = seq.read_at(cur);
    S::Kind::read_value(&element)
}

#[inline(always)]
pub fn inc<'c, S: ?Sized + Sequence>(seq: &mut S, cur: &'c mut S::Cursor) -> &'c mut S::Cursor {
    seq.inc(cur);
    cur
}

#[inline(always)]
pub fn dec<'c, S: ?Sized + BidirectionalSequence>(
    seq: &mut S,
    cur: &'c mut S::Cursor,
) -> &'c mut S::Cursor {
    seq.dec(cur);
    cur
}

#[inline(always)]
pub fn inc_by<'c, S: ?Sized + RandomAccessSequence>(
    seq: &mut S,
    cur: &'c mut S::Cursor,
    offset: Distance,
) -> &'c mut S::Cursor {
    seq.inc_by(cur, offset);
    cur
}

#[inline(always)]
pub fn distance<S: ?Sized + RandomAccessSequence>(
    seq: &mut S,
    from: &S::Cursor,
    to: &S::Cursor,
) -> Distance {
    seq.distance(from, to)
}

/// The cursor past the final element.
///
/// A sequence declaring itself both bounded and infinite is rejected at
/// compile time.
///
/// ```compile_fail
/// use sequence::{BoundedTraits, SequenceTraits, Unbounded, Val, access};
///
/// struct Clock;
///
/// impl SequenceTraits<Clock> for Clock {
///     type Cursor = u32;
///     type Value = u32;
///     type Kind = Val;
///     type Flags = Unbounded;
///
///     fn first(_: &mut Clock) -> u32 {
///         0
///     }
///
///     fn is_last(_: &mut Clock, _: &u32) -> bool {
///         false
///     }
///
///     fn read_at<'a>(_: &'a mut Clock, cur: &u32) -> u32
///     where
///         Self::Value: 'a,
///     {
///         cur % 12
///     }
///
///     fn inc(_: &mut Clock, cur: &mut u32) {
///         *cur += 1;
///     }
/// }
///
/// impl BoundedTraits<Clock> for Clock {
///     fn last(_: &mut Clock) -> u32 {
///         12
///     }
/// }
///
/// access::last(&mut Clock);
/// ```
#[inline(always)]
pub fn last<S: ?Sized + BoundedSequence>(seq: &mut S) -> S::Cursor {
    const {
        assert!(
            !is_infinite::<S::Flags>(),
            "an infinite sequence cannot be bounded"
        )
    };
    seq.last()
}

#[inline(always)]
pub fn data<S: ?Sized + ContiguousSequence>(seq: &mut S) -> *const S::Value {
    seq.data().as_const_ptr()
}

/// The number of elements.
///
/// Rejected at compile time for sequences declaring themselves infinite.
///
/// ```compile_fail
/// use sequence::{BoundedTraits, Distance, SequenceTraits, SizedTraits, Unbounded, Val, access};
///
/// struct Clock;
///
/// impl SequenceTraits<Clock> for Clock {
///     type Cursor = u32;
///     type Value = u32;
///     type Kind = Val;
///     type Flags = Unbounded;
///
///     fn first(_: &mut Clock) -> u32 {
///         0
///     }
///
///     fn is_last(_: &mut Clock, _: &u32) -> bool {
///         false
///     }
///
///     fn read_at<'a>(_: &'a mut Clock, cur: &u32) -> u32
///     where
///         Self::Value: 'a,
///     {
///         cur % 12
///     }
///
///     fn inc(_: &mut Clock, cur: &mut u32) {
///         *cur += 1;
///     }
/// }
///
/// impl BoundedTraits<Clock> for Clock {
///     fn last(_: &mut Clock) -> u32 {
///         12
///     }
/// }
///
/// impl SizedTraits<Clock> for Clock {
///     fn size(_: &mut Clock) -> Distance {
///         12
///     }
/// }
///
/// access::size(&mut Clock);
/// ```
#[inline(always)]
pub fn size<S: ?Sized + SizedSequence>(seq: &mut S) -> Distance {
    const {
        assert!(
            !is_infinite::<S::Flags>(),
            "an infinite sequence has no size"
        )
    };
    seq.size()
}

/// [`size`] as a `usize`. Panics when the size is negative.
#[inline(always)]
#[track_caller]
pub fn usize<S: ?Sized + SizedSequence>(seq: &mut S) -> usize {
    let n = size(seq);
    match usize::try_from(n) {
        Ok(n) => n,
        Err(_) => panic!("negative sequence size {n}"),
    }
}

#[inline(always)]
pub fn next<S: ?Sized + MultipassSequence>(seq: &mut S, cur: &S::Cursor) -> S::Cursor {
    let mut cur = cur.clone();
    seq.inc(&mut cur);
    cur
}

#[inline(always)]
pub fn prev<S: ?Sized + BidirectionalSequence>(seq: &mut S, cur: &S::Cursor) -> S::Cursor {
    let mut cur = cur.clone();
    seq.dec(&mut cur);
    cur
}

#[inline(always)]
pub fn is_empty<S: ?Sized + MultipassSequence>(seq: &mut S) -> bool {
    let cur = seq.first();
    seq.is_last(&cur)
}

/// Views a contiguous sequence of values as a slice.
#[inline(always)]
pub fn as_slice<S>(seq: &mut S) -> &[S::Value]
where
    S: ?Sized + ContiguousSequence + SizedSequence<Value: Sized>,
{
    let len = usize(seq);
    let ptr = data(seq);
    if len == 0 {
        return &[];
    }
    // SAFETY: `ContiguousTraits` guarantees `len` readable values behind
    // `data`, borrowed from `seq` for the returned lifetime.
    unsafe { std::slice::from_raw_parts(ptr, len) }
}

/// Calls `pred` on each element from the front until it returns `false`.
/// Returns the cursor where the walk stopped.
pub fn for_each_while<S, F>(seq: &mut S, mut pred: F) -> S::Cursor
where
    S: ?Sized + Sequence,
    F: for<'a> FnMut(ElementOf<'a, S>) -> bool,
{
    let mut cur = seq.first();
    while !seq.is_last(&cur) {
        if !pred(seq.read_at(&cur)) {
            break;
        }
        seq.inc(&mut cur);
    }
    cur
}
