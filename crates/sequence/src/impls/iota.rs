//! Counting sequences. The cursor is the current count and reading yields it
//! by value.

use crate::config::{Distance, Index, check_dec, check_inc, check_offset};
use crate::element::Val;
use crate::flags::{Defaults, Unbounded};
use crate::traits::{BidirectionalTraits, BoundedTraits, RandomAccessTraits, SequenceTraits};

/// The integers in `start..end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Iota {
    start: Index,
    end: Index,
}

impl Iota {
    /// Panics when `end < start` or when the length does not fit in a
    /// [`Distance`].
    #[track_caller]
    pub fn new(start: Index, end: Index) -> Self {
        assert!(start <= end, "empty range must not be reversed: {start}..{end}");
        assert!(
            end.checked_sub(start).is_some(),
            "range {start}..{end} is too long to measure"
        );
        Self { start, end }
    }
}

impl SequenceTraits<Iota> for Iota {
    type Cursor = Index;
    type Value = Index;
    type Kind = Val;
    type Flags = Defaults;

    #[inline(always)]
    fn first(seq: &mut Iota) -> Index {
        seq.start
    }

    #[inline(always)]
    fn is_last(seq: &mut Iota, cur: &Index) -> bool {
        *cur == seq.end
    }

    #[inline(always)]
    fn read_at<'a>(_: &'a mut Iota, cur: &Index) -> Index
    where
        Self::Value: 'a,
    {
        *cur
    }

    #[inline(always)]
    #[track_caller]
    fn inc(seq: &mut Iota, cur: &mut Index) {
        check_inc(*cur, seq.end);
        *cur += 1;
    }
}

impl BidirectionalTraits<Iota> for Iota {
    #[inline(always)]
    #[track_caller]
    fn dec(seq: &mut Iota, cur: &mut Index) {
        check_dec(*cur, seq.start);
        *cur -= 1;
    }
}

impl RandomAccessTraits<Iota> for Iota {
    #[inline(always)]
    #[track_caller]
    fn inc_by(seq: &mut Iota, cur: &mut Index, offset: Distance) {
        check_offset(*cur, offset, seq.start, seq.end);
        *cur += offset;
    }

    #[inline(always)]
    fn distance(_: &mut Iota, from: &Index, to: &Index) -> Distance {
        to - from
    }
}

impl BoundedTraits<Iota> for Iota {
    #[inline(always)]
    fn last(seq: &mut Iota) -> Index {
        seq.end
    }
}

/// The integers from `start` upwards, without end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IotaFrom {
    start: Index,
}

impl IotaFrom {
    pub fn new(start: Index) -> Self {
        Self { start }
    }
}

impl SequenceTraits<IotaFrom> for IotaFrom {
    type Cursor = Index;
    type Value = Index;
    type Kind = Val;
    type Flags = Unbounded;

    #[inline(always)]
    fn first(seq: &mut IotaFrom) -> Index {
        seq.start
    }

    #[inline(always)]
    fn is_last(_: &mut IotaFrom, _: &Index) -> bool {
        false
    }

    #[inline(always)]
    fn read_at<'a>(_: &'a mut IotaFrom, cur: &Index) -> Index
    where
        Self::Value: 'a,
    {
        *cur
    }

    #[inline(always)]
    #[track_caller]
    fn inc(_: &mut IotaFrom, cur: &mut Index) {
        check_inc(*cur, Index::MAX);
        *cur += 1;
    }
}

impl BidirectionalTraits<IotaFrom> for IotaFrom {
    #[inline(always)]
    #[track_caller]
    fn dec(seq: &mut IotaFrom, cur: &mut Index) {
        check_dec(*cur, seq.start);
        *cur -= 1;
    }
}

impl RandomAccessTraits<IotaFrom> for IotaFrom {
    #[inline(always)]
    #[track_caller]
    fn inc_by(seq: &mut IotaFrom, cur: &mut Index, offset: Distance) {
        check_offset(*cur, offset, seq.start, Index::MAX);
        *cur += offset;
    }

    #[inline(always)]
    fn distance(_: &mut IotaFrom, from: &Index, to: &Index) -> Distance {
        to - from
    }
}
