pub type Distance = isize;

pub type Index = isize;

/// Whether the built-in registrations check cursor bounds.
pub const BOUNDS_CHECKS: bool = !cfg!(feature = "unchecked");

#[inline(always)]
#[track_caller]
pub(crate) fn check_read(cur: Index, len: Index) {
    if BOUNDS_CHECKS {
        assert!(
            0 <= cur && cur < len,
            "read out of bounds: cursor {cur}, length {len}"
        );
    }
}

#[inline(always)]
#[track_caller]
pub(crate) fn check_inc(cur: Index, end: Index) {
    if BOUNDS_CHECKS {
        assert!(cur < end, "increment past the end: cursor {cur}, end {end}");
    }
}

#[inline(always)]
#[track_caller]
pub(crate) fn check_dec(cur: Index, start: Index) {
    if BOUNDS_CHECKS {
        assert!(
            cur > start,
            "decrement before the start: cursor {cur}, start {start}"
        );
    }
}

#[inline(always)]
#[track_caller]
pub(crate) fn check_offset(cur: Index, offset: Index, start: Index, end: Index) {
    if BOUNDS_CHECKS {
        let target = cur.checked_add(offset);
        assert!(
            matches!(target, Some(t) if start <= t && t <= end),
            "offset out of bounds: cursor {cur}, offset {offset}, range {start}..={end}"
        );
    }
}
