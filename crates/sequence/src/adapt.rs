//! Which sequences an adaptor may store.
//!
//! An adaptor keeps its base sequence by value. Owned sequences are moved
//! in. A borrowed sequence, shared or unique, is accepted only when the
//! sequence is `Copy`, and the adaptor stores a copy.

use crate::concepts::Sequence;

pub enum ByValue {}

pub enum ByCopy {}

pub trait AdaptableSequence<Marker>: Sized {
    type Adapted: Sequence;

    fn adapt(self) -> Self::Adapted;
}

impl<S: Sequence> AdaptableSequence<ByValue> for S {
    type Adapted = S;

    #[inline(always)]
    fn adapt(self) -> S {
        self
    }
}

impl<S: Sequence + Copy> AdaptableSequence<ByCopy> for &S {
    type Adapted = S;

    #[inline(always)]
    fn adapt(self) -> S {
        *self
    }
}

impl<S: Sequence + Copy> AdaptableSequence<ByCopy> for &mut S {
    type Adapted = S;

    #[inline(always)]
    fn adapt(self) -> S {
        *self
    }
}

/// Turns `seq` into the sequence an adaptor stores.
#[inline(always)]
pub fn adapt<M, A: AdaptableSequence<M>>(seq: A) -> A::Adapted {
    seq.adapt()
}

/// Whether a type, taken as the argument of an adaptor, can be adapted.
///
/// ```
/// use sequence::{Iota, adaptable};
///
/// assert!(adaptable!(Iota));
/// assert!(adaptable!(&'static Iota));
/// assert!(adaptable!(&'static mut Iota));
/// assert!(!adaptable!(&'static mut [u8]));
/// assert!(!adaptable!(Vec<u8>));
/// ```
#[macro_export]
macro_rules! adaptable {
    ($ty:ty) => {
        $crate::satisfies!($ty: $crate::AdaptableSequence<$crate::ByValue>)
            || $crate::satisfies!($ty: $crate::AdaptableSequence<$crate::ByCopy>)
    };
}
