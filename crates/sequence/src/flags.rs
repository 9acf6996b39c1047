//! Type-level booleans and the flags a trait table declares.

use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::True {}
    impl Sealed for super::False {}
}

pub trait Bool: sealed::Sealed + 'static {
    const VALUE: bool;

    type And<B: Bool>: Bool;
}

pub enum True {}

pub enum False {}

impl Bool for True {
    const VALUE: bool = true;
    type And<B: Bool> = B;
}

impl Bool for False {
    const VALUE: bool = false;
    type And<B: Bool> = False;
}

/// Declarations a trait table makes about its sequences.
///
/// `DisableMultipass` opts a table with regular cursors out of multipass
/// traversal. `Infinite` marks a sequence that never reaches its end.
pub trait SequenceFlags {
    type DisableMultipass: Bool;
    type Infinite: Bool;
}

pub struct FlagSet<DisableMultipass = False, Infinite = False>(
    PhantomData<fn() -> (DisableMultipass, Infinite)>,
);

impl<M: Bool, I: Bool> SequenceFlags for FlagSet<M, I> {
    type DisableMultipass = M;
    type Infinite = I;
}

pub type Defaults = FlagSet;
pub type SinglePass = FlagSet<True, False>;
pub type Unbounded = FlagSet<False, True>;
pub type UnboundedSinglePass = FlagSet<True, True>;

pub const fn disables_multipass<F: SequenceFlags>() -> bool {
    F::DisableMultipass::VALUE
}

pub const fn is_infinite<F: SequenceFlags>() -> bool {
    F::Infinite::VALUE
}
