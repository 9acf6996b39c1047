//! The capability lattice.
//!
//! Every predicate is a trait blanket-implemented from the resolved trait
//! table, so a type satisfies a predicate exactly when its table supports
//! it. Stronger predicates have the weaker ones as supertraits.
//!
//! ```text
//! Sequence ─ MultipassSequence ─ BidirectionalSequence ─ RandomAccessSequence ─┐
//!    ├─ BoundedSequence ──────────────────────────────────────────────────────┴─ ContiguousSequence
//!    ├─ SizedSequence
//!    ├─ InfiniteSequence
//!    ├─ ReadOnlySequence
//!    └─ WritableSequenceOf<W>
//! ```

use crate::config::Distance;
use crate::cursor::{Cursor, OrderedCursor, RegularCursor};
use crate::element::{ElementKind, LvalueKind, RawPointer, WritableKind};
use crate::flags::{False, SequenceFlags, True};
use crate::traits::{
    BidirectionalTraits, BoundedTraits, ContiguousTraits, Describe, RandomAccessTraits,
    SequenceTraits, SizedTraits,
};

pub type CursorOf<S> = <S as Sequence>::Cursor;
pub type ValueOf<S> = <S as Sequence>::Value;
pub type KindOf<S> = <S as Sequence>::Kind;
pub type FlagsOf<S> = <S as Sequence>::Flags;
pub type ElementOf<'a, S> = <KindOf<S> as ElementKind<ValueOf<S>>>::Element<'a>;
pub type RvalueElementOf<'a, S> = <KindOf<S> as ElementKind<ValueOf<S>>>::Rvalue<'a>;
pub type ConstElementOf<'a, S> = <KindOf<S> as ElementKind<ValueOf<S>>>::Const<'a>;
pub type CommonElementOf<'a, S> = <KindOf<S> as ElementKind<ValueOf<S>>>::Common<'a>;

mod sealed {
    pub trait Sealed {}

    impl<S: ?Sized + crate::traits::Describe> Sealed for S {}
}

type Table<S> = <S as Describe>::Traits;
type TableCursor<S> = <Table<S> as SequenceTraits<S>>::Cursor;
type TableValue<S> = <Table<S> as SequenceTraits<S>>::Value;
type TableKind<S> = <Table<S> as SequenceTraits<S>>::Kind;
type TableFlags<S> = <Table<S> as SequenceTraits<S>>::Flags;
type TablePointer<S> = <Table<S> as ContiguousTraits<S>>::Pointer;

/// A type with a resolved trait table.
pub trait Sequence: sealed::Sealed {
    type Cursor: Cursor;
    type Value: ?Sized;
    type Kind: ElementKind<Self::Value>;
    type Flags: SequenceFlags;

    fn first(&mut self) -> Self::Cursor;

    fn is_last(&mut self, cur: &Self::Cursor) -> bool;

    fn read_at<'a>(
        &'a mut self,
        cur: &Self::Cursor,
    ) -> <Self::Kind as ElementKind<Self::Value>>::Element<'a>
    where
        Self::Value: 'a;

    fn move_at<'a>(
        &'a mut self,
        cur: &Self::Cursor,
    ) -> <Self::Kind as ElementKind<Self::Value>>::Rvalue<'a>
    where
        Self::Value: 'a;

    fn inc(&mut self, cur: &mut Self::Cursor);
}

impl<S: ?Sized + Describe> Sequence for S {
    type Cursor = TableCursor<S>;
    type Value = TableValue<S>;
    type Kind = TableKind<S>;
    type Flags = TableFlags<S>;

    #[inline(always)]
    fn first(&mut self) -> Self::Cursor {
        S::Traits::first(self)
    }

    #[inline(always)]
    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        S::Traits::is_last(self, cur)
    }

    #[inline(always)]
    fn read_at<'a>(
        &'a mut self,
        cur: &Self::Cursor,
    ) -> <Self::Kind as ElementKind<Self::Value>>::Element<'a>
    where
        Self::Value: 'a,
    {
        S::Traits::read_at(self, cur)
    }

    #[inline(always)]
    fn move_at<'a>(
        &'a mut self,
        cur: &Self::Cursor,
    ) -> <Self::Kind as ElementKind<Self::Value>>::Rvalue<'a>
    where
        Self::Value: 'a,
    {
        S::Traits::move_at(self, cur)
    }

    #[inline(always)]
    fn inc(&mut self, cur: &mut Self::Cursor) {
        S::Traits::inc(self, cur)
    }
}

// The blanket impls below state their requirements on the table rather than
// on `Sequence`, so that `Self::Cursor` still normalizes to the table cursor
// inside the method bodies.

/// A sequence whose cursors may be saved and revisited.
pub trait MultipassSequence: Sequence<Cursor: RegularCursor> {}

impl<S> MultipassSequence for S
where
    S: ?Sized + Describe,
    TableCursor<S>: RegularCursor,
    TableFlags<S>: SequenceFlags<DisableMultipass = False>,
{
}

pub trait BidirectionalSequence: MultipassSequence {
    fn dec(&mut self, cur: &mut Self::Cursor);
}

impl<S> BidirectionalSequence for S
where
    S: ?Sized + Describe,
    S::Traits: BidirectionalTraits<S>,
    TableCursor<S>: RegularCursor,
    TableFlags<S>: SequenceFlags<DisableMultipass = False>,
{
    #[inline(always)]
    fn dec(&mut self, cur: &mut Self::Cursor) {
        S::Traits::dec(self, cur)
    }
}

pub trait RandomAccessSequence: BidirectionalSequence + Sequence<Cursor: OrderedCursor> {
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance);

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance;
}

impl<S> RandomAccessSequence for S
where
    S: ?Sized + Describe,
    S::Traits: RandomAccessTraits<S>,
    TableCursor<S>: OrderedCursor,
    TableFlags<S>: SequenceFlags<DisableMultipass = False>,
{
    #[inline(always)]
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        S::Traits::inc_by(self, cur, offset)
    }

    #[inline(always)]
    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        S::Traits::distance(self, from, to)
    }
}

pub trait BoundedSequence: Sequence {
    fn last(&mut self) -> Self::Cursor;
}

impl<S> BoundedSequence for S
where
    S: ?Sized + Describe,
    S::Traits: BoundedTraits<S>,
{
    #[inline(always)]
    fn last(&mut self) -> Self::Cursor {
        S::Traits::last(self)
    }
}

pub trait SizedSequence: Sequence {
    fn size(&mut self) -> Distance;
}

impl<S> SizedSequence for S
where
    S: ?Sized + Describe,
    S::Traits: SizedTraits<S>,
{
    #[inline(always)]
    fn size(&mut self) -> Distance {
        S::Traits::size(self)
    }
}

/// A random access, bounded sequence whose elements are references into one
/// contiguous run of values.
pub trait ContiguousSequence: RandomAccessSequence + BoundedSequence {
    type Pointer: RawPointer<Self::Value>;

    fn data(&mut self) -> Self::Pointer;
}

impl<S> ContiguousSequence for S
where
    S: ?Sized + Describe,
    S::Traits: ContiguousTraits<S>,
    TableCursor<S>: OrderedCursor,
    TableFlags<S>: SequenceFlags<DisableMultipass = False>,
    TableKind<S>: LvalueKind<TableValue<S>, Pointer = TablePointer<S>>,
{
    type Pointer = TablePointer<S>;

    #[inline(always)]
    fn data(&mut self) -> Self::Pointer {
        S::Traits::data(self)
    }
}

pub trait InfiniteSequence: Sequence {}

impl<S> InfiniteSequence for S
where
    S: ?Sized + Describe,
    TableFlags<S>: SequenceFlags<Infinite = True>,
{
}

/// A sequence whose element type is its const element type.
pub trait ReadOnlySequence: Sequence {}

impl<S> ReadOnlySequence for S
where
    S: ?Sized + Describe,
    TableKind<S>: ElementKind<TableValue<S>, ReadOnly = True>,
{
}

pub trait WritableSequenceOf<W>: Sequence {
    fn write_at(&mut self, cur: &Self::Cursor, item: W);
}

impl<S, W> WritableSequenceOf<W> for S
where
    S: ?Sized + Describe,
    TableKind<S>: WritableKind<TableValue<S>, W>,
{
    #[inline(always)]
    fn write_at(&mut self, cur: &Self::Cursor, item: W) {
        let mut element = S::Traits::read_at(self, cur);
        <TableKind<S> as WritableKind<TableValue<S>, W>>::assign(&mut element, item);
    }
}

/// Total boolean form of a trait bound: `true` when the bound holds for the
/// concrete type, `false` otherwise, never a compile error.
///
/// ```
/// use sequence::{Iota, MultipassSequence, satisfies};
///
/// assert!(satisfies!(Iota: MultipassSequence));
/// assert!(!satisfies!(String: MultipassSequence));
/// ```
#[macro_export]
macro_rules! satisfies {
    ($ty:ty: $($bound:tt)+) => {{
        struct Check<T: ?Sized>(::core::marker::PhantomData<T>);

        #[allow(dead_code)]
        trait Yes {
            fn holds(&self) -> bool {
                true
            }
        }

        #[allow(dead_code)]
        trait No {
            fn holds(&self) -> bool {
                false
            }
        }

        impl<T: ?Sized + $($bound)+> Yes for Check<T> {}
        impl<T: ?Sized> No for &Check<T> {}

        (&Check::<$ty>(::core::marker::PhantomData)).holds()
    }};
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub sequence: bool,
    pub multipass: bool,
    pub bidirectional: bool,
    pub random_access: bool,
    pub bounded: bool,
    pub sized: bool,
    pub contiguous: bool,
    pub infinite: bool,
    pub read_only: bool,
}

impl Capabilities {
    /// Whether every stronger predicate that holds implies the weaker ones.
    pub fn is_monotone(&self) -> bool {
        let implies = |stronger: bool, weaker: bool| !stronger || weaker;
        implies(self.multipass, self.sequence)
            && implies(self.bidirectional, self.multipass)
            && implies(self.random_access, self.bidirectional)
            && implies(self.contiguous, self.random_access && self.bounded)
            && implies(self.bounded, self.sequence)
            && implies(self.sized, self.sequence)
            && implies(self.infinite, self.sequence)
            && implies(self.read_only, self.sequence)
            && implies(self.random_access && self.bounded, self.sized)
    }
}

/// Evaluates every predicate of the lattice for a type.
///
/// ```
/// use sequence::{Capabilities, IotaFrom, capabilities};
///
/// let caps: Capabilities = capabilities!(IotaFrom);
/// assert!(caps.random_access && caps.infinite && !caps.bounded);
/// ```
#[macro_export]
macro_rules! capabilities {
    ($ty:ty) => {
        $crate::Capabilities {
            sequence: $crate::satisfies!($ty: $crate::Sequence),
            multipass: $crate::satisfies!($ty: $crate::MultipassSequence),
            bidirectional: $crate::satisfies!($ty: $crate::BidirectionalSequence),
            random_access: $crate::satisfies!($ty: $crate::RandomAccessSequence),
            bounded: $crate::satisfies!($ty: $crate::BoundedSequence),
            sized: $crate::satisfies!($ty: $crate::SizedSequence),
            contiguous: $crate::satisfies!($ty: $crate::ContiguousSequence),
            infinite: $crate::satisfies!($ty: $crate::InfiniteSequence),
            read_only: $crate::satisfies!($ty: $crate::ReadOnlySequence),
        }
    };
}
