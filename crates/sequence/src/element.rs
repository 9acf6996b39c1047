//! Element kinds.
//!
//! A trait table names the value type of its sequence and an element kind.
//! The kind is a dispatch table from that value type to everything a
//! traversal produces:
//!
//! | kind | element | rvalue element | const element | common element |
//! |---|---|---|---|---|
//! | [`Ref`] | `&'a V` | `Moved<&'a V>` | `&'a V` | `&'a V` |
//! | [`Mut`] | `&'a mut V` | `Moved<&'a mut V>` | `&'a V` | `&'a mut V` |
//! | [`Val`] | `V` | `V` | `V` | `V` |
//! | `(KA, KB, ..)` | componentwise | componentwise | componentwise | componentwise |
//!
//! Tables whose elements are neither references nor plain values define a
//! proxy kind of their own. [`MoveAs`] keeps another kind's elements but
//! moves out owned values.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::flags::{Bool, False, True};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Lvalue {}
    impl Sealed for super::Prvalue {}
    impl Sealed for super::Proxy {}
    impl Sealed for super::Ref {}
    impl Sealed for super::Mut {}
    impl<T: ?Sized> Sealed for *const T {}
    impl<T: ?Sized> Sealed for *mut T {}
}

/// How an element refers to the stored value.
pub trait Category: sealed::Sealed {
    const NAME: &'static str;
}

pub enum Lvalue {}

pub enum Prvalue {}

pub enum Proxy {}

impl Category for Lvalue {
    const NAME: &'static str = "lvalue";
}

impl Category for Prvalue {
    const NAME: &'static str = "prvalue";
}

impl Category for Proxy {
    const NAME: &'static str = "proxy";
}

/// Derivation of the element types for sequences of `V`.
///
/// Both the element and the rvalue element convert into the const element,
/// and the element converts into the common element.
pub trait ElementKind<V: ?Sized> {
    type Element<'a>
    where
        V: 'a;
    type Rvalue<'a>
    where
        V: 'a;
    type Const<'a>
    where
        V: 'a;
    type Common<'a>
    where
        V: 'a;

    type Category: Category;

    /// `True` when the element already is the const element.
    type ReadOnly: Bool;

    fn into_rvalue<'a>(element: Self::Element<'a>) -> Self::Rvalue<'a>
    where
        V: 'a;

    fn into_const<'a>(element: Self::Element<'a>) -> Self::Const<'a>
    where
        V: 'a;

    fn rvalue_into_const<'a>(rvalue: Self::Rvalue<'a>) -> Self::Const<'a>
    where
        V: 'a;

    fn into_common<'a>(element: Self::Element<'a>) -> Self::Common<'a>
    where
        V: 'a;
}

pub enum Ref {}

pub enum Mut {}

pub enum Val {}

impl<V: ?Sized> ElementKind<V> for Ref {
    type Element<'a>
        = &'a V
    where
        V: 'a;
    type Rvalue<'a>
        = Moved<&'a V>
    where
        V: 'a;
    type Const<'a>
        = &'a V
    where
        V: 'a;
    type Common<'a>
        = &'a V
    where
        V: 'a;

    type Category = Lvalue;
    type ReadOnly = True;

    #[inline(always)]
    fn into_rvalue<'a>(element: &'a V) -> Moved<&'a V>
    where
        V: 'a,
    {
        Moved(element)
    }

    #[inline(always)]
    fn into_const<'a>(element: &'a V) -> &'a V
    where
        V: 'a,
    {
        element
    }

    #[inline(always)]
    fn rvalue_into_const<'a>(rvalue: Moved<&'a V>) -> &'a V
    where
        V: 'a,
    {
        rvalue.0
    }

    #[inline(always)]
    fn into_common<'a>(element: &'a V) -> &'a V
    where
        V: 'a,
    {
        element
    }
}

impl<V: ?Sized> ElementKind<V> for Mut {
    type Element<'a>
        = &'a mut V
    where
        V: 'a;
    type Rvalue<'a>
        = Moved<&'a mut V>
    where
        V: 'a;
    type Const<'a>
        = &'a V
    where
        V: 'a;
    type Common<'a>
        = &'a mut V
    where
        V: 'a;

    type Category = Lvalue;
    type ReadOnly = False;

    #[inline(always)]
    fn into_rvalue<'a>(element: &'a mut V) -> Moved<&'a mut V>
    where
        V: 'a,
    {
        Moved(element)
    }

    #[inline(always)]
    fn into_const<'a>(element: &'a mut V) -> &'a V
    where
        V: 'a,
    {
        element
    }

    #[inline(always)]
    fn rvalue_into_const<'a>(rvalue: Moved<&'a mut V>) -> &'a V
    where
        V: 'a,
    {
        rvalue.0
    }

    #[inline(always)]
    fn into_common<'a>(element: &'a mut V) -> &'a mut V
    where
        V: 'a,
    {
        element
    }
}

impl<V> ElementKind<V> for Val {
    type Element<'a>
        = V
    where
        V: 'a;
    type Rvalue<'a>
        = V
    where
        V: 'a;
    type Const<'a>
        = V
    where
        V: 'a;
    type Common<'a>
        = V
    where
        V: 'a;

    type Category = Prvalue;
    type ReadOnly = True;

    #[inline(always)]
    fn into_rvalue<'a>(element: V) -> V
    where
        V: 'a,
    {
        element
    }

    #[inline(always)]
    fn into_const<'a>(element: V) -> V
    where
        V: 'a,
    {
        element
    }

    #[inline(always)]
    fn rvalue_into_const<'a>(rvalue: V) -> V
    where
        V: 'a,
    {
        rvalue
    }

    #[inline(always)]
    fn into_common<'a>(element: V) -> V
    where
        V: 'a,
    {
        element
    }
}

macro_rules! all_read_only {
    ($head:ty) => { $head };
    ($head:ty, $($tail:ty),+) => { <$head as Bool>::And<all_read_only!($($tail),+)> };
}

macro_rules! tuple_kind {
    ($(($kind:ident, $value:ident, $item:ident, $idx:tt)),+) => {
        impl<$($kind, $value),+> ElementKind<($($value,)+)> for ($($kind,)+)
        where
            $($kind: ElementKind<$value>,)+
        {
            type Element<'a>
                = ($($kind::Element<'a>,)+)
            where
                ($($value,)+): 'a;
            type Rvalue<'a>
                = ($($kind::Rvalue<'a>,)+)
            where
                ($($value,)+): 'a;
            type Const<'a>
                = ($($kind::Const<'a>,)+)
            where
                ($($value,)+): 'a;
            type Common<'a>
                = ($($kind::Common<'a>,)+)
            where
                ($($value,)+): 'a;

            type Category = Proxy;
            type ReadOnly = all_read_only!($(<$kind as ElementKind<$value>>::ReadOnly),+);

            #[inline(always)]
            fn into_rvalue<'a>(element: Self::Element<'a>) -> Self::Rvalue<'a>
            where
                ($($value,)+): 'a,
            {
                ($($kind::into_rvalue(element.$idx),)+)
            }

            #[inline(always)]
            fn into_const<'a>(element: Self::Element<'a>) -> Self::Const<'a>
            where
                ($($value,)+): 'a,
            {
                ($($kind::into_const(element.$idx),)+)
            }

            #[inline(always)]
            fn rvalue_into_const<'a>(rvalue: Self::Rvalue<'a>) -> Self::Const<'a>
            where
                ($($value,)+): 'a,
            {
                ($($kind::rvalue_into_const(rvalue.$idx),)+)
            }

            #[inline(always)]
            fn into_common<'a>(element: Self::Element<'a>) -> Self::Common<'a>
            where
                ($($value,)+): 'a,
            {
                ($($kind::into_common(element.$idx),)+)
            }
        }

        impl<$($kind, $value),+> ReadValue<($($value,)+)> for ($($kind,)+)
        where
            $($kind: ReadValue<$value>,)+
        {
            #[inline(always)]
            fn read_value<'a>(element: &Self::Element<'a>) -> ($($value,)+)
            where
                ($($value,)+): 'a,
            {
                ($($kind::read_value(&element.$idx),)+)
            }
        }

        impl<$($kind, $value, $item),+> WritableKind<($($value,)+), ($($item,)+)> for ($($kind,)+)
        where
            $($kind: WritableKind<$value, $item>,)+
        {
            #[inline(always)]
            fn assign<'e, 'a>(
                element: &'e mut Self::Element<'a>,
                item: ($($item,)+),
            ) -> &'e mut Self::Element<'a>
            where
                ($($value,)+): 'a,
            {
                $($kind::assign(&mut element.$idx, item.$idx);)+
                element
            }
        }
    };
}

tuple_kind!((KA, VA, WA, 0), (KB, VB, WB, 1));
tuple_kind!((KA, VA, WA, 0), (KB, VB, WB, 1), (KC, VC, WC, 2));
tuple_kind!((KA, VA, WA, 0), (KB, VB, WB, 1), (KC, VC, WC, 2), (KD, VD, WD, 3));

/// Elements as produced by `K`, moved out as values of `R`.
///
/// Wraps a kind whose table overrides `move_at` to hand over owned values.
/// The const and common elements become `R`, the one type both the element
/// and the rvalue element convert into.
pub struct MoveAs<K, R>(PhantomData<fn() -> (K, R)>);

impl<V, K, R> ElementKind<V> for MoveAs<K, R>
where
    K: ReadValue<V>,
    R: From<V>,
{
    type Element<'a>
        = K::Element<'a>
    where
        V: 'a;
    type Rvalue<'a>
        = R
    where
        V: 'a;
    type Const<'a>
        = R
    where
        V: 'a;
    type Common<'a>
        = R
    where
        V: 'a;

    type Category = K::Category;
    type ReadOnly = False;

    #[inline(always)]
    fn into_rvalue<'a>(element: K::Element<'a>) -> R
    where
        V: 'a,
    {
        R::from(K::read_value(&element))
    }

    #[inline(always)]
    fn into_const<'a>(element: K::Element<'a>) -> R
    where
        V: 'a,
    {
        R::from(K::read_value(&element))
    }

    #[inline(always)]
    fn rvalue_into_const<'a>(rvalue: R) -> R
    where
        V: 'a,
    {
        rvalue
    }

    #[inline(always)]
    fn into_common<'a>(element: K::Element<'a>) -> R
    where
        V: 'a,
    {
        R::from(K::read_value(&element))
    }
}

impl<V, K, R> ReadValue<V> for MoveAs<K, R>
where
    K: ReadValue<V>,
    R: From<V>,
{
    #[inline(always)]
    fn read_value<'a>(element: &K::Element<'a>) -> V
    where
        V: 'a,
    {
        K::read_value(element)
    }
}

impl<V, W, K, R> WritableKind<V, W> for MoveAs<K, R>
where
    K: ReadValue<V> + WritableKind<V, W>,
    R: From<V>,
{
    #[inline(always)]
    fn assign<'e, 'a>(element: &'e mut K::Element<'a>, item: W) -> &'e mut K::Element<'a>
    where
        V: 'a,
    {
        K::assign(element, item)
    }
}

/// A reference whose referent may be moved out of.
pub struct Moved<R>(R);

impl<R> Moved<R> {
    #[inline(always)]
    pub fn new(reference: R) -> Self {
        Self(reference)
    }

    #[inline(always)]
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<T: ?Sized> Deref for Moved<&T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: ?Sized> Deref for Moved<&mut T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: ?Sized> DerefMut for Moved<&mut T> {
    fn deref_mut(&mut self) -> &mut T {
        self.0
    }
}

impl<T: Clone> Moved<&T> {
    /// Shared storage cannot give the value up, so it is cloned.
    pub fn cloned(self) -> T {
        self.0.clone()
    }
}

impl<T: Default> Moved<&mut T> {
    pub fn take(self) -> T {
        std::mem::take(self.0)
    }
}

impl<T> Moved<&mut T> {
    pub fn replace(self, value: T) -> T {
        std::mem::replace(self.0, value)
    }
}

impl<R: fmt::Debug> fmt::Debug for Moved<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Moved").field(&self.0).finish()
    }
}

pub trait RawPointer<V: ?Sized>: Copy + sealed::Sealed {
    fn as_const_ptr(self) -> *const V;
}

impl<V: ?Sized> RawPointer<V> for *const V {
    #[inline(always)]
    fn as_const_ptr(self) -> *const V {
        self
    }
}

impl<V: ?Sized> RawPointer<V> for *mut V {
    #[inline(always)]
    fn as_const_ptr(self) -> *const V {
        self
    }
}

/// Kinds whose elements are references to `V` itself. Only [`Ref`] and
/// [`Mut`] qualify.
pub trait LvalueKind<V: ?Sized>: ElementKind<V, Category = Lvalue> + sealed::Sealed {
    type Pointer: RawPointer<V>;
}

impl<V: ?Sized> LvalueKind<V> for Ref {
    type Pointer = *const V;
}

impl<V: ?Sized> LvalueKind<V> for Mut {
    type Pointer = *mut V;
}

/// Kinds whose elements accept an item of type `W`.
pub trait WritableKind<V: ?Sized, W>: ElementKind<V> {
    /// Writes `item` through `element` and hands the element back.
    fn assign<'e, 'a>(element: &'e mut Self::Element<'a>, item: W) -> &'e mut Self::Element<'a>
    where
        V: 'a;
}

impl<V, W: Into<V>> WritableKind<V, W> for Mut {
    #[inline(always)]
    fn assign<'e, 'a>(element: &'e mut &'a mut V, item: W) -> &'e mut &'a mut V
    where
        V: 'a,
    {
        **element = item.into();
        element
    }
}

/// Kinds whose elements can be read back as an owned value.
pub trait ReadValue<V>: ElementKind<V> {
    fn read_value<'a>(element: &Self::Element<'a>) -> V
    where
        V: 'a;
}

impl<V: Clone> ReadValue<V> for Ref {
    #[inline(always)]
    fn read_value<'a>(element: &&'a V) -> V
    where
        V: 'a,
    {
        (**element).clone()
    }
}

impl<V: Clone> ReadValue<V> for Mut {
    #[inline(always)]
    fn read_value<'a>(element: &&'a mut V) -> V
    where
        V: 'a,
    {
        (**element).clone()
    }
}

impl<V: Clone> ReadValue<V> for Val {
    #[inline(always)]
    fn read_value<'a>(element: &V) -> V
    where
        V: 'a,
    {
        element.clone()
    }
}
