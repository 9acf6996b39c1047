//! Sequences registered only for tests, one per corner of the lattice.

use crate::config::{Distance, Index};
use crate::element::{
    ElementKind, MoveAs, Moved, Mut, Proxy, ReadValue, Ref, Val, WritableKind,
};
use crate::flags::{Defaults, False, SinglePass, Unbounded};
use crate::traits::{
    BidirectionalTraits, BoundedTraits, ContiguousTraits, Describe, RandomAccessTraits,
    SequenceTraits, SizedTraits,
};

/// Fixed-capacity buffer registered through a separate descriptor.
pub struct FixedBuffer<T, const N: usize> {
    pub items: [T; N],
}

pub enum FixedBufferTraits {}

impl<T, const N: usize> Describe for FixedBuffer<T, N> {
    type Traits = FixedBufferTraits;
}

impl<T, const N: usize> SequenceTraits<FixedBuffer<T, N>> for FixedBufferTraits {
    type Cursor = Index;
    type Value = T;
    type Kind = Mut;
    type Flags = Defaults;

    fn first(_: &mut FixedBuffer<T, N>) -> Index {
        0
    }

    fn is_last(_: &mut FixedBuffer<T, N>, cur: &Index) -> bool {
        *cur == N as Index
    }

    fn read_at<'a>(seq: &'a mut FixedBuffer<T, N>, cur: &Index) -> &'a mut T
    where
        T: 'a,
    {
        &mut seq.items[*cur as usize]
    }

    fn inc(_: &mut FixedBuffer<T, N>, cur: &mut Index) {
        *cur += 1;
    }
}

impl<T, const N: usize> BidirectionalTraits<FixedBuffer<T, N>> for FixedBufferTraits {
    fn dec(_: &mut FixedBuffer<T, N>, cur: &mut Index) {
        *cur -= 1;
    }
}

impl<T, const N: usize> RandomAccessTraits<FixedBuffer<T, N>> for FixedBufferTraits {
    fn inc_by(_: &mut FixedBuffer<T, N>, cur: &mut Index, offset: Distance) {
        *cur += offset;
    }

    fn distance(_: &mut FixedBuffer<T, N>, from: &Index, to: &Index) -> Distance {
        to - from
    }
}

impl<T, const N: usize> BoundedTraits<FixedBuffer<T, N>> for FixedBufferTraits {
    fn last(_: &mut FixedBuffer<T, N>) -> Index {
        N as Index
    }
}

unsafe impl<T, const N: usize> ContiguousTraits<FixedBuffer<T, N>> for FixedBufferTraits {
    type Pointer = *mut T;

    fn data(seq: &mut FixedBuffer<T, N>) -> *mut T {
        seq.items.as_mut_ptr()
    }
}

/// Endless counter with a forward-only table.
#[derive(Default)]
pub struct Counter {
    reads: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> u64 {
        self.reads
    }
}

impl SequenceTraits<Counter> for Counter {
    type Cursor = u64;
    type Value = u64;
    type Kind = Val;
    type Flags = Unbounded;

    fn first(_: &mut Counter) -> u64 {
        0
    }

    fn is_last(_: &mut Counter, _: &u64) -> bool {
        false
    }

    fn read_at<'a>(seq: &'a mut Counter, cur: &u64) -> u64
    where
        Self::Value: 'a,
    {
        seq.reads += 1;
        *cur
    }

    fn inc(_: &mut Counter, cur: &mut u64) {
        *cur += 1;
    }
}

/// Lines read once from a script. Cursors are plain indices, but the table
/// opts out of multipass traversal.
pub struct Lines {
    script: Vec<String>,
    consumed: usize,
}

impl Lines {
    pub fn new(script: &str) -> Self {
        Self {
            script: script.lines().map(str::to_owned).collect(),
            consumed: 0,
        }
    }
}

impl SequenceTraits<Lines> for Lines {
    type Cursor = usize;
    type Value = String;
    type Kind = Mut;
    type Flags = SinglePass;

    fn first(seq: &mut Lines) -> usize {
        seq.consumed
    }

    fn is_last(seq: &mut Lines, cur: &usize) -> bool {
        *cur == seq.script.len()
    }

    fn read_at<'a>(seq: &'a mut Lines, cur: &usize) -> &'a mut String
    where
        Self::Value: 'a,
    {
        &mut seq.script[*cur]
    }

    fn inc(seq: &mut Lines, cur: &mut usize) {
        *cur += 1;
        seq.consumed = *cur;
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Ticket(pub usize);

/// Tokens handed out against move-only tickets.
pub struct Tokens {
    pub tokens: Vec<&'static str>,
}

impl SequenceTraits<Tokens> for Tokens {
    type Cursor = Ticket;
    type Value = str;
    type Kind = Ref;
    type Flags = Defaults;

    fn first(_: &mut Tokens) -> Ticket {
        Ticket(0)
    }

    fn is_last(seq: &mut Tokens, cur: &Ticket) -> bool {
        cur.0 == seq.tokens.len()
    }

    fn read_at<'a>(seq: &'a mut Tokens, cur: &Ticket) -> &'a str
    where
        Self::Value: 'a,
    {
        seq.tokens[cur.0]
    }

    fn inc(_: &mut Tokens, cur: &mut Ticket) {
        cur.0 += 1;
    }
}

/// One value repeated, sized through a hand-written table.
pub struct Repeat<T> {
    value: T,
    times: usize,
}

impl<T> Repeat<T> {
    pub fn new(value: T, times: usize) -> Self {
        Self { value, times }
    }
}

impl<T> SequenceTraits<Repeat<T>> for Repeat<T> {
    type Cursor = usize;
    type Value = T;
    type Kind = Ref;
    type Flags = Defaults;

    fn first(_: &mut Self) -> usize {
        0
    }

    fn is_last(seq: &mut Self, cur: &usize) -> bool {
        *cur == seq.times
    }

    fn read_at<'a>(seq: &'a mut Self, _: &usize) -> &'a T
    where
        T: 'a,
    {
        &seq.value
    }

    fn inc(_: &mut Self, cur: &mut usize) {
        *cur += 1;
    }
}

impl<T> BoundedTraits<Repeat<T>> for Repeat<T> {
    fn last(seq: &mut Self) -> usize {
        seq.times
    }
}

impl<T> SizedTraits<Repeat<T>> for Repeat<T> {
    fn size(seq: &mut Self) -> Distance {
        seq.times as Distance
    }
}

pub struct BitRef<'a> {
    word: &'a mut u64,
    mask: u64,
}

impl BitRef<'_> {
    pub fn get(&self) -> bool {
        *self.word & self.mask != 0
    }

    pub fn set(&mut self, bit: bool) {
        if bit {
            *self.word |= self.mask;
        } else {
            *self.word &= !self.mask;
        }
    }
}

/// Elements of [`Bits`]: a proxy reference to a single bit.
pub enum BitKind {}

impl ElementKind<bool> for BitKind {
    type Element<'a> = BitRef<'a>;
    type Rvalue<'a> = bool;
    type Const<'a> = bool;
    type Common<'a> = bool;

    type Category = Proxy;
    type ReadOnly = False;

    fn into_rvalue<'a>(element: BitRef<'a>) -> bool
    where
        bool: 'a,
    {
        element.get()
    }

    fn into_const<'a>(element: BitRef<'a>) -> bool
    where
        bool: 'a,
    {
        element.get()
    }

    fn rvalue_into_const<'a>(rvalue: bool) -> bool
    where
        bool: 'a,
    {
        rvalue
    }

    fn into_common<'a>(element: BitRef<'a>) -> bool
    where
        bool: 'a,
    {
        element.get()
    }
}

impl WritableKind<bool, bool> for BitKind {
    fn assign<'e, 'a>(element: &'e mut BitRef<'a>, item: bool) -> &'e mut BitRef<'a>
    where
        bool: 'a,
    {
        element.set(item);
        element
    }
}

impl ReadValue<bool> for BitKind {
    fn read_value<'a>(element: &BitRef<'a>) -> bool
    where
        bool: 'a,
    {
        element.get()
    }
}

/// Packed bits, read and written through [`BitRef`] proxies.
pub struct Bits {
    words: Vec<u64>,
    len: usize,
}

impl Bits {
    pub fn from_bools(bits: &[bool]) -> Self {
        let mut words = vec![0; bits.len().div_ceil(64)];
        for (i, &bit) in bits.iter().enumerate() {
            if bit {
                words[i / 64] |= 1 << (i % 64);
            }
        }
        Self {
            words,
            len: bits.len(),
        }
    }

    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.len)
            .map(|i| self.words[i / 64] >> (i % 64) & 1 == 1)
            .collect()
    }
}

impl SequenceTraits<Bits> for Bits {
    type Cursor = usize;
    type Value = bool;
    type Kind = BitKind;
    type Flags = Defaults;

    fn first(_: &mut Bits) -> usize {
        0
    }

    fn is_last(seq: &mut Bits, cur: &usize) -> bool {
        *cur == seq.len
    }

    fn read_at<'a>(seq: &'a mut Bits, cur: &usize) -> BitRef<'a>
    where
        Self::Value: 'a,
    {
        BitRef {
            word: &mut seq.words[cur / 64],
            mask: 1 << (cur % 64),
        }
    }

    fn inc(_: &mut Bits, cur: &mut usize) {
        *cur += 1;
    }
}

impl BidirectionalTraits<Bits> for Bits {
    fn dec(_: &mut Bits, cur: &mut usize) {
        *cur -= 1;
    }
}

impl BoundedTraits<Bits> for Bits {
    fn last(seq: &mut Bits) -> usize {
        seq.len
    }
}

impl SizedTraits<Bits> for Bits {
    fn size(seq: &mut Bits) -> Distance {
        seq.len as Distance
    }
}

/// Keys and names stored column by column; elements are tuples of unique
/// references.
pub struct Columns {
    pub keys: Vec<u32>,
    pub names: Vec<String>,
}

impl SequenceTraits<Columns> for Columns {
    type Cursor = usize;
    type Value = (u32, String);
    type Kind = (Mut, Mut);
    type Flags = Defaults;

    fn first(_: &mut Columns) -> usize {
        0
    }

    fn is_last(seq: &mut Columns, cur: &usize) -> bool {
        *cur == seq.keys.len()
    }

    fn read_at<'a>(seq: &'a mut Columns, cur: &usize) -> (&'a mut u32, &'a mut String)
    where
        Self::Value: 'a,
    {
        (&mut seq.keys[*cur], &mut seq.names[*cur])
    }

    fn inc(_: &mut Columns, cur: &mut usize) {
        *cur += 1;
    }
}

/// Queue whose `move_at` counts how often a message was handed over.
pub struct Inbox {
    pub messages: Vec<String>,
    pub handed_over: usize,
}

impl SequenceTraits<Inbox> for Inbox {
    type Cursor = usize;
    type Value = String;
    type Kind = Mut;
    type Flags = Defaults;

    fn first(_: &mut Inbox) -> usize {
        0
    }

    fn is_last(seq: &mut Inbox, cur: &usize) -> bool {
        *cur == seq.messages.len()
    }

    fn read_at<'a>(seq: &'a mut Inbox, cur: &usize) -> &'a mut String
    where
        Self::Value: 'a,
    {
        &mut seq.messages[*cur]
    }

    fn move_at<'a>(seq: &'a mut Inbox, cur: &usize) -> Moved<&'a mut String>
    where
        Self::Value: 'a,
    {
        seq.handed_over += 1;
        Moved::new(&mut seq.messages[*cur])
    }

    fn inc(_: &mut Inbox, cur: &mut usize) {
        *cur += 1;
    }
}

/// Like [`Inbox`], but messages leave the queue as owned strings.
pub struct Outbox {
    pub messages: Vec<String>,
}

impl SequenceTraits<Outbox> for Outbox {
    type Cursor = usize;
    type Value = String;
    type Kind = MoveAs<Mut, String>;
    type Flags = Defaults;

    fn first(_: &mut Outbox) -> usize {
        0
    }

    fn is_last(seq: &mut Outbox, cur: &usize) -> bool {
        *cur == seq.messages.len()
    }

    fn read_at<'a>(seq: &'a mut Outbox, cur: &usize) -> &'a mut String
    where
        Self::Value: 'a,
    {
        &mut seq.messages[*cur]
    }

    fn move_at<'a>(seq: &'a mut Outbox, cur: &usize) -> String
    where
        Self::Value: 'a,
    {
        std::mem::take(&mut seq.messages[*cur])
    }

    fn inc(_: &mut Outbox, cur: &mut usize) {
        *cur += 1;
    }
}

/// Hours on a clock face: counts forever, yet also names an end.
pub struct Clock;

impl SequenceTraits<Clock> for Clock {
    type Cursor = u32;
    type Value = u32;
    type Kind = Val;
    type Flags = Unbounded;

    fn first(_: &mut Clock) -> u32 {
        0
    }

    fn is_last(_: &mut Clock, _: &u32) -> bool {
        false
    }

    fn read_at<'a>(_: &'a mut Clock, cur: &u32) -> u32
    where
        Self::Value: 'a,
    {
        cur % 12
    }

    fn inc(_: &mut Clock, cur: &mut u32) {
        *cur = cur.wrapping_add(1);
    }
}

impl BoundedTraits<Clock> for Clock {
    fn last(_: &mut Clock) -> u32 {
        12
    }
}
