pub mod iota;
pub mod slice;
