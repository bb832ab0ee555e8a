//! Prose documentation not attached to any particular item.

pub mod bignum;
