//! Fixed-capacity multi-precision non-negative integers.
//!
//! Every type here borrows its storage from the caller — [`num::Slot`] binds
//! to a `&mut [u16]` region of statically known size and never grows past
//! it. There is no heap allocation anywhere in this module; running out of
//! room surfaces as [`crate::Error::Capacity`] instead of silently
//! reallocating. [`num::Num`] is the read-only counterpart: an immutable,
//! always-trimmed window into a limb sequence.
//!
//! Limbs are 16-bit, base `0x10000`, little-endian (index 0 is least
//! significant). [`div`] implements long division by bisection search on the
//! quotient rather than classical long division, so it needs only the four
//! scratch slots in [`div::DivResult`]. [`modular::pow_mod`] layers
//! square-and-multiply modular exponentiation on top, reusing one
//! `DivResult` as its own scratch.
//!
//! None of this is constant-time; every operation branches on the value of
//! its operands. Callers needing side-channel resistance must look
//! elsewhere.

pub mod div;
pub mod modular;
pub mod num;
pub mod ops;

pub use {
    div::{div, DivResult},
    modular::{modulo, mult_mod, pow_mod, PowResult},
    num::{Num, Slot, BASE},
    ops::{add, div_by_2, mult, sub},
};
