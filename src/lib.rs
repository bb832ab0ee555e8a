//! Fixed-capacity multi-precision arithmetic and an RSA block codec, written
//! for embedded use: no heap is touched during computation, and every
//! operation writes into storage the caller already owns.
//!
//! [`bignum`] is the arithmetic core — views, slots, and the eight
//! primitives (equality, ordering, add, subtract, multiply, halve,
//! divide-with-remainder, modular exponentiation). [`rsa`] layers a
//! PKCS#1 v1.5 type-2 block codec on top of it.

#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

pub mod bignum;
pub mod rsa;

mod error;
mod random;

pub use {error::Error, random::{ConstantByte, Csprng}};
