//! A multi-precision integer here is a sequence of `u16` limbs, base
//! `0x10000`, stored least significant first. This is the same
//! representation a calculator uses for long multiplication on paper —
//! columns of digits, except each "digit" ranges over 65536 values instead
//! of 10, and carries propagate the same way.
//!
//! No limb sequence ever carries a leading (most significant) zero limb;
//! the value zero is the empty sequence. This is what makes two views
//! comparable with ordinary slice equality and lets [ordering](Num#impl-Ord-for-Num)
//! read off the limb count before looking at a single digit.
//!
//! # Why bisection division
//!
//! Classical long division chooses each quotient digit by trial
//! subtraction, which needs a scratch region almost as wide as the
//! dividend. [`div`](crate::bignum::div) instead binary-searches the
//! quotient itself: the search invariant is that the true quotient always
//! lies in `[quot, rem)`, and each step multiplies the candidate midpoint
//! by the divisor to decide which half to keep. Four slots — quotient,
//! remainder-as-upper-bound, and two scratch values for the midpoint and
//! its product — are enough regardless of how many digits either operand
//! has. The price is `O(log a)` multiplications instead of `O(n)`
//! subtractions; for the modest operand sizes an embedded RSA
//! implementation deals with, that trade is the right one.
//!
//! # Why square-and-multiply
//!
//! [`pow_mod`](crate::bignum::modular::pow_mod) computes `a^e mod m` by
//! walking the bits of `e` from least to most significant (via repeated
//! halving, since `e` lives in the same limb representation as everything
//! else) — squaring a running accumulator every step, and folding in an
//! extra multiply-by-`a` whenever the current bit is set. Each
//! intermediate value is reduced mod `m` immediately, so no intermediate
//! ever grows past twice the modulus's width. This is the only
//! exponentiation strategy here; nothing about this crate is constant-time,
//! so it isn't a substitute for a side-channel-hardened implementation.
