//! Modulo, multiply-then-mod, and square-and-multiply modular exponentiation.

use {
    crate::{
        bignum::{
            div::{div, DivResult},
            num::{Num, Slot},
            ops::{div_by_2, mult},
        },
        Error,
    },
    docext::docext,
};

const ONE: [u16; 1] = [1];

/// `r <- r mod m`, via a single division.
pub fn modulo(r: &mut Slot<'_>, m: Num<'_>, tmp: &mut DivResult<'_>) -> Result<(), Error> {
    div(tmp, r.as_num(), m)?;
    r.assign(tmp.rem.as_num(), 0)
}

/// `r <- (a * b) mod m`.
pub fn mult_mod(
    r: &mut Slot<'_>,
    a: Num<'_>,
    b: Num<'_>,
    m: Num<'_>,
    tmp: &mut DivResult<'_>,
) -> Result<(), Error> {
    mult(r, a, b)?;
    modulo(r, m, tmp)
}

/// A result slot, three scratch slots, and a borrowed [`DivResult`], all
/// mutually non-aliasing, bundled for [`pow_mod`].
pub struct PowResult<'a, 'b> {
    pub result: Slot<'a>,
    pub t1: Slot<'a>,
    pub t2: Slot<'a>,
    pub t3: Slot<'a>,
    pub div: &'b mut DivResult<'a>,
}

impl<'a, 'b> PowResult<'a, 'b> {
    pub fn new(
        result: Slot<'a>,
        t1: Slot<'a>,
        t2: Slot<'a>,
        t3: Slot<'a>,
        div: &'b mut DivResult<'a>,
    ) -> Self {
        Self {
            result,
            t1,
            t2,
            t3,
            div,
        }
    }
}

/// `p.result <- a^e mod m`, by square-and-multiply driven by the binary
/// expansion of `e` (obtained by repeated halving rather than bit shifts,
/// since `e` lives in the same limb representation as everything else).
///
/// Writing $e = \sum_{i=0}^{k} b_i 2^i$ for its bits $b_i \in \{0, 1\}$,
///
/// $$
/// a^e \bmod m = \prod_{i : b_i = 1} a^{2^i} \bmod m
/// $$
///
/// and each factor $a^{2^i} \bmod m$ is one more squaring of the previous
/// one, so the whole product is accumulated in a single pass over $e$'s
/// bits without ever materializing $a^e$ itself.
#[docext]
pub fn pow_mod(p: &mut PowResult<'_, '_>, a: Num<'_>, e: Num<'_>, m: Num<'_>) -> Result<(), Error> {
    if e.is_empty() {
        p.result.clear();
        return Ok(());
    }

    p.result.assign(Num::new(&ONE), 0)?;
    p.t2.assign(a, 0)?;
    p.t1.assign(e, 0)?;

    while !p.t1.is_empty() {
        if p.t1.is_odd() {
            mult_mod(&mut p.t3, p.result.as_num(), p.t2.as_num(), m, p.div)?;
            p.result.assign(p.t3.as_num(), 0)?;
        }
        mult_mod(&mut p.t3, p.t2.as_num(), p.t2.as_num(), m, p.div)?;
        p.t2.assign(p.t3.as_num(), 0)?;
        div_by_2(&mut p.t1);
    }
    Ok(())
}
