//! Long division by bisection search on the quotient.

use {
    crate::{
        bignum::{
            num::{Num, Slot},
            ops::{add, div_by_2, mult, sub},
        },
        Error,
    },
    docext::docext,
};

const ONE: [u16; 1] = [1];

/// Four mutually non-aliasing scratch slots bound to one division.
pub struct DivResult<'a> {
    pub quot: Slot<'a>,
    pub rem: Slot<'a>,
    pub s1: Slot<'a>,
    pub s2: Slot<'a>,
}

impl<'a> DivResult<'a> {
    pub fn new(quot: Slot<'a>, rem: Slot<'a>, s1: Slot<'a>, s2: Slot<'a>) -> Self {
        Self { quot, rem, s1, s2 }
    }
}

/// `d.quot <- floor(a / b)`, `d.rem <- a mod b`.
///
/// Searches for the quotient by binary search on `[0, a+1]` rather than
/// classical long division, trading `O(log a)` extra multiplications for not
/// needing any scratch beyond the four slots already in `d`. `b` must be
/// non-zero.
///
/// The loop invariant is $quot \le \lfloor a/b \rfloor < rem$ at the top of
/// every iteration; the midpoint $s_1 = \lfloor (quot + rem) / 2 \rfloor$
/// either becomes the new lower bound (if $s_1 b \le a$) or the new upper
/// bound (otherwise), halving the gap each time until it stops moving.
#[docext]
pub fn div(d: &mut DivResult<'_>, a: Num<'_>, b: Num<'_>) -> Result<(), Error> {
    if b.is_empty() {
        return Err(Error::InvalidArgument);
    }

    d.quot.clear();
    d.rem.assign(a, 0)?;
    add(&mut d.rem, Num::new(&ONE))?;

    loop {
        // s1 <- (quot + rem) / 2
        d.s1.assign(d.quot.as_num(), 0)?;
        add(&mut d.s1, d.rem.as_num())?;
        div_by_2(&mut d.s1);

        mult(&mut d.s2, d.s1.as_num(), b)?;

        if d.s1.as_num() == d.quot.as_num() {
            // The midpoint stopped moving; quot/s2 hold the final answer.
            break;
        }
        if d.s2.as_num() == a {
            d.quot.assign(d.s1.as_num(), 0)?;
            d.rem.clear();
            return Ok(());
        }
        if d.s2.as_num() < a {
            d.quot.assign(d.s1.as_num(), 0)?;
        } else {
            d.rem.assign(d.s1.as_num(), 0)?;
        }
    }

    d.rem.assign(a, 0)?;
    sub(&mut d.rem, d.s2.as_num())?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn div_result<'a>(
        qbuf: &'a mut [u16],
        rbuf: &'a mut [u16],
        s1buf: &'a mut [u16],
        s2buf: &'a mut [u16],
    ) -> DivResult<'a> {
        DivResult::new(
            Slot::new(qbuf),
            Slot::new(rbuf),
            Slot::new(s1buf),
            Slot::new(s2buf),
        )
    }

    #[test]
    fn div_zero_divisor_is_invalid_argument() {
        let mut bufs = [[0u16; 4]; 4];
        let [qb, rb, s1b, s2b] = &mut bufs;
        let mut d = div_result(qb, rb, s1b, s2b);
        assert!(matches!(
            div(&mut d, Num::new(&[1]), Num::new(&[])),
            Err(Error::InvalidArgument)
        ));
    }

    #[test]
    fn div_exact() {
        let mut bufs = [[0u16; 4]; 4];
        let [qb, rb, s1b, s2b] = &mut bufs;
        let mut d = div_result(qb, rb, s1b, s2b);
        div(&mut d, Num::new(&[102]), Num::new(&[10])).unwrap();
        assert_eq!(d.quot.as_num(), Num::new(&[10]));
        assert_eq!(d.rem.as_num(), Num::new(&[2]));
    }

    #[test]
    fn div_130_by_17() {
        let mut bufs = [[0u16; 4]; 4];
        let [qb, rb, s1b, s2b] = &mut bufs;
        let mut d = div_result(qb, rb, s1b, s2b);
        div(&mut d, Num::new(&[130]), Num::new(&[17])).unwrap();
        assert_eq!(d.quot.as_num(), Num::new(&[7]));
        assert_eq!(d.rem.as_num(), Num::new(&[11]));
    }

    #[test]
    fn div_zero_dividend() {
        let mut bufs = [[0u16; 4]; 4];
        let [qb, rb, s1b, s2b] = &mut bufs;
        let mut d = div_result(qb, rb, s1b, s2b);
        div(&mut d, Num::new(&[]), Num::new(&[10])).unwrap();
        assert!(d.quot.as_num().is_empty());
        assert!(d.rem.as_num().is_empty());
    }
}
