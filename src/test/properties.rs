//! Property-based tests comparing fixed-capacity arithmetic against native
//! integer behavior, in the style of a reference corpus model rather than
//! hand-picked scenarios.

use quickcheck_macros::quickcheck;

use crate::bignum::{
    add,
    div::{div, DivResult},
    div_by_2,
    modular::{pow_mod, PowResult},
    mult,
    num::{Num, Slot},
    sub,
};

const LIMBS: usize = 5;

fn to_num(buf: &mut [u16; 2], v: u32) -> Num<'_> {
    buf[0] = (v & 0xffff) as u16;
    buf[1] = (v >> 16) as u16;
    Num::new(buf)
}

fn from_num(n: Num<'_>) -> u64 {
    n.limbs()
        .iter()
        .rev()
        .fold(0u64, |acc, &limb| (acc << 16) | limb as u64)
}

#[quickcheck]
fn canonical_form_has_no_trailing_zero_limb(limbs: Vec<u16>) -> bool {
    let n = Num::new(&limbs);
    n.is_empty() || *n.limbs().last().unwrap() != 0
}

#[quickcheck]
fn add_then_sub_is_identity(a: u32, b: u16) -> bool {
    let mut abuf = [0u16; 2];
    let a_num = to_num(&mut abuf, a);
    let b_num = Num::new(std::slice::from_ref(&b));

    let mut r = [0u16; LIMBS];
    let mut rs = Slot::new(&mut r);
    rs.assign(a_num, 0).unwrap();
    if add(&mut rs, b_num).is_err() {
        return true; // capacity exhaustion is a valid outcome, not a bug
    }
    if sub(&mut rs, b_num).is_err() {
        return false;
    }
    from_num(rs.as_num()) == a as u64
}

#[quickcheck]
fn mult_matches_u64_multiplication(a: u16, b: u16) -> bool {
    let mut r = [0u16; LIMBS];
    let mut rs = Slot::new(&mut r);
    mult(&mut rs, Num::new(&[a]), Num::new(&[b])).unwrap();
    from_num(rs.as_num()) == a as u64 * b as u64
}

#[quickcheck]
fn div_satisfies_quot_times_b_plus_rem_eq_a(a: u32, b: u16) -> bool {
    if b == 0 {
        return true;
    }
    let mut abuf = [0u16; 2];
    let a_num = to_num(&mut abuf, a);
    let b_num = Num::new(std::slice::from_ref(&b));

    let mut quot = [0u16; LIMBS];
    let mut rem = [0u16; LIMBS];
    let mut s1 = [0u16; LIMBS];
    let mut s2 = [0u16; LIMBS];
    let mut d = DivResult::new(
        Slot::new(&mut quot),
        Slot::new(&mut rem),
        Slot::new(&mut s1),
        Slot::new(&mut s2),
    );
    div(&mut d, a_num, b_num).unwrap();

    let quot_v = from_num(d.quot.as_num());
    let rem_v = from_num(d.rem.as_num());
    quot_v * b as u64 + rem_v == a as u64 && rem_v < b as u64
}

#[quickcheck]
fn div_by_2_matches_shift(a: u32) -> bool {
    let mut abuf = [0u16; 2];
    let a_num = to_num(&mut abuf, a);
    let mut r = [0u16; LIMBS];
    let mut rs = Slot::new(&mut r);
    rs.assign(a_num, 0).unwrap();
    div_by_2(&mut rs);
    from_num(rs.as_num()) == (a as u64) / 2
}

#[quickcheck]
fn pow_mod_result_is_always_less_than_modulus(a: u16, e: u8, m: u16) -> bool {
    if m == 0 {
        return true;
    }
    let mut quot = [0u16; LIMBS];
    let mut rem = [0u16; LIMBS];
    let mut s1 = [0u16; LIMBS];
    let mut s2 = [0u16; LIMBS];
    let mut div_result = DivResult::new(
        Slot::new(&mut quot),
        Slot::new(&mut rem),
        Slot::new(&mut s1),
        Slot::new(&mut s2),
    );
    let mut result = [0u16; LIMBS];
    let mut t1 = [0u16; LIMBS];
    let mut t2 = [0u16; LIMBS];
    let mut t3 = [0u16; LIMBS];
    let mut p = PowResult::new(
        Slot::new(&mut result),
        Slot::new(&mut t1),
        Slot::new(&mut t2),
        Slot::new(&mut t3),
        &mut div_result,
    );
    pow_mod(&mut p, Num::new(&[a]), Num::new(&[e as u16]), Num::new(&[m])).unwrap();
    from_num(p.result.as_num()) < m as u64
}

#[quickcheck]
fn ordering_matches_u64_ordering(a: u16, b: u16) -> bool {
    let ord = Num::new(&[a]).cmp(&Num::new(&[b]));
    ord == a.cmp(&b)
}
