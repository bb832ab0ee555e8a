//! In-place addition, subtraction, schoolbook multiplication, and halving.

use crate::{
    bignum::num::{Num, Slot, BASE},
    Error,
};

/// `r <- r + n`, extending `r` as needed.
///
/// Self-aliasing (doubling `r` by adding it to itself) cannot be expressed
/// by calling `add(r, r.as_num())` in Rust — that would require an
/// immutable and a mutable borrow of the same region at once. Use
/// [`Slot::double`](super::num::Slot) for that case instead; it performs the
/// same carry-propagating pass reading each digit exactly once before
/// overwriting it.
pub fn add(r: &mut Slot<'_>, n: Num<'_>) -> Result<(), Error> {
    let nd = n.limbs();
    let mut carry: u32 = 0;
    let mut i = 0usize;
    while i < nd.len() || carry != 0 {
        let mut sum = carry;
        if i < nd.len() {
            sum += nd[i] as u32;
        }
        sum += r.limb(i) as u32;
        let digit = if sum >= BASE {
            sum -= BASE;
            carry = 1;
            sum
        } else {
            carry = 0;
            sum
        };
        r.set_limb(i, digit as u16)?;
        i += 1;
    }
    Ok(())
}

/// `r <- r - n`. Requires `r >= n`; behavior is unspecified (but memory-safe)
/// if that precondition is violated, same as the reference implementation.
pub fn sub(r: &mut Slot<'_>, n: Num<'_>) -> Result<(), Error> {
    let nd = n.limbs();
    let mut borrow: i64 = 0;
    let mut i = 0usize;
    while i < nd.len() || borrow != 0 {
        let nv = if i < nd.len() { nd[i] as i64 } else { 0 };
        let mut diff = r.limb(i) as i64 - nv - borrow;
        if diff < 0 {
            diff += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        r.set_limb(i, diff as u16)?;
        i += 1;
    }
    r.trim();
    Ok(())
}

/// `v <- floor(v / 2)`.
pub fn div_by_2(v: &mut Slot<'_>) {
    let mut overflow: u32 = 0;
    for i in (0..v.used()).rev() {
        let digit = v.limb(i) as u32;
        let sum = overflow + digit / 2;
        overflow = (digit % 2) * (BASE / 2);
        // Writing within [0, used) never grows `used`, so this can't fail.
        v.set_limb(i, sum as u16).expect("index within current length");
    }
    v.trim();
}

/// `r <- a * b`, out of place. `r` must not alias `a` or `b`.
pub fn mult(r: &mut Slot<'_>, a: Num<'_>, b: Num<'_>) -> Result<(), Error> {
    r.clear();
    if a.is_empty() || b.is_empty() {
        return Ok(());
    }
    for (i, &ai) in a.limbs().iter().enumerate() {
        multiply_and_add(r, b, ai, i)?;
    }
    Ok(())
}

/// `r <- r + (factor * b * BASE^shift)`, the schoolbook inner step.
fn multiply_and_add(r: &mut Slot<'_>, b: Num<'_>, factor: u16, shift: usize) -> Result<(), Error> {
    if b.is_empty() || factor == 0 {
        return Ok(());
    }
    while r.used() < shift {
        r.push(0)?;
    }
    let bd = b.limbs();
    let mut overflow: u32 = 0;
    let mut j = 0usize;
    while j < bd.len() || overflow != 0 {
        let idx = shift + j;
        let mut sum = overflow;
        if j < bd.len() {
            sum += bd[j] as u32 * factor as u32;
        }
        sum += r.limb(idx) as u32;
        overflow = sum / BASE;
        r.set_limb(idx, (sum % BASE) as u16)?;
        j += 1;
    }
    Ok(())
}
