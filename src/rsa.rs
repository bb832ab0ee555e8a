//! PKCS#1 v1.5 type-2 RSA block codec, layered on [`crate::bignum`].
//!
//! The modulus and both exponents are caller-supplied views (this module
//! does nothing resembling key generation); [`RsaState`] bundles a
//! (modulus, exponent) pair with the scratch an RSA operation needs and
//! exposes [`RsaState::encrypt`]/[`RsaState::decrypt`]. Encrypting with the
//! public exponent and decrypting with the private one (or vice versa for a
//! signature-style operation) are the same primitive; bind two separate
//! `RsaState`s, one per exponent, if a caller needs both directions.

use crate::{
    bignum::{
        div::DivResult,
        modular::{pow_mod, PowResult},
        num::{Num, Slot},
    },
    Csprng, Error,
};

/// The byte length of an RSA block for the given modulus: the byte length
/// of the modulus with any leading all-zero byte dropped.
///
/// The dropped byte (when the top limb fits in 0..=0xff) is always the
/// high byte of the top limb, which is then always zero for any value less
/// than the modulus too — so serializing a block at this width never loses
/// a significant bit. Using `(top_limb > 0xff) as usize` instead (a byte
/// short whenever the top limb *does* need both bytes) would silently
/// truncate the one byte that isn't always zero.
///
/// This can return an odd value, when the top limb fits in a single byte.
/// Such a modulus has no valid PKCS#1 v1.5 type-2 encoding: the `0x00 0x02`
/// marker always occupies one whole top limb, which needs both of that
/// limb's bytes to be significant. [`RsaState::encrypt`] and
/// [`RsaState::decrypt`] reject an odd block size with
/// [`Error::InvalidArgument`] rather than silently producing a block that
/// can never decrypt.
pub fn byte_size(modulus: Num<'_>) -> usize {
    let limbs = modulus.limbs();
    if limbs.is_empty() {
        return 0;
    }
    let n = limbs.len();
    let top = limbs[n - 1];
    2 * n - if top <= 0xff { 1 } else { 0 }
}

/// Recommended limb capacity for every scratch slot an [`RsaState`] needs.
///
/// `block` and `pow.result` only ever hold values reduced mod the modulus,
/// so `modulus.len() + 1` covers them. But [`crate::bignum::ops::mult`]
/// inside `pow_mod`'s repeated `mult_mod` calls builds the *unreduced*
/// product of two mod-`m` operands before reducing it — up to twice the
/// modulus's width — and `div`'s own scratch (reached through
/// [`DivResult`]) needs headroom for that same double-width dividend. This
/// is the width every scratch slot must share to be safe in the general
/// case; not in the original source, which leaves scratch sizing entirely
/// to the caller (see DESIGN.md).
pub fn scratch_limbs_for(modulus: Num<'_>) -> usize {
    2 * modulus.len() + 2
}

/// A modulus/exponent pair bound to the scratch an encrypt or decrypt
/// operation needs: a staging slot for the padded block plus a
/// [`PowResult`] (which itself carries a [`DivResult`]).
pub struct RsaState<'a, 'b> {
    modulus: Num<'a>,
    exponent: Num<'a>,
    block: Slot<'a>,
    pow: PowResult<'a, 'b>,
}

impl<'a, 'b> RsaState<'a, 'b> {
    pub fn new(
        modulus: Num<'a>,
        exponent: Num<'a>,
        block: Slot<'a>,
        pow: PowResult<'a, 'b>,
    ) -> Self {
        Self {
            modulus,
            exponent,
            block,
            pow,
        }
    }

    pub fn byte_size(&self) -> usize {
        byte_size(self.modulus)
    }

    /// Encrypt `plaintext` into `ciphertext_out`, which must be exactly
    /// [`RsaState::byte_size`] bytes. Requires `plaintext.len() + 11 <=
    /// byte_size()`; `csprng` supplies the non-zero padding bytes PKCS#1
    /// v1.5 type-2 padding requires. Returns [`Error::InvalidArgument`] if
    /// the modulus's block size is odd (see [`byte_size`]) — no plaintext
    /// can be encoded under such a modulus.
    pub fn encrypt(
        &mut self,
        plaintext: &[u8],
        csprng: &mut impl Csprng,
        ciphertext_out: &mut [u8],
    ) -> Result<(), Error> {
        let k = self.byte_size();
        if k % 2 == 1 {
            return Err(Error::InvalidArgument);
        }
        let l = plaintext.len();
        if l + 11 > k {
            return Err(Error::InvalidArgument);
        }
        if ciphertext_out.len() != k {
            return Err(Error::Capacity);
        }
        let ps_len = k - l - 3;

        build_padded_block(&mut self.block, plaintext, ps_len, csprng)?;
        pow_mod(&mut self.pow, self.block.as_num(), self.exponent, self.modulus)?;
        le_bytes_from_limbs(self.pow.result.as_num(), ciphertext_out);
        Ok(())
    }

    /// Decrypt `ciphertext` (at least [`RsaState::byte_size`] bytes; extra
    /// trailing bytes are ignored) into `plaintext_out`. Returns the number
    /// of plaintext bytes written — the Rust equivalent of the reference
    /// implementation's one-past-end output cursor, since the recovered
    /// length isn't known until the padding is unwound. Returns
    /// [`Error::InvalidArgument`] if the modulus's block size is odd (see
    /// [`byte_size`]) — such a modulus could never have produced a valid
    /// ciphertext to begin with.
    pub fn decrypt(&mut self, ciphertext: &[u8], plaintext_out: &mut [u8]) -> Result<usize, Error> {
        let k = self.byte_size();
        if k % 2 == 1 {
            return Err(Error::InvalidArgument);
        }
        if ciphertext.len() < k {
            return Err(Error::InvalidArgument);
        }

        le_bytes_to_limbs(&ciphertext[..k], &mut self.block)?;
        pow_mod(&mut self.pow, self.block.as_num(), self.exponent, self.modulus)?;

        unwrap_padded_block(self.pow.result.as_num(), k, plaintext_out)
    }
}

/// Generate a non-zero byte, rejection-sampling the oracle. PKCS#1 padding
/// bytes must never be zero (a zero byte would be indistinguishable from
/// the separator); the reference's `random_char` stub always returns a
/// fixed non-zero constant, so this never loops there, but a real CSPRNG
/// can and does produce zero bytes.
fn rand_nonzero_byte(csprng: &mut impl Csprng) -> u8 {
    loop {
        let b = csprng.next();
        if b != 0 {
            return b;
        }
    }
}

/// Byte `i` (0 = most significant) of the `0x00 0x02 | PS | 0x00 | M`
/// encoded block, computed on demand rather than materialized in a K-byte
/// buffer — this crate never allocates, and a byte array sized to the key
/// would be exactly the kind of caller-invisible storage it's meant to
/// avoid.
fn eb_byte(i: usize, plaintext: &[u8], ps_len: usize, csprng: &mut impl Csprng) -> u8 {
    if i == 0 {
        0x00
    } else if i == 1 {
        0x02
    } else if i < 2 + ps_len {
        rand_nonzero_byte(csprng)
    } else if i == 2 + ps_len {
        0x00
    } else {
        plaintext[i - (2 + ps_len + 1)]
    }
}

/// Build the padded block as a number directly in `block`, pairing encoded
/// bytes from the high (marker) end down to the low (plaintext) end.
/// `block`'s push always extends the most significant limb, so the last
/// pair pushed — the `0x00 0x02` marker — ends up the top limb, matching
/// the invariant [`unwrap_padded_block`] checks on the way back out.
///
/// Each byte of the encoded block is generated (and, for padding bytes,
/// drawn from `csprng`) exactly once, in this descending order; since
/// padding is random regardless of which position consumes which draw,
/// generating it high-to-low instead of low-to-high changes nothing
/// observable.
///
/// `k` (the encoded block's byte length) is always even here: it equals
/// [`RsaState`]'s `byte_size()`, and both
/// [`RsaState::encrypt`]/[`RsaState::decrypt`] reject an odd one before
/// either direction ever touches the block.
fn build_padded_block(
    block: &mut Slot<'_>,
    plaintext: &[u8],
    ps_len: usize,
    csprng: &mut impl Csprng,
) -> Result<(), Error> {
    let k = 2 + ps_len + 1 + plaintext.len();
    block.clear();
    let mut end = k;
    while end >= 2 {
        let lo = eb_byte(end - 2, plaintext, ps_len, csprng);
        let hi = eb_byte(end - 1, plaintext, ps_len, csprng);
        block.push((lo as u16) | ((hi as u16) << 8))?;
        end -= 2;
    }
    Ok(())
}

/// Inverse of [`build_padded_block`]: validate the marker, find the
/// separator, and copy the plaintext bytes that follow it into
/// `plaintext_out`. Returns the number of bytes written.
///
/// `k` is always even, for the same reason noted on [`build_padded_block`].
fn unwrap_padded_block(block: Num<'_>, k: usize, plaintext_out: &mut [u8]) -> Result<usize, Error> {
    let limbs = block.limbs();
    if limbs.last().copied() != Some(0x0200) {
        return Err(Error::InvalidArgument);
    }

    let expected_limbs = k / 2;
    let mut written = 0usize;
    let mut seen_separator = false;
    let mut pos = 0usize;
    for limb_idx in (0..expected_limbs).rev() {
        let limb = limbs.get(limb_idx).copied().unwrap_or(0);
        let pair = [(limb & 0xff) as u8, (limb >> 8) as u8];
        for &b in &pair {
            if pos >= 2 {
                if !seen_separator {
                    if b == 0 {
                        seen_separator = true;
                    }
                } else {
                    if written >= plaintext_out.len() {
                        return Err(Error::Capacity);
                    }
                    plaintext_out[written] = b;
                    written += 1;
                }
            }
            pos += 1;
        }
    }
    if !seen_separator {
        return Err(Error::InvalidArgument);
    }
    Ok(written)
}

/// Deserialize `bytes` little-endian, two bytes per limb, a trailing lone
/// byte as a half limb with zero high byte — the wire format of an RSA
/// block, distinct from [`build_padded_block`]'s PKCS#1-aware packing.
fn le_bytes_to_limbs(bytes: &[u8], block: &mut Slot<'_>) -> Result<(), Error> {
    block.clear();
    let mut i = 0usize;
    while i < bytes.len() {
        let low = bytes[i];
        let high = if i + 1 < bytes.len() { bytes[i + 1] } else { 0 };
        block.push((low as u16) | ((high as u16) << 8))?;
        i += 2;
    }
    Ok(())
}

/// Serialize `num` little-endian into `out`: low byte then high byte per
/// limb, truncating trailing limbs and zero-padding to `out.len()` bytes.
fn le_bytes_from_limbs(num: Num<'_>, out: &mut [u8]) {
    out.fill(0);
    for (i, &limb) in num.limbs().iter().enumerate() {
        let lo = (limb & 0xff) as u8;
        let hi = (limb >> 8) as u8;
        if 2 * i < out.len() {
            out[2 * i] = lo;
        }
        if 2 * i + 1 < out.len() {
            out[2 * i + 1] = hi;
        }
    }
}
