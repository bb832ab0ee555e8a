use {crate::Error, std::cmp};

/// Number of distinct values a single limb can hold: `2^16`.
pub const BASE: u32 = 0x1_0000;

/// A read-only, trimmed window over a little-endian limb sequence.
///
/// Index 0 is the least significant limb. A `Num` never carries a trailing
/// (most significant) zero limb; the value zero is represented by an empty
/// slice. Construction always re-trims, so two `Num`s built from slices that
/// differ only in trailing zeros compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Num<'a>(&'a [u16]);

impl<'a> Num<'a> {
    /// Build a view over `limbs`, trimming any trailing zero limbs.
    pub fn new(limbs: &'a [u16]) -> Self {
        let mut end = limbs.len();
        while end > 0 && limbs[end - 1] == 0 {
            end -= 1;
        }
        Self(&limbs[..end])
    }

    /// The trimmed limb sequence, least significant first.
    pub fn limbs(&self) -> &'a [u16] {
        self.0
    }

    /// Number of limbs. Zero iff the value is zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for Num<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Num<'_> {}

impl PartialOrd for Num<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Num<'_> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        // Shorter (fewer limbs) is always smaller; among equal lengths,
        // compare from the most significant limb down.
        match self.0.len().cmp(&other.0.len()) {
            cmp::Ordering::Equal => self.0.iter().rev().cmp(other.0.iter().rev()),
            ord => ord,
        }
    }
}

/// A fixed-capacity, writable limb region with a logical length cursor.
///
/// `used` tracks how many of the backing limbs are logically part of the
/// number; `[0, used)` is always canonical (no trailing zero limb) once a
/// mutating call returns. The backing region's length is the capacity and
/// never changes — writing past it is reported as [`Error::Capacity`]
/// instead of growing the buffer.
#[derive(Debug)]
pub struct Slot<'a> {
    limbs: &'a mut [u16],
    used: usize,
}

impl<'a> Slot<'a> {
    /// Bind a slot to a caller-owned region. The slot starts out representing
    /// zero regardless of the region's prior contents.
    pub fn new(limbs: &'a mut [u16]) -> Self {
        Self { limbs, used: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Parity of the represented integer, i.e. the low bit of the least
    /// significant limb.
    pub fn is_odd(&self) -> bool {
        self.used > 0 && self.limbs[0] % 2 == 1
    }

    /// Borrow the current contents as a read-only view.
    pub fn as_num(&self) -> Num<'_> {
        Num::new(&self.limbs[..self.used])
    }

    /// Set the logical length to zero. Does not touch the backing storage.
    pub fn clear(&mut self) {
        self.used = 0;
    }

    /// Append a single limb as the new most significant digit.
    pub fn push(&mut self, limb: u16) -> Result<(), Error> {
        if self.used == self.limbs.len() {
            return Err(Error::Capacity);
        }
        self.limbs[self.used] = limb;
        self.used += 1;
        Ok(())
    }

    /// Overwrite this slot with `num`, optionally preceded by `shift` zero
    /// limbs (equivalent to multiplying `num` by `BASE^shift`).
    ///
    /// Because `num` is already trimmed, any trailing zeros introduced by
    /// `shift` land in the middle of the result, never at the high end, so
    /// no re-trim is needed afterwards.
    pub fn assign(&mut self, num: Num<'_>, shift: usize) -> Result<(), Error> {
        self.used = 0;
        for _ in 0..shift {
            self.push(0)?;
        }
        for &limb in num.limbs() {
            self.push(limb)?;
        }
        Ok(())
    }

    /// Double the represented value in place (`self <- self + self`).
    ///
    /// The reference contract requires `add(r, r)` to work, but the borrow
    /// checker won't allow passing a view of `self` into a function that
    /// also takes `&mut self`. This is the same carry-propagating pass as
    /// [`add`](super::ops::add), specialized so it only ever needs one
    /// borrow: each digit is read once and immediately overwritten, so there
    /// is nothing to alias.
    pub fn double(&mut self) -> Result<(), Error> {
        let mut carry: u32 = 0;
        for i in 0..self.used {
            let sum = self.limbs[i] as u32 * 2 + carry;
            carry = sum / BASE;
            self.limbs[i] = (sum % BASE) as u16;
        }
        while carry != 0 {
            self.push((carry % BASE) as u16)?;
            carry /= BASE;
        }
        Ok(())
    }

    /// Drop trailing zero limbs so `[0, used)` is canonical again. Called at
    /// the tail of every arithmetic primitive that can introduce them.
    pub(crate) fn trim(&mut self) {
        while self.used > 0 && self.limbs[self.used - 1] == 0 {
            self.used -= 1;
        }
    }

    /// Current logical length, i.e. the number of limbs `[0, used)`.
    pub(crate) fn used(&self) -> usize {
        self.used
    }

    /// Direct limb access for `ops`/`div`/`modular`, which must read and
    /// write individual digits by index while tracking capacity and `used`
    /// themselves.
    pub(crate) fn limb(&self, i: usize) -> u16 {
        if i < self.used {
            self.limbs[i]
        } else {
            0
        }
    }

    pub(crate) fn set_limb(&mut self, i: usize, v: u16) -> Result<(), Error> {
        if i >= self.limbs.len() {
            return Err(Error::Capacity);
        }
        self.limbs[i] = v;
        if i + 1 > self.used {
            self.used = i + 1;
        }
        Ok(())
    }
}
