//! Sign-aware addition, subtraction and schoolbook multiplication.
//!
//! All sign handling lives in the signed entry points; the magnitude kernels
//! ignore signs. Every result is trimmed and zero is always non-negative.
//!
//! Output aliasing: `*_into` functions take a distinct output. The in-place
//! `*_assign` forms cover the case where the output is also an input. Add and
//! subtract run least-significant limb first, so each limb of `self` is read
//! before it is overwritten; multiply computes into a scratch value and swaps.

use std::cmp::Ordering;

use crate::error::BigIntError;
use crate::limb_ops::{add_with_carry, limbs_for_bits, mul_add_at, mul_wide, sub_with_borrow};
use crate::storage::BigInt;

impl BigInt {
    /// `|self| = |self| + |rhs|`
    fn add_magnitude_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        let bits = self.bit_length().max(rhs.bit_length()) + 1;
        self.resize(limbs_for_bits(bits))?;
        let mut carry = 0;
        for (i, limb) in self.limbs_mut().iter_mut().enumerate() {
            let (sum, c) = add_with_carry(*limb, rhs.limb(i), carry);
            *limb = sum;
            carry = c;
        }
        Ok(())
    }

    /// `|self| = |self| - |rhs|`, requires `|self| >= |rhs|`.
    fn sub_magnitude_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        self.resize(self.size().max(rhs.size()))?;
        let mut borrow = 0;
        for (i, limb) in self.limbs_mut().iter_mut().enumerate() {
            let (diff, b) = sub_with_borrow(*limb, rhs.limb(i), borrow);
            *limb = diff;
            borrow = b;
        }
        Ok(())
    }

    /// `|self| = |rhs| - |self|`, requires `|rhs| >= |self|`.
    fn rsub_magnitude_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        self.resize(self.size().max(rhs.size()))?;
        let mut borrow = 0;
        for (i, limb) in self.limbs_mut().iter_mut().enumerate() {
            let (diff, b) = sub_with_borrow(rhs.limb(i), *limb, borrow);
            *limb = diff;
            borrow = b;
        }
        Ok(())
    }

    /// `self += rhs`, with `rhs` carrying the sign `rhs_negative`.
    fn add_signed_assign(&mut self, rhs: &BigInt, rhs_negative: bool) -> Result<(), BigIntError> {
        self.ensure_live()?;
        rhs.ensure_live()?;
        if self.is_negative() == rhs_negative {
            self.add_magnitude_assign(rhs)?;
        } else {
            match self.cmp_abs(rhs) {
                Ordering::Greater => self.sub_magnitude_assign(rhs)?,
                Ordering::Less => {
                    self.rsub_magnitude_assign(rhs)?;
                    self.set_negative(rhs_negative);
                }
                Ordering::Equal => self.set_zero()?,
            }
        }
        self.normalize();
        Ok(())
    }

    /// `self = self + rhs`
    ///
    /// # Example
    /// ```
    /// use fibdrv_bignum::BigInt;
    ///
    /// let mut acc = BigInt::from(-5i64);
    /// acc.add_assign(&BigInt::from(3i64)).unwrap();
    /// assert_eq!(acc, BigInt::from(-2i64));
    /// ```
    pub fn add_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        self.add_signed_assign(rhs, rhs.is_negative())
    }

    /// `self = self - rhs`. `rhs` is not modified.
    pub fn sub_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        self.add_signed_assign(rhs, !rhs.is_negative())
    }

    /// Grow `self` so that `a ± b` can be built in it without allocating.
    ///
    /// This is the only step of `add_into`/`sub_into` that can fail for lack
    /// of storage, and it fails before `self` changes.
    fn reserve_for_sum(&mut self, a: &BigInt, b: &BigInt) -> Result<(), BigIntError> {
        a.ensure_live()?;
        b.ensure_live()?;
        let bits = a.bit_length().max(b.bit_length()) + 1;
        let n = limbs_for_bits(bits).max(a.size()).max(b.size());
        if n > self.capacity() {
            self.resize(n)?;
        }
        Ok(())
    }

    /// `out = a + b`
    ///
    /// On error `out` keeps its previous value.
    pub fn add_into(a: &BigInt, b: &BigInt, out: &mut BigInt) -> Result<(), BigIntError> {
        out.reserve_for_sum(a, b)?;
        out.copy_from(a)?;
        out.add_assign(b)
    }

    /// `out = a - b`
    ///
    /// On error `out` keeps its previous value.
    pub fn sub_into(a: &BigInt, b: &BigInt, out: &mut BigInt) -> Result<(), BigIntError> {
        out.reserve_for_sum(a, b)?;
        out.copy_from(a)?;
        out.sub_assign(b)
    }

    /// `out = |a| + |b|`
    ///
    /// The result holds `max(bits(a), bits(b)) + 1` bits rounded up to whole
    /// limbs, then trimmed.
    pub fn add_magnitude(a: &BigInt, b: &BigInt, out: &mut BigInt) -> Result<(), BigIntError> {
        b.ensure_live()?;
        out.copy_from(a)?;
        out.set_negative(false);
        out.add_magnitude_assign(b)?;
        out.normalize();
        Ok(())
    }

    /// `out = |a| - |b|`
    ///
    /// Fails with [`BigIntError::PreconditionViolation`] when `|a| < |b|`,
    /// leaving `out` untouched.
    pub fn sub_magnitude(a: &BigInt, b: &BigInt, out: &mut BigInt) -> Result<(), BigIntError> {
        a.ensure_live()?;
        b.ensure_live()?;
        if a.cmp_abs(b) == Ordering::Less {
            return Err(BigIntError::PreconditionViolation);
        }
        out.copy_from(a)?;
        out.set_negative(false);
        out.sub_magnitude_assign(b)?;
        out.normalize();
        Ok(())
    }

    /// Schoolbook product of `a` and `b` into a distinct `out`.
    fn mul_kernel(a: &BigInt, b: &BigInt, out: &mut BigInt) -> Result<(), BigIntError> {
        out.resize(limbs_for_bits(a.bit_length() + b.bit_length()))?;
        let acc = out.limbs_mut();
        acc.fill(0);
        for (i, &x) in a.significant_limbs().iter().enumerate() {
            if x == 0 {
                continue;
            }
            for (j, &y) in b.significant_limbs().iter().enumerate() {
                mul_add_at(acc, i + j, mul_wide(x, y));
            }
        }
        out.set_negative(a.is_negative() != b.is_negative());
        out.normalize();
        Ok(())
    }

    /// `out = a * b`
    ///
    /// # Example
    /// ```
    /// use fibdrv_bignum::BigInt;
    ///
    /// let a = BigInt::from(-4i64);
    /// let b = BigInt::from(6i64);
    /// let mut out = BigInt::allocate(1).unwrap();
    /// BigInt::mul_into(&a, &b, &mut out).unwrap();
    /// assert_eq!(out, BigInt::from(-24i64));
    /// ```
    pub fn mul_into(a: &BigInt, b: &BigInt, out: &mut BigInt) -> Result<(), BigIntError> {
        a.ensure_live()?;
        b.ensure_live()?;
        out.ensure_live()?;
        Self::mul_kernel(a, b, out)
    }

    /// `self = self * rhs`, computed into scratch storage and swapped in.
    pub fn mul_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        self.ensure_live()?;
        rhs.ensure_live()?;
        let n = limbs_for_bits(self.bit_length() + rhs.bit_length());
        let mut scratch = BigInt::allocate_in(n, self.allocator())?;
        Self::mul_kernel(self, rhs, &mut scratch)?;
        self.swap(&mut scratch);
        Ok(())
    }

    /// `self = self * self`, computed into scratch storage and swapped in.
    pub fn square_assign(&mut self) -> Result<(), BigIntError> {
        self.ensure_live()?;
        let n = limbs_for_bits(2 * self.bit_length());
        let mut scratch = BigInt::allocate_in(n, self.allocator())?;
        Self::mul_kernel(self, self, &mut scratch)?;
        self.swap(&mut scratch);
        Ok(())
    }
}
