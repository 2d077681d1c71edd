//! Left shifts by less than one limb.
//!
//! Shift amounts of 64 or more are rejected with
//! [`BigIntError::UnsupportedShift`]; the sign is carried through unchanged.

use crate::error::BigIntError;
use crate::storage::{BigInt, LIMB_BITS};

fn check_shift(bits: u32) -> Result<(), BigIntError> {
    if bits as usize >= LIMB_BITS {
        Err(BigIntError::UnsupportedShift(bits))
    } else {
        Ok(())
    }
}

impl BigInt {
    /// Shift the magnitude left by `bits` (< 64) in place.
    ///
    /// Grows by one limb when set bits would move past the current top limb.
    ///
    /// # Example
    /// ```
    /// use fibdrv_bignum::BigInt;
    ///
    /// let mut v = BigInt::from(u64::MAX);
    /// v.shl_assign(1).unwrap();
    /// assert_eq!(v.limbs(), &[u64::MAX - 1, 1]);
    /// ```
    pub fn shl_assign(&mut self, bits: u32) -> Result<(), BigIntError> {
        self.ensure_live()?;
        check_shift(bits)?;
        if bits == 0 {
            return Ok(());
        }
        if bits as usize > self.leading_zero_bits() {
            self.resize(self.size() + 1)?;
        }
        let limbs = self.limbs_mut();
        // Top-down so limb i-1 is read before it is rewritten.
        for i in (1..limbs.len()).rev() {
            limbs[i] = limbs[i] << bits | limbs[i - 1] >> (64 - bits);
        }
        limbs[0] <<= bits;
        self.normalize();
        Ok(())
    }

    /// Write `self << bits` (< 64) into `dest`, leaving `self` untouched.
    pub fn shl_into(&self, bits: u32, dest: &mut BigInt) -> Result<(), BigIntError> {
        self.ensure_live()?;
        check_shift(bits)?;
        if bits == 0 {
            return dest.copy_from(self);
        }
        let used = self.significant_limbs().len();
        let top_zeros = used * LIMB_BITS - self.bit_length();
        let n = used + usize::from(bits as usize > top_zeros);
        dest.resize(n)?;
        let out = dest.limbs_mut();
        for i in (1..n).rev() {
            out[i] = self.limb(i) << bits | self.limb(i - 1) >> (64 - bits);
        }
        out[0] = self.limb(0) << bits;
        dest.set_negative(self.is_negative());
        dest.normalize();
        Ok(())
    }
}
