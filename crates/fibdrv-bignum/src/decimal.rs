//! Binary to decimal conversion (double-dabble).

use std::fmt;

use crate::error::BigIntError;
use crate::storage::{BigInt, Limb, LIMB_BITS};

impl BigInt {
    /// Render the value in base 10.
    ///
    /// Walks every bit from the most significant down, doubling a decimal
    /// digit buffer and adding the incoming bit with per-digit carries.
    /// The buffer holds `64 * size / 3 + 1` digits, which always suffices
    /// since `log10(2) < 1/3`.
    ///
    /// # Example
    /// ```
    /// use fibdrv_bignum::BigInt;
    ///
    /// let v = BigInt::from_limbs(&[0, 1], true).unwrap();
    /// assert_eq!(v.to_decimal_string().unwrap(), "-18446744073709551616");
    /// ```
    pub fn to_decimal_string(&self) -> Result<String, BigIntError> {
        self.ensure_live()?;
        let len = self.size() * LIMB_BITS / 3 + 1;
        // Most significant digit first; only the low `used` digits can be non-zero.
        let mut digits = vec![0u8; len];
        let mut used = 1;
        for &limb in self.limbs().iter().rev() {
            let mut mask: Limb = 1 << (LIMB_BITS - 1);
            while mask != 0 {
                let mut carry = u8::from(limb & mask != 0);
                for d in digits[len - used..].iter_mut().rev() {
                    let doubled = *d * 2 + carry;
                    carry = u8::from(doubled >= 10);
                    *d = doubled - 10 * carry;
                }
                if carry != 0 {
                    used += 1;
                    digits[len - used] = carry;
                }
                mask >>= 1;
            }
        }

        let first = digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(len - 1);
        let mut out = String::with_capacity(len - first + 1);
        if self.is_negative() {
            out.push('-');
        }
        out.extend(digits[first..].iter().map(|&d| char::from(b'0' + d)));
        Ok(out)
    }

    /// Copy as much of the decimal rendering as fits into `buf`.
    ///
    /// Returns the number of bytes written. No terminator is appended; the
    /// count is the length.
    pub fn write_decimal(&self, buf: &mut [u8]) -> Result<usize, BigIntError> {
        let rendered = self.to_decimal_string()?;
        let n = rendered.len().min(buf.len());
        buf[..n].copy_from_slice(&rendered.as_bytes()[..n]);
        Ok(n)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal_string() {
            Ok(s) => f.pad_integral(!self.is_negative(), "", s.trim_start_matches('-')),
            Err(_) => f.write_str("<released>"),
        }
    }
}
