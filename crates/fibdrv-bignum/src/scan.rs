//! Bit scanning and magnitude comparison.

use std::cmp::Ordering;

use crate::limb_ops::limbs_for_bits;
use crate::storage::{BigInt, Limb, LIMB_BITS};

impl BigInt {
    /// Count zero bits from the top of the most significant limb downward.
    ///
    /// Zero limbs count as 64 bits each, so an all-zero value yields
    /// `size * 64`.
    #[must_use]
    pub fn leading_zero_bits(&self) -> usize {
        let mut count = 0;
        for &limb in self.limbs().iter().rev() {
            if limb != 0 {
                return count + limb.leading_zeros() as usize;
            }
            count += LIMB_BITS;
        }
        count
    }

    /// Position of the most significant set bit (0 for zero).
    #[must_use]
    pub fn bit_length(&self) -> usize {
        self.size() * LIMB_BITS - self.leading_zero_bits()
    }

    /// Compare absolute values.
    ///
    /// More significant limbs means larger, so both operands are expected to
    /// be trimmed; every arithmetic operation leaves its result trimmed.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &BigInt) -> Ordering {
        self.size().cmp(&other.size()).then_with(|| {
            for (a, b) in self.limbs().iter().rev().zip(other.limbs().iter().rev()) {
                match a.cmp(b) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            Ordering::Equal
        })
    }

    /// Limbs up to the highest non-zero one, ignoring zero limbs that
    /// `resize` may have left on top. Zero keeps one limb.
    pub(crate) fn significant_limbs(&self) -> &[Limb] {
        let n = limbs_for_bits(self.bit_length()).min(self.size());
        &self.limbs()[..n]
    }

    /// Compare absolute values by numeric magnitude, whatever the size.
    pub(crate) fn cmp_abs(&self, other: &BigInt) -> Ordering {
        let (a, b) = (self.significant_limbs(), other.significant_limbs());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.iter().rev().cmp(b.iter().rev()))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.is_negative() == other.is_negative()
            && self.significant_limbs() == other.significant_limbs()
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_abs(other),
            (true, true) => other.cmp_abs(self),
        }
    }
}
