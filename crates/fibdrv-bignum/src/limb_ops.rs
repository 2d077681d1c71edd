//! Portable limb-level arithmetic primitives.

use crate::storage::Limb;

/// Add with carry: a + b + carry -> (sum, `new_carry`)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn add_with_carry(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let sum = u128::from(a) + u128::from(b) + u128::from(carry);
    (sum as Limb, (sum >> 64) as Limb)
}

/// Subtract with borrow: a - b - borrow -> (diff, `new_borrow`)
///
/// A negative intermediate is brought back into range by adding `1 << 64`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sub_with_borrow(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let diff = i128::from(a) - i128::from(b) - i128::from(borrow);
    if diff < 0 {
        ((diff + (1i128 << 64)) as Limb, 1)
    } else {
        (diff as Limb, 0)
    }
}

/// Multiply: a * b -> full 128-bit product.
#[inline]
#[must_use]
pub fn mul_wide(a: Limb, b: Limb) -> u128 {
    u128::from(a) * u128::from(b)
}

/// Accumulate a 128-bit partial product into `acc` starting at `offset`.
///
/// Stops as soon as both the remaining product and the carry are zero.
/// Returns the carry left over past the end of `acc`.
#[allow(clippy::cast_possible_truncation)]
pub fn mul_add_at(acc: &mut [Limb], offset: usize, mut x: u128) -> Limb {
    let mut carry: u128 = 0;
    for limb in acc.iter_mut().skip(offset) {
        carry += u128::from(*limb) + u128::from(x as Limb);
        *limb = carry as Limb;
        carry >>= 64;
        x >>= 64;
        if x == 0 && carry == 0 {
            return 0;
        }
    }
    (carry + x) as Limb
}

/// Number of limbs needed to hold `bits` bits (at least one).
#[inline]
#[must_use]
pub fn limbs_for_bits(bits: usize) -> usize {
    bits.div_ceil(crate::storage::LIMB_BITS).max(1)
}
