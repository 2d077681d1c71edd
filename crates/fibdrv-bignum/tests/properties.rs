//! Property-based tests for big integer arithmetic.
//!
//! `num-bigint` serves as an independent reference implementation.

use std::cmp::Ordering;

use num_bigint::{BigUint, Sign};
use num_traits::Signed;
use proptest::prelude::*;

use fibdrv_bignum::BigInt;

#[allow(clippy::cast_possible_truncation)]
fn to_reference(v: &BigInt) -> num_bigint::BigInt {
    let digits: Vec<u32> = v
        .limbs()
        .iter()
        .flat_map(|&l| [l as u32, (l >> 32) as u32])
        .collect();
    let sign = if v.is_zero() {
        Sign::NoSign
    } else if v.is_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    num_bigint::BigInt::from_biguint(sign, BigUint::new(digits))
}

fn is_canonical(v: &BigInt) -> bool {
    let limbs = v.limbs();
    let trimmed = limbs.len() == 1 || limbs[limbs.len() - 1] != 0;
    trimmed && !(v.is_zero() && v.is_negative())
}

fn fresh() -> BigInt {
    BigInt::allocate(1).unwrap()
}

prop_compose! {
    fn signed_bigint()(
        limbs in prop::collection::vec(any::<u64>(), 0..6),
        negative in any::<bool>(),
    ) -> BigInt {
        BigInt::from_limbs(&limbs, negative).unwrap()
    }
}

prop_compose! {
    fn unsigned_bigint()(limbs in prop::collection::vec(any::<u64>(), 0..6)) -> BigInt {
        BigInt::from_limbs(&limbs, false).unwrap()
    }
}

prop_compose! {
    /// A signed value carrying up to three zero limbs above its top limb,
    /// as left behind by growing `resize`.
    fn padded_bigint()(value in signed_bigint(), extra in 0usize..4) -> BigInt {
        let mut value = value;
        let size = value.size();
        value.resize(size + extra).unwrap();
        value
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn add_matches_reference(a in signed_bigint(), b in signed_bigint()) {
        let mut out = fresh();
        BigInt::add_into(&a, &b, &mut out).unwrap();
        prop_assert!(is_canonical(&out));
        prop_assert_eq!(to_reference(&out), to_reference(&a) + to_reference(&b));
    }

    #[test]
    fn sub_matches_reference(a in signed_bigint(), b in signed_bigint()) {
        let mut out = fresh();
        BigInt::sub_into(&a, &b, &mut out).unwrap();
        prop_assert!(is_canonical(&out));
        prop_assert_eq!(to_reference(&out), to_reference(&a) - to_reference(&b));
    }

    #[test]
    fn mul_matches_reference(a in signed_bigint(), b in signed_bigint()) {
        let mut out = fresh();
        BigInt::mul_into(&a, &b, &mut out).unwrap();
        prop_assert!(is_canonical(&out));
        prop_assert_eq!(to_reference(&out), to_reference(&a) * to_reference(&b));
    }

    #[test]
    fn add_is_commutative(a in signed_bigint(), b in signed_bigint()) {
        let mut ab = fresh();
        let mut ba = fresh();
        BigInt::add_into(&a, &b, &mut ab).unwrap();
        BigInt::add_into(&b, &a, &mut ba).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn add_is_associative(a in signed_bigint(), b in signed_bigint(), c in signed_bigint()) {
        let mut left = fresh();
        BigInt::add_into(&a, &b, &mut left).unwrap();
        left.add_assign(&c).unwrap();

        let mut right = fresh();
        BigInt::add_into(&b, &c, &mut right).unwrap();
        let mut total = fresh();
        BigInt::add_into(&a, &right, &mut total).unwrap();

        prop_assert_eq!(left, total);
    }

    #[test]
    fn sub_self_is_canonical_zero(a in signed_bigint()) {
        let mut out = fresh();
        BigInt::sub_into(&a, &a, &mut out).unwrap();
        prop_assert!(out.is_zero());
        prop_assert!(!out.is_negative());
        prop_assert_eq!(out.size(), 1);
    }

    #[test]
    fn mul_sign_is_xor(a in signed_bigint(), b in signed_bigint()) {
        prop_assume!(!a.is_zero() && !b.is_zero());
        let mut out = fresh();
        BigInt::mul_into(&a, &b, &mut out).unwrap();
        prop_assert_eq!(out.is_negative(), a.is_negative() ^ b.is_negative());
    }

    #[test]
    fn mul_by_zero_is_canonical_zero(a in signed_bigint()) {
        let zero = BigInt::from(0u64);
        let mut out = fresh();
        BigInt::mul_into(&a, &zero, &mut out).unwrap();
        prop_assert!(out.is_zero());
        prop_assert!(!out.is_negative());
        prop_assert_eq!(out.size(), 1);
    }

    #[test]
    fn add_assign_equals_fresh_output(a in signed_bigint(), b in signed_bigint()) {
        let mut expected = fresh();
        BigInt::add_into(&a, &b, &mut expected).unwrap();
        let mut acc = a.try_clone().unwrap();
        acc.add_assign(&b).unwrap();
        prop_assert_eq!(acc, expected);
    }

    #[test]
    fn sub_assign_equals_fresh_output(a in signed_bigint(), b in signed_bigint()) {
        let mut expected = fresh();
        BigInt::sub_into(&a, &b, &mut expected).unwrap();
        let mut acc = a.try_clone().unwrap();
        acc.sub_assign(&b).unwrap();
        prop_assert_eq!(acc, expected);
    }

    #[test]
    fn mul_assign_equals_fresh_output(a in signed_bigint(), b in signed_bigint()) {
        let mut expected = fresh();
        BigInt::mul_into(&a, &b, &mut expected).unwrap();
        let mut acc = a.try_clone().unwrap();
        acc.mul_assign(&b).unwrap();
        prop_assert_eq!(acc, expected);
    }

    #[test]
    fn square_assign_equals_self_product(a in signed_bigint()) {
        let mut expected = fresh();
        BigInt::mul_into(&a, &a, &mut expected).unwrap();
        let mut acc = a.try_clone().unwrap();
        acc.square_assign().unwrap();
        prop_assert_eq!(acc, expected);
    }

    #[test]
    fn cmp_magnitude_matches_reference(a in signed_bigint(), b in signed_bigint()) {
        let expected = to_reference(&a).abs().cmp(&to_reference(&b).abs());
        prop_assert_eq!(a.cmp_magnitude(&b), expected);
    }

    #[test]
    fn ordering_matches_reference(a in signed_bigint(), b in signed_bigint()) {
        prop_assert_eq!(a.cmp(&b), to_reference(&a).cmp(&to_reference(&b)));
        prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
    }

    #[test]
    fn shift_by_one_equals_doubling(x in unsigned_bigint()) {
        let mut shifted = fresh();
        x.shl_into(1, &mut shifted).unwrap();
        let mut doubled = fresh();
        BigInt::add_into(&x, &x, &mut doubled).unwrap();
        prop_assert_eq!(&shifted, &doubled);

        let mut in_place = x.try_clone().unwrap();
        in_place.shl_assign(1).unwrap();
        prop_assert_eq!(in_place, doubled);
    }

    #[test]
    fn shift_matches_reference(x in signed_bigint(), bits in 0u32..64) {
        let mut out = fresh();
        x.shl_into(bits, &mut out).unwrap();
        prop_assert_eq!(to_reference(&out), to_reference(&x) << bits);
    }

    #[test]
    fn render_matches_reference(x in signed_bigint()) {
        prop_assert_eq!(x.to_decimal_string().unwrap(), to_reference(&x).to_string());
    }

    #[test]
    fn magnitude_sub_after_compare(a in unsigned_bigint(), b in unsigned_bigint()) {
        let (hi, lo) = if a.cmp_magnitude(&b) == Ordering::Less { (&b, &a) } else { (&a, &b) };
        let mut out = fresh();
        BigInt::sub_magnitude(hi, lo, &mut out).unwrap();
        prop_assert_eq!(to_reference(&out), to_reference(hi) - to_reference(lo));
    }

    #[test]
    fn padded_add_sub_match_reference(a in padded_bigint(), b in padded_bigint()) {
        let mut out = fresh();
        BigInt::add_into(&a, &b, &mut out).unwrap();
        prop_assert!(is_canonical(&out));
        prop_assert_eq!(to_reference(&out), to_reference(&a) + to_reference(&b));

        BigInt::sub_into(&a, &b, &mut out).unwrap();
        prop_assert!(is_canonical(&out));
        prop_assert_eq!(to_reference(&out), to_reference(&a) - to_reference(&b));

        let mut acc = a.try_clone().unwrap();
        acc.add_assign(&b).unwrap();
        prop_assert!(is_canonical(&acc));
        prop_assert_eq!(to_reference(&acc), to_reference(&a) + to_reference(&b));

        let mut acc = a.try_clone().unwrap();
        acc.sub_assign(&b).unwrap();
        prop_assert!(is_canonical(&acc));
        prop_assert_eq!(to_reference(&acc), to_reference(&a) - to_reference(&b));
    }

    #[test]
    fn padded_mul_matches_reference(a in padded_bigint(), b in padded_bigint()) {
        let mut out = fresh();
        BigInt::mul_into(&a, &b, &mut out).unwrap();
        prop_assert!(is_canonical(&out));
        prop_assert_eq!(to_reference(&out), to_reference(&a) * to_reference(&b));

        let mut acc = a.try_clone().unwrap();
        acc.mul_assign(&b).unwrap();
        prop_assert_eq!(to_reference(&acc), to_reference(&a) * to_reference(&b));

        let mut sq = a.try_clone().unwrap();
        sq.square_assign().unwrap();
        prop_assert_eq!(to_reference(&sq), to_reference(&a) * to_reference(&a));
    }

    #[test]
    fn padded_sub_magnitude_is_guarded(a in padded_bigint(), b in padded_bigint()) {
        let (ra, rb) = (to_reference(&a).abs(), to_reference(&b).abs());
        let mut out = BigInt::from(77u64);
        let result = BigInt::sub_magnitude(&a, &b, &mut out);
        if ra < rb {
            prop_assert_eq!(result, Err(fibdrv_bignum::BigIntError::PreconditionViolation));
            prop_assert_eq!(out.to_u64(), Some(77));
        } else {
            prop_assert!(result.is_ok());
            prop_assert!(is_canonical(&out));
            prop_assert_eq!(to_reference(&out), ra - rb);
        }
    }

    #[test]
    fn padded_shift_matches_reference(x in padded_bigint(), bits in 1u32..64) {
        let mut out = fresh();
        x.shl_into(bits, &mut out).unwrap();
        prop_assert!(is_canonical(&out));
        prop_assert_eq!(to_reference(&out), to_reference(&x) << bits);

        let mut in_place = x.try_clone().unwrap();
        in_place.shl_assign(bits).unwrap();
        prop_assert!(is_canonical(&in_place));
        prop_assert_eq!(to_reference(&in_place), to_reference(&x) << bits);
    }

    #[test]
    fn padded_ordering_and_equality(a in padded_bigint(), b in padded_bigint()) {
        prop_assert_eq!(a.cmp(&b), to_reference(&a).cmp(&to_reference(&b)));
        prop_assert_eq!(a == b, to_reference(&a) == to_reference(&b));
        prop_assert_eq!(a.to_decimal_string().unwrap(), to_reference(&a).to_string());
    }
}
