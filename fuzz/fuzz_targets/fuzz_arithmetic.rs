#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::Sign;

use fibdrv_bignum::BigInt;

/// Build a value and its reference from little-endian bytes.
fn operand(bytes: &[u8], negative: bool) -> (BigInt, num_bigint::BigInt) {
    let limbs: Vec<u64> = bytes
        .chunks(8)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            u64::from_le_bytes(word)
        })
        .collect();
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    (
        BigInt::from_limbs(&limbs, negative).unwrap(),
        num_bigint::BigInt::from_bytes_le(sign, bytes),
    )
}

fuzz_target!(|data: &[u8]| {
    // First byte: two sign bits and a shift amount. Operands capped at 256 bytes each.
    if data.is_empty() || data.len() > 513 {
        return;
    }
    let control = data[0];
    let rest = &data[1..];
    let (a_bytes, b_bytes) = rest.split_at(rest.len() / 2);
    let (a, ra) = operand(a_bytes, control & 1 == 1);
    let (b, rb) = operand(b_bytes, control & 2 == 2);

    let mut out = BigInt::allocate(1).unwrap();

    BigInt::add_into(&a, &b, &mut out).unwrap();
    assert_eq!(out.to_string(), (&ra + &rb).to_string(), "add");

    BigInt::sub_into(&a, &b, &mut out).unwrap();
    assert_eq!(out.to_string(), (&ra - &rb).to_string(), "sub");

    BigInt::mul_into(&a, &b, &mut out).unwrap();
    assert_eq!(out.to_string(), (&ra * &rb).to_string(), "mul");

    let shift = u32::from(control >> 2);
    a.shl_into(shift, &mut out).unwrap();
    assert_eq!(out.to_string(), (&ra << shift).to_string(), "shl {shift}");
});
