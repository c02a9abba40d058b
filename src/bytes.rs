use num_bigint::BigUint;
use num_traits::Zero;

/// Big-endian value of `input`. Empty and all-zero buffers are 0.
pub fn bytes_to_int(input: &[u8]) -> BigUint {
    BigUint::from_bytes_be(input)
}

/// Minimal big-endian bytes of `value`; 0 has no bytes at all.
///
/// Leading zero bytes of whatever buffer produced `value` are not restored.
pub fn int_to_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        return Vec::new();
    }
    value.to_bytes_be()
}
