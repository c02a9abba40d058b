use crate::{int_to_bytes, Alphabet, BASE, CHARSET_DEFAULT, LEGACY_PREFIX};
use num_bigint::BigUint;
use num_traits::Zero;
use std::io::Read;

pub use crate::alphabet::DecodeError as Error;

/// Number of digits folded into a `u64` before touching the big integer (62^10 < 2^64).
const DIGITS_PER_WORD: usize = 10;

#[derive(Clone, Copy, Debug)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet<BASE>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<BASE>) -> Self {
        Self { alphabet }
    }

    /// Digit values of `input` after the legacy prefix. Error indexes refer to `input` itself.
    fn digits(&self, input: &str) -> Result<Vec<u8>, Error> {
        let (offset, body) = match input.strip_prefix(LEGACY_PREFIX) {
            Some(body) => (LEGACY_PREFIX.len(), body),
            None => (0, input),
        };
        body.char_indices()
            .map(|(index, character)| self.alphabet.decode(character, offset + index))
            .collect()
    }

    pub fn decode(&self, input: &str) -> Result<BigUint, Error> {
        let digits = self.digits(input)?;
        let mut value = BigUint::zero();
        for chunk in digits.chunks(DIGITS_PER_WORD) {
            let mut scale: u64 = 1;
            let mut word: u64 = 0;
            for &digit in chunk {
                scale *= BASE as u64;
                word = word * BASE as u64 + digit as u64;
            }
            value *= scale;
            value += word;
        }
        Ok(value)
    }

    pub fn decode_bytes(&self, input: &str) -> Result<Vec<u8>, Error> {
        Ok(int_to_bytes(&self.decode(input)?))
    }

    pub fn decode_stream(&self, reader: impl Read) -> Result<Vec<u8>, crate::stream::Error> {
        crate::stream::decode_reader(self, reader)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&CHARSET_DEFAULT);

pub fn decode(input: &str) -> Result<BigUint, Error> {
    Decoder::default().decode(input)
}

pub fn decode_with(input: &str, alphabet: &Alphabet<BASE>) -> Result<BigUint, Error> {
    Decoder::new(alphabet).decode(input)
}

/// Decodes base62 text into the minimal big-endian bytes of its value.
///
/// Only text is accepted:
///
/// ```compile_fail
/// base62::decode_bytes(b"1234");
/// ```
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, Error> {
    Decoder::default().decode_bytes(input)
}

pub fn decode_bytes_with(input: &str, alphabet: &Alphabet<BASE>) -> Result<Vec<u8>, Error> {
    Decoder::new(alphabet).decode_bytes(input)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::{BigUint, CHARSET_INVERTED};

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(BigUint::from(0u8)));
        assert_eq!(super::decode("0"), Ok(BigUint::from(0u8)));
        assert_eq!(super::decode("0000"), Ok(BigUint::from(0u8)));
        assert_eq!(super::decode("000001"), Ok(BigUint::from(1u8)));
        assert_eq!(super::decode("1z"), Ok(BigUint::from(123u8)));
        assert_eq!(super::decode("base62"), Ok(BigUint::from(34441886726u64)));
        assert_eq!(super::decode("LygHa16AHYF"), Ok(BigUint::from(u64::MAX)));
        assert_eq!(super::decode("7n42DGM5Tflk9n8mt7Fhc7"), Ok(BigUint::from(u128::MAX)));
    }

    #[test]
    fn decode_inverted() {
        assert_eq!(super::decode_with("0", &CHARSET_INVERTED), Ok(BigUint::from(0u8)));
        assert_eq!(super::decode_with("0000", &CHARSET_INVERTED), Ok(BigUint::from(0u8)));
        assert_eq!(super::decode_with("000001", &CHARSET_INVERTED), Ok(BigUint::from(1u8)));
        assert_eq!(super::decode_with("base62", &CHARSET_INVERTED), Ok(BigUint::from(10231951886u64)));
        assert_eq!(super::decode_with("0zbase62", &CHARSET_INVERTED), Ok(BigUint::from(10231951886u64)));
    }

    #[test]
    fn decode_legacy_prefix() {
        assert_eq!(super::decode("0zbase62"), Ok(BigUint::from(34441886726u64)));
        assert_eq!(super::decode("0z"), Ok(BigUint::from(0u8)));
        assert_eq!(super::decode("0z0z"), Ok(BigUint::from(61u8)));
        assert!(super::decode("z0zbase62").is_ok());
    }

    #[test]
    fn decode_invalid_character() {
        assert_eq!(super::decode("+"), Err(Error::InvalidCharacter { character: '+', index: 0 }));
        assert_eq!(super::decode("ab-c"), Err(Error::InvalidCharacter { character: '-', index: 2 }));
        assert_eq!(super::decode("0zab c"), Err(Error::InvalidCharacter { character: ' ', index: 4 }));
        assert_eq!(super::decode("1é"), Err(Error::InvalidCharacter { character: 'é', index: 1 }));
    }

    #[test]
    fn decode_bytes() {
        assert_eq!(super::decode_bytes(""), Ok(vec![]));
        assert_eq!(super::decode_bytes("0"), Ok(vec![]));
        assert_eq!(super::decode_bytes("1z"), Ok(vec![0x7b]));
        assert_eq!(super::decode_bytes("ykzvd7ga"), Ok(vec![0xc2, 0x99, 0xf0, 0xa1, 0x4c, 0xa4]));
        assert_eq!(super::decode_bytes("0z1234"), Ok(vec![0x03, 0xc1, 0xbe]));
        assert_eq!(super::decode_bytes_with("A", &CHARSET_INVERTED), Ok(vec![36]));
    }
}
