use crate::{bytes_to_int, stream::EncodeStream, Options, BASE};
use num_bigint::BigUint;
use num_traits::Zero;
use std::io::Read;

#[derive(Clone, Copy, Debug)]
pub struct Encoder<'a> {
    options: Options<'a>,
}

impl<'a> Encoder<'a> {
    pub const fn new(options: Options<'a>) -> Self {
        Self { options }
    }

    /// Digit values of `value`, most significant first. Zero has the single digit 0.
    fn digits(value: &BigUint) -> Vec<u8> {
        if value.is_zero() {
            return vec![0];
        }
        value.to_radix_be(BASE as u32)
    }

    /// Renders digit values with the configured charset, left padded to the configured width.
    fn render(&self, digits: &[u8]) -> String {
        let alphabet = self.options.charset;
        let width = self.options.width().max(digits.len());
        let mut output = String::with_capacity(width);
        output.extend(std::iter::repeat(alphabet.zero()).take(width - digits.len()));
        output.extend(digits.iter().map(|&digit| alphabet.encode(digit)));
        output
    }

    pub fn encode(&self, value: impl Into<BigUint>) -> String {
        self.render(&Self::digits(&value.into()))
    }

    pub fn encode_bytes(&self, input: &[u8]) -> String {
        self.encode(bytes_to_int(input))
    }

    pub fn encode_stream<R: Read>(&self, reader: R) -> EncodeStream<'a, R> {
        EncodeStream::new(reader, self.options)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(Options::DEFAULT);

pub fn encode(value: impl Into<BigUint>) -> String {
    Encoder::default().encode(value)
}

pub fn encode_with(value: impl Into<BigUint>, options: &Options) -> String {
    Encoder::new(*options).encode(value)
}

/// Encodes a byte buffer as the base62 form of its big-endian integer value.
///
/// Only byte buffers are accepted; text has to be converted explicitly:
///
/// ```compile_fail
/// base62::encode_bytes("1234");
/// ```
pub fn encode_bytes(input: &[u8]) -> String {
    Encoder::default().encode_bytes(input)
}

pub fn encode_bytes_with(input: &[u8], options: &Options) -> String {
    Encoder::new(*options).encode_bytes(input)
}

#[cfg(test)]
mod tests {
    use crate::{Options, CHARSET_INVERTED};

    #[test]
    fn encode() {
        assert_eq!(super::encode(0u8), "0");
        assert_eq!(super::encode(1u8), "1");
        assert_eq!(super::encode(61u8), "z");
        assert_eq!(super::encode(62u8), "10");
        assert_eq!(super::encode(123u8), "1z");
        assert_eq!(super::encode(34441886726u64), "base62");
        assert_eq!(super::encode(u64::MAX), "LygHa16AHYF");
        assert_eq!(super::encode(u128::MAX), "7n42DGM5Tflk9n8mt7Fhc7");
    }

    #[test]
    fn encode_inverted() {
        let options = Options::new(&CHARSET_INVERTED);
        assert_eq!(super::encode_with(0u8, &options), "0");
        assert_eq!(super::encode_with(10u8, &options), "a");
        assert_eq!(super::encode_with(36u8, &options), "A");
        assert_eq!(super::encode_with(10231951886u64, &options), "base62");
    }

    #[test]
    fn encode_minlen() {
        assert_eq!(super::encode_with(0u8, &Options::default().with_minlen(0)), "0");
        assert_eq!(super::encode_with(0u8, &Options::default().with_minlen(1)), "0");
        assert_eq!(super::encode_with(0u8, &Options::default().with_minlen(5)), "00000");
        assert_eq!(super::encode_with(34441886726u64, &Options::default().with_minlen(3)), "base62");
    }

    #[test]
    fn encode_padding() {
        assert_eq!(super::encode_with(123u8, &Options::default().with_padding(10)), "000000001z");
        assert_eq!(super::encode_with(123u8, &Options::default().with_padding(5)), "0001z");
        assert_eq!(super::encode_with(123u8, &Options::default().with_padding(2)), "1z");
        assert_eq!(super::encode_with(0u8, &Options::default().with_padding(5)), "00000");
        assert_eq!(super::encode_with(123u8, &Options::default().with_minlen(4).with_padding(6)), "00001z");
    }

    #[test]
    fn encode_bytes() {
        assert_eq!(super::encode_bytes(b""), "0");
        assert_eq!(super::encode_bytes(b"\x00"), "0");
        assert_eq!(super::encode_bytes(b"\x00\x7b"), "1z");
        assert_eq!(super::encode_bytes(b"\x08\x04\xe5\x7c\x06"), "base62");
        assert_eq!(super::encode_bytes_with(b"\x7b", &Options::default().with_padding(4)), "001z");
    }
}
