//! Base62 encoding of arbitrary-precision non-negative integers and byte buffers.
//!
//! ```
//! assert_eq!(base62::encode(34441886726u64), "base62");
//! assert_eq!(base62::decode("0zbase62"), Ok(base62::BigUint::from(34441886726u64)));
//! assert_eq!(base62::decode_bytes(&base62::encode_bytes(b"bytes")).unwrap(), b"bytes");
//! ```

pub mod alphabet;
pub mod bytes;
pub mod decode;
pub mod encode;
pub mod options;
#[cfg(feature = "serde")]
pub mod serde;
pub mod stream;

pub use alphabet::Alphabet;
pub use bytes::{bytes_to_int, int_to_bytes};
pub use decode::{decode, decode_bytes, decode_bytes_with, decode_with, Decoder};
pub use encode::{encode, encode_bytes, encode_bytes_with, encode_with, Encoder};
pub use num_bigint::BigUint;
pub use options::Options;
pub use stream::{decode_stream, encode_stream, EncodeStream};

pub const BASE: usize = 62;

/// Marker once used to tag base62 text. Stripped by the decoder, never produced by the encoder.
pub const LEGACY_PREFIX: &str = "0z";

pub const CHARSET_DEFAULT: Alphabet<BASE> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const CHARSET_INVERTED: Alphabet<BASE> = match Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
