//! Field adapters storing values as base62 text.
//!
//! ```
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Record {
//!     #[serde(with = "base62::serde")]
//!     key: Vec<u8>,
//!     #[serde(with = "base62::serde::int")]
//!     id: u64,
//! }
//!
//! let record = Record { key: b"key".to_vec(), id: 34441886726 };
//! assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"key":"TWzR","id":"base62"}"#);
//! ```

use ::serde::{de::Error, Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: impl AsRef<[u8]>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&crate::encode_bytes(value.as_ref()))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let text = String::deserialize(deserializer)?;
    crate::decode_bytes(&text).map_err(D::Error::custom)
}

/// Integers of any width, including `BigUint`.
pub mod int {
    use ::serde::{de::Error, Deserialize, Deserializer, Serializer};
    use num_bigint::BigUint;
    use std::fmt::Display;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Clone + Into<BigUint>,
        S: Serializer,
    {
        serializer.serialize_str(&crate::encode(value.clone()))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: TryFrom<BigUint>,
        T::Error: Display,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let value = crate::decode(&text).map_err(D::Error::custom)?;
        T::try_from(value).map_err(D::Error::custom)
    }
}
