use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { expected: usize, length: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: char, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, length } => write!(f, "Invalid alphabet length {} ({} expected)", length, expected),
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character '{}' at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

/// Bijection between digit values `0..N` and ASCII characters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, digit: u8) -> char {
        self.encode[digit as usize] as char
    }

    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        let digit = if character.is_ascii() { self.decode[character as usize] } else { None };
        digit.ok_or(DecodeError::InvalidCharacter { character, index })
    }

    /// The character standing for digit 0, used for left padding.
    pub fn zero(&self) -> char {
        self.encode(0)
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter {
                    character: char::REPLACEMENT_CHARACTER,
                    index,
                });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Builds an alphabet from runtime text, checking that it holds exactly `N` distinct ASCII characters.
    pub fn parse(characters: &str) -> Result<Self, Error> {
        if let Some((index, character)) = characters.chars().enumerate().find(|(_, character)| !character.is_ascii()) {
            return Err(Error::NonAsciiCharacter { character, index });
        }
        let characters: &[u8; N] = characters.as_bytes().try_into().map_err(|_| Error::InvalidLength {
            expected: N,
            length: characters.len(),
        })?;
        Self::new(characters)
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.encode).unwrap_or_default()
    }
}

impl<const N: usize> fmt::Display for Alphabet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
