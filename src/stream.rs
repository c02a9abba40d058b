use crate::{bytes_to_int, decode::Error as DecodeError, Decoder, Encoder, Options};
use num_bigint::BigUint;
use std::{
    error, fmt,
    io::{self, Read},
    mem, str,
};
use tracing::{debug, trace};

const OUTPUT_CHUNK_SIZE: usize = 1024;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    InvalidUtf8 { index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "Could not read input: {}", error),
            Self::InvalidUtf8 { index } => write!(f, "Input is not valid text after byte {}", index),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        match error {
            DecodeError::InvalidCharacter { character, index } => Self::InvalidCharacter { character, index },
        }
    }
}

enum State<R> {
    Pending(R),
    Emitting { output: String, position: usize },
    Done,
}

/// Lazy encoder over a byte source, yielding the base62 text in chunks.
///
/// Nothing is read before the first call to `next`. The source is then read to its end in one pass,
/// since the most significant digit depends on every input byte. Joining all chunks gives the same text as
/// [`Encoder::encode_bytes`] on the full input. After an I/O error the stream is exhausted.
pub struct EncodeStream<'a, R> {
    encoder: Encoder<'a>,
    state: State<R>,
}

impl<'a, R: Read> EncodeStream<'a, R> {
    pub(crate) fn new(reader: R, options: Options<'a>) -> Self {
        Self {
            encoder: Encoder::new(options),
            state: State::Pending(reader),
        }
    }
}

fn read_value(mut reader: impl Read) -> io::Result<BigUint> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    debug!(bytes = input.len(), "read encode stream source");
    Ok(bytes_to_int(&input))
}

impl<R: Read> Iterator for EncodeStream<'_, R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match mem::replace(&mut self.state, State::Done) {
                State::Pending(reader) => match read_value(reader) {
                    Ok(value) => {
                        let output = self.encoder.encode(value);
                        debug!(characters = output.len(), "encoded stream");
                        self.state = State::Emitting { output, position: 0 };
                    }
                    Err(error) => {
                        debug!(%error, "encode stream source failed");
                        return Some(Err(error));
                    }
                },
                State::Emitting { output, position } => {
                    if position >= output.len() {
                        return None;
                    }
                    let end = output.len().min(position + OUTPUT_CHUNK_SIZE);
                    let chunk = output[position..end].to_string();
                    trace!(start = position, end, "emit chunk");
                    self.state = State::Emitting { output, position: end };
                    return Some(Ok(chunk));
                }
                State::Done => return None,
            }
        }
    }
}

pub(crate) fn decode_reader(decoder: &Decoder, mut reader: impl Read) -> Result<Vec<u8>, Error> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let text = str::from_utf8(&input).map_err(|error| Error::InvalidUtf8 {
        index: error.valid_up_to(),
    })?;
    let output = decoder.decode_bytes(text)?;
    debug!(characters = text.len(), bytes = output.len(), "decoded stream");
    Ok(output)
}

pub fn encode_stream<R: Read>(reader: R) -> EncodeStream<'static, R> {
    Encoder::default().encode_stream(reader)
}

pub fn decode_stream(reader: impl Read) -> Result<Vec<u8>, Error> {
    decode_reader(Decoder::default(), reader)
}
