//! Stream-level message reader.

use std::io::BufRead;

use fedwire_types::FedwireMessage;
use log::debug;
use thiserror::Error;

use crate::codec::decode::{Decoder, SegmentDecodeError};
use crate::SegmentCodec;

/// Default cap on the number of lines a stream may carry.
const MAX_LINES: usize = 10_000;

/// Reads Fedwire messages from a byte stream, one message per line.
///
/// Within a line the reader peeks the six-character tag, frames the
/// segment, dispatches it to the tag's parser, and stores it on the
/// current message. Segments are accepted in any order; composition is
/// checked by [`FedwireMessage::validate`], which the caller invokes once
/// the message is built.
///
/// ```rust,no_run
/// use std::io::BufReader;
/// use fedwire_codec::Reader;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let file = std::fs::File::open("fedwire.txt")?;
/// let mut reader = Reader::new(BufReader::new(file));
/// while let Some(message) = reader.read_message()? {
///     message.validate()?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Reader<R> {
    input: R,
    line: usize,
    max_lines: usize,
}

/// Error during stream reading.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The stream exceeds the maximum possible number of lines.
    #[error("file exceeds maximum possible number of lines")]
    FileTooLong,

    /// A segment failed to decode, with the line it happened on.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: SegmentDecodeError,
    },
}

impl<R: BufRead> Reader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: 0,
            max_lines: MAX_LINES,
        }
    }

    /// Overrides the stream line cap.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Reads the next message, or `None` at end of stream. Blank lines are
    /// skipped.
    pub fn read_message(&mut self) -> Result<Option<FedwireMessage>, ReadError> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            if self.line > self.max_lines {
                return Err(ReadError::FileTooLong);
            }

            let trimmed = line.trim_end_matches(&['\n', '\r'][..]);
            if trimmed.is_empty() {
                continue;
            }
            return self.parse_line(trimmed).map(Some);
        }
    }

    fn parse_line(&self, line: &str) -> Result<FedwireMessage, ReadError> {
        let mut message = FedwireMessage::new();
        let mut rest = line;
        let mut segments = 0usize;
        while !rest.is_empty() {
            let (remaining, segment) =
                SegmentCodec.decode(rest).map_err(|source| ReadError::Parse {
                    line: self.line,
                    source,
                })?;
            message.set_segment(segment);
            segments += 1;
            rest = remaining;
        }
        debug!("line {}: read message with {segments} segments", self.line);
        Ok(message)
    }
}
