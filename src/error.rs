//! # Error Types
//!
//! This module defines the error type shared by every stage of sentence decoding:
//! framing, checksum verification, field splitting, field decoding and dispatch.

use thiserror::Error;

/// Result type returned by every fallible operation of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur while decoding NMEA sentences.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested sentence tag has no registered decoder.
    ///
    /// Raised when a [`Decoder`](crate::Decoder) is configured, never while
    /// streaming: lines with an unknown tag are simply skipped.
    #[error("sentence {0:?} is not supported")]
    SentenceNotSupported(String),

    /// The payload comma count does not satisfy the sentence schema.
    ///
    /// Most often a truncated line or a foreign variant of a known sentence;
    /// the stream decoder skips such lines.
    #[error("expected comma count not found (expected/actual): {expected}/{actual}")]
    InvalidSentenceLength {
        /// Comma count the schema requires
        expected: usize,
        /// Comma count found in the payload
        actual: usize,
    },

    /// The checksum of the sentence was corrupt or incorrect.
    #[error("calculated({calculated:02X}) != checksum({found:02X})")]
    InvalidChecksum {
        /// The checksum calculated from the payload
        calculated: u8,
        /// The checksum embedded in the sentence
        found: u8,
    },

    /// The line is not framed as `$...*CC`.
    #[error("malformed sentence framing: {0:?}")]
    MalformedFraming(String),

    /// The provided input contains non-ASCII characters.
    #[error("sentence contains non-ASCII characters")]
    NonAscii,

    /// A non-empty field could not be decoded into its schema type.
    #[error("invalid {field} field: {value:?}")]
    InvalidField {
        /// Schema name of the field
        field: &'static str,
        /// Raw text of the field
        value: String,
    },

    /// Date/time decoding was requested without a date or a time.
    #[error("neither a date nor a time value was given")]
    MissingDateTime,

    /// Reading the line source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` when the error only disqualifies the current line.
    ///
    /// Length mismatches and undecodable fields come from lines whose checksum
    /// already verified, so they are foreign variants rather than corruption.
    /// Every other error means the source itself cannot be trusted.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidSentenceLength { .. } | Error::InvalidField { .. }
        )
    }

    pub(crate) fn invalid_field(field: &'static str, value: &str) -> Self {
        Error::InvalidField {
            field,
            value: value.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable() {
        let length = Error::InvalidSentenceLength {
            expected: 14,
            actual: 13,
        };
        assert!(length.is_recoverable());
        assert!(Error::invalid_field("quality", "12").is_recoverable());

        let checksum = Error::InvalidChecksum {
            calculated: 0x47,
            found: 0x48,
        };
        assert!(!checksum.is_recoverable());
        assert!(!Error::SentenceNotSupported("$GPXXX".into()).is_recoverable());
        assert!(!Error::MalformedFraming("$GPGGA".into()).is_recoverable());
        assert!(!Error::NonAscii.is_recoverable());
    }

    #[test]
    fn test_display() {
        let checksum = Error::InvalidChecksum {
            calculated: 0x0A,
            found: 0x47,
        };
        assert_eq!(checksum.to_string(), "calculated(0A) != checksum(47)");

        let length = Error::InvalidSentenceLength {
            expected: 14,
            actual: 13,
        };
        assert_eq!(
            length.to_string(),
            "expected comma count not found (expected/actual): 14/13"
        );
    }
}
