//! # NMEA 0183 Framing and Checksum
//!
//! This module verifies the framing shared by every NMEA 0183 sentence:
//! `$TAG,D1,D2,...,Dn*CC`
//!
//! The checksum `CC` is the two-digit hexadecimal XOR of every byte between the
//! leading `$` and the `*` delimiter. Lines are trimmed first, so a trailing
//! `\r\n` (or any surrounding whitespace) is accepted.

use nom::{
    Parser,
    bytes::complete::{take, take_while_m_n},
    character::complete::char,
    combinator::map_res,
    error::ErrorKind,
};

use crate::{Error, Result, parsing::consumed};

/// Calculates the NMEA 0183 checksum for the given payload.
///
/// The payload is everything between the `$` prefix and the `*` delimiter,
/// excluding both. The result is the XOR of all of its bytes.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// assert_eq!(checksum(""), 0);
/// ```
pub fn checksum(payload: &str) -> u8 {
    payload
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Verifies the framing and checksum of a raw sentence line.
///
/// The line is trimmed, then it must start with `$` and carry `*` as its
/// third-from-last character. The two characters after `*` are read as a
/// hexadecimal checksum (either case) and compared with [`checksum`] of the
/// payload.
///
/// # Returns
///
/// The payload (tag and comma-separated fields) on success.
///
/// # Errors
///
/// - [`Error::NonAscii`] if the line contains non-ASCII characters
/// - [`Error::MalformedFraming`] if `$`, `*` or the hex digits are missing
/// - [`Error::InvalidChecksum`] if the embedded checksum does not match
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Error, validate};
///
/// assert_eq!(validate("$GPGGA,123456,data*41\r\n").unwrap(), "GPGGA,123456,data");
/// assert_eq!(validate("$PQ*01").unwrap(), "PQ");
///
/// assert!(matches!(
///     validate("$GPGGA,123456,data*42"),
///     Err(Error::InvalidChecksum { calculated: 0x41, found: 0x42 })
/// ));
/// assert!(matches!(validate("GPGGA,123456,data*41"), Err(Error::MalformedFraming(_))));
/// ```
pub fn validate(line: &str) -> Result<&str> {
    let sentence = line.trim();

    if !sentence.is_ascii() {
        return Err(Error::NonAscii);
    }

    let malformed = || Error::MalformedFraming(sentence.to_owned());
    let payload_len = sentence.len().checked_sub(4).ok_or_else(malformed)?;

    let framing: nom::IResult<&str, _> = consumed(
        (char('$'), take(payload_len), char('*'), checksum_digits),
        ErrorKind::Eof,
    )
    .parse(sentence);
    let (_, (_, payload, _, found)) = framing.map_err(|_| malformed())?;

    let calculated = checksum(payload);
    if calculated != found {
        return Err(Error::InvalidChecksum { calculated, found });
    }

    Ok(payload)
}

/// Parses exactly two hexadecimal digits into a checksum value.
fn checksum_digits(i: &str) -> nom::IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |cc: &str| u8::from_str_radix(cc, 16),
    )
    .parse(i)
}
