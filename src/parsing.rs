//! # Parsing Utilities
//!
//! This module provides the field tokenizer shared by every sentence schema,
//! and the small adapters that run `nom` parsers over a single field token.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    error::{ErrorKind, ParseError},
};

use crate::{Error, Result};

/// Comma-count contract of a sentence schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The payload must contain exactly this many commas.
    Exact(usize),
    /// The payload must contain at least this many commas. Surplus fields are
    /// kept, unsplit, in the last schema field.
    AtLeast(usize),
}

impl Arity {
    /// Comma count named by the contract.
    pub fn commas(&self) -> usize {
        match self {
            Arity::Exact(n) | Arity::AtLeast(n) => *n,
        }
    }

    fn accepts(&self, commas: usize) -> bool {
        match self {
            Arity::Exact(n) => commas == *n,
            Arity::AtLeast(n) => commas >= *n,
        }
    }
}

/// Splits a sentence payload into positional field tokens.
///
/// With [`Arity::Exact`] the payload is split on every comma. With
/// [`Arity::AtLeast`] it is split into at most `fields` tokens, so excess commas
/// end up inside the last token.
///
/// # Errors
///
/// [`Error::InvalidSentenceLength`] when the comma count breaks the contract.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::{Arity, split_fields};
///
/// let fields = split_fields("GPXXX,1,,3", Arity::Exact(3), 4).unwrap();
/// assert_eq!(fields, ["GPXXX", "1", "", "3"]);
///
/// let fields = split_fields("GPXXX,1,2,3,4", Arity::AtLeast(2), 3).unwrap();
/// assert_eq!(fields, ["GPXXX", "1", "2,3,4"]);
///
/// assert!(split_fields("GPXXX,1", Arity::Exact(3), 4).is_err());
/// ```
pub fn split_fields(payload: &str, arity: Arity, fields: usize) -> Result<Vec<&str>> {
    let commas = payload.matches(',').count();

    if !arity.accepts(commas) {
        return Err(Error::InvalidSentenceLength {
            expected: arity.commas(),
            actual: commas,
        });
    }

    Ok(match arity {
        Arity::Exact(_) => payload.split(',').collect(),
        Arity::AtLeast(_) => payload.splitn(fields, ',').collect(),
    })
}

/// Runs `parser` over a whole field token.
///
/// The token must be consumed entirely, otherwise it is reported as
/// [`Error::InvalidField`] together with the schema name of the field.
pub(crate) fn field<'a, O, F>(name: &'static str, value: &'a str, parser: F) -> Result<O>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    consumed(parser, ErrorKind::Eof)
        .parse(value)
        .map(|(_, output)| output)
        .map_err(|_| Error::invalid_field(name, value))
}

/// Like [`field`], but an empty token decodes to `None`.
pub(crate) fn optional_field<'a, O, F>(
    name: &'static str,
    value: &'a str,
    parser: F,
) -> Result<Option<O>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    if value.is_empty() {
        return Ok(None);
    }

    field(name, value, parser).map(Some)
}

/// Ensures that the parser consumes all input.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// let result: IResult<_, _> = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::character::complete::u8;

    #[test]
    fn test_split_exact() {
        let payload = "GPGSV,1,1,00,,,,,,,,,,,,,,,,";
        let fields = split_fields(payload, Arity::Exact(19), 20).unwrap();
        assert_eq!(fields.len(), 20);
        assert!(fields[4..].iter().all(|field| field.is_empty()));

        let result = split_fields(payload, Arity::Exact(18), 19);
        assert!(matches!(
            result,
            Err(Error::InvalidSentenceLength {
                expected: 18,
                actual: 19
            })
        ));
    }

    #[test]
    fn test_split_at_least() {
        let payload = "GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A";
        let fields = split_fields(payload, Arity::AtLeast(11), 11).unwrap();
        assert_eq!(fields.len(), 11);
        assert_eq!(fields[10], "003.1,W,A");

        let result = split_fields("GPRMC,123519,A", Arity::AtLeast(11), 11);
        assert!(matches!(
            result,
            Err(Error::InvalidSentenceLength {
                expected: 11,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_field() {
        assert_eq!(field("count", "08", u8).unwrap(), 8);
        assert!(matches!(
            field("count", "08x", u8),
            Err(Error::InvalidField { field: "count", .. })
        ));
        assert_eq!(optional_field("count", "", u8).unwrap(), None);
        assert_eq!(optional_field("count", "12", u8).unwrap(), Some(12));
        assert!(optional_field("count", "x", u8).is_err());
    }
}
