//! # Field Decoders
//!
//! Pure functions that convert raw field tokens into domain values:
//! coordinates to decimal degrees and date/time text to calendar values.

use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0},
    combinator::{map_res, opt},
    number::complete::{double, float},
    sequence::preceded,
};
use time::{Date, Month, PrimitiveDateTime, Time};

use crate::{Error, Result, nmea_content::Timestamp, parsing::field};

/// Converts a `DDDMM.MMMM` coordinate and its hemisphere to decimal degrees.
///
/// The value is negated for the `S` and `W` hemispheres before it is split
/// into whole degrees and minutes, so the sign carries over to the result.
/// The degree width is not fixed (two digits for latitude, three for
/// longitude). No range validation is performed.
///
/// # Errors
///
/// [`Error::InvalidField`] if the magnitude is not a number.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::decode_coordinate;
///
/// let latitude = decode_coordinate("4807.038", "N").unwrap();
/// assert!((latitude - 48.1173).abs() < 1e-4);
///
/// let longitude = decode_coordinate("01131.000", "W").unwrap();
/// assert!((longitude + 11.516_666).abs() < 1e-6);
/// ```
pub fn decode_coordinate(value: &str, direction: &str) -> Result<f64> {
    let mut value = field("coordinate", value, double)?;
    if matches!(direction, "S" | "W") {
        value = -value;
    }

    let degrees = (value / 100.0).trunc();
    let minutes = value - degrees * 100.0;

    Ok(degrees + minutes / 60.0)
}

/// Decodes the four coordinate fields of a sentence.
///
/// Returns `None` unless latitude, N/S, longitude and E/W are all non-empty.
pub(crate) fn coordinate_pair(
    latitude: &str,
    north_south: &str,
    longitude: &str,
    east_west: &str,
) -> Result<Option<(f64, f64)>> {
    if [latitude, north_south, longitude, east_west]
        .iter()
        .any(|token| token.trim().is_empty())
    {
        return Ok(None);
    }

    Ok(Some((
        decode_coordinate(latitude, north_south)?,
        decode_coordinate(longitude, east_west)?,
    )))
}

/// Decodes an optional `DDMMYY` date and an optional `HHMMSS[.fff]` time.
///
/// Empty strings count as absent. Two-digit years are read as `2000 + YY`.
/// Fractional seconds are truncated.
///
/// # Returns
///
/// - [`Timestamp::DateTime`] when both are given
/// - [`Timestamp::Date`] when only the date is given
/// - [`Timestamp::Time`] when only the time is given
///
/// # Errors
///
/// - [`Error::MissingDateTime`] when neither is given
/// - [`Error::InvalidField`] for malformed text or impossible calendar values
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Timestamp, decode_datetime};
/// use time::{Date, Month, PrimitiveDateTime, Time};
///
/// let timestamp = decode_datetime(Some("230394"), Some("143042")).unwrap();
/// let expected = PrimitiveDateTime::new(
///     Date::from_calendar_date(2094, Month::March, 23).unwrap(),
///     Time::from_hms(14, 30, 42).unwrap(),
/// );
/// assert_eq!(timestamp, Timestamp::DateTime(expected));
///
/// let timestamp = decode_datetime(None, Some("123519.75")).unwrap();
/// assert_eq!(timestamp, Timestamp::Time(Time::from_hms(12, 35, 19).unwrap()));
///
/// assert!(decode_datetime(None, None).is_err());
/// ```
pub fn decode_datetime(date: Option<&str>, time: Option<&str>) -> Result<Timestamp> {
    let date = date
        .filter(|date| !date.is_empty())
        .map(decode_date)
        .transpose()?;
    let time = time
        .filter(|time| !time.is_empty())
        .map(decode_time)
        .transpose()?;

    match (date, time) {
        (Some(date), Some(time)) => Ok(Timestamp::DateTime(PrimitiveDateTime::new(date, time))),
        (Some(date), None) => Ok(Timestamp::Date(date)),
        (None, Some(time)) => Ok(Timestamp::Time(time)),
        (None, None) => Err(Error::MissingDateTime),
    }
}

/// Decodes a `DDMMYY` date. The year is always `2000 + YY`.
pub fn decode_date(value: &str) -> Result<Date> {
    let invalid = || Error::invalid_field("date", value);
    let (day, month, year) = field("date", value, (two_digits, two_digits, two_digits))?;

    let month = Month::try_from(month).map_err(|_| invalid())?;
    Date::from_calendar_date(2000 + i32::from(year), month, day).map_err(|_| invalid())
}

/// Decodes a `HHMMSS[.fff]` time, truncating fractional seconds.
pub fn decode_time(value: &str) -> Result<Time> {
    let (hour, minute, second, _) = field(
        "time",
        value,
        (
            two_digits,
            two_digits,
            two_digits,
            opt(preceded(char('.'), digit0)),
        ),
    )?;

    Time::from_hms(hour, minute, second).map_err(|_| Error::invalid_field("time", value))
}

/// Interprets RMC magnetic variation text `x.x,E|W`, west being negative.
///
/// Any text after the hemisphere is ignored.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::nmea_content::parse::magnetic_variation;
///
/// assert_eq!(magnetic_variation("003.1,W").unwrap(), Some(-3.1));
/// assert_eq!(magnetic_variation("020.3,E,A").unwrap(), Some(20.3));
/// assert_eq!(magnetic_variation(",").unwrap(), None);
/// ```
pub fn magnetic_variation(raw: &str) -> Result<Option<f32>> {
    let mut tokens = raw.split(',');
    let value = tokens.next().unwrap_or_default();
    let direction = tokens.next().unwrap_or_default();

    if value.is_empty() {
        return Ok(None);
    }

    let variation = field("variation", value, float)?;
    Ok(Some(if direction == "W" { -variation } else { variation }))
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |digits: &str| digits.parse::<u8>(),
    )
    .parse(i)
}
