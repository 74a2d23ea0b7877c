//! # NMEA Sentence Content
//!
//! Strongly-typed records for the supported sentence types, the field types
//! they share, and the field decoders that turn raw tokens into domain values.

pub mod parse;
pub mod sentences;

use nom::{
    IResult, Parser,
    character::complete::{anychar, i16},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, parsing::optional_field};

pub use sentences::{Decodable, GGA, GSV, NmeaSentence, RMC};

/// A latitude or longitude field.
///
/// Coordinates are converted to signed decimal degrees only when both the
/// magnitude and the hemisphere of the latitude and of the longitude are
/// present. Otherwise the raw magnitude text is kept as received, so callers
/// have to check the representation before using the value as a number.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinate {
    /// Signed decimal degrees (south and west are negative)
    Degrees(f64),
    /// Unconverted field text
    Raw(String),
}

impl Coordinate {
    /// Returns the decimal degrees, if the field was converted.
    pub fn degrees(&self) -> Option<f64> {
        match self {
            Coordinate::Degrees(degrees) => Some(*degrees),
            Coordinate::Raw(_) => None,
        }
    }
}

/// Result of decoding an NMEA date and/or time field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Both date and time were given
    DateTime(time::PrimitiveDateTime),
    /// Only the date was given
    Date(time::Date),
    /// Only the time was given
    Time(time::Time),
}

impl Timestamp {
    /// Calendar date part, when one was given.
    pub fn date(&self) -> Option<time::Date> {
        match self {
            Timestamp::DateTime(datetime) => Some(datetime.date()),
            Timestamp::Date(date) => Some(*date),
            Timestamp::Time(_) => None,
        }
    }

    /// Time of day part, when one was given.
    pub fn time(&self) -> Option<time::Time> {
        match self {
            Timestamp::DateTime(datetime) => Some(datetime.time()),
            Timestamp::Date(_) => None,
            Timestamp::Time(time) => Some(*time),
        }
    }
}

/// A trait for single-character field values that can be parsed from a token.
pub trait Parsable: Sized {
    /// Parses the input and returns the remaining input and the parsed value.
    fn parser(input: &str) -> IResult<&str, Self>;
}

macro_rules! parsable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl Parsable for $name {
            fn parser(i: &str) -> IResult<&str, Self> {
                nom::branch::alt(($(
                    nom::character::complete::char($char).map(|_| Self::$variant),
                )*)).parse(i)
            }
        }
    };
}

parsable_enum! {
    /// RMC status flag
    pub enum Status {
        /// A - Data valid
        'A' => Valid,
        /// V - Navigation receiver warning
        'V' => Invalid,
    }
}

/// Quality of the GPS fix
///
/// Indicators outside the NMEA 0183 table (e.g. `9` for SBAS on some
/// receivers) are kept as [`Quality::Other`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// 0 - Fix not available
    NoFix,
    /// 1 - GPS fix
    GPSFix,
    /// 2 - Differential GPS fix
    DGPSFix,
    /// 3 - PPS fix
    PPSFix,
    /// 4 - Real Time Kinematic
    RTK,
    /// 5 - Float RTK
    FloatRTK,
    /// 6 - estimated (dead reckoning)
    Estimated,
    /// 7 - Manual input mode
    Manual,
    /// 8 - Simulation mode
    Simulation,
    /// Receiver specific indicator
    Other(char),
}

impl Parsable for Quality {
    fn parser(i: &str) -> IResult<&str, Self> {
        anychar
            .map(|c| match c {
                '0' => Quality::NoFix,
                '1' => Quality::GPSFix,
                '2' => Quality::DGPSFix,
                '3' => Quality::PPSFix,
                '4' => Quality::RTK,
                '5' => Quality::FloatRTK,
                '6' => Quality::Estimated,
                '7' => Quality::Manual,
                '8' => Quality::Simulation,
                other => Quality::Other(other),
            })
            .parse(i)
    }
}

/// One satellite group of a [`GSV`] sentence.
///
/// Every value is optional: an empty token is `None`, never zero. Values are
/// signed since receivers report satellites below the horizon with a
/// negative elevation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite PRN number
    pub prn: Option<i16>,
    /// Elevation in degrees
    pub elevation: Option<i16>,
    /// Azimuth in degrees from true north
    pub azimuth: Option<i16>,
    /// Signal to noise ratio in dB
    pub snr: Option<i16>,
}

impl Satellite {
    /// Decodes one `PRN,elevation,azimuth,SNR` group of tokens.
    pub(crate) fn from_group([prn, elevation, azimuth, snr]: [&str; 4]) -> Result<Self> {
        Ok(Self {
            prn: optional_field("prn", prn, i16)?,
            elevation: optional_field("elevation", elevation, i16)?,
            azimuth: optional_field("azimuth", azimuth, i16)?,
            snr: optional_field("snr", snr, i16)?,
        })
    }
}
