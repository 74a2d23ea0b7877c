mod gga;
mod gsv;
mod rmc;

pub use gga::GGA;
pub use gsv::GSV;
pub use rmc::RMC;

use crate::{
    Error, Result,
    nmea0183::validate,
    parsing::{Arity, split_fields},
};

/// A sentence type that can be decoded from a raw NMEA line.
///
/// Implementors describe their schema (`TAG`, `FIELDS`, `ARITY`) and how a list
/// of positional tokens becomes a record. The provided [`decode`](Self::decode)
/// method runs the steps shared by every sentence type:
///
/// 1. verify framing and checksum ([`validate`]);
/// 2. split the payload and check the comma count against `ARITY`;
/// 3. hand the tokens to [`from_fields`](Self::from_fields).
///
/// ```rust
/// use nmea0183_decoder::{Decodable, GGA};
///
/// let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
/// let gga = GGA::decode(line).unwrap();
/// assert_eq!(gga.satellites_in_use, Some(8));
/// ```
pub trait Decodable: Sized {
    /// Line prefix identifying the sentence type, including `$`.
    const TAG: &'static str;

    /// Schema field names in wire order, the tag included.
    const FIELDS: &'static [&'static str];

    /// Comma-count contract of the payload.
    const ARITY: Arity;

    /// Builds the record from positional tokens, one per entry of `FIELDS`.
    fn from_fields(fields: &[&str]) -> Result<Self>;

    /// Decodes a complete raw sentence line.
    fn decode(line: &str) -> Result<Self> {
        let payload = validate(line)?;
        let fields = split_fields(payload, Self::ARITY, Self::FIELDS.len())?;

        Self::from_fields(&fields)
    }
}

/// Error for a token list that does not match the schema of `T`.
pub(crate) fn schema_mismatch<T: Decodable>(fields: &[&str]) -> Error {
    Error::InvalidSentenceLength {
        expected: T::ARITY.commas(),
        actual: fields.len().saturating_sub(1),
    }
}

/// A decoded sentence of any supported type.
///
/// ## Supported Sentence Types
///
/// | Variant      | Tag      | Description                                |
/// |--------------|----------|--------------------------------------------|
/// | GGA([`GGA`]) | `$GPGGA` | Global Positioning System Fix Data         |
/// | RMC([`RMC`]) | `$GPRMC` | Recommended Minimum Navigation Information |
/// | GSV([`GSV`]) | `$GPGSV` | Satellites in View                         |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Satellites in View
    GSV(GSV),
}

impl NmeaSentence {
    /// Sentence tag as received, without `$`.
    pub fn tag(&self) -> &str {
        match self {
            NmeaSentence::GGA(gga) => &gga.tag,
            NmeaSentence::RMC(rmc) => &rmc.tag,
            NmeaSentence::GSV(gsv) => &gsv.tag,
        }
    }
}
