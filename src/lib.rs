//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences with the format:
//! `$TTSSS,D1,D2,...,Dn*CC\r\n`
//!
//! Every sentence is checked before its fields are interpreted:
//! - the line must be ASCII and framed as `$...*CC`
//! - the checksum must match the XOR of the payload
//! - the payload must hold the comma count of the sentence schema
//!
//! Supported sentences are `$GPGGA`, `$GPRMC` and `$GPGSV`. Other lines are
//! ignored by the [`Decoder`].
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{Decoder, NmeaSentence};
//!
//! let lines = [
//!     "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
//!     "$GPGLL,4916.45,N,12311.12,W,225444,A*31",
//!     "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
//! ];
//!
//! let decoder = Decoder::new();
//! for sentence in decoder.decode_stream(lines) {
//!     match sentence.unwrap() {
//!         NmeaSentence::GGA(gga) => println!("fix with {:?} satellites", gga.satellites_in_use),
//!         NmeaSentence::RMC(rmc) => println!("position {:?}, {:?}", rmc.ddlat, rmc.ddlon),
//!         NmeaSentence::GSV(gsv) => println!("{} satellites in view", gsv.satellites_in_view),
//!     }
//! }
//! ```

pub mod error;
mod nmea0183;
pub mod nmea_content;
pub mod parsing;

mod decoder;

pub use decoder::*;
pub use error::{Error, Result};
pub use nmea_content::{
    Coordinate, Decodable, GGA, GSV, NmeaSentence, Parsable, Quality, RMC, Satellite, Status,
    Timestamp,
    parse::{decode_coordinate, decode_datetime},
};
pub use nmea0183::*;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
