use nom::number::complete::float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    nmea_content::{
        Parsable, Status, Timestamp,
        parse::{coordinate_pair, decode_datetime, magnetic_variation},
        sentences::{Decodable, schema_mismatch},
    },
    parsing::{Arity, optional_field},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// The payload must hold at least 11 commas. It is split into 11 tokens, so the
/// magnetic variation hemisphere and any later fields (NMEA 2.3 mode indicator,
/// NMEA 4.1 navigation status) stay, unsplit, in [`variation`](Self::variation).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Sentence tag without `$`
    pub tag: String,
    /// Fix time in UTC, as received
    pub timestamp: String,
    /// Status Mode Indicator
    pub validity: Option<Status>,
    /// Latitude, as received
    pub latitude: String,
    /// Latitude hemisphere (N/S)
    pub north_south: String,
    /// Longitude, as received
    pub longitude: String,
    /// Longitude hemisphere (E/W)
    pub east_west: String,
    /// Latitude in decimal degrees
    pub ddlat: Option<f64>,
    /// Longitude in decimal degrees
    pub ddlon: Option<f64>,
    /// Speed over ground in knots
    pub speed_knots: Option<f32>,
    /// Course over ground in degrees
    pub true_course: Option<f32>,
    /// Fix date in UTC, as received
    pub datestamp: String,
    /// Magnetic variation and every trailing field, as received
    pub variation: String,
    /// Fix date and time decoded from `datestamp` and `timestamp`
    pub datetime: Option<Timestamp>,
}

impl RMC {
    /// Magnetic variation in degrees, west being negative.
    pub fn magnetic_variation(&self) -> Result<Option<f32>> {
        magnetic_variation(&self.variation)
    }
}

impl Decodable for RMC {
    const TAG: &'static str = "$GPRMC";

    const FIELDS: &'static [&'static str] = &[
        "name",
        "timestamp",
        "validity",
        "latitude",
        "north_south",
        "longitude",
        "east_west",
        "speed_knots",
        "true_course",
        "datestamp",
        "variation",
    ];

    const ARITY: Arity = Arity::AtLeast(11);

    fn from_fields(fields: &[&str]) -> Result<Self> {
        let &[
            tag,
            timestamp,
            validity,
            latitude,
            north_south,
            longitude,
            east_west,
            speed_knots,
            true_course,
            datestamp,
            variation,
        ] = fields
        else {
            return Err(schema_mismatch::<Self>(fields));
        };

        let position = coordinate_pair(latitude, north_south, longitude, east_west)?;

        let datetime = if datestamp.is_empty() && timestamp.is_empty() {
            None
        } else {
            Some(decode_datetime(Some(datestamp), Some(timestamp))?)
        };

        Ok(Self {
            tag: tag.to_owned(),
            timestamp: timestamp.to_owned(),
            validity: optional_field("validity", validity, Status::parser)?,
            latitude: latitude.to_owned(),
            north_south: north_south.to_owned(),
            longitude: longitude.to_owned(),
            east_west: east_west.to_owned(),
            ddlat: position.map(|(latitude, _)| latitude),
            ddlon: position.map(|(_, longitude)| longitude),
            speed_knots: optional_field("speed_knots", speed_knots, float)?,
            true_course: optional_field("true_course", true_course, float)?,
            datestamp: datestamp.to_owned(),
            variation: variation.to_owned(),
            datetime,
        })
    }
}
