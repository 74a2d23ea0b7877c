use std::time::Duration;

use nom::number::complete::{double, float};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    nmea_content::{
        Coordinate, Parsable, Quality,
        parse::{coordinate_pair, decode_datetime},
        sentences::{Decodable, schema_mismatch},
    },
    parsing::{Arity, optional_field},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Sentence tag without `$`
    pub tag: String,
    /// Fix time in UTC, as received
    pub utc: String,
    /// Latitude, in decimal degrees when the position is complete
    pub latitude: Coordinate,
    /// Latitude hemisphere (N/S)
    pub north_south: String,
    /// Longitude, in decimal degrees when the position is complete
    pub longitude: Coordinate,
    /// Longitude hemisphere (E/W)
    pub east_west: String,
    /// GPS Quality Indicator
    pub quality: Option<Quality>,
    /// Number of satellites in use
    pub satellites_in_use: Option<u8>,
    /// Horizontal Dilution of Precision
    pub horizontal_dilution: Option<f32>,
    /// Altitude above/below mean sea level (geoid)
    pub altitude: Option<f64>,
    /// Unit of the altitude, usually `M`
    pub altitude_unit: String,
    /// Geoidal separation, the difference between the WGS-84 earth ellipsoid
    /// and mean sea level (geoid)
    pub geoidal_separation: Option<f64>,
    /// Unit of the geoidal separation, usually `M`
    pub geoidal_separation_unit: String,
    /// Age of Differential GPS data, null field when DGPS is not used
    pub data_age: Option<Duration>,
    /// Differential reference station ID
    pub diff_ref_station_id: Option<u16>,
    /// Fix time decoded from `utc`
    pub time_of_fix: Option<time::Time>,
}

impl Decodable for GGA {
    const TAG: &'static str = "$GPGGA";

    const FIELDS: &'static [&'static str] = &[
        "name",
        "utc",
        "latitude",
        "north_south",
        "longitude",
        "east_west",
        "quality",
        "satellites_in_use",
        "horizontal_dilution",
        "altitude",
        "altitude_unit",
        "geoidal_separation",
        "geoidal_separation_unit",
        "data_age",
        "diff_ref_station_id",
    ];

    const ARITY: Arity = Arity::Exact(14);

    fn from_fields(fields: &[&str]) -> Result<Self> {
        let &[
            tag,
            utc,
            latitude,
            north_south,
            longitude,
            east_west,
            quality,
            satellites_in_use,
            horizontal_dilution,
            altitude,
            altitude_unit,
            geoidal_separation,
            geoidal_separation_unit,
            data_age,
            diff_ref_station_id,
        ] = fields
        else {
            return Err(schema_mismatch::<Self>(fields));
        };

        let (latitude, longitude) =
            match coordinate_pair(latitude, north_south, longitude, east_west)? {
                Some((latitude, longitude)) => {
                    (Coordinate::Degrees(latitude), Coordinate::Degrees(longitude))
                }
                None => (
                    Coordinate::Raw(latitude.to_owned()),
                    Coordinate::Raw(longitude.to_owned()),
                ),
            };

        let time_of_fix = if utc.is_empty() {
            None
        } else {
            decode_datetime(None, Some(utc))?.time()
        };

        let data_age = optional_field("data_age", data_age, float)?
            .map(Duration::try_from_secs_f32)
            .transpose()
            .map_err(|_| Error::invalid_field("data_age", data_age))?;

        Ok(Self {
            tag: tag.to_owned(),
            utc: utc.to_owned(),
            latitude,
            north_south: north_south.to_owned(),
            longitude,
            east_west: east_west.to_owned(),
            quality: optional_field("quality", quality, Quality::parser)?,
            satellites_in_use: optional_field(
                "satellites_in_use",
                satellites_in_use,
                nom::character::complete::u8,
            )?,
            horizontal_dilution: optional_field("horizontal_dilution", horizontal_dilution, float)?,
            altitude: optional_field("altitude", altitude, double)?,
            altitude_unit: altitude_unit.to_owned(),
            geoidal_separation: optional_field("geoidal_separation", geoidal_separation, double)?,
            geoidal_separation_unit: geoidal_separation_unit.to_owned(),
            data_age,
            diff_ref_station_id: optional_field(
                "diff_ref_station_id",
                diff_ref_station_id,
                nom::character::complete::u16,
            )?,
            time_of_fix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gga_decoding() {
        let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
        let gga = GGA::decode(line).unwrap();

        assert_eq!(gga.tag, "GPGGA");
        assert_eq!(gga.utc, "123519");
        assert_eq!(gga.quality, Some(Quality::GPSFix));
        assert_eq!(gga.satellites_in_use, Some(8));
        assert_eq!(gga.horizontal_dilution, Some(0.9));
        assert_eq!(gga.altitude, Some(545.4));
        assert_eq!(gga.altitude_unit, "M");
        assert_eq!(gga.geoidal_separation, Some(46.9));
        assert_eq!(gga.geoidal_separation_unit, "M");
        assert_eq!(gga.data_age, None);
        assert_eq!(gga.diff_ref_station_id, None);
        assert_eq!(gga.time_of_fix, Some(time::Time::from_hms(12, 35, 19).unwrap()));

        let latitude = gga.latitude.degrees().unwrap();
        let longitude = gga.longitude.degrees().unwrap();
        assert!((latitude - 48.1173).abs() < 1e-4);
        assert!((longitude - 11.5167).abs() < 1e-4);
    }

    #[test]
    fn test_gga_southern_western() {
        let line = "$GPGGA,092725.00,4717.113,S,00833.915,W,2,08,1.0,499.7,M,48.0,M,3.5,0120*45";
        let gga = GGA::decode(line).unwrap();

        assert_eq!(gga.quality, Some(Quality::DGPSFix));
        assert_eq!(gga.data_age, Some(Duration::from_millis(3500)));
        assert_eq!(gga.diff_ref_station_id, Some(120));
        assert_eq!(gga.time_of_fix, Some(time::Time::from_hms(9, 27, 25).unwrap()));
        assert!(gga.latitude.degrees().unwrap() < 0.0);
        assert!(gga.longitude.degrees().unwrap() < 0.0);
    }

    #[test]
    fn test_gga_without_fix() {
        let gga = GGA::decode("$GPGGA,,,,,,0,00,,,M,,M,,*66").unwrap();

        assert_eq!(gga.latitude, Coordinate::Raw(String::new()));
        assert_eq!(gga.longitude, Coordinate::Raw(String::new()));
        assert_eq!(gga.quality, Some(Quality::NoFix));
        assert_eq!(gga.satellites_in_use, Some(0));
        assert_eq!(gga.altitude, None);
        assert_eq!(gga.time_of_fix, None);
    }

    #[test]
    fn test_gga_partial_position_kept_raw() {
        let fields = [
            "GPGGA", "123519", "4807.038", "N", "", "", "1", "08", "0.9", "545.4", "M", "46.9",
            "M", "", "",
        ];
        let gga = GGA::from_fields(&fields).unwrap();

        assert_eq!(gga.latitude, Coordinate::Raw("4807.038".into()));
        assert_eq!(gga.longitude, Coordinate::Raw(String::new()));
    }

    #[test]
    fn test_gga_length() {
        let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,*6B";
        let result = GGA::decode(line);

        assert!(matches!(
            result,
            Err(Error::InvalidSentenceLength {
                expected: 14,
                actual: 13
            })
        ));
    }

    #[test]
    fn test_gga_receiver_specific_quality() {
        let line = "$GPGGA,123519,4807.038,N,01131.000,E,9,08,0.9,545.4,M,46.9,M,,*4F";
        let gga = GGA::decode(line).unwrap();

        assert_eq!(gga.quality, Some(Quality::Other('9')));
        assert_eq!(gga.altitude, Some(545.4));
    }

    #[test]
    fn test_gga_invalid_fields() {
        let fields = [
            "GPGGA", "123519", "4807.038", "N", "01131.000", "E", "1", "08", "0.9", "545.4", "M",
            "46.9", "M", "", "",
        ];
        assert!(GGA::from_fields(&fields).is_ok());

        let cases = [
            (1, "12351", "time"),
            (2, "48O7.038", "coordinate"),
            (6, "12", "quality"),
            (7, "A8", "satellites_in_use"),
            (9, "high", "altitude"),
            (13, "-1", "data_age"),
        ];

        for (index, value, name) in cases {
            let mut fields = fields;
            fields[index] = value;

            let result = GGA::from_fields(&fields);
            assert!(
                matches!(result, Err(Error::InvalidField { field, .. }) if field == name),
                "Failed: {index} {value:?}\n\t{result:?}"
            );
        }
    }
}
