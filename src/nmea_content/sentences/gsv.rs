use nom::character::complete::u8;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    nmea_content::{
        Satellite,
        sentences::{Decodable, schema_mismatch},
    },
    parsing::{Arity, field},
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Exactly four satellite groups are carried. Groups the receiver left empty
/// decode to [`Satellite`] values whose members are all `None`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Sentence tag without `$`
    pub tag: String,
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: u8,
    /// Sentence number of this GSV message within current group
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellite groups in wire order
    pub satellites: [Satellite; 4],
}

impl GSV {
    /// Iterates over the four satellite groups in wire order.
    ///
    /// Every call starts a fresh iteration over the stored groups.
    ///
    /// ```rust
    /// use nmea0183_decoder::{Decodable, GSV};
    ///
    /// let gsv = GSV::decode("$GPGSV,1,1,02,05,,120,,07,45,,38,,,,,,,,*40").unwrap();
    /// let prns: Vec<_> = gsv.satellites().map(|satellite| satellite.prn).collect();
    /// assert_eq!(prns, [Some(5), Some(7), None, None]);
    /// ```
    pub fn satellites(&self) -> impl Iterator<Item = Satellite> + '_ {
        self.satellites.iter().copied()
    }
}

impl Decodable for GSV {
    const TAG: &'static str = "$GPGSV";

    const FIELDS: &'static [&'static str] = &[
        "name",
        "total_messages",
        "message_number",
        "satellites_in_view",
        "prn_0",
        "elevation_0",
        "azimuth_0",
        "snr_0",
        "prn_1",
        "elevation_1",
        "azimuth_1",
        "snr_1",
        "prn_2",
        "elevation_2",
        "azimuth_2",
        "snr_2",
        "prn_3",
        "elevation_3",
        "azimuth_3",
        "snr_3",
    ];

    const ARITY: Arity = Arity::Exact(19);

    fn from_fields(fields: &[&str]) -> Result<Self> {
        let &[
            tag,
            total_messages,
            message_number,
            satellites_in_view,
            prn_0,
            elevation_0,
            azimuth_0,
            snr_0,
            prn_1,
            elevation_1,
            azimuth_1,
            snr_1,
            prn_2,
            elevation_2,
            azimuth_2,
            snr_2,
            prn_3,
            elevation_3,
            azimuth_3,
            snr_3,
        ] = fields
        else {
            return Err(schema_mismatch::<Self>(fields));
        };

        let [first, second, third, fourth] = [
            [prn_0, elevation_0, azimuth_0, snr_0],
            [prn_1, elevation_1, azimuth_1, snr_1],
            [prn_2, elevation_2, azimuth_2, snr_2],
            [prn_3, elevation_3, azimuth_3, snr_3],
        ]
        .map(Satellite::from_group);

        Ok(Self {
            tag: tag.to_owned(),
            total_messages: field("total_messages", total_messages, u8)?,
            message_number: field("message_number", message_number, u8)?,
            satellites_in_view: field("satellites_in_view", satellites_in_view, u8)?,
            satellites: [first?, second?, third?, fourth?],
        })
    }
}
