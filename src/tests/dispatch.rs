use crate::{Decoder, Error, NmeaSentence, Quality, SentenceType, Status};

const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
const RMC: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
const GSV: &str = "$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74";
const GLL: &str = "$GPGLL,4916.45,N,12311.12,W,225444,A*31";

#[test]
fn test_decode_one_routes_by_tag() {
    let decoder = Decoder::new();

    match decoder.decode_one(GGA) {
        Ok(Some(NmeaSentence::GGA(gga))) => assert_eq!(gga.quality, Some(Quality::GPSFix)),
        other => panic!("Unexpected result: {other:?}"),
    }
    match decoder.decode_one(RMC) {
        Ok(Some(NmeaSentence::RMC(rmc))) => assert_eq!(rmc.validity, Some(Status::Valid)),
        other => panic!("Unexpected result: {other:?}"),
    }
    match decoder.decode_one(GSV) {
        Ok(Some(NmeaSentence::GSV(gsv))) => assert_eq!(gsv.satellites_in_view, 11),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_decode_one_unmatched() {
    let decoder = Decoder::new();

    for line in [GLL, "", "\r\n", "hello", "$GP", "GPGGA,123519*00"] {
        assert!(
            matches!(decoder.decode_one(line), Ok(None)),
            "Failed: {line:?}"
        );
    }
}

#[test]
fn test_decode_one_surrounding_whitespace() {
    let decoder = Decoder::new();
    let line = format!("  {GGA}\r\n");

    assert!(matches!(
        decoder.decode_one(&line),
        Ok(Some(NmeaSentence::GGA(_)))
    ));
}

#[test]
fn test_decode_one_disabled_sentence() {
    let decoder = Decoder::with_sentences(["$GPRMC"]).unwrap();

    assert!(matches!(decoder.decode_one(GGA), Ok(None)));
    assert!(matches!(decoder.decode_one(GSV), Ok(None)));
    assert!(matches!(
        decoder.decode_one(RMC),
        Ok(Some(NmeaSentence::RMC(_)))
    ));
}

#[test]
fn test_decode_one_errors() {
    let decoder = Decoder::new();

    assert!(matches!(
        decoder.decode_one("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*48"),
        Err(Error::InvalidChecksum {
            calculated: 0x47,
            found: 0x48
        })
    ));
    assert!(matches!(
        decoder.decode_one("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,*6B"),
        Err(Error::InvalidSentenceLength {
            expected: 14,
            actual: 13
        })
    ));
    assert!(matches!(
        decoder.decode_one("$GPGGA,123456,data*41"),
        Err(Error::InvalidSentenceLength { .. })
    ));
    assert!(matches!(
        decoder.decode_one("$GPGGA,123519"),
        Err(Error::MalformedFraming(_))
    ));
}

#[test]
fn test_builder() {
    let decoder = Decoder::builder()
        .sentences(["GPGSV", "$GPGGA"])
        .sentence("$GPGSV")
        .build()
        .unwrap();
    assert_eq!(decoder.sentences(), [SentenceType::GSV, SentenceType::GGA]);

    let result = Decoder::builder().sentence("$GPVTG").build();
    assert!(matches!(result, Err(Error::SentenceNotSupported(tag)) if tag == "$GPVTG"));
}
