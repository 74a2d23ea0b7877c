use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Target};
use nmea0183_decoder::{Coordinate, Decoder, NmeaSentence};

#[derive(Debug, Parser)]
#[command(version, about = "Decode GGA, RMC and GSV sentences from an NMEA log", long_about = None)]
struct Args {
    /// NMEA log, one sentence per line
    file: PathBuf,
    /// Sentence tag to decode (repeatable), every supported tag by default
    #[arg(short, long)]
    sentence: Vec<String>,
}

fn print(sentence: &NmeaSentence) {
    match sentence {
        NmeaSentence::GGA(gga) => match (&gga.latitude, &gga.longitude) {
            (Coordinate::Degrees(lat), Coordinate::Degrees(lon)) => println!(
                "{} {:?} fix at {:.6}, {:.6} with {:?} satellites",
                gga.tag, gga.quality, lat, lon, gga.satellites_in_use
            ),
            _ => println!("{} no position", gga.tag),
        },
        NmeaSentence::RMC(rmc) => println!(
            "{} {:?} {:?}, {:?} at {:?} kn",
            rmc.tag, rmc.datetime, rmc.ddlat, rmc.ddlon, rmc.speed_knots
        ),
        NmeaSentence::GSV(gsv) => {
            let prns: Vec<_> = gsv.satellites().filter_map(|satellite| satellite.prn).collect();
            println!(
                "{} {}/{} {} in view: {:?}",
                gsv.tag, gsv.message_number, gsv.total_messages, gsv.satellites_in_view, prns
            );
        }
    }
}

fn main() {
    let mut builder = Builder::from_default_env();

    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let args = Args::parse();

    let decoder = if args.sentence.is_empty() {
        Decoder::new()
    } else {
        Decoder::with_sentences(&args.sentence)
            .unwrap_or_else(|e| panic!("Invalid sentence selection: {}", e))
    };

    let sentences = decoder
        .decode_file(&args.file)
        .unwrap_or_else(|e| panic!("Failed to open {}: {}", args.file.display(), e));

    for sentence in sentences {
        match sentence {
            Ok(sentence) => print(&sentence),
            Err(e) => {
                eprintln!("Decoding stopped: {}", e);
                std::process::exit(1);
            }
        }
    }
}
