//! Prints fixes and satellite lists from NMEA sentences read on stdin.
//!
//! ```text
//! RUST_LOG=nmea0183_dispatch=debug cargo run --example track < capture.nmea
//! ```

use std::io;

use nmea0183_dispatch::{
    GGA, GGAHandler, GSV, GSVAccumulator, GSVHandler, Handler, Processor, StreamError, TalkerMode,
    log_and_continue,
};
use tracing_subscriber::EnvFilter;

#[derive(Default, Handler)]
#[nmea(handles(GGA, GSV))]
struct Track {
    fixes: usize,
    sky: GSVAccumulator,
}

impl GGAHandler for Track {
    fn handle_gga(&mut self, gga: GGA) {
        self.fixes += 1;
        println!(
            "{} {:>11.6} {:>11.6} {:>7.1}m  {} ({} satellites)",
            gga.time,
            gga.latitude,
            gga.longitude,
            gga.altitude,
            gga.fix_quality,
            gga.satellite_count
        );
    }
}

impl GSVHandler for Track {
    fn handle_gsv(&mut self, gsv: GSV) {
        if !self.sky.add(gsv) {
            return;
        }

        let prns: Vec<String> = self
            .sky
            .satellites()
            .iter()
            .map(|satellite| format!("{}@{}dB", satellite.prn, satellite.snr))
            .collect();
        println!("{} in view: {}", self.sky.in_view(), prns.join(" "));
    }
}

fn main() -> Result<(), StreamError<std::convert::Infallible>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut track = Track::default();
    Processor::new()
        .talker_mode(TalkerMode::Any)
        .error_policy(log_and_continue)
        .process(io::stdin().lock(), &mut track)?;

    eprintln!("{} fixes", track.fixes);
    Ok(())
}
