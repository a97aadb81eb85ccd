use std::{io, ops::ControlFlow};

use assert_matches::assert_matches;

use crate::{
    Error, GLL, GLLHandler, GSV, GSVAccumulator, GSVHandler, Handler, Processor, SatelliteInfo,
    StreamError, TalkerMode, ZDA, ZDAHandler, log_and_continue, process, process_with,
};

const GSV_SEQUENCE: [&str; 4] = [
    "$GPGSV,4,1,14,01,10,020,30,03,15,040,31,05,20,060,32,07,25,080,33*71",
    "$GPGSV,4,2,14,09,30,100,34,11,35,120,35,13,40,140,36,15,45,160,37*75",
    "$GPGSV,4,3,14,17,50,180,38,19,55,200,39,21,60,220,40,23,65,240,41*7A",
    "$GPGSV,4,4,14,25,70,260,42,27,75,280,43*74",
];
const GLL_LINE: &str = "$GPGLL,4916.45,N,12311.12,W,225444,A,*1D";
const GLL_BAD_LONGITUDE: &str = "$GPGLL,4916.45,N,123X1.12,W,225444,A,*74";
const ZDA_LINE: &str = "$GPZDA,201530.00,04,07,2002,-03,00*4E";

/// Collects complete satellite lists, as well as positions and clock readings.
#[derive(Default)]
struct Receiver {
    accumulator: GSVAccumulator,
    sky: Vec<Vec<SatelliteInfo>>,
    positions: Vec<(f64, f64)>,
    clock: Vec<ZDA>,
}

impl GSVHandler for Receiver {
    fn handle_gsv(&mut self, gsv: GSV) {
        if self.accumulator.add(gsv) {
            self.sky.push(self.accumulator.satellites().to_vec());
        }
    }
}

impl GLLHandler for Receiver {
    fn handle_gll(&mut self, gll: GLL) {
        self.positions.push((gll.latitude, gll.longitude));
    }
}

impl ZDAHandler for Receiver {
    fn handle_zda(&mut self, zda: ZDA) {
        self.clock.push(zda);
    }
}

impl Handler for Receiver {
    fn gsv_handler(&mut self) -> Option<&mut dyn GSVHandler> {
        Some(self)
    }

    fn gll_handler(&mut self) -> Option<&mut dyn GLLHandler> {
        Some(self)
    }

    fn zda_handler(&mut self) -> Option<&mut dyn ZDAHandler> {
        Some(self)
    }
}

fn join(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\r\n")).collect()
}

#[test]
fn test_process_stream() {
    let input = join(&[
        GSV_SEQUENCE[0],
        GLL_LINE,
        GSV_SEQUENCE[1],
        GSV_SEQUENCE[2],
        ZDA_LINE,
        GSV_SEQUENCE[3],
    ]);

    let mut receiver = Receiver::default();
    process(input.as_bytes(), &mut receiver).unwrap();

    assert_eq!(receiver.positions.len(), 1);
    assert_eq!(receiver.clock.len(), 1);
    assert_eq!(receiver.sky.len(), 1);

    let prns: Vec<u32> = receiver.sky[0].iter().map(|s| s.prn).collect();
    assert_eq!(prns, [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25, 27]);
    assert_eq!(receiver.accumulator.in_view(), 14);
}

#[test]
fn test_policy_sees_failures() {
    let input = join(&[
        GLL_BAD_LONGITUDE,
        "$GPXYZ,1,2,3*50",
        "$GPGLL,4916.45,N,12311.12,W,225444,A,*1E",
        GLL_LINE,
        "",
    ]);

    let mut failures = Vec::new();
    let mut receiver = Receiver::default();
    let result = process_with(input.as_bytes(), &mut receiver, |line, error| {
        failures.push((line.to_owned(), error));
        ControlFlow::<()>::Continue(())
    });

    assert_matches!(result, Ok(()));
    assert_eq!(receiver.positions.len(), 1);
    assert_eq!(failures.len(), 3);
    assert_eq!(failures[0].0, GLL_BAD_LONGITUDE);
    assert_matches!(failures[0].1, Error::Field { .. });
    assert_matches!(failures[1].1, Error::BadChecksum);
    assert_eq!(failures[2].0, "");
}

#[test]
fn test_policy_aborts() {
    let input = join(&[GLL_BAD_LONGITUDE, GLL_LINE]);

    let mut receiver = Receiver::default();
    let result = Processor::new()
        .error_policy(|_line, error| ControlFlow::Break(error))
        .process(input.as_bytes(), &mut receiver);

    assert_matches!(result, Err(StreamError::Aborted(Error::Field { .. })));
    assert!(receiver.positions.is_empty());
}

#[test]
fn test_io_error_bypasses_policy() {
    let lines: Vec<io::Result<&str>> = vec![
        Ok(GLL_LINE),
        Err(io::Error::other("serial port unplugged")),
        Ok(GLL_LINE),
    ];

    let mut calls = 0;
    let mut receiver = Receiver::default();
    let result = Processor::new()
        .error_policy(|_line, _error| {
            calls += 1;
            ControlFlow::<()>::Continue(())
        })
        .lines(lines, &mut receiver);

    assert_matches!(result, Err(StreamError::Io(e)) if e.kind() == io::ErrorKind::Other);
    assert_eq!(calls, 0);
    assert_eq!(receiver.positions.len(), 1);
}

#[test]
fn test_line_endings_and_invalid_utf8() {
    let mut input = Vec::new();
    input.extend_from_slice(GLL_LINE.as_bytes());
    input.extend_from_slice(b"\r\n$GPGLL,\xff\xfe*00\n");
    input.extend_from_slice(GLL_LINE.as_bytes());

    let mut failures = Vec::new();
    let mut receiver = Receiver::default();
    process_with(input.as_slice(), &mut receiver, |line, error| {
        failures.push((line.to_owned(), error));
        ControlFlow::<()>::Continue(())
    })
    .unwrap();

    assert_eq!(receiver.positions.len(), 2);
    assert_eq!(failures.len(), 1);
    assert!(failures[0].0.contains('\u{FFFD}'));
    assert_eq!(failures[0].1, Error::BadChecksum);
}

#[test]
fn test_talker_mode_for_streams() {
    let input = join(&["$GLGSV,1,1,01,65,45,120,38*5E"]);

    let mut receiver = Receiver::default();
    process(input.as_bytes(), &mut receiver).unwrap();
    assert!(receiver.sky.is_empty());

    Processor::new()
        .talker_mode(TalkerMode::Any)
        .error_policy(log_and_continue)
        .process(input.as_bytes(), &mut receiver)
        .unwrap();
    assert_eq!(receiver.sky.len(), 1);
    assert_eq!(receiver.sky[0][0].prn, 65);
}
