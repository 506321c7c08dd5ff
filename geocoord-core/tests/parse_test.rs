//! End-to-end behaviour of `parse_coordinates`.

use std::thread;

use geocoord_core::rayon::prelude::*;
use geocoord_core::{
    parse_coordinates, try_parse_coordinates, CoordinateFormat, ParseError, ParsedCoordinate,
};

#[test]
fn decimal_latitudes_round_to_five_places() {
    let cases = [
        ("-90", -90.0),
        ("90", 90.0),
        ("0", 0.0),
        ("-0.00001", -0.00001),
        ("-14.55", -14.55),
        ("45.12345", 45.12345),
        ("45.123456", 45.12346),
        ("-45.123455", -45.12345),
        ("12.3456789", 12.34568),
        ("0.000185", 0.00018),
        ("0.003515", 0.00351),
        ("-0.003515", -0.00351),
        ("0.000015", 0.00002),
        ("1.000005", 1.00001),
        ("89.999995", 89.99999),
        ("0.015625", 0.01563),
        ("-0.015625", -0.01563),
    ];
    for (literal, expected) in cases {
        let parsed = parse_coordinates(&format!("{},0", literal)).expect("valid latitude");
        assert_eq!(parsed.latitude_dd, expected, "latitude {}", literal);
        assert_eq!(parsed.latitude_format, CoordinateFormat::DecimalDegrees);
    }
}

#[test]
fn six_decimal_latitudes_round_like_exact_decimals() {
    let mut k: i64 = -90_000_000;
    while k <= 90_000_000 {
        // multiples of 1/64 are exact ties, covered above
        if k % 15_625 != 0 {
            let sign = if k < 0 { "-" } else { "" };
            let micros = k.abs();
            let literal = format!("{}{}.{:06}", sign, micros / 1_000_000, micros % 1_000_000);
            let d: f64 = literal.parse().unwrap();
            let expected: f64 = format!("{:.5}", d).parse().unwrap();
            let parsed = parse_coordinates(&format!("{},0", literal)).expect("valid latitude");
            assert_eq!(parsed.latitude_dd, expected, "latitude {}", literal);
        }
        k += 9_973;
    }
}

#[test]
fn out_of_range_values_fail() {
    assert_eq!(parse_coordinates("91,0"), None);
    assert_eq!(parse_coordinates("0,181"), None);
    assert_eq!(parse_coordinates("-90.00001,0"), None);
    assert!(parse_coordinates("90,-180").is_some());
}

#[test]
fn sign_and_letter_contradict() {
    assert_eq!(parse_coordinates("-14.55N,20E"), None);
    assert!(matches!(
        try_parse_coordinates("-14.55N,20E"),
        Err(ParseError::Contradiction(_))
    ));
    assert_eq!(parse_coordinates("14.55N,-20E"), None);
}

#[test]
fn cardinal_letters_set_the_sign() {
    let parsed = parse_coordinates("14.55S,20W").unwrap();
    assert_eq!(parsed.latitude_dd, -14.55);
    assert_eq!(parsed.longitude_dd, -20.0);

    let parsed = parse_coordinates(" 14.55 n , 20 e ").unwrap();
    assert_eq!(parsed.latitude_dd, 14.55);
    assert_eq!(parsed.longitude_dd, 20.0);
}

#[test]
fn degrees_minutes_seconds() {
    let parsed = parse_coordinates("40°26'46\"N,79°58'56\"W").unwrap();
    assert_eq!(
        parsed,
        ParsedCoordinate {
            latitude_dd: 40.44611,
            longitude_dd: -79.98222,
            latitude_format: CoordinateFormat::DegreesMinutesSeconds,
            longitude_format: CoordinateFormat::DegreesMinutesSeconds,
        }
    );
}

#[test]
fn degrees_minutes_seconds_with_spaces_and_double_quotes() {
    let parsed = parse_coordinates("-14° 27' 56.1'', 120° 0' 0''").unwrap();
    assert_eq!(parsed.latitude_dd, -14.46558);
    assert_eq!(parsed.longitude_dd, 120.0);
}

#[test]
fn degrees_decimal_minutes() {
    let parsed = parse_coordinates("40°26.767'N,79°58.933'W").unwrap();
    assert_eq!(
        parsed,
        ParsedCoordinate {
            latitude_dd: 40.44612,
            longitude_dd: -79.98222,
            latitude_format: CoordinateFormat::DegreesDecimalMinutes,
            longitude_format: CoordinateFormat::DegreesDecimalMinutes,
        }
    );
}

#[test]
fn three_halves_fail() {
    assert_eq!(parse_coordinates("40,79,extra"), None);
    assert_eq!(
        try_parse_coordinates("40,79,extra"),
        Err(ParseError::Structure(3))
    );
}

#[test]
fn sixty_is_the_inclusive_limit() {
    let parsed = parse_coordinates("10°60'60\",0").unwrap();
    assert_eq!(parsed.latitude_dd, 11.01667);
    assert_eq!(parsed.latitude_format, CoordinateFormat::DegreesMinutesSeconds);
    assert_eq!(parse_coordinates("10°61'0\",0"), None);
    assert_eq!(parse_coordinates("10°0'61\",0"), None);
}

#[test]
fn blank_field_counts_as_zero() {
    let parsed = parse_coordinates("10° ' 5\"N,20° 'E").unwrap();
    assert_eq!(parsed.latitude_dd, 10.00139);
    assert_eq!(parsed.latitude_format, CoordinateFormat::DegreesMinutesSeconds);
    assert_eq!(parsed.longitude_dd, 20.0);
    assert_eq!(parsed.longitude_format, CoordinateFormat::DegreesDecimalMinutes);
}

#[test]
fn zero_degree_field_is_negative() {
    let parsed = parse_coordinates("0°30'N,0°30'E").unwrap();
    assert_eq!(parsed.latitude_dd, -0.5);
    assert_eq!(parsed.longitude_dd, -0.5);
    let parsed = parse_coordinates("0°30'S,0").unwrap();
    assert_eq!(parsed.latitude_dd, -0.5);
}

#[test]
fn field_overflow_past_the_pole_fails() {
    assert!(matches!(
        try_parse_coordinates("90°0'1\",0"),
        Err(ParseError::Conversion { .. })
    ));
}

#[test]
fn garbage_fails() {
    for input in ["", ",", "abc,def", "40°N°,10", "1°2°3°4,0", "40 26 46,0", "0x1A,0"] {
        assert_eq!(parse_coordinates(input), None, "{:?} should fail", input);
    }
}

#[test]
fn parsing_is_idempotent() {
    let input = "40°26'46\"N,79°58'56\"W";
    let first = parse_coordinates(input).unwrap();
    let second = parse_coordinates(input).unwrap();
    assert_eq!(first.latitude_dd.to_bits(), second.latitude_dd.to_bits());
    assert_eq!(first.longitude_dd.to_bits(), second.longitude_dd.to_bits());
    assert_eq!(first, second);
}

#[test]
fn concurrent_callers_do_not_interfere() {
    let inputs = [
        "40°26'46\"N,79°58'56\"W",
        "40°26.767'N,79°58.933'W",
        "14.55S,20W",
        "91,0",
        "-14.55N,20E",
    ];
    let expected: Vec<_> = inputs.iter().map(|i| parse_coordinates(i)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..200)
                        .map(|_| {
                            inputs
                                .iter()
                                .map(|i| parse_coordinates(i))
                                .collect::<Vec<_>>()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            for round in handle.join().unwrap() {
                assert_eq!(round, expected);
            }
        }
    });

    let parallel: Vec<_> = (0..1000)
        .into_par_iter()
        .map(|n| parse_coordinates(inputs[n % inputs.len()]))
        .collect();
    for (n, result) in parallel.iter().enumerate() {
        assert_eq!(*result, expected[n % inputs.len()]);
    }
}
