//! Prompt-driven construction over in-memory streams.
use std::io::Cursor;
use vector_lab_core::{Error, Pair, Vec3};

#[test]
fn vector_read_from_well_formed_input() {
    let mut input = Cursor::new("1\n2.5\n-3\n");
    let mut output = Vec::new();

    let v = Vec3::read_from(&mut input, &mut output).unwrap();
    assert_eq!(v, Vec3::new(1.0, 2.5, -3.0).unwrap());
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Enter x: Enter y: Enter z: "
    );
}

#[test]
fn vector_read_from_names_offending_coordinate() {
    let mut input = Cursor::new("1\nnot-a-number\n3\n");
    let mut output = Vec::new();

    let err = Vec3::read_from(&mut input, &mut output).unwrap_err();
    match err {
        Error::Parse { field, input } => {
            assert_eq!(field, "y");
            assert_eq!(input, "not-a-number");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn vector_read_from_rejects_non_finite_input() {
    // "inf" parses as f64 but violates the finiteness invariant
    let mut input = Cursor::new("1\n2\ninf\n");
    let mut output = Vec::new();

    let err = Vec3::read_from(&mut input, &mut output).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { name: "z", .. }));
}

#[test]
fn vector_read_from_truncated_stream() {
    let mut input = Cursor::new("1\n2\n");
    let mut output = Vec::new();

    let err = Vec3::read_from(&mut input, &mut output).unwrap_err();
    assert!(matches!(err, Error::Parse { field: "z", .. }));
}

#[test]
fn pair_read_from_well_formed_input() {
    let mut input = Cursor::new("3.0\n-2\n");
    let mut output = Vec::new();

    let pair = Pair::read_from(&mut input, &mut output).unwrap();
    assert_eq!(pair, Pair::new(3.0, -2).unwrap());
    assert!((pair.power() - 1.0 / 9.0).abs() < 1e-12);
}

#[test]
fn pair_read_from_rejects_non_integer_exponent() {
    let mut input = Cursor::new("3.0\ntwo\n");
    let mut output = Vec::new();

    let err = Pair::read_from(&mut input, &mut output).unwrap_err();
    assert!(matches!(err, Error::Parse { field: "second", .. }));
}

#[test]
fn parse_errors_render_the_offending_input() {
    let mut input = Cursor::new("oops\n");
    let mut output = Vec::new();

    let err = Vec3::read_from(&mut input, &mut output).unwrap_err();
    assert_eq!(err.to_string(), "could not parse x from input \"oops\"");
}
