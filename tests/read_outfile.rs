use std::collections::HashMap;
use std::io::Write;

use outplot::outfile::{self, ParseError};

#[test]
fn load_parses_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a=1\n1.5\n2.5\n").unwrap();

    let out = outfile::load(file.path()).unwrap();
    assert_eq!(out.props, HashMap::from([("a".to_string(), 1)]));
    assert_eq!(out.samples, vec![1.5, 2.5]);
}

#[test]
fn load_parses_a_measurement_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "window=1000\nngram=3\n#emails=52487\n").unwrap();
    for i in 0..20 {
        writeln!(file, "{}", 0.5 + f64::from(i) * 0.02).unwrap();
    }

    let out = outfile::load(file.path()).unwrap();
    assert_eq!(out.props.get("window"), Some(&1000));
    assert_eq!(out.props.get("ngram"), Some(&3));
    assert_eq!(out.props.get("#emails"), Some(&52487));
    assert_eq!(out.samples.len(), 20);
    assert_eq!(out.samples[0], 0.5);
}

#[test]
fn load_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = outfile::load(dir.path().join("no-such.out")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn load_aborts_on_first_bad_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a=1\nabc\n2.5\n").unwrap();

    let err = outfile::load(file.path()).unwrap_err();
    assert!(matches!(err, ParseError::Sample { line_no: 2, .. }));
}
