use std::fs;
use std::path::Path;

use plotter::errors::{ErrorKind, ParseError};
use plotter::matrix::Matrix;
use plotter::settings::Settings;

fn settings_in(dir: &Path, input: &str) -> Settings {
    let input_path = dir.join("out.txt");
    fs::write(&input_path, input).unwrap();
    Settings {
        input: input_path,
        output: dir.join("im.jpg"),
        show: false,
        ..Settings::default()
    }
}

fn kind(err: &failure::Error) -> &ErrorKind {
    err.downcast_ref::<ErrorKind>().expect("plotter error kind")
}

#[test]
fn square_matrix_produces_a_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path(), "1 2\n3 4\n");

    assert_eq!(
        Matrix::load(&settings.input).unwrap(),
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
    );

    plotter::run(&settings).unwrap();

    let written = fs::metadata(&settings.output).unwrap();
    assert!(written.len() > 0);
    let img = image::open(&settings.output).unwrap();
    assert_eq!((img.width(), img.height()), (800, 800));
}

#[test]
fn ragged_rows_abort_with_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path(), "1 2\n3\n");

    let err = plotter::run(&settings).unwrap_err();
    match kind(&err) {
        ErrorKind::Parse(ParseError::RaggedRow { line: 2, .. }) => {}
        other => panic!("expected a ragged row, got {:?}", other),
    }
    assert!(!settings.output.exists());
}

#[test]
fn missing_input_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Matrix::load(dir.path().join("absent.txt")).unwrap_err();
    match kind(&err) {
        ErrorKind::Parse(ParseError::Unreadable { cause, .. }) => {
            assert_eq!(cause.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected an unreadable file, got {:?}", other),
    }
}

#[test]
fn non_numeric_input_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path(), "1 2\nthree 4\n");
    match kind(&plotter::run(&settings).unwrap_err()) {
        ErrorKind::Parse(ParseError::InvalidNumber { token, .. }) => assert_eq!(token, "three"),
        other => panic!("expected an invalid number, got {:?}", other),
    }
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings_in(dir.path(), "1 2\n3 4\n");
    settings.output = dir.path().join("no").join("such").join("dir").join("im.jpg");

    match kind(&plotter::run(&settings).unwrap_err()) {
        ErrorKind::Io { .. } => {}
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn png_output_keeps_exact_levels() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings_in(dir.path(), "0 1\n");
    settings.output = dir.path().join("density.png");
    settings.dpi = 50;

    plotter::run(&settings).unwrap();

    let img = image::open(&settings.output).unwrap().to_luma8();
    assert_eq!(img.dimensions(), (400, 400));
    // 1x2 matrix: left half black, right half white, centred vertically
    assert_eq!(img.get_pixel(120, 200)[0], 0);
    assert_eq!(img.get_pixel(300, 200)[0], 255);
}

#[test]
fn invalid_settings_fail_before_reading_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings_in(dir.path(), "1 2\n3\n");
    settings.quality = 0;
    match kind(&plotter::run(&settings).unwrap_err()) {
        ErrorKind::InvalidSetting { key, .. } => assert_eq!(*key, "quality"),
        other => panic!("expected an invalid setting, got {:?}", other),
    }
}
