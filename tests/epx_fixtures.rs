//! Golden-output checks for the EPX scalers.
//!
//! Each case under `tests/data` lists an input image and the exact output
//! expected from the canonical rule tables with clamped edges.

use serde::Deserialize;
use spritexform::{scale, IndexedImage, ScaleConfig, ScaleFactor};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    case_id: String,
    file: String,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    cases: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct Case {
    factor: usize,
    input: Vec<Vec<u8>>,
    expected: Vec<Vec<u8>>,
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn load_case(file: &str) -> Case {
    let text = fs::read_to_string(data_dir().join(file)).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn factor_of(value: usize) -> ScaleFactor {
    match value {
        2 => ScaleFactor::X2,
        3 => ScaleFactor::X3,
        other => panic!("unsupported factor {other}"),
    }
}

#[test]
fn fixtures_match_expected_output() {
    let text = fs::read_to_string(data_dir().join("manifest.json")).unwrap();
    let manifest: Manifest = serde_json::from_str(&text).unwrap();
    assert!(!manifest.cases.is_empty());

    for entry in &manifest.cases {
        let case = load_case(&entry.file);
        let input = IndexedImage::from_rows(&case.input).unwrap();
        let expected = IndexedImage::from_rows(&case.expected).unwrap();
        let out = scale(&input, factor_of(case.factor), ScaleConfig::default());
        assert_eq!(out, expected, "case {}", entry.case_id);
    }
}

#[test]
fn diagonal_edge_advances_one_pixel_per_row_pair() {
    let case = load_case("scale2x_diagonal_4x4.json");
    let input = IndexedImage::from_rows(&case.input).unwrap();
    let out = scale(&input, ScaleFactor::X2, ScaleConfig::default());

    // Length of the leading run of the lower-left color in each output row.
    let runs: Vec<usize> = out
        .rows()
        .map(|row| row.iter().take_while(|&&c| c == 2).count())
        .collect();
    assert_eq!(runs, vec![0, 0, 1, 3, 3, 5, 5, 6]);
}
