//! End-to-end conversion tests against real files.

use csv2geojson_core::{
    convert_file, convert_reader, ConvertError, ConvertOptions, CoordinatePolicy, HeaderMode,
    OutputNaming,
};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "Timestamp,IP,City,Region,Country,Latitude,Longitude";

fn write_input(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("failed to write input");
    path
}

fn read_json(path: &std::path::Path) -> Value {
    let text = fs::read_to_string(path).expect("output missing");
    serde_json::from_str(&text).expect("output is not JSON")
}

#[test]
fn converts_springfield_row() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "hosts.csv",
        &format!("{HEADER}\n2023-01-01T00:00:00Z,1.2.3.4,Springfield,IL,US,39.7817,-89.6501\n"),
    );
    let output = dir.path().join("hosts.geojson");

    let stats = convert_file(&input, &output, &ConvertOptions::default()).unwrap();
    assert_eq!(stats.rows_read, 1);
    assert_eq!(stats.features_written, 1);
    assert!(stats.header_skipped);

    let json = read_json(&output);
    let feature = serde_json::json!({
        "type": "Feature",
        "properties": {
            "Timestamp": "2023-01-01T00:00:00Z",
            "IP": "1.2.3.4",
            "City": "Springfield",
            "Region": "IL",
            "Country": "US"
        },
        "geometry": {"type": "Point", "coordinates": [-89.6501, 39.7817]}
    });
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"], Value::Array(vec![feature]));
}

#[test]
fn feature_count_and_order_follow_rows() {
    let body = format!(
        "{HEADER}\n\
         t1,10.0.0.1,Oslo,OS,NO,59.91,10.75\n\
         t2,10.0.0.2,Lima,LI,PE,-12.05,-77.04\n\
         t3,10.0.0.3,Perth,WA,AU,-31.95,115.86\n"
    );
    let (fc, stats) = convert_reader(body.as_bytes(), &ConvertOptions::default()).unwrap();

    assert_eq!(stats.features_written, 3);
    let ips: Vec<&str> = fc.features.iter().map(|f| f.properties.ip.as_str()).collect();
    assert_eq!(ips, ["10.0.0.1", "10.0.0.2", "10.0.0.3"]);

    let lima = fc.features[1].geometry.position();
    assert_eq!((lima.lon, lima.lat), (-77.04, -12.05));
}

#[test]
fn latin1_city_is_replaced_not_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.csv");
    let mut body = format!("{HEADER}\n").into_bytes();
    body.extend_from_slice(b"t,1.2.3.4,Z\xFCrich,ZH,CH,47.37,8.54\n");
    fs::write(&input, body).unwrap();
    let output = dir.path().join("latin1.geojson");

    let stats = convert_file(&input, &output, &ConvertOptions::default()).unwrap();
    assert_eq!(stats.features_written, 1);
    assert_eq!(stats.defaulted_coordinates, 0);

    let json = read_json(&output);
    assert_eq!(json["features"][0]["properties"]["City"], "Z\u{FFFD}rich");
    assert_eq!(
        json["features"][0]["geometry"]["coordinates"],
        serde_json::json!([8.54, 47.37])
    );
}

#[test]
fn keep_mode_turns_header_into_zeroed_feature() {
    let body = format!("{HEADER}\nt,1.1.1.1,Sydney,NSW,AU,-33.86,151.2\n");
    let opts = ConvertOptions::default().with_header(HeaderMode::Keep);

    let (fc, stats) = convert_reader(body.as_bytes(), &opts).unwrap();
    assert_eq!(fc.len(), 2);
    assert!(!stats.header_skipped);
    assert_eq!(stats.defaulted_coordinates, 2);
    assert_eq!(fc.features[0].properties.city, "City");
    let p = fc.features[0].geometry.position();
    assert_eq!((p.lon, p.lat), (0.0, 0.0));
}

#[test]
fn strict_mode_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "bad.csv",
        &format!("{HEADER}\nt,1.1.1.1,Nowhere,X,Y,not-a-number,1.0\n"),
    );
    let output = dir.path().join("bad.geojson");
    let opts = ConvertOptions::default().with_coordinates(CoordinatePolicy::Strict);

    let err = convert_file(&input, &output, &opts).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::InvalidCoordinate { line: 2, field: "latitude", .. }
    ));
    assert!(!output.exists());
}

#[test]
fn malformed_csv_produces_no_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ragged.csv", &format!("{HEADER}\na,b,c\n"));
    let output = dir.path().join("ragged.geojson");

    let err = convert_file(&input, &output, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Csv(_)));
    assert!(!output.exists());
}

#[test]
fn narrow_rows_fail_cleanly() {
    let body = "a,b,c,d,e\nt,1.1.1.1,City,R,C\n";
    let err = convert_reader(body.as_bytes(), &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::RowTooShort { line: 2, found: 5 }));
}

#[test]
fn missing_input_reports_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");
    let err = convert_file(&input, &dir.path().join("o.geojson"), &ConvertOptions::default())
        .unwrap_err();

    assert!(matches!(err, ConvertError::OpenInput { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn empty_file_fails_on_header() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "empty.csv", "");
    let output = dir.path().join("empty.geojson");

    let err = convert_file(&input, &output, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::MissingHeader));
    assert!(!output.exists());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "hosts.csv",
        &format!("{HEADER}\nt,8.8.8.8,Mountain View,CA,US,37.386,-122.0838\n"),
    );
    let first = dir.path().join("first.geojson");
    let second = dir.path().join("second.geojson");

    convert_file(&input, &first, &ConvertOptions::default()).unwrap();
    convert_file(&input, &second, &ConvertOptions::default()).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "hosts.csv", &format!("{HEADER}\n"));
    let output = dir.path().join("hosts.geojson");
    fs::write(&output, "stale contents that are longer than the new file").unwrap();

    convert_file(&input, &output, &ConvertOptions::default()).unwrap();
    let json = read_json(&output);
    assert_eq!(json["features"], Value::Array(vec![]));
}

#[test]
fn fixed_naming_resolves_constant_name() {
    let opts = ConvertOptions::default().with_naming(OutputNaming::fixed_default());
    assert_eq!(
        opts.naming.resolve(std::path::Path::new("hosts.csv")),
        std::path::PathBuf::from("output.geojson")
    );
}
