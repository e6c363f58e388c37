use assert_cmd::Command;
use predicates::prelude::*;

fn h3_to_geo() -> Command {
    Command::cargo_bin("h3-to-geo").unwrap()
}

fn h3_to_geo_boundary() -> Command {
    Command::cargo_bin("h3-to-geo-boundary").unwrap()
}

#[test]
fn help() {
    for flag in ["-h", "--help"] {
        h3_to_geo()
            .args([flag, "--bogus"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Converts indexes to latitude/longitude center coordinates in degrees",
            ))
            .stdout(predicate::str::contains("--kd, --kml-description <description>"))
            .stderr("");
    }
}

#[test]
fn unknown_flag() {
    h3_to_geo()
        .arg("--bogus")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unknown flag: `--bogus`"))
        .stderr(predicate::str::contains("-i, --index <index>"));
}

#[test]
fn missing_value() {
    h3_to_geo()
        .arg("--index")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected a value for `--index`"));
}

#[test]
fn single_index() {
    h3_to_geo()
        .args(["--index", "8928308280fffff"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("37.77670"))
        .stdout(predicate::str::contains(" -122.41845"));
}

#[test]
fn stdin() {
    let assert = h3_to_geo()
        .write_stdin("8928308280fffff\nnot an index\n85283473fffffff\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping invalid H3 index"));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn kml_defaults() {
    h3_to_geo()
        .args(["--kml", "-i", "8928308280fffff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<name>geo from H3</name>"))
        .stdout(predicate::str::contains("<description>from h3ToGeo</description>"))
        .stdout(predicate::str::contains("<name>8928308280fffff</name>"))
        .stdout(predicate::str::ends_with("</kml>\n"));
}

#[test]
fn kml_names() {
    h3_to_geo_boundary()
        .args(["--kml", "--kml-name", "kml file", "--kd", "h3 <cells>"])
        .write_stdin("8928308280fffff\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<name>kml file</name>"))
        .stdout(predicate::str::contains("<description>h3 &lt;cells&gt;</description>"))
        .stdout(predicate::str::contains("<LineString>"));
}

#[test]
fn kml_name_too_long() {
    h3_to_geo()
        .args(["--kml", "--kml-name", "x".repeat(300).as_str()])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("value for `--kml-name` exceeds 255 bytes"));
}

#[test]
fn boundary_text() {
    h3_to_geo_boundary()
        .args(["-i", "8928308280fffff"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("8928308280fffff\n{\n   37.77"))
        .stdout(predicate::str::ends_with("}\n"));
}
