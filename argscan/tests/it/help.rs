use argscan::{usage, Flag};
use expect_test::expect;

use crate::DESCRIPTION;

fn cell_usage() -> String {
    let (mut index, mut name, mut description) = (0, String::new(), String::new());
    usage(
        "h3-to-geo",
        DESCRIPTION,
        &[
            &mut Flag::help(&["-h", "--help"], "Show this help message."),
            &mut Flag::hex(
                &["-i", "--index"],
                "index",
                &mut index,
                "Index, or not specified to read indexes from standard in.",
            ),
            &mut Flag::switch(&["-k", "--kml"], "Print output in KML format."),
            &mut Flag::text(
                &["--kn", "--kml-name"],
                "name",
                &mut name,
                255,
                "Name of the KML file.",
            ),
            &mut Flag::text(
                &["--kd", "--kml-description"],
                "description",
                &mut description,
                255,
                "Description of the KML file.",
            ),
        ],
    )
}

#[test]
fn aligned() {
    expect![[r#"
        h3-to-geo: Converts indexes to latitude/longitude center coordinates in degrees

            -h, --help                             Show this help message.
            -i, --index <index>                    Index, or not specified to read indexes from standard in.
            -k, --kml                              Print output in KML format.
            --kn, --kml-name <name>                Name of the KML file.
            --kd, --kml-description <description>  Description of the KML file.
    "#]]
    .assert_eq(&cell_usage());
}

#[test]
fn idempotent() {
    assert_eq!(cell_usage(), cell_usage());
}

#[test]
fn required() {
    let mut index = 0;
    let text = usage(
        "prog",
        "Needs an index",
        &[
            &mut Flag::help(&["-h", "--help"], "Show this help message."),
            &mut Flag::hex(&["-i", "--index"], "index", &mut index, "Cell index.").required(),
        ],
    );
    expect![[r#"
        prog: Needs an index

            -h, --help           Show this help message.
            -i, --index <index>  Required. Cell index.
    "#]]
    .assert_eq(&text);
}
