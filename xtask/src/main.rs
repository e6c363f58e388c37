//! CI for the workspace: `cargo xtask` builds, tests, and runs each filter once.
use std::time::Instant;

use xshell::{cmd, Shell};

const CELL: &str = "8928308280fffff";

fn main() -> xshell::Result<()> {
    let sh = Shell::new()?;
    cmd!(sh, "cargo --version").run()?;

    {
        let _s = section("BUILD");
        cmd!(sh, "cargo build --workspace --all-targets").run()?;
    }

    {
        let _s = section("TEST");
        cmd!(sh, "cargo test --workspace -- --nocapture").run()?;
    }

    {
        let _s = section("SMOKE");
        for bin in ["h3-to-geo", "h3-to-geo-boundary"] {
            cmd!(sh, "cargo run -q --bin {bin} -- --help").run()?;
            let text = cmd!(sh, "cargo run -q --bin {bin}").stdin(format!("{CELL}\n")).read()?;
            let kml = cmd!(sh, "cargo run -q --bin {bin} -- --kml --index {CELL}").read()?;
            assert!(!text.is_empty(), "{bin} wrote nothing for {CELL}");
            assert!(kml.ends_with("</kml>"), "{bin} wrote an unterminated KML document");
        }
    }

    Ok(())
}

fn section(name: &'static str) -> impl Drop {
    println!("::group::{name}");
    let start = Instant::now();
    defer(move || {
        eprintln!("{name}: {:.2?}", start.elapsed());
        println!("::endgroup::");
    })
}

fn defer<F: FnOnce()>(f: F) -> impl Drop {
    struct D<F: FnOnce()>(Option<F>);
    impl<F: FnOnce()> Drop for D<F> {
        fn drop(&mut self) {
            if let Some(f) = self.0.take() {
                f()
            }
        }
    }
    D(Some(f))
}
