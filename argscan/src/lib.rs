//! Declarative command line flags.
//!
//! A tool declares a fixed list of [`Flag`]s, each bound to storage the tool
//! owns, and hands them to [`parse`]. The parser marks which flags were seen,
//! converts their values into the bound storage and reports help requests and
//! errors. [`usage`] renders the flag list as aligned help text.
//!
//! ```
//! let mut index = 0u64;
//! let mut help = argscan::Flag::help(&["-h", "--help"], "Show this help message.");
//! let mut index_flag = argscan::Flag::hex(&["-i", "--index"], "index", &mut index, "Cell index.");
//!
//! let args = vec!["--index".into(), "ff".into()];
//! let outcome = argscan::parse(args, &mut [&mut help, &mut index_flag]).unwrap();
//! assert_eq!(outcome, argscan::Outcome::Continue);
//! assert!(index_flag.found());
//! assert_eq!(index, 0xff);
//! ```
mod flag;
mod parser;
mod usage;

use std::{path::Path, process};

pub use crate::{
    flag::{Flag, Slot},
    parser::{parse, Outcome},
    usage::usage,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a parse was rejected.
///
/// Every variant carries the command line token (or canonical flag name) it
/// refers to, so the message can be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown flag: `{0}`")]
    UnknownFlag(String),
    #[error("expected a value for `{0}`")]
    MissingValue(String),
    #[error("can't parse `{flag}`, {reason}: `{value}`")]
    InvalidValue { flag: String, value: String, reason: String },
    #[error("value for `{flag}` exceeds {capacity} bytes")]
    CapacityExceeded { flag: String, capacity: usize },
    #[error("flag specified more than once: `{0}`")]
    Repeated(String),
    #[error("flag is required: `{0}`")]
    Required(String),
    #[error("duplicate alias: `{0}`")]
    DuplicateAlias(String),
}

/// Parses the process arguments into `flags`, exiting on help or error.
///
/// Help goes to stdout with status 0. Errors go to stderr, followed by the
/// usage text, with status 1.
pub fn parse_or_exit(flags: &mut [&mut Flag<'_>], description: &str) {
    let mut args = std::env::args_os();
    let program = args
        .next()
        .map(|it| {
            Path::new(&it)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| it.to_string_lossy().into_owned())
        })
        .unwrap_or_default();

    match parse(args.collect(), flags) {
        Ok(Outcome::Continue) => (),
        Ok(Outcome::Help) => {
            print!("{}", usage(&program, description, flags));
            process::exit(0)
        }
        Err(err) => {
            eprintln!("{program}: {err}");
            eprint!("{}", usage(&program, description, flags));
            process::exit(1)
        }
    }
}
