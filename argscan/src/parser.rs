use std::{collections::HashSet, ffi::OsString};

use tracing::{debug, trace};

use crate::{
    flag::{Kind, Scanned},
    Error, Flag, Result,
};

/// How a successful parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All tokens were consumed; the bound storage is filled in.
    Continue,
    /// A help flag was seen. Nothing but the help flag's `found` was touched.
    Help,
}

struct Parser {
    rargs: Vec<OsString>,
}

impl Parser {
    fn new(mut args: Vec<OsString>) -> Self {
        args.reverse();
        Parser { rargs: args }
    }

    fn next(&mut self) -> Option<OsString> {
        self.rargs.pop()
    }

    fn next_value(&mut self, flag: &str) -> Result<OsString> {
        self.next().ok_or_else(|| Error::MissingValue(flag.to_string()))
    }
}

/// Matches `args` (without the program name) against `flags`.
///
/// Tokens are scanned left to right. Values are converted as they are seen but
/// only written to the bound storage once the whole command line has been
/// accepted, so neither an error nor a help request leaves partial state
/// behind.
pub fn parse(args: Vec<OsString>, flags: &mut [&mut Flag<'_>]) -> Result<Outcome> {
    check_aliases(flags)?;

    let mut p = Parser::new(args);
    let mut seen = vec![false; flags.len()];
    let mut staged: Vec<(usize, Scanned)> = Vec::new();

    while let Some(arg) = p.next() {
        let token = arg.to_string_lossy().into_owned();
        let idx = match flags.iter().position(|flag| flag.matches(&token)) {
            Some(it) => it,
            None => return Err(Error::UnknownFlag(token)),
        };
        trace!(flag = %token, "matched");

        match flags[idx].kind() {
            Kind::Help => {
                debug!(flag = %token, "help requested");
                flags[idx].found = true;
                return Ok(Outcome::Help);
            }
            _ if seen[idx] => return Err(Error::Repeated(token)),
            Kind::Switch => (),
            Kind::Value => {
                let raw = p.next_value(&token)?;
                let value = flags[idx].scan(&token, raw)?;
                trace!(flag = %token, ?value, "scanned");
                staged.push((idx, value));
            }
        }
        seen[idx] = true;
    }

    let missing = flags.iter().zip(&seen).find(|(flag, seen)| flag.is_required() && !**seen);
    if let Some((flag, _)) = missing {
        return Err(Error::Required(flag.name().to_string()));
    }

    for (idx, value) in staged {
        flags[idx].store(value);
    }
    for (flag, seen) in flags.iter_mut().zip(seen) {
        if seen {
            flag.found = true;
        }
    }
    debug!(flags = flags.iter().filter(|it| it.found()).count(), "parsed");
    Ok(Outcome::Continue)
}

fn check_aliases(flags: &[&mut Flag<'_>]) -> Result<()> {
    let mut names = HashSet::new();
    for name in flags.iter().flat_map(|flag| flag.names()) {
        if !names.insert(*name) {
            return Err(Error::DuplicateAlias(name.to_string()));
        }
    }
    Ok(())
}
