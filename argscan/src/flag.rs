use std::ffi::OsString;

use crate::{Error, Result};

/// One declared command line flag.
///
/// A flag is matched by exact equality of a command line token against any of
/// its `names`. Value-taking flags write into storage owned by the caller; the
/// flag only borrows it for the duration of the parse.
#[derive(Debug)]
pub struct Flag<'a> {
    names: &'a [&'a str],
    slot: Slot<'a>,
    value_name: &'a str,
    help: &'a str,
    required: bool,
    pub(crate) found: bool,
}

/// Where, and as what type, a flag's value goes.
#[derive(Debug)]
pub enum Slot<'a> {
    /// Presence only, no value token.
    Switch,
    /// Presence only; stops the parse with [`Outcome::Help`](crate::Outcome::Help).
    Help,
    /// A hexadecimal `u64`, with or without a `0x` prefix.
    Hex(&'a mut u64),
    /// A string of at most `capacity` bytes. Longer values are rejected.
    Text { buf: &'a mut String, capacity: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Switch,
    Help,
    Value,
}

/// A converted value waiting to be stored.
#[derive(Debug)]
pub(crate) enum Scanned {
    Hex(u64),
    Text(String),
}

impl<'a> Flag<'a> {
    pub fn new(names: &'a [&'a str], slot: Slot<'a>, value_name: &'a str, help: &'a str) -> Self {
        assert!(!names.is_empty(), "a flag needs at least one name");
        Flag { names, slot, value_name, help, required: false, found: false }
    }

    pub fn switch(names: &'a [&'a str], help: &'a str) -> Self {
        Flag::new(names, Slot::Switch, "", help)
    }

    pub fn help(names: &'a [&'a str], help: &'a str) -> Self {
        Flag::new(names, Slot::Help, "", help)
    }

    pub fn hex(
        names: &'a [&'a str],
        value_name: &'a str,
        value: &'a mut u64,
        help: &'a str,
    ) -> Self {
        Flag::new(names, Slot::Hex(value), value_name, help)
    }

    pub fn text(
        names: &'a [&'a str],
        value_name: &'a str,
        value: &'a mut String,
        capacity: usize,
        help: &'a str,
    ) -> Self {
        Flag::new(names, Slot::Text { buf: value, capacity }, value_name, help)
    }

    /// Makes the parse fail unless this flag is present.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn names(&self) -> &[&'a str] {
        self.names
    }

    /// The last declared name, by convention the long form.
    pub fn name(&self) -> &'a str {
        self.names[self.names.len() - 1]
    }

    pub fn value_name(&self) -> Option<&'a str> {
        match self.kind() {
            Kind::Value => Some(self.value_name),
            Kind::Switch | Kind::Help => None,
        }
    }

    pub fn help_text(&self) -> &'a str {
        self.help
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.names.contains(&token)
    }

    pub(crate) fn kind(&self) -> Kind {
        match self.slot {
            Slot::Switch => Kind::Switch,
            Slot::Help => Kind::Help,
            Slot::Hex(_) | Slot::Text { .. } => Kind::Value,
        }
    }

    /// Converts `raw` according to the slot without touching the storage.
    pub(crate) fn scan(&self, flag: &str, raw: OsString) -> Result<Scanned> {
        let raw = raw.into_string().map_err(|it| Error::InvalidValue {
            flag: flag.to_string(),
            value: it.to_string_lossy().into_owned(),
            reason: "invalid utf8".to_string(),
        })?;
        match &self.slot {
            Slot::Hex(_) => scan_hex(&raw).map(Scanned::Hex).map_err(|reason| {
                Error::InvalidValue { flag: flag.to_string(), value: raw.clone(), reason }
            }),
            Slot::Text { capacity, .. } => {
                if raw.len() > *capacity {
                    return Err(Error::CapacityExceeded {
                        flag: flag.to_string(),
                        capacity: *capacity,
                    });
                }
                Ok(Scanned::Text(raw))
            }
            Slot::Switch | Slot::Help => unreachable!("presence-only flags have no value"),
        }
    }

    pub(crate) fn store(&mut self, value: Scanned) {
        match (&mut self.slot, value) {
            (Slot::Hex(slot), Scanned::Hex(value)) => **slot = value,
            (Slot::Text { buf, .. }, Scanned::Text(value)) => **buf = value,
            (slot, value) => unreachable!("can't store {value:?} into {slot:?}"),
        }
    }
}

/// Hex digits only, after an optional `0x`. No sign, no whitespace.
fn scan_hex(raw: &str) -> Result<u64, String> {
    let digits = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")).unwrap_or(raw);
    if digits.is_empty() {
        return Err("no hex digits".to_string());
    }
    if !digits.bytes().all(|it| it.is_ascii_hexdigit()) {
        return Err("invalid digit found in string".to_string());
    }
    u64::from_str_radix(digits, 16).map_err(|err| err.to_string())
}
