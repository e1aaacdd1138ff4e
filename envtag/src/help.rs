//! Help text for the recognized environment variables.

use std::fmt;
use std::io::{self, Write};

use crate::field::DeclaredType;

/// One recognized environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// Normalized variable name, e.g. `MAX_RETRIES`
    pub name: String,
    /// Declared type of the bound field
    pub declared_type: DeclaredType,
    /// Default from the field's default tag, if one was declared
    pub default: Option<String>,
}

impl HelpEntry {
    /// Variable name the way a shell on this platform would spell it.
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

impl fmt::Display for HelpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default {
            Some(default) => writeln!(
                f,
                "  {} {}\n\t(default {})",
                self.display_name(),
                self.declared_type,
                quote(default)
            ),
            None => write!(f, "  {} {}\n\n", self.display_name(), self.declared_type),
        }
    }
}

/// `$NAME`, or `%NAME%` on Windows
pub fn display_name(name: &str) -> String {
    if cfg!(windows) {
        format!("%{name}%")
    } else {
        format!("${name}")
    }
}

/// Double-quote `value` for help output.
///
/// Control characters below `0x80` (including DEL) are written as `\xNN`
/// and other control characters as `\uNNNN`, with the usual short escapes
/// for `\n`, `\t` and friends. Printable text is kept as is.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c.is_control() && (c as u32) < 0x80 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Accumulated help entries, one per resolved field in resolution order.
///
/// Every resolution appends an entry, whatever its outcome, so resolving the
/// same struct twice lists each variable twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    entries: Vec<HelpEntry>,
}

impl Help {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HelpEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HelpEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Write the `Environment variables:` listing.
    pub fn write_defaults<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "Environment variables:")?;
        writeln!(out, "{self}")
    }

    /// Write `Usage` followed by the variable listing.
    pub fn write_usage<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "Usage")?;
        self.write_defaults(out)
    }

    /// Print the variable listing to stdout.
    pub fn print_defaults(&self) {
        print!("Environment variables:\n{self}\n");
    }

    /// Print the usage banner and variable listing to stdout.
    pub fn print_usage(&self) {
        println!("Usage");
        self.print_defaults();
    }
}

impl fmt::Display for Help {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
