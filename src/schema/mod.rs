//! Schema name resolution for the documentation panel
//!
//! [`resolve_schema_name`] is a pure function of one line of text. The
//! [`SchemaTracker`] sits on top of it and reports a [`SchemaChange`] only
//! when the resolved name differs from the one currently displayed.

mod store;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

pub use store::{
    now_epoch_ms, FileSchemaStore, MemorySchemaStore, SchemaRecord, SchemaStore,
    SCHEMA_TTL_HOURS,
};

use crate::outline::Scanner;

/// Class names ending with this are schema names
const NAME_SUFFIXES: &[&str] = &["VData"];
/// Class name families used by the game's schema
const NAME_PREFIXES: &[&str] = &["CCitadel", "CAbility", "CModifier", "CNPC"];
const NAME_SUBSTRINGS: &[&str] = &["_VData"];

/// The schema currently shown in the documentation panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReference {
    pub name: String,
}

/// Whether a quoted string looks like a schema class name
pub fn is_schema_name(candidate: &str) -> bool {
    if candidate.is_empty()
        || !candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return false;
    }

    NAME_SUFFIXES.iter().any(|s| candidate.ends_with(s))
        || NAME_PREFIXES.iter().any(|p| candidate.starts_with(p))
        || NAME_SUBSTRINGS.iter().any(|s| candidate.contains(s))
}

/// Contents of every complete double-quoted string on the line
fn quoted_strings(line: &str) -> impl Iterator<Item = &str> {
    line.split('"').skip(1).step_by(2)
}

/// Resolve a documentation name from the text of one line
///
/// A reserved-key declaration wins; otherwise the first quoted string that
/// passes the naming allow-list.
pub fn resolve_schema_name(scanner: &Scanner, line: &str) -> Option<String> {
    if let Some(value) = scanner.declaration_value(line) {
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    let quote_count = line.matches('"').count();
    quoted_strings(line)
        .take(quote_count / 2)
        .find(|s| is_schema_name(s))
        .map(str::to_string)
}

/// Characters left as-is in a name segment; everything else is escaped,
/// including `&`, `=`, `+` and `/`
const NAME_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Documentation page for `name`: the base address plus one percent-encoded
/// path segment
pub fn doc_url(base: &str, name: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(base)?;
    if url.cannot_be_a_base() {
        anyhow::bail!("Documentation base {} cannot take a path", base);
    }
    let path = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        utf8_percent_encode(name, NAME_SEGMENT)
    );
    url.set_path(&path);
    Ok(url)
}

/// A newly selected schema name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaChange {
    pub name: String,
}

/// Remembers the displayed schema so repeated cursor moves are no-ops
#[derive(Debug, Clone, Default)]
pub struct SchemaTracker {
    current: Option<SchemaReference>,
}

impl SchemaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from storage; stale records leave nothing selected
    pub fn restore(&mut self, record: Option<SchemaRecord>, now_ms: u64, ttl_hours: u64) {
        self.current = record
            .filter(|r| r.is_fresh(now_ms, ttl_hours))
            .map(|r| SchemaReference { name: r.name });
    }

    pub fn current(&self) -> Option<&SchemaReference> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Resolve `line` and report a change if it selects a different schema
    pub fn observe(&mut self, scanner: &Scanner, line: &str) -> Option<SchemaChange> {
        let name = resolve_schema_name(scanner, line)?;
        if self.current.as_ref().is_some_and(|c| c.name == name) {
            return None;
        }

        tracing::debug!("Schema changed to {}", name);
        self.current = Some(SchemaReference { name: name.clone() });
        Some(SchemaChange { name })
    }
}
