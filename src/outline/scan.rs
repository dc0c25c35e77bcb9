//! Structural scanner
//!
//! One left-to-right pass over every character of every line. Tracks a
//! bracket depth counter (floored at zero, bracket kinds are not matched)
//! and classifies each line as a declaration, a key line, or plain text.

use std::sync::LazyLock;

use regex::Regex;

/// Leading identifier (letters, digits, underscore, dot) followed by `=`
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z0-9_.]+)\s*=").expect("valid key pattern"));

pub const OPEN_BRACKETS: [char; 4] = ['{', '[', '(', '<'];
pub const CLOSE_BRACKETS: [char; 4] = ['}', ']', ')', '>'];

/// A bracket seen during the scan (line is 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketEvent {
    pub ch: char,
    pub line: usize,
}

impl BracketEvent {
    pub fn is_open(&self) -> bool {
        OPEN_BRACKETS.contains(&self.ch)
    }
}

/// Classification of a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Reserved key assigned a quoted value, e.g. `_class = "Foo"`
    Declaration { key: String, value: String },
    /// `identifier = ...`
    Key { name: String },
    Plain,
}

/// Per-line scanner output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanLine {
    /// 1-based line number
    pub line: usize,
    pub class: LineClass,
    /// Live depth when the line starts (depth after the previous line)
    pub entry_depth: usize,
    /// Cumulative depth after processing this line
    pub depth: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub lines: Vec<ScanLine>,
    /// Every bracket in document order, for reconstructing the open/close stack
    pub brackets: Vec<BracketEvent>,
}

/// Line classifier bound to one reserved declaration key
#[derive(Debug, Clone)]
pub struct Scanner {
    declaration_key: String,
    declaration: Option<Regex>,
}

impl Scanner {
    pub fn new(declaration_key: &str) -> Self {
        // The key must not be the tail of a longer identifier (`my_class`)
        let pattern = format!(
            r#"(?:^|[^A-Za-z0-9_.]){}\s*=\s*"([^"]*)""#,
            regex::escape(declaration_key)
        );
        let declaration = match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                // Every line falls through to the key pattern
                tracing::warn!("Invalid declaration key {:?}: {}", declaration_key, e);
                None
            }
        };
        Self {
            declaration_key: declaration_key.to_string(),
            declaration,
        }
    }

    /// Value of a reserved-key declaration anywhere on the line
    pub fn declaration_value<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.declaration
            .as_ref()?
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Classify one line; the declaration pattern wins over the key pattern
    pub fn classify(&self, text: &str) -> LineClass {
        if let Some(value) = self.declaration_value(text) {
            return LineClass::Declaration {
                key: self.declaration_key.clone(),
                value: value.to_string(),
            };
        }

        if let Some(name) = KEY_PATTERN.captures(text).and_then(|caps| caps.get(1)) {
            return LineClass::Key {
                name: name.as_str().to_string(),
            };
        }

        LineClass::Plain
    }

    /// Scan all lines in order
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> ScanResult {
        let mut result = ScanResult {
            lines: Vec::with_capacity(lines.len()),
            brackets: Vec::new(),
        };
        let mut depth = 0usize;

        for (idx, text) in lines.iter().enumerate() {
            let text = text.as_ref();
            let line = idx + 1;
            let entry_depth = depth;

            for ch in text.chars() {
                if OPEN_BRACKETS.contains(&ch) {
                    depth += 1;
                    result.brackets.push(BracketEvent { ch, line });
                } else if CLOSE_BRACKETS.contains(&ch) {
                    depth = depth.saturating_sub(1);
                    result.brackets.push(BracketEvent { ch, line });
                }
            }

            result.lines.push(ScanLine {
                line,
                class: self.classify(text),
                entry_depth,
                depth,
            });
        }

        result
    }
}

/// Convenience wrapper: build a scanner for `declaration_key` and scan `lines`
pub fn scan_document<S: AsRef<str>>(lines: &[S], declaration_key: &str) -> ScanResult {
    Scanner::new(declaration_key).scan(lines)
}
