//! On-disk context formats
//!
//! Each variant carries a fixed table: file extension, header template and
//! the content transform applied before JSON parsing.

use std::borrow::Cow;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::{Error, Result};

/// Line prefix treated as a comment in JSONC files.
pub const COMMENT_MARKER: &str = "//";

/// Timestamp layout used in the JSONC `Created:` header line.
pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Supported context file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContextFormat {
    /// Plain JSON, `.json`
    #[default]
    Json,
    /// JSON prefixed with `//` comment lines, `.jsonc`
    Jsonc,
}

impl ContextFormat {
    /// All formats in resolution priority order.
    pub const ALL: [ContextFormat; 2] = [ContextFormat::Json, ContextFormat::Jsonc];

    /// Lowercase identifier, also accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Jsonc => "jsonc",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        // Identifiers double as extensions
        self.as_str()
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Jsonc => "JSONC",
        }
    }

    /// File name for a context of this format.
    pub fn file_name(&self, name: &str) -> String {
        format!("{}.{}", name, self.extension())
    }

    /// Comma-separated list of format identifiers.
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Format implied by a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Comment header written in front of newly created contexts.
    ///
    /// Control characters in the name are escaped so the header stays on
    /// its three comment lines.
    pub fn header(&self, name: &str, created: DateTime<Local>) -> Option<String> {
        match self {
            Self::Json => None,
            Self::Jsonc => Some(format!(
                "{marker} opencode context: {name}\n{marker} Format: {format}\n{marker} Created: {created}\n",
                marker = COMMENT_MARKER,
                name = header_safe(name),
                format = self.display_name(),
                created = created.format(CREATED_FORMAT),
            )),
        }
    }

    /// Serialize a document for storage: optional header plus pretty JSON.
    pub fn render(&self, name: &str, document: &Value, created: DateTime<Local>) -> Result<Vec<u8>> {
        let body = occtx_fs::json::to_pretty_bytes(document)?;
        Ok(match self.header(name, created) {
            Some(header) => {
                let mut out = header.into_bytes();
                out.extend_from_slice(&body);
                out
            }
            None => body,
        })
    }

    /// Apply the format's content transform to raw file text.
    ///
    /// For JSONC this drops every line whose trimmed content starts with
    /// `//`. It is line-oriented, not a tokenizer: trailing comments stay in
    /// place, and any line beginning with `//` is dropped whatever it held.
    pub fn strip<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Self::Json => Cow::Borrowed(raw),
            Self::Jsonc => Cow::Owned(
                raw.split('\n')
                    .filter(|line| !line.trim().starts_with(COMMENT_MARKER))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        }
    }
}

fn header_safe(name: &str) -> Cow<'_, str> {
    if !name.chars().any(char::is_control) {
        return Cow::Borrowed(name);
    }
    Cow::Owned(
        name.chars()
            .map(|c| {
                if c.is_control() {
                    c.escape_default().to_string()
                } else {
                    c.to_string()
                }
            })
            .collect(),
    )
}

impl std::fmt::Display for ContextFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ContextFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::InvalidFormat {
                value: s.to_string(),
            })
    }
}
