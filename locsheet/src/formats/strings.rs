//! Support for Apple `.strings` localization files.
//!
//! Produces plain `"key" = "value";` lines without any header or comments.

use std::{io::Write, path::PathBuf};

use crate::{
    error::Error,
    formats::PlatformFormatter,
    projector::ProjectedRow,
    traits::Render,
    types::{Entry, Language, ResourceDocument},
};

const DOCUMENT_NAME: &str = "Localizable.strings";
const BASE_DIRECTORY: &str = "Base.lproj";

/// Escapes text for a double-quoted `.strings` literal.
///
/// Backslashes and quotes are escaped, newline, carriage return and tab become
/// `\n`, `\r` and `\t`, and everything outside ASCII becomes a lowercase
/// `\uXXXX` escape. Characters above U+FFFF are written as a UTF-16 surrogate
/// pair of two escapes. `None` yields an empty string.
pub fn escape_ios(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii() => escaped.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    escaped.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
    }
    escaped
}

/// Represents an Apple `.strings` localization file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub pairs: Vec<Pair>,
}

/// A single key-value pair in a `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// Already escaped.
    pub key: String,
    /// Already escaped.
    pub value: String,
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key, self.value)
    }
}

impl Render for Format {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let content = self
            .pairs
            .iter()
            .map(Pair::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        writer.write_all(content.as_bytes()).map_err(Error::Io)
    }
}

impl From<&ResourceDocument> for Format {
    fn from(document: &ResourceDocument) -> Self {
        Self {
            pairs: document
                .entries
                .iter()
                .map(|entry| Pair {
                    key: entry.key.clone(),
                    value: entry.text.clone(),
                })
                .collect(),
        }
    }
}

/// [`PlatformFormatter`] for iOS and macOS.
#[derive(Debug, Clone, Copy, Default)]
pub struct IosFormatter;

impl PlatformFormatter for IosFormatter {
    fn escape(&self, text: &str) -> String {
        escape_ios(Some(text))
    }

    fn entry(&self, row: &ProjectedRow) -> Entry {
        Entry {
            key: self.escape(&row.key),
            text: self.escape(&row.text),
            formatted_false: false,
        }
    }

    fn render(&self, document: &ResourceDocument) -> Result<String, Error> {
        Format::from(document).render_to_string()
    }

    fn document_path(&self, language: &Language) -> PathBuf {
        let directory = match language {
            Language::Base => BASE_DIRECTORY.to_string(),
            Language::Named(name) => format!("{}.lproj", name),
        };
        PathBuf::from(directory).join(DOCUMENT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn row(key: &str, text: &str) -> ProjectedRow {
        ProjectedRow {
            key: key.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_escape_none_is_empty() {
        assert_eq!(escape_ios(None), "");
    }

    #[test]
    fn test_escape_backslash_before_quote() {
        assert_eq!(escape_ios(Some(r#"C:\ "x""#)), r#"C:\\ \"x\""#);
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape_ios(Some("a\nb\rc\td")), r"a\nb\rc\td");
    }

    #[test]
    fn test_escape_non_ascii() {
        assert_eq!(escape_ios(Some("café")), r"caf\u00e9");
        assert_eq!(escape_ios(Some("日本")), r"\u65e5\u672c");
    }

    #[test]
    fn test_escape_beyond_bmp_uses_surrogate_pair() {
        assert_eq!(escape_ios(Some("😀")), r"\ud83d\ude00");
    }

    #[test]
    fn test_escape_leaves_ascii_alone() {
        let text = "Hello {name}, 100% @home? It's fine.";
        assert_eq!(escape_ios(Some(text)), text);
    }

    #[test]
    fn test_render_document() {
        let document = IosFormatter.document(
            &Language::Base,
            &[
                row("greeting", "Hello {name}"),
                row("quote", "Say \"hi\""),
                row("accent", "café"),
            ],
        );
        assert_eq!(
            IosFormatter.render(&document).unwrap(),
            indoc! {r#"
                "greeting" = "Hello {name}";
                "quote" = "Say \"hi\"";
                "accent" = "caf\u00e9";"#}
        );
    }

    #[test]
    fn test_render_empty_document() {
        let document = IosFormatter.document(&Language::Named("fr".to_string()), &[]);
        assert_eq!(IosFormatter.render(&document).unwrap(), "");
    }

    #[test]
    fn test_key_is_escaped_like_the_value() {
        let entry = IosFormatter.entry(&row("kü", "x"));
        assert_eq!(entry.key, r"k\u00fc");

        let document = IosFormatter.document(&Language::Base, &[row("say \"hi\"", "x")]);
        assert_eq!(
            IosFormatter.render(&document).unwrap(),
            r#""say \"hi\"" = "x";"#
        );
    }

    #[test]
    fn test_entry_never_sets_formatted_false() {
        let entry = IosFormatter.entry(&row("k", "{x}"));
        assert!(!entry.formatted_false);
    }
}
