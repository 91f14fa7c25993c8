//! Support for Android `strings.xml` resource files.
//!
//! Only singular `<string>` elements are produced. Text is escaped for the
//! Android resource compiler before it is written, so the XML writer receives
//! it verbatim.

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::{io::Write, path::PathBuf};

use crate::{
    error::Error,
    formats::PlatformFormatter,
    placeholder::needs_formatted_false,
    projector::ProjectedRow,
    traits::Render,
    types::{Entry, Language, ResourceDocument},
};

const DOCUMENT_NAME: &str = "strings.xml";
const INDENT: &str = "    ";

/// Escapes text for the body of an Android `<string>` element.
///
/// The steps run in a fixed order: XML entities first, then a leading `@` or
/// `?` (resource and style references), then quotes and newlines. `None`
/// yields an empty string. The transform is one-shot: escaping twice is not a
/// no-op.
pub fn escape_android(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    if escaped.starts_with('@') || escaped.starts_with('?') {
        escaped.insert(0, '\\');
    }

    escaped
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub strings: Vec<StringResource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringResource {
    pub name: String,
    /// Already escaped.
    pub value: String,
    pub formatted: Option<bool>,
}

impl Render for Format {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;

        for sr in &self.strings {
            xml_writer.write_event(Event::Text(BytesText::new(&format!("\n{INDENT}"))))?;

            let mut elem = BytesStart::new("string");
            elem.push_attribute(("name", sr.name.as_str()));
            if let Some(formatted) = sr.formatted {
                elem.push_attribute(("formatted", if formatted { "true" } else { "false" }));
            }

            xml_writer.write_event(Event::Start(elem))?;
            xml_writer.write_event(Event::Text(BytesText::from_escaped(sr.value.as_str())))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
        }

        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        Ok(())
    }
}

impl From<&ResourceDocument> for Format {
    fn from(document: &ResourceDocument) -> Self {
        Self {
            strings: document
                .entries
                .iter()
                .map(StringResource::from_entry)
                .collect(),
        }
    }
}

impl StringResource {
    fn from_entry(entry: &Entry) -> Self {
        StringResource {
            name: entry.key.clone(),
            value: entry.text.clone(),
            formatted: entry.formatted_false.then_some(false),
        }
    }
}

/// [`PlatformFormatter`] for Android.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidFormatter;

impl PlatformFormatter for AndroidFormatter {
    fn escape(&self, text: &str) -> String {
        escape_android(Some(text))
    }

    /// The attribute decision looks at the raw text, before escaping.
    fn entry(&self, row: &ProjectedRow) -> Entry {
        Entry {
            key: row.key.clone(),
            text: self.escape(&row.text),
            formatted_false: needs_formatted_false(&row.text),
        }
    }

    fn render(&self, document: &ResourceDocument) -> Result<String, Error> {
        Format::from(document).render_to_string()
    }

    fn document_path(&self, language: &Language) -> PathBuf {
        let directory = match language {
            Language::Base => "values".to_string(),
            Language::Named(name) => format!("values-{}", name),
        };
        PathBuf::from(directory).join(DOCUMENT_NAME)
    }
}
