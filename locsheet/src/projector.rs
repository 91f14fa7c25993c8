//! Selects the rows that go into one language's document.

use tracing::debug;

use crate::types::{Language, TranslationRow};

/// A key and its raw, unescaped text for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    pub key: String,
    pub text: String,
}

/// Projects `rows` onto `language`, keeping table order.
///
/// Comment rows never appear. The base pass keeps every other row, even with
/// blank text. A language pass drops rows whose cell is blank or missing.
pub fn project(rows: &[TranslationRow], language: &Language) -> Vec<ProjectedRow> {
    rows.iter()
        .filter(|row| !row.is_comment)
        .filter_map(|row| {
            let text = match (language, row.text(language)) {
                (Language::Base, text) => text.unwrap_or_default(),
                (Language::Named(_), Some(text)) if !text.trim().is_empty() => text,
                (Language::Named(_), _) => {
                    debug!(
                        language = %language,
                        key = row.key.as_str(),
                        line = row.line,
                        "blank translation skipped"
                    );
                    return None;
                }
            };
            Some(ProjectedRow {
                key: row.key.clone(),
                text: text.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TranslationTable;

    fn rows() -> Vec<TranslationRow> {
        let table = TranslationTable::from_rows([
            vec!["", "", "KEY", "BASE", "fr", "de"],
            vec!["", "", "hello", "Hello", "Bonjour", "Hallo"],
            vec!["//skip", "", "old", "Old", "Vieux", "Alt"],
            vec!["", "", "blank_fr", "Only base", "   ", "Nur Basis"],
            vec!["", "", "empty_base", "", "Vide", ""],
            vec!["", "", "no_de", "No German", "Pas d'allemand"],
        ]);
        let columns = table.language_columns().unwrap();
        table.translation_rows(&columns).unwrap()
    }

    fn keys(projected: &[ProjectedRow]) -> Vec<&str> {
        projected.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn test_base_pass_keeps_all_non_comment_rows() {
        let projected = project(&rows(), &Language::Base);
        assert_eq!(
            keys(&projected),
            vec!["hello", "blank_fr", "empty_base", "no_de"]
        );
        assert_eq!(projected[2].text, "");
    }

    #[test]
    fn test_language_pass_skips_blank_cells() {
        let projected = project(&rows(), &Language::Named("fr".to_string()));
        assert_eq!(keys(&projected), vec!["hello", "empty_base", "no_de"]);
        assert_eq!(projected[0].text, "Bonjour");
    }

    #[test]
    fn test_missing_cell_counts_as_blank() {
        let projected = project(&rows(), &Language::Named("de".to_string()));
        assert_eq!(keys(&projected), vec!["hello", "blank_fr"]);
    }

    #[test]
    fn test_comment_row_absent_everywhere() {
        for language in [
            Language::Base,
            Language::Named("fr".to_string()),
            Language::Named("de".to_string()),
        ] {
            assert!(!keys(&project(&rows(), &language)).contains(&"old"));
        }
    }
}
