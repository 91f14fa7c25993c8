use std::path::PathBuf;

use locsheet::{
    CsvFileSource, Language, TableSource, TranslationRow, TranslationTable, projector::project,
};
use serde_json::json;

struct LanguageStats {
    name: String,
    column: usize,
    identifier: Option<String>,
    translated: usize,
}

struct TableStats {
    rows: usize,
    comments: usize,
    languages: Vec<LanguageStats>,
}

fn collect_stats(table: &TranslationTable) -> Result<TableStats, locsheet::Error> {
    let columns = table.language_columns()?;
    let rows: Vec<TranslationRow> = table.translation_rows(&columns)?;
    let comments = rows.iter().filter(|r| r.is_comment).count();

    let languages = columns
        .iter()
        .map(|column| LanguageStats {
            name: column.name.clone(),
            column: column.index + 1,
            identifier: column.language_identifier().map(|id| id.to_string()),
            translated: project(&rows, &Language::from(column)).len(),
        })
        .collect();

    Ok(TableStats {
        rows: rows.len() - comments,
        comments,
        languages,
    })
}

pub fn run_inspect_command(input: PathBuf, sheet: Option<String>, json_output: bool) {
    let source = CsvFileSource::for_sheet(&input, sheet.as_deref());
    let stats = match source.load().and_then(|table| collect_stats(&table)) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error reading {}: {}", source.describe(), e);
            std::process::exit(1);
        }
    };

    if json_output {
        let languages: Vec<_> = stats
            .languages
            .iter()
            .map(|l| {
                json!({
                    "name": l.name,
                    "column": l.column,
                    "identifier": l.identifier,
                    "translated": l.translated,
                    "missing": stats.rows - l.translated,
                })
            })
            .collect();
        let out = json!({
            "source": source.describe(),
            "rows": stats.rows,
            "comments": stats.comments,
            "languages": languages,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_else(|_| out.to_string())
        );
        return;
    }

    println!("Source: {}", source.describe());
    println!("Rows: {} ({} commented out)", stats.rows, stats.comments);
    if stats.languages.is_empty() {
        println!("Languages: base only");
        return;
    }
    println!("Languages:");
    for l in &stats.languages {
        let identifier = l
            .identifier
            .as_deref()
            .unwrap_or("unrecognized identifier");
        println!(
            "  {} (column {}, {}): {}/{} translated",
            l.name, l.column, identifier, l.translated, stats.rows
        );
    }
}
