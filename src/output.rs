//! Tag serialization: ctags lines, JSON and TOON
//!
//! TOON encoding goes through rtoon: tags are assembled into a JSON value
//! with stable field ordering and then encoded.

use rtoon::encode_default;
use serde_json::{json, Map, Value};

use crate::cli::OutputFormat;
use crate::error::{KtagsError, Result};
use crate::indexing::FileTags;
use crate::lang::KindDefinition;

const PROGRAM_NAME: &str = "ktags";

/// Render tagged files in the requested format
pub fn render(format: OutputFormat, files: &[FileTags]) -> Result<String> {
    match format {
        OutputFormat::Ctags => Ok(encode_ctags(files)),
        OutputFormat::Json => encode_json(files),
        OutputFormat::Toon => Ok(encode_toon(files)),
    }
}

/// Encode as a sorted ctags tag file with pseudo-tag header
pub fn encode_ctags(files: &[FileTags]) -> String {
    let mut lines: Vec<(&str, String, u64, char)> = files
        .iter()
        .flat_map(|file| {
            let path = file.path.display().to_string();
            file.tags
                .iter()
                .map(move |tag| (tag.name.as_str(), path.clone(), tag.line, tag.kind.letter()))
        })
        .collect();
    lines.sort();

    let mut output = String::new();
    output.push_str("!_TAG_FILE_FORMAT\t2\t/extended format/\n");
    output.push_str("!_TAG_FILE_SORTED\t1\t/0=unsorted, 1=sorted, 2=foldcase/\n");
    output.push_str(&format!("!_TAG_PROGRAM_NAME\t{}\t//\n", PROGRAM_NAME));
    output.push_str(&format!(
        "!_TAG_PROGRAM_VERSION\t{}\t//\n",
        env!("CARGO_PKG_VERSION")
    ));

    for (name, path, line, letter) in lines {
        output.push_str(&format!("{}\t{}\t{};\"\t{}\n", name, path, line, letter));
    }

    output
}

/// Encode as a pretty JSON array, one record per file
pub fn encode_json(files: &[FileTags]) -> Result<String> {
    serde_json::to_string_pretty(&files_value(files)).map_err(|e| KtagsError::Serialization {
        message: format!("JSON serialization failed: {}", e),
    })
}

/// Encode as TOON
pub fn encode_toon(files: &[FileTags]) -> String {
    let mut obj = Map::new();
    obj.insert("files".to_string(), files_value(files));
    obj.insert(
        "tags".to_string(),
        json!(files.iter().map(|f| f.tags.len()).sum::<usize>()),
    );

    let value = Value::Object(obj);
    encode_default(&value).unwrap_or_else(|e| format!("TOON encoding error: {}", e))
}

fn files_value(files: &[FileTags]) -> Value {
    let records: Vec<Value> = files
        .iter()
        .map(|file| {
            let tags: Vec<Value> = file
                .tags
                .iter()
                .map(|tag| {
                    json!({
                        "name": tag.name,
                        "kind": tag.kind,
                        "line": tag.line,
                        "position": tag.position,
                    })
                })
                .collect();
            json!({
                "file": file.path.display().to_string(),
                "language": file.lang.name(),
                "tags": tags,
            })
        })
        .collect();
    Value::Array(records)
}

/// Human-readable kind table for `--list-kinds`
pub fn format_kind_table(kinds: &[KindDefinition]) -> String {
    kinds
        .iter()
        .map(|k| {
            format!(
                "{}  {:<10} {:<12} [{}]\n",
                k.letter,
                k.name,
                k.description,
                if k.enabled { "on" } else { "off" }
            )
        })
        .collect()
}
