use log::warn;
use std::mem::take;

use crate::error::RecipeasyError;
use crate::model::{fields, FieldValue, RecipeCollection, Record};

/// Split delimited text into rows of raw cells.
///
/// Handles quoted fields (which may contain the delimiter, `""` escapes and
/// line breaks) and both LF and CRLF line endings. Blank lines are skipped.
pub fn parse_rows(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            c if c == delimiter && !in_quotes => row.push(take(&mut field)),
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take(&mut field));
                if row.len() > 1 || !row[0].is_empty() {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline; unterminated quotes keep what was read.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Parse a delimited dataset with a header row into a recipe collection.
///
/// Cells are typed with [`FieldValue::parse_column_cell`]. Rows shorter than the
/// header leave the trailing fields absent; surplus cells are dropped.
pub fn parse_records(text: &str, delimiter: char) -> Result<RecipeCollection, RecipeasyError> {
    let mut rows = parse_rows(text, delimiter).into_iter();

    let header = rows
        .next()
        .ok_or_else(|| RecipeasyError::ParseError("dataset is empty".to_string()))?;
    let columns: Vec<String> = header.into_iter().map(|h| h.trim().to_string()).collect();

    if !columns.iter().any(|c| c == fields::NAME) {
        return Err(RecipeasyError::ParseError(format!(
            "no '{}' column in header ({})",
            fields::NAME,
            columns.join(", ")
        )));
    }

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        if row.len() > columns.len() {
            // +2: one for the header, one for 1-based line numbers
            warn!(
                "Row {} has {} cells but the header has {}; ignoring the surplus",
                index + 2,
                row.len(),
                columns.len()
            );
        }
        let record: Record = columns
            .iter()
            .zip(row.iter())
            .map(|(column, cell)| (column.as_str(), FieldValue::parse_column_cell(column, cell)))
            .collect();
        records.push(record);
    }

    Ok(RecipeCollection::new(columns, records))
}
