//! Registry file parsing using the csv crate
//!
//! A registry file lists one name per row; only the first column is used,
//! so exports with extra columns (ids, notes) load unchanged.

use std::io::Cursor;

/// Error type for registry parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Registry parse error at line {}: {}", line, self.message),
            None => write!(f, "Registry parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse registry content into a list of names
///
/// Blank names are skipped and surrounding whitespace is trimmed. Duplicate
/// names (compared case-insensitively) keep their first occurrence.
pub fn parse_registry(content: &str) -> Result<Vec<String>, ParseError> {
    let cursor = Cursor::new(content.as_bytes());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(cursor);

    let mut names: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ParseError {
            message: e.to_string(),
            line: Some(line_num + 1),
        })?;

        let Some(name) = record.get(0).map(str::trim) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let folded = name.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        names.push(name.to_string());
    }

    Ok(names)
}
