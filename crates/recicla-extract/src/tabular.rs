use tracing::debug;

use crate::error::ExtractError;

/// Delimiters considered when sniffing the header line, in order of preference.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Rendered in place of an empty field.
const MISSING_VALUE: &str = "NaN";

/// Parse delimited data and render every row as a plain-text table.
///
/// The first row is the header. The output carries a 0-based row index
/// column and right-aligns every column; nothing is truncated. Rows shorter
/// than the header are padded with missing values; longer rows are an
/// error. A header with no rows renders as an empty-table notice.
pub fn extract_tabular_summary(bytes: &[u8]) -> Result<String, ExtractError> {
    let delimiter = sniff_delimiter(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ExtractError::Tabular(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(ExtractError::Tabular(
            "No columns to parse from file".to_string(),
        ));
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::Tabular(e.to_string()))?;
        if record.len() > headers.len() {
            let line = record.position().map_or(0, |p| p.line());
            return Err(ExtractError::Tabular(format!(
                "Expected {} fields in line {line}, saw {}",
                headers.len(),
                record.len()
            )));
        }

        // Short rows are padded with missing values.
        let mut row: Vec<String> = record.iter().map(cell_text).collect();
        row.resize(headers.len(), MISSING_VALUE.to_string());
        rows.push(row);
    }

    debug!(
        columns = headers.len(),
        rows = rows.len(),
        delimiter = %char::from(delimiter),
        "parsed tabular data"
    );

    Ok(render_table(&headers, &rows))
}

fn cell_text(field: &str) -> String {
    if field.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        field.to_string()
    }
}

/// Pick the candidate delimiter that occurs most often on the header line.
fn sniff_delimiter(bytes: &[u8]) -> u8 {
    let header_line = bytes.split(|&b| b == b'\n').next().unwrap_or_default();

    let mut best = (b',', 0usize);
    for candidate in CANDIDATE_DELIMITERS {
        let count = header_line.iter().filter(|&&b| b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: []",
            headers.join(", ")
        );
    }

    let index_width = (rows.len() - 1).to_string().len();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);

    let mut header_line = " ".repeat(index_width);
    for (header, width) in headers.iter().zip(&widths) {
        header_line.push_str(&format!("  {header:>width$}"));
    }
    lines.push(header_line);

    for (index, row) in rows.iter().enumerate() {
        let mut line = format!("{index:<index_width$}");
        for (cell, width) in row.iter().zip(&widths) {
            line.push_str(&format!("  {cell:>width$}"));
        }
        lines.push(line);
    }

    lines.join("\n")
}
