//! Plain text rendering

use crate::results::SearchResultRecord;
use std::io::{self, Write};

/// Marker appended to a shortened abstract
pub const ELLIPSIS: &str = "...";

/// First `max_chars` characters of `text`, plus [`ELLIPSIS`] when anything
/// was cut. Counts characters, not bytes.
pub fn truncate_abstract(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

pub fn write_text<W: Write>(
    out: &mut W,
    records: &[SearchResultRecord],
    abstract_max_chars: usize,
) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "[{}] {}", i + 1, record.title)?;
        writeln!(out, "    链接: {}", record.url)?;
        if !record.abstract_text.is_empty() {
            writeln!(
                out,
                "    摘要: {}",
                truncate_abstract(&record.abstract_text, abstract_max_chars)
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}
