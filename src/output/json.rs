//! JSON rendering

use crate::results::SearchResultRecord;
use serde::Serialize;
use std::io::Write;

/// Top-level JSON document
#[derive(Debug, Serialize)]
pub struct JsonResponse<'a> {
    pub web: WebResults<'a>,
    pub query: &'a str,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct WebResults<'a> {
    pub results: &'a [SearchResultRecord],
}

impl<'a> JsonResponse<'a> {
    pub fn new(query: &'a str, records: &'a [SearchResultRecord]) -> Self {
        Self {
            web: WebResults { results: records },
            query,
            total: records.len(),
        }
    }
}

/// Write the document pretty printed with two-space indentation.
/// Non-ASCII text is written as is, not `\u` escaped.
pub fn write_json<W: Write>(
    out: &mut W,
    query: &str,
    records: &[SearchResultRecord],
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonResponse::new(query, records))?;
    writeln!(out)?;
    Ok(())
}
