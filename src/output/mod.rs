//! Result presentation
//!
//! Renders normalized records as numbered text blocks or as one JSON
//! document. In JSON mode the banner and diagnostics go to the diagnostic
//! stream so that stdout stays parseable.

mod json;
mod text;

pub use json::write_json;
pub use text::{truncate_abstract, write_text, ELLIPSIS};

use crate::results::SearchResultRecord;
use std::io::Write;

/// Notice printed when there is nothing to render
pub const NO_RESULTS: &str = "未找到结果";

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What to print when a search yields no records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyResults {
    /// Print the "no results" notice, whatever the format
    #[default]
    Notice,
    /// In JSON mode, emit the document with an empty result list
    Json,
}

/// Writes search output to a result stream and a diagnostic stream
pub struct Presenter<O: Write, D: Write> {
    out: O,
    diag: D,
    format: OutputFormat,
    empty: EmptyResults,
    abstract_max_chars: usize,
}

impl<O: Write, D: Write> Presenter<O, D> {
    pub fn new(out: O, diag: D, format: OutputFormat) -> Self {
        Self {
            out,
            diag,
            format,
            empty: EmptyResults::default(),
            abstract_max_chars: crate::ABSTRACT_MAX_CHARS,
        }
    }

    pub fn with_empty_results(mut self, empty: EmptyResults) -> Self {
        self.empty = empty;
        self
    }

    pub fn with_abstract_max_chars(mut self, max_chars: usize) -> Self {
        self.abstract_max_chars = max_chars;
        self
    }

    fn notice_stream(&mut self) -> &mut dyn Write {
        match self.format {
            OutputFormat::Text => &mut self.out,
            OutputFormat::Json => &mut self.diag,
        }
    }

    /// Announce the query before searching
    pub fn banner(&mut self, query: &str) -> anyhow::Result<()> {
        writeln!(self.notice_stream(), "🔍 搜索: {}\n", query)?;
        Ok(())
    }

    /// Report a failed search
    pub fn report_error(&mut self, error: &str) -> anyhow::Result<()> {
        writeln!(self.notice_stream(), "搜索出错: {}", error)?;
        Ok(())
    }

    /// Render the records, or the "no results" notice when there are none
    pub fn render(&mut self, query: &str, records: &[SearchResultRecord]) -> anyhow::Result<()> {
        let emit_empty_json = self.format == OutputFormat::Json && self.empty == EmptyResults::Json;

        if records.is_empty() && !emit_empty_json {
            writeln!(self.out, "{}", NO_RESULTS)?;
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => write_json(&mut self.out, query, records)?,
            OutputFormat::Text => write_text(&mut self.out, records, self.abstract_max_chars)?,
        }

        self.out.flush()?;
        Ok(())
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (O, D) {
        (self.out, self.diag)
    }
}
