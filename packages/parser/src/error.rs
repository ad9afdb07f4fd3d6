//! Error types for the clippings parser

use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Fatal parse error. Every variant except `Io` carries the 1-based line
/// number of the offending line in the source.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Line {line}: expected header `<title> (<attribution>)`, found {header:?}")]
    MissingTitleAttribution { line: usize, header: String },

    #[error(
        "Line {line}: expected metadata `- Your <Highlight|Bookmark|Note> ... | Added on <date>`, found {metadata:?}"
    )]
    MissingMetadata { line: usize, metadata: String },

    #[error("Line {line}: expected a blank line between metadata and body, found {actual:?}")]
    ExpectedBlankSeparator { line: usize, actual: String },

    #[error("Line {line}: unrecognized timestamp {raw:?}")]
    UnparseableTimestamp { line: usize, raw: String },

    #[error("Line {line}: record has {line_count} line(s), expected header, metadata and a blank line")]
    TruncatedRecord { line: usize, line_count: usize },

    #[error("Failed to read clippings: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub fn missing_title_attribution(line: usize, header: impl Into<String>) -> Self {
        Self::MissingTitleAttribution {
            line,
            header: header.into(),
        }
    }

    pub fn missing_metadata(line: usize, metadata: impl Into<String>) -> Self {
        Self::MissingMetadata {
            line,
            metadata: metadata.into(),
        }
    }

    pub fn expected_blank_separator(line: usize, actual: impl Into<String>) -> Self {
        Self::ExpectedBlankSeparator {
            line,
            actual: actual.into(),
        }
    }

    pub fn unparseable_timestamp(line: usize, raw: impl Into<String>) -> Self {
        Self::UnparseableTimestamp {
            line,
            raw: raw.into(),
        }
    }

    pub fn truncated_record(line: usize, line_count: usize) -> Self {
        Self::TruncatedRecord { line, line_count }
    }

    /// Source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MissingTitleAttribution { line, .. }
            | ParseError::MissingMetadata { line, .. }
            | ParseError::ExpectedBlankSeparator { line, .. }
            | ParseError::UnparseableTimestamp { line, .. }
            | ParseError::TruncatedRecord { line, .. } => Some(*line),
            ParseError::Io(_) => None,
        }
    }

    /// Short description of what the parser expected at the failing line.
    pub fn expected(&self) -> &'static str {
        match self {
            ParseError::MissingTitleAttribution { .. } => "header line `<title> (<attribution>)`",
            ParseError::MissingMetadata { .. } => {
                "metadata line `- Your <Highlight|Bookmark|Note> ... | Added on <date>`"
            }
            ParseError::ExpectedBlankSeparator { .. } => "blank line before the clipping body",
            ParseError::UnparseableTimestamp { .. } => {
                "timestamp like `Tuesday, May 1, 2018 10:14:32 PM`"
            }
            ParseError::TruncatedRecord { .. } => "header, metadata and blank line before `==========`",
            ParseError::Io(_) => "readable UTF-8 text",
        }
    }
}

#[cfg(feature = "pretty-errors")]
pub mod pretty {
    use super::ParseError;
    use ariadne::{Color, Label, Report, ReportKind, Source};
    use std::ops::Range;

    /// Pretty-print a parse error with the offending line of `source`
    pub fn format_error(error: &ParseError, filename: &str, source: &str) -> String {
        let Some(line) = error.line() else {
            return error.to_string();
        };
        let span = line_span(source, line);

        let mut output = Vec::new();
        let report = Report::build(ReportKind::Error, filename, span.start)
            .with_message(error.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_color(Color::Red)
                    .with_message(format!("expected {}", error.expected())),
            )
            .finish();

        if report
            .write((filename, Source::from(source)), &mut output)
            .is_err()
        {
            return error.to_string();
        }

        String::from_utf8(output).unwrap_or_else(|_| error.to_string())
    }

    /// Char range of the 1-based `line`, without its line ending.
    fn line_span(source: &str, line: usize) -> Range<usize> {
        let mut start = 0;
        for (index, text) in source.split_inclusive('\n').enumerate() {
            let len = text.chars().count();
            if index + 1 == line {
                let content = text.trim_end_matches(['\n', '\r']).chars().count();
                return start..start + content.max(1);
            }
            start += len;
        }
        let end = source.chars().count();
        end.saturating_sub(1)..end
    }

}
