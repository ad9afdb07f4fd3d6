use crate::clipping::{Clipping, ClippingKind};
use crate::error::{ParseError, ParseResult};
use crate::timestamp::parse_timestamp;
use std::io::{BufRead, Lines};
use std::iter::FusedIterator;
use std::mem::take;
use tracing::{debug, trace};

/// Line that terminates every record.
pub const SEPARATOR: &str = "==========";

const BOM: char = '\u{feff}';

/// Lazily parse clippings from `reader`.
///
/// The returned iterator yields one item per record with a non-empty body.
/// It stops for good after the first error.
pub fn parse<R: BufRead>(reader: R) -> Clippings<R> {
    Clippings::new(reader)
}

/// Parse a whole document held in memory.
pub fn parse_str(source: &str) -> ParseResult<Vec<Clipping>> {
    parse(source.as_bytes()).collect()
}

/// Streaming parser over a line source.
///
/// A record is accumulated line by line until the separator is read, then
/// validated and decoded. A body line equal to the separator ends the record
/// early; the export format has no way to escape it.
pub struct Clippings<R> {
    lines: Lines<R>,
    /// Lines consumed so far, which is also the 1-based number of the last line read.
    line: usize,
    record: Vec<String>,
    record_start: usize,
    first_record: bool,
    done: bool,
}

impl<R: BufRead> Clippings<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            record: Vec::new(),
            record_start: 1,
            first_record: true,
            done: false,
        }
    }

    /// Number of source lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn fail(&mut self, error: ParseError) -> Option<ParseResult<Clipping>> {
        self.done = true;
        Some(Err(error))
    }
}

impl<R: BufRead> Iterator for Clippings<R> {
    type Item = ParseResult<Clipping>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let Some(line) = self.lines.next() else {
                self.done = true;
                if !self.record.is_empty() {
                    debug!(
                        "Discarding {} trailing line(s) from line {} with no closing separator",
                        self.record.len(),
                        self.record_start
                    );
                }
                return None;
            };
            self.line += 1;

            let line = match line {
                Ok(line) => line,
                Err(err) => return self.fail(err.into()),
            };

            if line.trim() != SEPARATOR {
                if self.record.is_empty() {
                    self.record_start = self.line;
                }
                self.record.push(line.trim_end().to_string());
                continue;
            }

            let record = RawRecord {
                lines: take(&mut self.record),
                start: self.record_start,
                end: self.line,
                first: take(&mut self.first_record),
            };

            match record.decode() {
                Ok(Some(clipping)) => {
                    trace!("Parsed {} from line {}", clipping.kind, record.start);
                    return Some(Ok(clipping));
                }
                Ok(None) => {
                    debug!("Skipping record at line {} with an empty body", record.start);
                }
                Err(err) => return self.fail(err),
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Clippings<R> {}

/// Lines of one record, without the closing separator.
struct RawRecord {
    lines: Vec<String>,
    start: usize,
    /// Line number of the separator that closed this record.
    end: usize,
    /// Whether this is the first record of the input.
    first: bool,
}

impl RawRecord {
    /// Decode the record, or `Ok(None)` when its body is empty.
    fn decode(&self) -> ParseResult<Option<Clipping>> {
        if self.lines.len() < 3 {
            return Err(ParseError::truncated_record(self.end, self.lines.len()));
        }

        let header = parse_header(&self.lines[0], self.start)?;
        let metadata = parse_metadata(&self.lines[1], self.start + 1)?;

        let blank = &self.lines[2];
        if !blank.trim().is_empty() {
            return Err(ParseError::expected_blank_separator(self.start + 2, blank.as_str()));
        }

        let body = self.lines[3..].join("\n").trim().to_string();

        let timestamp = parse_timestamp(metadata.added_on)
            .ok_or_else(|| ParseError::unparseable_timestamp(self.start + 1, metadata.added_on))?;

        if body.is_empty() {
            return Ok(None);
        }

        let title = if self.first {
            header.title.strip_prefix(BOM).unwrap_or(header.title)
        } else {
            header.title
        };

        Ok(Some(Clipping {
            title: title.to_string(),
            attribution: header.attribution.to_string(),
            kind: metadata.kind,
            timestamp,
            body,
        }))
    }
}

/// Title and attribution from a header line.
#[derive(Debug, PartialEq)]
struct Header<'a> {
    title: &'a str,
    attribution: &'a str,
}

/// `<title> (<attribution>)`. The title ends at the first ` (` and the line
/// must end with `)`.
fn parse_header(text: &str, line: usize) -> ParseResult<Header<'_>> {
    let missing = || ParseError::missing_title_attribution(line, text);

    let inner = text.strip_suffix(')').ok_or_else(missing)?;
    let (title, attribution) = inner.split_once(" (").ok_or_else(missing)?;

    Ok(Header { title, attribution })
}

/// Kind and raw timestamp from a metadata line.
#[derive(Debug, PartialEq)]
struct Metadata<'a> {
    kind: ClippingKind,
    added_on: &'a str,
}

/// `- Your <kind> <anything> | Added on <timestamp>`
fn parse_metadata(text: &str, line: usize) -> ParseResult<Metadata<'_>> {
    let missing = || ParseError::missing_metadata(line, text);

    let rest = text.strip_prefix("- Your ").ok_or_else(missing)?;
    let (word, rest) = rest.split_once(' ').ok_or_else(missing)?;
    let kind = word.parse::<ClippingKind>().map_err(|_| missing())?;
    let (_, added_on) = rest.rsplit_once(" | Added on ").ok_or_else(missing)?;

    Ok(Metadata {
        kind,
        added_on: added_on.trim(),
    })
}
