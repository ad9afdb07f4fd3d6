//! Output for extracted clippings: a display stream plus an optional clipboard.

use anyhow::Result;
use clippings_parser::Clipping;
use std::io::Write;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[cfg(not(feature = "clipboard"))]
    #[error("Clipboard support is not enabled in this build")]
    Disabled,
}

/// Destination for the copied text
pub trait Clipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// The desktop clipboard
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// Open the system clipboard if this build supports one.
#[cfg(feature = "clipboard")]
pub fn system_clipboard() -> Result<Box<dyn Clipboard>, ClipboardError> {
    Ok(Box::new(SystemClipboard::new()?))
}

#[cfg(not(feature = "clipboard"))]
pub fn system_clipboard() -> Result<Box<dyn Clipboard>, ClipboardError> {
    Err(ClipboardError::Disabled)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Each body followed by a blank line
    Text,
    /// One JSON array written on `finish`
    Json,
}

/// Writes selected clippings and counts them
pub struct ClippingSink<W: Write> {
    out: W,
    format: OutputFormat,
    clipboard: Option<Box<dyn Clipboard>>,
    count: usize,
    /// Bodies waiting for the clipboard; only filled when one is attached
    copied: Vec<String>,
    /// Clippings waiting for the JSON array; only filled in `Json` mode
    pending: Vec<Clipping>,
}

impl<W: Write> ClippingSink<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            clipboard: None,
            count: 0,
            copied: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn write(&mut self, clipping: &Clipping) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}\n", clipping.body)?,
            OutputFormat::Json => self.pending.push(clipping.clone()),
        }
        if self.clipboard.is_some() {
            self.copied.push(clipping.body.clone());
        }
        self.count += 1;
        Ok(())
    }

    /// Flush the output, fill the clipboard and return how many clippings were written.
    ///
    /// A clipboard failure is logged and does not fail the run.
    pub fn finish(mut self) -> Result<usize> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut self.out, &self.pending)?;
            writeln!(self.out)?;
        }
        self.out.flush()?;

        if let Some(clipboard) = self.clipboard.as_mut() {
            if !self.copied.is_empty() {
                match clipboard.set_text(self.copied.join("\n\n")) {
                    Ok(()) => info!("Copied {} clipping(s) to the clipboard", self.copied.len()),
                    Err(err) => warn!("Could not copy to clipboard: {}", err),
                }
            }
        }

        Ok(self.count)
    }
}
