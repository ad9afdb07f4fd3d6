pub mod extract;
pub mod init;
pub mod sync;
pub mod titles;

pub use extract::{extract, ExtractArgs};
pub use init::{init, InitArgs};
pub use sync::{sync, SyncArgs};
pub use titles::{titles, TitlesArgs};

use anyhow::{anyhow, Result};
use clippings_parser::{parse, TitleIndex};
use std::fs;
use std::path::Path;
use tracing::info;

/// Printed when the export file cannot be found
pub const NOT_CONNECTED: &str = "Kindle is not connected to your computer";

/// Parse a clippings file and group it by title.
///
/// Parse errors are rendered against the file's source and nothing is
/// returned for the records before the failure.
pub fn load_index(file_path: &Path) -> Result<TitleIndex> {
    let source = fs::read_to_string(file_path)?;

    let index = TitleIndex::try_from_results(parse(source.as_bytes())).map_err(|e| {
        use clippings_parser::error::pretty;
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        anyhow!("\n{}", pretty::format_error(&e, file_name, &source))
    })?;

    info!(
        "Loaded {} title(s) from {}",
        index.len(),
        file_path.display()
    );
    Ok(index)
}
