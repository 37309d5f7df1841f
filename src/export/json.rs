//! Raw JSON export.

use std::io::Write;

use crate::error::ExportResult;
use crate::types::Work;

/// Write `works` as an indented JSON array in the import layout, so the output can be loaded
/// again. Unavailable records get the display title and author.
pub fn export_json<W: Write>(works: &[Work], mut writer: W) -> ExportResult<()> {
    let shown: Vec<Work> = works.iter().map(Work::for_display).collect();
    serde_json::to_writer_pretty(&mut writer, &shown)?;
    writer.flush()?;
    Ok(())
}
