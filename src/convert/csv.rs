//! CSV export of item collections.
//!
//! Fixed column order matching the original export format; tags and links
//! are pipe-joined inside their cells. Rows are CRLF-terminated and quoted
//! only where needed.

use csv::{Terminator, WriterBuilder};

use crate::error::{KeySearchError, Result};
use crate::item::Item;

/// Column order of the export.
pub const COLUMNS: [&str; 9] = [
    "id",
    "title",
    "identity",
    "type",
    "tags",
    "links",
    "content",
    "createdAt",
    "updatedAt",
];

/// Serialize a collection as CSV with a header row.
pub fn export_csv(items: &[Item]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;

    for item in items {
        writer.write_record([
            item.id.as_str(),
            item.title.as_str(),
            item.identity.as_str(),
            item.kind.as_str(),
            item.tags.join("|").as_str(),
            item.links.join("|").as_str(),
            item.content.as_str(),
            item.created_at.as_str(),
            item.updated_at.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| KeySearchError::other(format!("CSV writer flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| KeySearchError::other(format!("invalid UTF-8: {e}")))
}
