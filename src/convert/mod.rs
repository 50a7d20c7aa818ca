//! Import/export serialization for item collections.

pub mod csv;
pub mod json;

pub use self::csv::export_csv;
pub use self::json::{export_json, import_json};
