//! Item domain types.
//!
//! An item is an opaque JSON object identified by its `id` field. This
//! module owns parsing, identifier validation, the item error taxonomy,
//! and the pure HTTP status mapping for those errors.

mod error;
mod http_mapping;
mod types;

pub use error::ItemError;
pub use http_mapping::item_error_to_status_code;
pub use types::Item;
