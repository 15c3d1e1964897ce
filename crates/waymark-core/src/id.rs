//! Record id generation.
//!
//! Earlier revisions of this application derived ids from the wall clock,
//! which is not unique across calls within the same millisecond. Ids are now
//! random v4 UUIDs rendered as strings; existing persisted numeric-string ids
//! remain valid since ids are opaque.

use uuid::Uuid;

/// Generate a fresh record id.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
