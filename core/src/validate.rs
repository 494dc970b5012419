//! Identifier checks run before a request path is built.

use crate::error::{Error, Result};

/// Characters that would split an identifier across path segments or end the
/// path. `%` is included because `%2e%2e` is a dot segment to URL parsers.
const RESERVED: &[char] = &['/', '\\', '?', '#', '%'];

/// Reject an identifier that is empty or cannot stand as one path segment.
///
/// Every service calls this for each identifier (parents first) before it
/// formats a path, so a request that cannot succeed never reaches the
/// transport. Whitespace-only values are rejected too, as are `.` and `..`,
/// which URL resolution would collapse into a parent path.
pub fn validate(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    if value == "." || value == ".." || value.contains(RESERVED) {
        return Err(Error::validation(field, "must be a single path segment"));
    }
    Ok(())
}
