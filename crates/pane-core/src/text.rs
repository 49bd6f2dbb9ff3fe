//! Property value validation.

/// Error message shown when the description field is left blank.
pub const DESCRIPTION_REQUIRED: &str = "Please enter a description";

/// Validate the description property.
///
/// Returns `Some(message)` when the value is empty or whitespace-only, `None`
/// when it is acceptable. The message is what the property pane displays next
/// to the field.
pub fn validate_description(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(DESCRIPTION_REQUIRED.to_string())
    } else {
        None
    }
}
