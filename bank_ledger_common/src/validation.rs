use crate::errors::EMPTY_OWNER_NAME;

/// **Basic input validation for an owner's name**
///
/// Checks for:
/// - An empty string.
///
/// Returns `None` if the name is valid, or a reason why it isn't.
pub fn is_valid_name(owner_name: &str) -> Option<String> {
    if owner_name.trim().is_empty() {
        return Some(EMPTY_OWNER_NAME.to_string());
    }

    None
}
