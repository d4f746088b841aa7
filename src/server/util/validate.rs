//! Field validation for task payloads.

use std::collections::BTreeMap;

/// Maximum number of characters allowed in a task title.
pub const TITLE_MAX_CHARS: usize = 100;

/// Records an error for `title` if it is missing, blank or too long.
pub fn required_title(value: Option<&str>, errors: &mut BTreeMap<String, String>) {
    match value {
        None => blank("title", "Title cannot be blank", errors),
        Some(title) if title.trim().is_empty() => blank("title", "Title cannot be blank", errors),
        Some(title) if title.chars().count() > TITLE_MAX_CHARS => {
            errors.insert(
                "title".to_string(),
                format!("Title must be less than {} characters", TITLE_MAX_CHARS),
            );
        }
        Some(_) => {}
    }
}

/// Records an error for `description` if it is missing or blank.
pub fn required_description(value: Option<&str>, errors: &mut BTreeMap<String, String>) {
    if value.map_or(true, |description| description.trim().is_empty()) {
        blank("description", "Description cannot be blank", errors);
    }
}

fn blank(field: &str, message: &str, errors: &mut BTreeMap<String, String>) {
    errors.insert(field.to_string(), message.to_string());
}
