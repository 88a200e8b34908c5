//! Naming policy for generated identifiers.
//!
//! Accessor names are the field name with its first character uppercased and
//! nothing else changed. Interface names derive from the table name the
//! same way.

/// Uppercases the first character of `s`, leaving the rest untouched.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the entity name of an identifier: its last `/` segment.
#[must_use]
pub fn entity_name(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// Name of the reader interface for a table: `<Name>Reader`.
#[must_use]
pub fn reader_name(table_name: &str) -> String {
    format!("{}Reader", capitalize(table_name))
}

/// Name of the vector reader interface for a table: `Vector<Name>Reader`.
#[must_use]
pub fn vector_reader_name(table_name: &str) -> String {
    format!("Vector{}Reader", capitalize(table_name))
}

/// Returns true if `name` is a valid exported identifier once capitalized.
///
/// The first character must be a letter with an uppercase form, so the
/// capitalized name is exported; the rest letters, digits or `_`.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() && first.to_uppercase().all(char::is_uppercase) => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Converts a string to snake_case, keeping acronyms together.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            result.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}
