//! String manipulation utilities

/// Pluralize an English noun based on count
///
/// Handles the consonant + `y` ending (`dependency` -> `dependencies`).
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        return word.to_string();
    }

    match word.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) && !stem.is_empty() => {
            format!("{stem}ies")
        }
        _ => format!("{word}s"),
    }
}
