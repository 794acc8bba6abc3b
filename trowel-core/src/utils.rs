//! String helpers for default class names.

/// Naive English plural of a class name (e.g., "Category" -> "Categories").
///
/// Covers the regular cases used for default page names; irregular nouns
/// get a plain `s`.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();

    if let Some(stem) = word.strip_suffix(['y', 'Y']) {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiouAEIOU".contains(c)) {
            return format!("{}ies", stem);
        }
    }

    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return format!("{}es", word);
    }

    if word.is_empty() {
        return String::new();
    }

    format!("{}s", word)
}
