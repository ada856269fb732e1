//! String utilities for the domain layer.

/// Longest stem [`file_stem`] returns, in bytes
const MAX_STEM_BYTES: usize = 100;

/// Derive a file stem from a topic query.
///
/// Lowercases the topic, joins whitespace-separated words with `_` and
/// drops path separators. An empty result becomes `"untitled"`.
///
/// Stems longer than 100 bytes are cut on a char boundary and suffixed
/// with `_{n}`, the char count of the full stem.
pub fn file_stem(topic: &str) -> String {
    let stem = topic
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !matches!(c, '/' | '\\' | ':' | '\0'))
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty() && word != "." && word != "..")
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        return "untitled".to_string();
    }
    if stem.len() <= MAX_STEM_BYTES {
        return stem;
    }

    let suffix = format!("_{}", stem.chars().count());
    let mut cut = MAX_STEM_BYTES - suffix.len();
    while !stem.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}{}", stem[..cut].trim_end_matches('_'), suffix)
}
