//! Character-class patterns such as `a-z0-9_`.

use std::collections::BTreeSet;

/// Expands `pattern` into its sorted, deduplicated set of characters.
///
/// `x-y` denotes the inclusive range from `x` to `y`; a reversed range is
/// empty. A `-` that does not sit between two characters stands for itself.
///
/// # Examples
/// ```
/// use gauntlet_core::strings::parse_alphabet;
///
/// assert_eq!(parse_alphabet("c-ea"), vec!['a', 'c', 'd', 'e']);
/// assert_eq!(parse_alphabet("-ab"), vec!['-', 'a', 'b']);
/// ```
#[must_use]
pub fn parse_alphabet(pattern: &str) -> Vec<char> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut result = BTreeSet::new();
    let mut position = 0;
    while let Some(&current) = chars.get(position) {
        match (chars.get(position + 1), chars.get(position + 2)) {
            (Some('-'), Some(&end)) if current != '-' => {
                result.extend(current..=end);
                position += 3;
            }
            _ => {
                result.insert(current);
                position += 1;
            }
        }
    }
    result.into_iter().collect()
}
