use std::collections::BTreeSet;

/// Words this short (in characters) carry no signal for overlap matching.
const MIN_WORD_CHARS: usize = 2;

/// Trim, lowercase and collapse whitespace runs to a single space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<String>>()
        .join(" ")
}

fn significant_words(normalized: &str) -> BTreeSet<&str> {
    normalized
        .split(' ')
        .filter(|word| word.chars().count() > MIN_WORD_CHARS)
        .collect()
}

/// Decide whether two free-text item names denote the same product.
///
/// Containment of one normalized name in the other is a match. Otherwise the
/// names match when their significant word sets share at least half of the
/// smaller set (and never fewer than one word).
pub fn soft_match(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a.contains(&b) || b.contains(&a) {
        return true;
    }

    let words_a = significant_words(&a);
    let words_b = significant_words(&b);
    if words_a.is_empty() || words_b.is_empty() {
        return false;
    }

    let shared = words_a.intersection(&words_b).count();
    let smaller = words_a.len().min(words_b.len());
    shared >= (smaller / 2).max(1)
}

/// Whether `name` soft-matches any of the candidates.
pub fn matches_any<S: AsRef<str>>(name: &str, candidates: &[S]) -> bool {
    candidates
        .iter()
        .any(|candidate| soft_match(name, candidate.as_ref()))
}
