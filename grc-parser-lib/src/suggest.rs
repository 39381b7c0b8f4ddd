// Autocomplete lookup over the lexicon. Convenience path, not
// correctness-critical: too-short or non-matching input yields an empty list.

use crate::lexicon::Lexicon;

/// Minimum partial length before any scan runs.
const MIN_PARTIAL_CHARS: usize = 2;

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 5;

/// Suggest up to five citation forms for a partial input. Matches
/// case-insensitive substrings against lemmas, known stems, and lemmas
/// reachable by stripping a preverb prefix from the partial (those come
/// back as the recombined compound citation form). Discovery order is
/// preserved; duplicates are not filtered beyond the natural scan order.
pub fn suggest(partial: &str, lex: &Lexicon) -> Vec<String> {
    let partial = partial.trim();
    if partial.chars().count() < MIN_PARTIAL_CHARS {
        return Vec::new();
    }
    let needle = partial.to_lowercase();
    let mut found = Vec::new();

    for verb in lex.verbs() {
        if verb.lemma.to_lowercase().contains(&needle) {
            found.push(verb.lemma.clone());
        }
    }

    for hint in lex.stem_hints() {
        if hint.stem.to_lowercase().contains(&needle) {
            found.push(hint.lemma.clone());
        }
    }

    for prefix in lex.prefixes() {
        let rest = match needle.strip_prefix(&prefix.to_lowercase()) {
            Some(r) if !r.is_empty() => r,
            _ => continue,
        };
        for verb in lex.verbs() {
            if verb.lemma.to_lowercase().contains(rest) {
                found.push(format!("{prefix}{}", verb.lemma));
            }
        }
    }

    found.truncate(MAX_SUGGESTIONS);
    found
}
