use std::collections::HashMap;

use crate::types::{EmbeddedData, StemHint, VerbEntry};

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/lexicon.json"));

/// In-memory paradigm tables loaded once from compile-time embedded data.
/// Immutable after construction; safe to share across threads.
pub struct Lexicon {
    verbs: Vec<VerbEntry>,
    by_lemma: HashMap<String, usize>,
    /// Preverb prefixes, longest first so compound matching never peels a
    /// short prefix that is the head of a longer one.
    prefixes: Vec<String>,
    stems: Vec<StemHint>,
}

impl Lexicon {
    /// Load the lexicon from embedded JSON data.
    pub fn new() -> Self {
        let data: EmbeddedData =
            serde_json::from_slice(EMBEDDED_JSON).expect("embedded lexicon JSON is invalid");

        let mut by_lemma = HashMap::new();
        for (i, verb) in data.verbs.iter().enumerate() {
            by_lemma.entry(verb.lemma.clone()).or_insert(i);
        }

        let mut prefixes = data.prefixes;
        prefixes.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));

        Self {
            verbs: data.verbs,
            by_lemma,
            prefixes,
            stems: data.stems,
        }
    }

    /// Look up the paradigm entry for a lemma.
    pub fn lookup(&self, lemma: &str) -> Option<&VerbEntry> {
        self.by_lemma.get(lemma).map(|&i| &self.verbs[i])
    }

    /// Check whether a lemma has a paradigm entry.
    pub fn contains(&self, lemma: &str) -> bool {
        self.by_lemma.contains_key(lemma)
    }

    /// All paradigm entries, in data order.
    pub fn verbs(&self) -> &[VerbEntry] {
        &self.verbs
    }

    /// Preverb prefixes, longest first.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Known bare verb stems mapped to their lemmas.
    pub fn stem_hints(&self) -> &[StemHint] {
        &self.stems
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_loads() {
        let lex = Lexicon::new();
        assert!(lex.verbs().len() >= 10, "lexicon too small");
        assert!(!lex.prefixes().is_empty());
        assert!(!lex.stem_hints().is_empty());
    }

    #[test]
    fn test_lookup_luo() {
        let lex = Lexicon::new();
        let entry = lex.lookup("λύω").expect("λύω should be in the lexicon");
        assert!(!entry.irregular);
        assert!(!entry.contract);
        assert!(!entry.cells.is_empty());
        assert!(!entry.participles.is_empty());
    }

    #[test]
    fn test_lookup_nonexistent() {
        let lex = Lexicon::new();
        assert!(lex.lookup("τυγχάνω").is_none());
        assert!(!lex.contains("τυγχάνω"));
    }

    #[test]
    fn test_flags() {
        let lex = Lexicon::new();
        assert!(lex.lookup("ἔχω").expect("ἔχω").irregular);
        assert!(lex.lookup("γεννάω").expect("γεννάω").contract);
    }

    #[test]
    fn test_prefixes_longest_first() {
        let lex = Lexicon::new();
        let lens: Vec<usize> = lex.prefixes().iter().map(|p| p.chars().count()).collect();
        let mut sorted = lens.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lens, sorted, "prefixes must be ordered longest first");
    }

    #[test]
    fn test_stem_hint_for_suppletive_aorist() {
        let lex = Lexicon::new();
        let hint = lex
            .stem_hints()
            .iter()
            .find(|h| h.stem == "εἰπ")
            .expect("suppletive stem εἰπ should be listed");
        assert_eq!(hint.lemma, "λέγω");
    }
}
