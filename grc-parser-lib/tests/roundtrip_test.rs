// Table round-trip: every finite form the paradigm table can generate must
// resolve back to exactly the tuple that generated it.

use grc_parser_lib::types::{Tense, Voice};
use grc_parser_lib::{resolve, Lexicon};

fn lexicon() -> Lexicon {
    Lexicon::new()
}

fn stem_of(lemma: &str) -> String {
    let mut chars: Vec<char> = lemma.chars().collect();
    chars.pop();
    chars.into_iter().collect()
}

#[test]
fn every_finite_form_round_trips() {
    let lex = lexicon();
    let mut checked = 0;

    for verb in lex.verbs() {
        let stem = stem_of(&verb.lemma);
        for cell in &verb.cells {
            let sigmatic = cell.tense == Tense::Aorist && cell.voice == Voice::Active;
            for rec in &cell.endings {
                let surface = if sigmatic {
                    format!("{stem}σ{}", rec.form)
                } else {
                    format!("{stem}{}", rec.form)
                };

                let parse = resolve(&surface, &lex)
                    .unwrap_or_else(|| panic!("{surface} (from {}) did not parse", verb.lemma));

                assert_eq!(parse.lemma, verb.lemma, "lemma for {surface}");
                assert_eq!(parse.tense, Some(cell.tense), "tense for {surface}");
                assert_eq!(parse.voice, Some(cell.voice), "voice for {surface}");
                assert_eq!(parse.mood, Some(cell.mood), "mood for {surface}");
                assert_eq!(parse.person, rec.person, "person for {surface}");
                assert_eq!(parse.number, rec.number, "number for {surface}");
                assert_eq!(parse.irregular, verb.irregular, "irregular for {surface}");
                assert_eq!(parse.contract, verb.contract, "contract for {surface}");
                checked += 1;
            }
        }
    }

    assert!(checked > 100, "expected to round-trip many forms, got {checked}");
}

#[test]
fn compound_forms_round_trip() {
    let lex = lexicon();

    // prefix + base surface, where the base surface itself round-trips.
    for (surface, prefix, base_lemma) in [
        ("καταλύει", "κατα", "λύω"),
        ("ἀπολύει", "ἀπο", "λύω"),
        ("προσγράφετε", "προσ", "γράφω"),
    ] {
        let parse = resolve(surface, &lex).unwrap_or_else(|| panic!("{surface} did not parse"));
        let compound = parse
            .compound
            .unwrap_or_else(|| panic!("{surface} should decompose"));
        assert_eq!(compound.prefix, prefix);
        assert_eq!(compound.base_lemma, base_lemma);
        assert_eq!(parse.lemma, format!("{prefix}{base_lemma}"));
    }
}

#[test]
fn resolve_is_deterministic() {
    let lex = lexicon();
    for input in ["γράφει", "περιέχει", "ἐγεννήθη", "λύο", "κωλύει", "not-greek"] {
        assert_eq!(resolve(input, &lex), resolve(input, &lex), "{input}");
    }
}

#[test]
fn fuzzy_respects_distance_bound() {
    let lex = lexicon();

    // One edit away from λύω: accepted, with the inflection left unset.
    let near = resolve("λύο", &lex).expect("λύο should fuzzy-match");
    assert_eq!(near.lemma, "λύω");
    assert!(near.tense.is_none() && near.voice.is_none() && near.mood.is_none());

    // Further than three edits from every lemma: no parse at all.
    assert!(resolve("ζζζζζζζζζζ", &lex).is_none());
    assert!(resolve("qqqqqqqqqqqqqqqq", &lex).is_none());
}
