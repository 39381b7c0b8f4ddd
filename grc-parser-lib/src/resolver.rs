// Ancient Greek verb-form resolver.
//
// Resolution is an ordered cascade of strategies; the first one that
// yields a parse wins:
//   1. Literal overrides (known problem forms)
//   2. Compound decomposition (preverb prefix + base verb)
//   3. Augmented aorist passive (ἐ- ... -θη-)
//   4. Exact paradigm scan (stem + ending reconstruction)
//   5. Contract-verb alternate spellings
//   6. Generic ending-pattern guess
//   7. Fuzzy lemma fallback (edit distance)
//
// Cheap, high-confidence exact matches run before expensive, low-confidence
// fuzzy ones.

use crate::lexicon::Lexicon;
use crate::types::*;

// ---------------------------------------------------------------------------
// Morphological constants
// ---------------------------------------------------------------------------

/// Citation forms end in ω; the inflectional stem is the lemma minus it.
const CITATION_SUFFIX: char = 'ω';

/// Past-tense augment prepended to indicative past forms.
const AUGMENT: char = 'ἐ';

/// Tense marker shared by all aorist passive indicative forms.
const AORIST_PASSIVE_MARKER: &str = "θη";

/// Sigmatic marker inserted between stem and ending in the aorist active.
const AORIST_ACTIVE_SIGMA: char = 'σ';

/// Moveable ν: third-person forms in -σι may carry a trailing ν.
const MOVABLE_NU: char = 'ν';

// Aorist passive personal endings, longest first so the plural -θησαν is
// tested before the singular -θη which is a substring of it.
const AORIST_PASSIVE_ENDINGS: &[(&str, Person, Number)] = &[
    ("θησαν", Person::Third, Number::Plural),
    ("θημεν", Person::First, Number::Plural),
    ("θητε", Person::Second, Number::Plural),
    ("θην", Person::First, Number::Singular),
    ("θης", Person::Second, Number::Singular),
    ("θη", Person::Third, Number::Singular),
];

// Contract verbs lengthen their stem vowel before the passive marker, so
// the derived stem no longer contains the citation stem. These stems are
// mapped back by hand.
const AORIST_PASSIVE_STEM_LEMMAS: &[(&str, &str)] = &[
    ("γεννή", "γεννάω"),
    ("ποιή", "ποιέω"),
    ("δηλώ", "δηλόω"),
    ("ἀγαπή", "ἀγαπάω"),
];

// Pre-contracted present indicative active forms by contraction class
// (stem-final vowel). The six person/number slots each.
const CONTRACT_ALPHA: &[(&str, Person, Number)] = &[
    ("ῶ", Person::First, Number::Singular),
    ("ᾷς", Person::Second, Number::Singular),
    ("ᾷ", Person::Third, Number::Singular),
    ("ῶμεν", Person::First, Number::Plural),
    ("ᾶτε", Person::Second, Number::Plural),
    ("ῶσι", Person::Third, Number::Plural),
];
const CONTRACT_EPSILON: &[(&str, Person, Number)] = &[
    ("ῶ", Person::First, Number::Singular),
    ("εῖς", Person::Second, Number::Singular),
    ("εῖ", Person::Third, Number::Singular),
    ("οῦμεν", Person::First, Number::Plural),
    ("εῖτε", Person::Second, Number::Plural),
    ("οῦσι", Person::Third, Number::Plural),
];
const CONTRACT_OMICRON: &[(&str, Person, Number)] = &[
    ("ῶ", Person::First, Number::Singular),
    ("οῖς", Person::Second, Number::Singular),
    ("οῖ", Person::Third, Number::Singular),
    ("οῦμεν", Person::First, Number::Plural),
    ("οῦτε", Person::Second, Number::Plural),
    ("ῶσι", Person::Third, Number::Plural),
];

/// Stem-final vowels that mark a guessed stem as a likely contract verb.
const CONTRACT_VOWELS: &[char] = &['α', 'ά', 'ε', 'έ', 'ο', 'ό'];

// Personal endings for the generic guess, longest/most specific first so a
// shorter ending never matches the tail of a longer one (-σεις before -εις,
// -εις before -ει).
const GENERIC_ENDINGS: &[(&str, Tense, Voice, Person, Number)] = &[
    ("ομεθα", Tense::Present, Voice::Middle, Person::First, Number::Plural),
    ("ονται", Tense::Present, Voice::Middle, Person::Third, Number::Plural),
    ("ουσιν", Tense::Present, Voice::Active, Person::Third, Number::Plural),
    ("σομεν", Tense::Future, Voice::Active, Person::First, Number::Plural),
    ("εσθε", Tense::Present, Voice::Middle, Person::Second, Number::Plural),
    ("ομαι", Tense::Present, Voice::Middle, Person::First, Number::Singular),
    ("εται", Tense::Present, Voice::Middle, Person::Third, Number::Singular),
    ("ουσι", Tense::Present, Voice::Active, Person::Third, Number::Plural),
    ("ομεν", Tense::Present, Voice::Active, Person::First, Number::Plural),
    ("σεις", Tense::Future, Voice::Active, Person::Second, Number::Singular),
    ("σει", Tense::Future, Voice::Active, Person::Third, Number::Singular),
    ("ετε", Tense::Present, Voice::Active, Person::Second, Number::Plural),
    ("εις", Tense::Present, Voice::Active, Person::Second, Number::Singular),
    ("ει", Tense::Present, Voice::Active, Person::Third, Number::Singular),
    ("σω", Tense::Future, Voice::Active, Person::First, Number::Singular),
    ("ω", Tense::Present, Voice::Active, Person::First, Number::Singular),
];

/// Participle ending lists encode case by index: two orthographic variants
/// per case, in this order.
const PARTICIPLE_CASES: &[Case] = &[
    Case::Nominative,
    Case::Genitive,
    Case::Dative,
    Case::Accusative,
    Case::Vocative,
];

/// Maximum edit distance accepted by the fuzzy fallback. Empirical; tune
/// against a corpus before changing.
pub const MAX_FUZZY_DISTANCE: usize = 3;

/// Lemmas whose length differs from the input by more than this are not
/// even measured. Empirical, as above.
pub const FUZZY_LENGTH_WINDOW: usize = 3;

// ---------------------------------------------------------------------------
// Literal overrides
// ---------------------------------------------------------------------------

struct OverrideForm {
    surface: &'static str,
    lemma: &'static str,
    prefix: &'static str,
    base_lemma: &'static str,
    tense: Tense,
    voice: Voice,
    mood: Mood,
    person: Person,
    number: Number,
}

// Compounds of ἔχω elide or re-accent the augment vowel, so literal prefix
// stripping leaves a remainder (έχει) that matches no paradigm stem (ἔχ-).
// These finitely many forms are matched verbatim before the cascade runs.
const OVERRIDES: &[OverrideForm] = &[
    OverrideForm {
        surface: "περιέχει",
        lemma: "περιέχω",
        prefix: "περι",
        base_lemma: "ἔχω",
        tense: Tense::Present,
        voice: Voice::Active,
        mood: Mood::Indicative,
        person: Person::Third,
        number: Number::Singular,
    },
    OverrideForm {
        surface: "κατέχει",
        lemma: "κατέχω",
        prefix: "κατα",
        base_lemma: "ἔχω",
        tense: Tense::Present,
        voice: Voice::Active,
        mood: Mood::Indicative,
        person: Person::Third,
        number: Number::Singular,
    },
    OverrideForm {
        surface: "ἀπέχει",
        lemma: "ἀπέχω",
        prefix: "ἀπο",
        base_lemma: "ἔχω",
        tense: Tense::Present,
        voice: Voice::Active,
        mood: Mood::Indicative,
        person: Person::Third,
        number: Number::Singular,
    },
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

type Strategy = fn(&str, &Lexicon) -> Option<VerbParse>;

/// The full cascade, in precedence order.
const STRATEGIES: &[Strategy] = &[
    resolve_override,
    resolve_compound,
    resolve_aorist_passive,
    resolve_paradigm,
    resolve_contract,
    resolve_ending_guess,
    resolve_fuzzy,
];

/// Strategies a compound remainder is allowed to use. Excludes compound
/// decomposition itself, bounding the recursion to one prefix layer, and
/// excludes the fuzzy fallback, which is meaningless on a bare remainder.
const BASE_STRATEGIES: &[Strategy] = &[
    resolve_aorist_passive,
    resolve_paradigm,
    resolve_contract,
];

/// Resolve an inflected verb surface form to its best-effort parse.
/// Returns None when nothing matches even approximately; empty input is
/// unparsable, not an error.
pub fn resolve(surface: &str, lex: &Lexicon) -> Option<VerbParse> {
    let word = surface.trim();
    if word.is_empty() {
        return None;
    }
    STRATEGIES.iter().find_map(|strategy| strategy(word, lex))
}

// ---------------------------------------------------------------------------
// Strategy 1: literal overrides
// ---------------------------------------------------------------------------

fn resolve_override(word: &str, lex: &Lexicon) -> Option<VerbParse> {
    let o = OVERRIDES.iter().find(|o| o.surface == word)?;
    let (irregular, contract) = entry_flags(lex, o.base_lemma);
    let mut parse = VerbParse::bare(word, o.lemma);
    parse.tense = Some(o.tense);
    parse.voice = Some(o.voice);
    parse.mood = Some(o.mood);
    parse.person = Some(o.person);
    parse.number = Some(o.number);
    parse.irregular = irregular;
    parse.contract = contract;
    parse.compound = Some(Compound {
        prefix: o.prefix.to_string(),
        base_lemma: o.base_lemma.to_string(),
    });
    Some(parse)
}

// ---------------------------------------------------------------------------
// Strategy 2: compound decomposition
// ---------------------------------------------------------------------------

fn resolve_compound(word: &str, lex: &Lexicon) -> Option<VerbParse> {
    for prefix in lex.prefixes() {
        let rest = match word.strip_prefix(prefix.as_str()) {
            Some(r) if !r.is_empty() => r,
            _ => continue,
        };

        // Resolve the remainder as a standalone base verb; a remainder
        // unknown to every table still gets the ending-only guess so
        // unlisted compounds are not dropped.
        let base = BASE_STRATEGIES
            .iter()
            .find_map(|strategy| strategy(rest, lex))
            .or_else(|| resolve_ending_guess(rest, lex));

        if let Some(base) = base {
            let mut parse = base.clone();
            parse.surface = word.to_string();
            parse.lemma = format!("{prefix}{}", base.lemma);
            parse.compound = Some(Compound {
                prefix: prefix.clone(),
                base_lemma: base.lemma,
            });
            return Some(parse);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Strategy 3: augmented aorist passive
// ---------------------------------------------------------------------------

fn resolve_aorist_passive(word: &str, lex: &Lexicon) -> Option<VerbParse> {
    let rest = word.strip_prefix(AUGMENT)?;
    if !rest.contains(AORIST_PASSIVE_MARKER) {
        return None;
    }

    for &(ending, person, number) in AORIST_PASSIVE_ENDINGS {
        let stem = match rest.strip_suffix(ending) {
            Some(s) if !s.is_empty() => s,
            _ => continue,
        };
        let lemma = aorist_passive_lemma(stem, lex);
        let (irregular, contract) = entry_flags(lex, &lemma);
        let mut parse = VerbParse::bare(word, &lemma);
        parse.tense = Some(Tense::Aorist);
        parse.voice = Some(Voice::Passive);
        parse.mood = Some(Mood::Indicative);
        parse.person = Some(person);
        parse.number = Some(number);
        parse.irregular = irregular;
        parse.contract = contract;
        return Some(parse);
    }
    None
}

/// Recover a lemma from an aorist passive stem: containment against
/// paradigm stems in either direction, then the hand-written stem table,
/// else synthesize stem + citation suffix.
fn aorist_passive_lemma(stem: &str, lex: &Lexicon) -> String {
    for verb in lex.verbs() {
        let pstem = citation_stem(&verb.lemma);
        if !pstem.is_empty() && (pstem.contains(stem) || stem.contains(pstem)) {
            return verb.lemma.clone();
        }
    }
    for &(known, lemma) in AORIST_PASSIVE_STEM_LEMMAS {
        if known == stem {
            return lemma.to_string();
        }
    }
    format!("{stem}{CITATION_SUFFIX}")
}

// ---------------------------------------------------------------------------
// Strategy 4: exact paradigm scan
// ---------------------------------------------------------------------------

fn resolve_paradigm(word: &str, lex: &Lexicon) -> Option<VerbParse> {
    for verb in lex.verbs() {
        let stem = citation_stem(&verb.lemma);
        if stem.is_empty() {
            continue;
        }

        for cell in &verb.cells {
            let sigmatic = cell.tense == Tense::Aorist && cell.voice == Voice::Active;
            for rec in &cell.endings {
                let candidate = if sigmatic {
                    format!("{stem}{AORIST_ACTIVE_SIGMA}{}", rec.form)
                } else {
                    format!("{stem}{}", rec.form)
                };
                if candidate == word {
                    let mut parse = VerbParse::bare(word, &verb.lemma);
                    parse.tense = Some(cell.tense);
                    parse.voice = Some(cell.voice);
                    parse.mood = Some(cell.mood);
                    parse.person = rec.person;
                    parse.number = rec.number;
                    parse.irregular = verb.irregular;
                    parse.contract = verb.contract;
                    return Some(parse);
                }
            }
        }

        for table in &verb.participles {
            for (i, ending) in table.endings.iter().enumerate() {
                if format!("{stem}{ending}") != word {
                    continue;
                }
                // Two variants per case; an index past the case list means
                // a malformed table and is skipped rather than reported.
                let case = match PARTICIPLE_CASES.get(i / 2) {
                    Some(&c) => c,
                    None => continue,
                };
                let mut parse = VerbParse::bare(word, &verb.lemma);
                parse.tense = Some(Tense::Present);
                parse.voice = Some(table.voice);
                parse.mood = Some(Mood::Participle);
                parse.irregular = verb.irregular;
                parse.contract = verb.contract;
                parse.participle = Some(ParticipleInfo {
                    gender: table.gender,
                    case,
                });
                return Some(parse);
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Strategy 5: contract-verb alternate spellings
// ---------------------------------------------------------------------------

fn resolve_contract(word: &str, lex: &Lexicon) -> Option<VerbParse> {
    for verb in lex.verbs() {
        if !verb.contract {
            continue;
        }
        let stem = citation_stem(&verb.lemma);
        let table = match stem.chars().last() {
            Some('α') | Some('ά') => CONTRACT_ALPHA,
            Some('ε') | Some('έ') => CONTRACT_EPSILON,
            Some('ο') | Some('ό') => CONTRACT_OMICRON,
            _ => continue,
        };
        let base = citation_stem(stem);

        for &(ending, person, number) in table {
            let candidate = format!("{base}{ending}");
            if equals_mod_movable_nu(word, &candidate) {
                let mut parse = VerbParse::bare(word, &verb.lemma);
                parse.tense = Some(Tense::Present);
                parse.voice = Some(Voice::Active);
                parse.mood = Some(Mood::Indicative);
                parse.person = Some(person);
                parse.number = Some(number);
                parse.irregular = verb.irregular;
                parse.contract = verb.contract;
                return Some(parse);
            }
        }
    }
    None
}

fn equals_mod_movable_nu(a: &str, b: &str) -> bool {
    a == b || a.strip_suffix(MOVABLE_NU) == Some(b) || b.strip_suffix(MOVABLE_NU) == Some(a)
}

// ---------------------------------------------------------------------------
// Strategy 6: generic ending-pattern guess
// ---------------------------------------------------------------------------

fn resolve_ending_guess(word: &str, lex: &Lexicon) -> Option<VerbParse> {
    for &(ending, tense, voice, person, number) in GENERIC_ENDINGS {
        let stem = match word.strip_suffix(ending) {
            Some(s) if !s.is_empty() => s,
            _ => continue,
        };

        // A known bare stem upgrades the guess to its listed lemma;
        // otherwise synthesize a citation form from the stem.
        let (lemma, irregular, contract) =
            match lex.stem_hints().iter().find(|h| h.stem == stem) {
                Some(hint) => {
                    let (irr, con) = entry_flags(lex, &hint.lemma);
                    (hint.lemma.clone(), irr, con)
                }
                None => {
                    let guessed_contract = stem
                        .chars()
                        .last()
                        .map_or(false, |c| CONTRACT_VOWELS.contains(&c));
                    (format!("{stem}{CITATION_SUFFIX}"), false, guessed_contract)
                }
            };

        let mut parse = VerbParse::bare(word, &lemma);
        parse.tense = Some(tense);
        parse.voice = Some(voice);
        parse.mood = Some(Mood::Indicative);
        parse.person = Some(person);
        parse.number = Some(number);
        parse.irregular = irregular;
        parse.contract = contract;
        return Some(parse);
    }
    None
}

// ---------------------------------------------------------------------------
// Strategy 7: fuzzy lemma fallback
// ---------------------------------------------------------------------------

fn resolve_fuzzy(word: &str, lex: &Lexicon) -> Option<VerbParse> {
    let word_len = word.chars().count();
    let mut best: Option<(usize, &VerbEntry)> = None;

    for verb in lex.verbs() {
        let lemma_len = verb.lemma.chars().count();
        if word_len.abs_diff(lemma_len) > FUZZY_LENGTH_WINDOW {
            continue;
        }
        let d = levenshtein(word, &verb.lemma);
        if best.map_or(true, |(bd, _)| d < bd) {
            best = Some((d, verb));
        }
    }

    let (distance, verb) = best?;
    if distance > MAX_FUZZY_DISTANCE {
        return None;
    }

    // Candidate lemma identified but the inflection is unknown; the
    // tense/voice/mood slots stay unset to signal that.
    let mut parse = VerbParse::bare(word, &verb.lemma);
    parse.irregular = verb.irregular;
    parse.contract = verb.contract;
    Some(parse)
}

/// Edit distance with unit-cost insertions, deletions, and substitutions.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let sub = prev[j] + usize::from(ca != cb);
            curr[j + 1] = sub.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// The inflectional stem of a citation form: the lemma minus its final
/// character.
fn citation_stem(lemma: &str) -> &str {
    match lemma.char_indices().last() {
        Some((i, _)) => &lemma[..i],
        None => "",
    }
}

fn entry_flags(lex: &Lexicon, lemma: &str) -> (bool, bool) {
    lex.lookup(lemma)
        .map(|e| (e.irregular, e.contract))
        .unwrap_or((false, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> Lexicon {
        Lexicon::new()
    }

    #[test]
    fn test_blank_input() {
        let l = lex();
        assert!(resolve("", &l).is_none());
        assert!(resolve("   ", &l).is_none());
    }

    #[test]
    fn test_present_third_singular() {
        let l = lex();
        let parse = resolve("γράφει", &l).expect("γράφει should parse");
        assert_eq!(parse.lemma, "γράφω");
        assert_eq!(parse.tense, Some(Tense::Present));
        assert_eq!(parse.voice, Some(Voice::Active));
        assert_eq!(parse.mood, Some(Mood::Indicative));
        assert_eq!(parse.person, Some(Person::Third));
        assert_eq!(parse.number, Some(Number::Singular));
        assert!(!parse.irregular);
        assert!(!parse.contract);
    }

    #[test]
    fn test_override_beats_compound() {
        let l = lex();
        let parse = resolve("περιέχει", &l).expect("περιέχει should parse");
        assert_eq!(parse.lemma, "περιέχω");
        let compound = parse.compound.expect("should decompose");
        assert_eq!(compound.prefix, "περι");
        assert_eq!(compound.base_lemma, "ἔχω");
        assert!(parse.irregular, "flags come from the base verb entry");
    }

    #[test]
    fn test_contract_alternate_spelling() {
        let l = lex();
        let parse = resolve("γεννᾷ", &l).expect("γεννᾷ should parse");
        assert_eq!(parse.lemma, "γεννάω");
        assert_eq!(parse.person, Some(Person::Third));
        assert_eq!(parse.number, Some(Number::Singular));
        assert!(parse.contract);
    }

    #[test]
    fn test_moveable_nu_tolerated() {
        let l = lex();
        let with_nu = resolve("γεννῶσιν", &l).expect("γεννῶσιν should parse");
        let without = resolve("γεννῶσι", &l).expect("γεννῶσι should parse");
        assert_eq!(with_nu.lemma, without.lemma);
        assert_eq!(with_nu.person, without.person);
        assert_eq!(with_nu.number, without.number);
    }

    #[test]
    fn test_ending_guess_synthesizes_lemma() {
        let l = lex();
        let parse = resolve("κωλύει", &l).expect("κωλύει should guess");
        assert_eq!(parse.lemma, "κωλύω");
        assert_eq!(parse.tense, Some(Tense::Present));
        assert_eq!(parse.person, Some(Person::Third));
    }

    #[test]
    fn test_stem_hint_upgrades_guess() {
        let l = lex();
        let parse = resolve("εἰπετε", &l).expect("εἰπετε should parse via stem hint");
        assert_eq!(parse.lemma, "λέγω");
        assert!(parse.irregular);
        assert_eq!(parse.person, Some(Person::Second));
        assert_eq!(parse.number, Some(Number::Plural));
    }

    #[test]
    fn test_fuzzy_has_no_inflection() {
        let l = lex();
        let parse = resolve("λύο", &l).expect("λύο is one edit from λύω");
        assert_eq!(parse.lemma, "λύω");
        assert_eq!(parse.tense, None);
        assert_eq!(parse.voice, None);
        assert_eq!(parse.mood, None);
    }

    #[test]
    fn test_fuzzy_rejects_distant_input() {
        let l = lex();
        assert!(resolve("ζζζζζζζζζζ", &l).is_none());
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("λύω", "λύω"), 0);
        assert_eq!(levenshtein("λύω", "λύο"), 1);
        assert_eq!(levenshtein("γράφω", "γεννάω"), 4);
        assert_eq!(levenshtein("abc", ""), 3);
    }
}
