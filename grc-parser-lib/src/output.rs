// Output formatting for parse results.

use crate::types::*;

/// Render a parse as a one-line human-readable gloss.
///
/// Format:
///   Finite:     `γράφει → γράφω, present active indicative, 3rd singular`
///   Participle: `λύοντος → λύω, present active participle, masculine genitive`
///   Compound:   `... [κατα + λύω]`
///   Fuzzy:      `λύο ≈ λύω (inflection unknown)`
pub fn describe(parse: &VerbParse) -> String {
    let mut out = match (parse.tense, parse.voice, parse.mood) {
        (Some(t), Some(v), Some(m)) => format!(
            "{} → {}, {} {} {}",
            parse.surface,
            parse.lemma,
            tense_label(t),
            voice_label(v),
            mood_label(m)
        ),
        _ => format!("{} ≈ {} (inflection unknown)", parse.surface, parse.lemma),
    };

    if let Some(info) = parse.participle {
        out.push_str(&format!(
            ", {} {}",
            gender_label(info.gender),
            case_label(info.case)
        ));
    } else if let (Some(p), Some(n)) = (parse.person, parse.number) {
        out.push_str(&format!(", {} {}", person_label(p), number_label(n)));
    }

    if let Some(ref c) = parse.compound {
        out.push_str(&format!(" [{} + {}]", c.prefix, c.base_lemma));
    }
    if parse.irregular {
        out.push_str(" (irregular)");
    }
    if parse.contract {
        out.push_str(" (contract)");
    }
    out
}

fn tense_label(t: Tense) -> &'static str {
    match t {
        Tense::Present => "present",
        Tense::Imperfect => "imperfect",
        Tense::Future => "future",
        Tense::Aorist => "aorist",
        Tense::Perfect => "perfect",
        Tense::Pluperfect => "pluperfect",
    }
}

fn voice_label(v: Voice) -> &'static str {
    match v {
        Voice::Active => "active",
        Voice::Middle => "middle",
        Voice::Passive => "passive",
    }
}

fn mood_label(m: Mood) -> &'static str {
    match m {
        Mood::Indicative => "indicative",
        Mood::Subjunctive => "subjunctive",
        Mood::Optative => "optative",
        Mood::Imperative => "imperative",
        Mood::Infinitive => "infinitive",
        Mood::Participle => "participle",
    }
}

fn person_label(p: Person) -> &'static str {
    match p {
        Person::First => "1st",
        Person::Second => "2nd",
        Person::Third => "3rd",
    }
}

fn number_label(n: Number) -> &'static str {
    match n {
        Number::Singular => "singular",
        Number::Plural => "plural",
        Number::Dual => "dual",
    }
}

fn gender_label(g: Gender) -> &'static str {
    match g {
        Gender::Masculine => "masculine",
        Gender::Feminine => "feminine",
        Gender::Neuter => "neuter",
    }
}

fn case_label(c: Case) -> &'static str {
    match c {
        Case::Nominative => "nominative",
        Case::Genitive => "genitive",
        Case::Dative => "dative",
        Case::Accusative => "accusative",
        Case::Vocative => "vocative",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_finite() {
        let mut parse = VerbParse::bare("γράφει", "γράφω");
        parse.tense = Some(Tense::Present);
        parse.voice = Some(Voice::Active);
        parse.mood = Some(Mood::Indicative);
        parse.person = Some(Person::Third);
        parse.number = Some(Number::Singular);
        assert_eq!(
            describe(&parse),
            "γράφει → γράφω, present active indicative, 3rd singular"
        );
    }

    #[test]
    fn test_describe_compound() {
        let mut parse = VerbParse::bare("καταλύει", "καταλύω");
        parse.tense = Some(Tense::Present);
        parse.voice = Some(Voice::Active);
        parse.mood = Some(Mood::Indicative);
        parse.person = Some(Person::Third);
        parse.number = Some(Number::Singular);
        parse.compound = Some(Compound {
            prefix: "κατα".to_string(),
            base_lemma: "λύω".to_string(),
        });
        assert_eq!(
            describe(&parse),
            "καταλύει → καταλύω, present active indicative, 3rd singular [κατα + λύω]"
        );
    }

    #[test]
    fn test_describe_fuzzy() {
        let parse = VerbParse::bare("λύο", "λύω");
        assert_eq!(describe(&parse), "λύο ≈ λύω (inflection unknown)");
    }
}
