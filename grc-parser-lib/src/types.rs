use serde::{Deserialize, Serialize};

/// Verb tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    Aorist,
    Perfect,
    Pluperfect,
}

/// Verb voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Middle,
    Passive,
}

/// Verb mood. Infinitives and participles carry no person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Optative,
    Imperative,
    Infinitive,
    Participle,
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
    Dual,
}

/// Grammatical gender (participles only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Grammatical case (participles only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Vocative,
}

/// Compound-verb decomposition: a preverb plus the base verb's lemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compound {
    pub prefix: String,
    pub base_lemma: String,
}

/// Gender and case of a matched participle form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipleInfo {
    pub gender: Gender,
    pub case: Case,
}

/// A resolved parse for one inflected surface form.
///
/// `tense`/`voice`/`mood` are None only on the fuzzy-fallback path, which
/// identifies a candidate lemma without recovering the inflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbParse {
    pub surface: String,
    pub lemma: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tense: Option<Tense>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    pub irregular: bool,
    pub contract: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound: Option<Compound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participle: Option<ParticipleInfo>,
}

impl VerbParse {
    /// A parse with everything unset except surface and lemma. Strategies
    /// fill in what they recover.
    pub(crate) fn bare(surface: &str, lemma: &str) -> Self {
        Self {
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            tense: None,
            voice: None,
            mood: None,
            person: None,
            number: None,
            irregular: false,
            contract: false,
            compound: None,
            participle: None,
        }
    }
}

/// One inflected-ending record within a paradigm cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndingRecord {
    pub form: String,
    #[serde(default)]
    pub person: Option<Person>,
    #[serde(default)]
    pub number: Option<Number>,
}

/// The endings attested for one {tense, mood, voice} combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflectionCell {
    pub tense: Tense,
    pub mood: Mood,
    pub voice: Voice,
    pub endings: Vec<EndingRecord>,
}

/// Participle case endings for one {voice, gender} combination. The list
/// index encodes case: two orthographic variants per case, in the case
/// order nominative, genitive, dative, accusative, vocative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipleTable {
    pub voice: Voice,
    pub gender: Gender,
    pub endings: Vec<String>,
}

/// One lemma's paradigm. Cells may be sparse; only attested combinations
/// are listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbEntry {
    pub lemma: String,
    pub irregular: bool,
    pub contract: bool,
    #[serde(default)]
    pub cells: Vec<InflectionCell>,
    #[serde(default)]
    pub participles: Vec<ParticipleTable>,
}

/// A known bare verb stem mapped back to its lemma (suppletive aorist
/// stems, lengthened contract stems).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemHint {
    pub stem: String,
    pub lemma: String,
}

/// Raw embedded data from build.rs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedData {
    pub verbs: Vec<VerbEntry>,
    pub prefixes: Vec<String>,
    pub stems: Vec<StemHint>,
}
