// Parses the paradigm XML data file and embeds it as JSON at compile time.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct EmbeddedData {
    verbs: Vec<VerbRaw>,
    prefixes: Vec<String>,
    stems: Vec<StemRaw>,
}

#[derive(Serialize)]
struct VerbRaw {
    lemma: String,
    irregular: bool,
    contract: bool,
    cells: Vec<CellRaw>,
    participles: Vec<ParticipleRaw>,
}

#[derive(Serialize)]
struct CellRaw {
    tense: String,
    mood: String,
    voice: String,
    endings: Vec<EndingRaw>,
}

#[derive(Serialize)]
struct EndingRaw {
    form: String,
    person: Option<String>,
    number: Option<String>,
}

#[derive(Serialize)]
struct ParticipleRaw {
    voice: String,
    gender: String,
    endings: Vec<String>,
}

#[derive(Serialize)]
struct StemRaw {
    stem: String,
    lemma: String,
}

fn main() {
    let data_path = Path::new("../data/paradigms.xml");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("lexicon.json");

    println!("cargo:rerun-if-changed={}", data_path.display());
    println!("cargo:rerun-if-changed=build.rs");

    let content = fs::read_to_string(data_path).expect("cannot read data/paradigms.xml");
    let data = parse_lexicon_xml(&content);

    let json = serde_json::to_string(&data).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write lexicon.json");
}

fn parse_lexicon_xml(xml: &str) -> EmbeddedData {
    let mut reader = Reader::from_str(xml);

    let mut verbs = Vec::new();
    let mut prefixes = Vec::new();
    let mut stems = Vec::new();

    let mut current_verb: Option<VerbRaw> = None;
    let mut current_cell: Option<CellRaw> = None;
    let mut current_participle: Option<ParticipleRaw> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"verb" => {
                    let lemma = attr(e, "lemma").unwrap_or_default();
                    // Entries without a lemma cannot be keyed; skip them.
                    if lemma.is_empty() {
                        current_verb = None;
                        continue;
                    }
                    current_verb = Some(VerbRaw {
                        lemma,
                        irregular: attr(e, "irregular").as_deref() == Some("true"),
                        contract: attr(e, "contract").as_deref() == Some("true"),
                        cells: Vec::new(),
                        participles: Vec::new(),
                    });
                }
                b"cell" => {
                    current_cell = Some(CellRaw {
                        tense: attr(e, "tense").unwrap_or_default(),
                        mood: attr(e, "mood").unwrap_or_default(),
                        voice: attr(e, "voice").unwrap_or_default(),
                        endings: Vec::new(),
                    });
                }
                b"participle" => {
                    current_participle = Some(ParticipleRaw {
                        voice: attr(e, "voice").unwrap_or_default(),
                        gender: attr(e, "gender").unwrap_or_default(),
                        endings: Vec::new(),
                    });
                }
                b"ending" => {
                    record_ending(e, &mut current_cell, &mut current_participle);
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"prefix" => {
                    if let Some(form) = attr(e, "form") {
                        if !form.is_empty() {
                            prefixes.push(form);
                        }
                    }
                }
                b"stem" => {
                    let form = attr(e, "form").unwrap_or_default();
                    let lemma = attr(e, "lemma").unwrap_or_default();
                    if !form.is_empty() && !lemma.is_empty() {
                        stems.push(StemRaw { stem: form, lemma });
                    }
                }
                b"ending" => {
                    record_ending(e, &mut current_cell, &mut current_participle);
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"cell" => {
                    if let (Some(cell), Some(verb)) = (current_cell.take(), current_verb.as_mut()) {
                        if !cell.endings.is_empty() {
                            verb.cells.push(cell);
                        }
                    }
                }
                b"participle" => {
                    if let (Some(part), Some(verb)) =
                        (current_participle.take(), current_verb.as_mut())
                    {
                        if !part.endings.is_empty() {
                            verb.participles.push(part);
                        }
                    }
                }
                b"verb" => {
                    if let Some(verb) = current_verb.take() {
                        verbs.push(verb);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parse error in paradigms.xml: {e}"),
            _ => {}
        }
    }

    EmbeddedData {
        verbs,
        prefixes,
        stems,
    }
}

/// Attach an <ending> element to whichever sub-table is currently open.
/// Participle endings are bare case forms; cell endings carry person/number.
fn record_ending(
    e: &BytesStart,
    current_cell: &mut Option<CellRaw>,
    current_participle: &mut Option<ParticipleRaw>,
) {
    let form = match attr(e, "form") {
        Some(f) if !f.is_empty() => f,
        _ => return,
    };
    if let Some(part) = current_participle.as_mut() {
        part.endings.push(form);
    } else if let Some(cell) = current_cell.as_mut() {
        cell.endings.push(EndingRaw {
            form,
            person: attr(e, "person"),
            number: attr(e, "number"),
        });
    }
}

fn attr(e: &BytesStart, name: &str) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name.as_bytes())
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}
