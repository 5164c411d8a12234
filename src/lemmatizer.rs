//! Dictionary-free noun lemmatizer.
//!
//! Follows WordNet's noun morphology: irregular forms are looked up first,
//! then inflectional suffixes are detached. Without a dictionary to confirm
//! candidates, the detachment rules are guarded so that words which merely
//! look plural (`bus`, `analysis`, `glass`) are left alone.

/// Irregular plural → lemma.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wives", "wife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
];

/// Suffix detachment rules, tried in order; the first match wins.
const DETACHMENTS: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("ies", "y"),
    ("s", ""),
];

/// Endings that are never plural markers.
const PROTECTED_ENDINGS: &[&str] = &["ss", "us", "is"];

const MIN_LEMMA_LEN: usize = 3;

fn irregular(word: &str) -> Option<&'static str> {
    EXCEPTIONS
        .iter()
        .find(|(plural, _)| *plural == word)
        .map(|(_, lemma)| *lemma)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub const fn new() -> Self {
        Self
    }

    /// Lemma of a lowercase token. Unknown shapes are returned unchanged.
    pub fn lemmatize<'a>(&self, word: &'a str) -> std::borrow::Cow<'a, str> {
        use std::borrow::Cow;

        if let Some(lemma) = irregular(word) {
            return Cow::Borrowed(lemma);
        }

        if PROTECTED_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
            return Cow::Borrowed(word);
        }

        for (suffix, replacement) in DETACHMENTS {
            if let Some(stem) = word.strip_suffix(suffix) {
                let candidate_len = stem.chars().count() + replacement.len();
                if candidate_len < MIN_LEMMA_LEN {
                    return Cow::Borrowed(word);
                }
                let candidate = format!("{}{}", stem, replacement);
                return match irregular(&candidate) {
                    Some(lemma) => Cow::Borrowed(lemma),
                    None => Cow::Owned(candidate),
                };
            }
        }

        Cow::Borrowed(word)
    }
}
