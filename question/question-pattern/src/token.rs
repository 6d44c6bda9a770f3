use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

/// A tagged word, as produced by the part-of-speech tagger.
///
/// Tokens compare by tag and lemma only, the surface word is carried along
/// for rendering literals.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    pub word: ArcStr,
    pub tag: ArcStr,
    pub lemma: ArcStr,
}

impl Token {
    pub fn new(word: impl Into<ArcStr>, tag: impl Into<ArcStr>, lemma: impl Into<ArcStr>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
            lemma: lemma.into(),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.lemma == other.lemma
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        self.lemma.hash(state);
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.word, self.tag, self.lemma)
    }
}
