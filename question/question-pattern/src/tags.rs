use arcstr::{ArcStr, literal};
use serde::{Deserialize, Serialize};

use crate::{
    pattern::{Pattern, TagCondition},
    token::Token,
};

/// The tags and lemmas the ontology patterns are built from.
///
/// Defaults follow the Penn Treebank tag set.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSet {
    pub determiner: ArcStr,
    pub preposition: ArcStr,
    pub adjective: ArcStr,
    pub comparative_adjective: ArcStr,
    pub superlative_adjective: ArcStr,
    /// Broad tag, matched as a prefix
    pub verb: ArcStr,
    pub copula_lemma: ArcStr,
    pub comparison_lemma: ArcStr,
}

impl Default for TagSet {
    fn default() -> Self {
        Self {
            determiner: literal!("DT"),
            preposition: literal!("IN"),
            adjective: literal!("JJ"),
            comparative_adjective: literal!("JJR"),
            superlative_adjective: literal!("JJS"),
            verb: literal!("VB"),
            copula_lemma: literal!("be"),
            comparison_lemma: literal!("than"),
        }
    }
}

impl TagSet {
    pub fn is_determiner(&self, token: &Token) -> bool {
        token.tag == self.determiner
    }

    pub fn is_preposition(&self, token: &Token) -> bool {
        token.tag == self.preposition
    }

    /// Drop one leading determiner, if present
    pub fn strip_determiner<'t>(&self, tokens: &'t [Token]) -> &'t [Token] {
        match tokens.split_first() {
            Some((first, rest)) if self.is_determiner(first) => rest,
            _ => tokens,
        }
    }

    /// "be", as any verb form
    pub fn copula(&self) -> Pattern {
        Pattern::lemma_tagged(
            self.copula_lemma.clone(),
            TagCondition::Prefix(self.verb.clone()),
        )
    }

    pub fn adjective(&self, lemma: &ArcStr) -> Pattern {
        Pattern::lemma_tagged(lemma.clone(), TagCondition::Exact(self.adjective.clone()))
    }

    /// The comparative form of the adjective followed by "than"
    pub fn comparative_adjective(&self, lemma: &ArcStr) -> Pattern {
        Pattern::lemma_tagged(
            lemma.clone(),
            TagCondition::Exact(self.comparative_adjective.clone()),
        )
        .then(Pattern::lemma(self.comparison_lemma.clone()))
    }

    pub fn superlative_adjective(&self, lemma: &ArcStr) -> Pattern {
        Pattern::lemma_tagged(
            lemma.clone(),
            TagCondition::Exact(self.superlative_adjective.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_configuration_keeps_defaults() {
        let tags: TagSet = serde_json::from_str(r#"{ "determiner": "DET" }"#).unwrap();

        assert_eq!(tags.determiner, "DET");
        assert_eq!(tags.preposition, "IN");
        assert_eq!(tags.copula_lemma, "be");
    }

    #[test]
    fn strips_only_one_leading_determiner() {
        let tags = TagSet::default();
        let tokens = [
            Token::new("the", "DT", "the"),
            Token::new("the", "DT", "the"),
            Token::new("woman", "NN", "woman"),
        ];

        assert_eq!(tags.strip_determiner(&tokens).len(), 2);
        assert_eq!(tags.strip_determiner(&tokens[2..]).len(), 1);
        assert!(tags.strip_determiner(&[]).is_empty());
    }
}
