use arcstr::ArcStr;

/// Condition on the part-of-speech tag of a single token.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub enum TagCondition {
    #[default]
    Any,
    /// The fine tag must be equal, e.g. `JJS`
    Exact(ArcStr),
    /// The tag must start with the given broad tag, e.g. `VB` matches `VBD` and `VBZ`
    Prefix(ArcStr),
}

impl TagCondition {
    pub fn exact(tag: impl Into<ArcStr>) -> Self {
        Self::Exact(tag.into())
    }

    pub fn prefix(tag: impl Into<ArcStr>) -> Self {
        Self::Prefix(tag.into())
    }

    pub fn accepts(&self, tag: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => tag == expected.as_str(),
            Self::Prefix(prefix) => tag.starts_with(prefix.as_str()),
        }
    }
}

/// Matches exactly one token.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct TokenPattern {
    pub tag: TagCondition,
    /// `None` accepts any lemma
    pub lemma: Option<ArcStr>,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Pattern {
    Token(TokenPattern),
    Sequence(Vec<Pattern>),
    Or(Vec<Pattern>),
    Optional(Box<Pattern>),
    Repeat {
        pattern: Box<Pattern>,
        min: u32,
        max: Option<u32>,
    },
}

impl Pattern {
    /// Any single token
    pub fn any() -> Self {
        Self::Token(TokenPattern::default())
    }

    pub fn lemma(lemma: impl Into<ArcStr>) -> Self {
        Self::Token(TokenPattern {
            tag: TagCondition::Any,
            lemma: Some(lemma.into()),
        })
    }

    pub fn lemma_tagged(lemma: impl Into<ArcStr>, tag: TagCondition) -> Self {
        Self::Token(TokenPattern {
            tag,
            lemma: Some(lemma.into()),
        })
    }

    pub fn tagged(tag: TagCondition) -> Self {
        Self::Token(TokenPattern { tag, lemma: None })
    }

    /// One untagged lemma token per whitespace-separated word.
    pub fn lemmas(phrase: &str) -> Self {
        Self::sequence(phrase.split_whitespace().map(Self::lemma))
    }

    pub fn sequence(patterns: impl IntoIterator<Item = Self>) -> Self {
        let mut output = vec![];
        for pattern in patterns {
            match pattern {
                Self::Sequence(mut inner) => output.append(&mut inner),
                pattern => output.push(pattern),
            }
        }

        if output.len() == 1 {
            output.pop().unwrap_or_else(|| Self::Sequence(vec![]))
        } else {
            Self::Sequence(output)
        }
    }

    pub fn or(patterns: impl IntoIterator<Item = Self>) -> Self {
        let mut output = vec![];
        for pattern in patterns {
            match pattern {
                Self::Or(mut inner) => output.append(&mut inner),
                pattern => output.push(pattern),
            }
        }

        if output.len() == 1 {
            output.pop().unwrap_or_else(|| Self::Or(vec![]))
        } else {
            Self::Or(output)
        }
    }

    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    pub fn repeat(self, min: u32, max: Option<u32>) -> Self {
        Self::Repeat {
            pattern: Box::new(self),
            min,
            max,
        }
    }

    /// Sequence `self` followed by `next`
    pub fn then(self, next: Self) -> Self {
        Self::sequence([self, next])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sequences_are_flattened() {
        let pattern = Pattern::lemmas("place of").then(Pattern::lemma("birth"));

        assert_eq!(
            pattern,
            Pattern::Sequence(vec![
                Pattern::lemma("place"),
                Pattern::lemma("of"),
                Pattern::lemma("birth"),
            ])
        );
    }

    #[test]
    fn single_word_phrase_is_a_token() {
        assert_eq!(Pattern::lemmas(" age "), Pattern::lemma("age"));
    }

    #[rstest::rstest]
    #[case::broad_tag(TagCondition::prefix("VB"), "VBD", true)]
    #[case::broad_tag_itself(TagCondition::prefix("VB"), "VB", true)]
    #[case::other_broad_tag(TagCondition::prefix("VB"), "NN", false)]
    #[case::fine_tag(TagCondition::exact("JJ"), "JJ", true)]
    #[case::finer_tag(TagCondition::exact("JJ"), "JJS", false)]
    #[case::any(TagCondition::Any, "CD", true)]
    fn tag_conditions(#[case] condition: TagCondition, #[case] tag: &str, #[case] accepted: bool) {
        assert_eq!(condition.accepts(tag), accepted);
    }
}
