use std::hash::Hash;

use indexmap::IndexSet;
use regex_automata::{Input, MatchKind, PatternSet, meta::Regex};
use tracing::{debug, trace};

use crate::{
    error::PatternError,
    pattern::Pattern,
    regex_util::{encode_tokens, regex_source, token_count},
    token::Token,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatchMode {
    /// A pattern must cover the whole token span
    Full,
    /// A pattern may cover any leading part of the token span
    Prefix,
}

/// A matched result together with the number of tokens the pattern covered.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TokenMatch<R> {
    pub result: R,
    pub length: usize,
}

/// A set of compiled patterns, each associated with a result value.
///
/// All patterns are tested in one pass over the encoded token span.
/// Results are reported in declaration order, without duplicates.
#[derive(Debug)]
pub struct TokenMatcher<R> {
    mode: MatchMode,
    /// `None` when no patterns were compiled
    set: Option<Regex>,
    /// One leftmost-first regex per pattern, for measuring prefix lengths
    prefix_regexes: Vec<Regex>,
    results: Vec<R>,
}

impl<R> TokenMatcher<R>
where
    R: Clone + Eq + Hash,
{
    pub fn compile(
        entries: impl IntoIterator<Item = (Pattern, R)>,
        mode: MatchMode,
    ) -> Result<Self, PatternError> {
        let (sources, results): (Vec<String>, Vec<R>) = entries
            .into_iter()
            .map(|(pattern, result)| (regex_source(&pattern, mode), result))
            .unzip();

        if sources.is_empty() {
            return Ok(Self {
                mode,
                set: None,
                prefix_regexes: vec![],
                results,
            });
        }

        let set = Regex::builder()
            .configure(Regex::config().match_kind(MatchKind::All))
            .build_many(sources.as_slice())?;

        let prefix_regexes = match mode {
            MatchMode::Full => vec![],
            MatchMode::Prefix => sources
                .iter()
                .map(|source| Regex::new(source))
                .collect::<Result<_, _>>()?,
        };

        debug!(patterns = results.len(), ?mode, "compiled token matcher");

        Ok(Self {
            mode,
            set: Some(set),
            prefix_regexes,
            results,
        })
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Every result whose pattern matches `tokens`, with the matched length.
    pub fn matches(&self, tokens: &[Token]) -> IndexSet<TokenMatch<R>> {
        let Some(set) = &self.set else {
            return IndexSet::new();
        };

        let haystack = encode_tokens(tokens);
        let mut pattern_set = PatternSet::new(set.pattern_len());
        set.which_overlapping_matches(&Input::new(haystack.as_str()), &mut pattern_set);

        let matches: IndexSet<_> = pattern_set
            .iter()
            .filter_map(|pattern_id| {
                let index = pattern_id.as_usize();
                let length = match self.mode {
                    MatchMode::Full => tokens.len(),
                    MatchMode::Prefix => {
                        let found = self.prefix_regexes.get(index)?.find(haystack.as_str())?;
                        token_count(&haystack, found.end())
                    }
                };

                Some(TokenMatch {
                    result: self.results.get(index)?.clone(),
                    length,
                })
            })
            .collect();

        trace!(tokens = tokens.len(), matches = matches.len(), "matched tokens");

        matches
    }

    /// Every result whose pattern matches `tokens`.
    pub fn results(&self, tokens: &[Token]) -> IndexSet<R> {
        self.matches(tokens)
            .into_iter()
            .map(|token_match| token_match.result)
            .collect()
    }
}
