#![forbid(unsafe_code)]

use question_pattern::Token;

pub use init_tracing::init_test_tracing;

pub mod init_tracing;
pub mod wikidata;

#[macro_export]
macro_rules! expect_eq {
    (expected = $expected:expr, actual = $actual:expr $(,)?) => {
        pretty_assertions::assert_eq!($expected, $actual);
    };
    (actual = $actual:expr, expected = $expected:expr $(,)?) => {
        pretty_assertions::assert_eq!($expected, $actual);
    };
}

pub fn t(word: &str, tag: &str, lemma: &str) -> Token {
    Token::new(word, tag, lemma)
}

/// Parse whitespace separated `word/TAG/lemma` triples.
///
/// A missing lemma defaults to the word: `Obama/NNP`.
pub fn tokens(input: &str) -> Vec<Token> {
    input
        .split_whitespace()
        .map(|triple| {
            let mut parts = triple.split('/');
            let word = parts.next().unwrap_or_default();
            let tag = parts
                .next()
                .unwrap_or_else(|| panic!("token `{triple}` has no tag"));
            let lemma = parts.next().unwrap_or(word);
            t(word, tag, lemma)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples() {
        expect_eq!(
            actual = tokens("the/DT/the oldest/JJS/old Obama/NNP"),
            expected = vec![
                t("the", "DT", "the"),
                t("oldest", "JJS", "old"),
                t("Obama", "NNP", "Obama"),
            ]
        );
        expect_eq!(actual = tokens("oldest/JJS/old")[0].word.as_str(), expected = "oldest");
    }
}
