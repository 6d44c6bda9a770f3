//! Lowering of token patterns to regular expressions.
//!
//! A token sequence is encoded as one string where every token becomes
//! `tag U+001F lemma U+001E`. Token patterns lower to regexes over that
//! encoding, so every match ends on a token boundary.

use crate::{
    matcher::MatchMode,
    pattern::{Pattern, TagCondition, TokenPattern},
    token::Token,
};

const TAG_END: char = '\u{1F}';
const TOKEN_END: char = '\u{1E}';

/// Any tag or lemma text
const FIELD: &str = r"[^\x1E\x1F]*";

pub fn encode_tokens(tokens: &[Token]) -> String {
    let mut haystack = String::new();
    for token in tokens {
        push_field(&mut haystack, &token.tag);
        haystack.push(TAG_END);
        push_field(&mut haystack, &token.lemma);
        haystack.push(TOKEN_END);
    }
    haystack
}

/// Number of tokens covered by the encoded haystack prefix ending at `end`.
pub fn token_count(haystack: &str, end: usize) -> usize {
    haystack
        .get(..end)
        .map(|prefix| prefix.matches(TOKEN_END).count())
        .unwrap_or(0)
}

pub fn regex_source(pattern: &Pattern, mode: MatchMode) -> String {
    let mut source = String::from(r"\A(?:");
    write_pattern(pattern, &mut source);
    source.push(')');
    if mode == MatchMode::Full {
        source.push_str(r"\z");
    }
    source
}

fn write_pattern(pattern: &Pattern, out: &mut String) {
    match pattern {
        Pattern::Token(token) => write_token(token, out),
        Pattern::Sequence(patterns) => {
            for pattern in patterns {
                write_pattern(pattern, out);
            }
        }
        Pattern::Or(patterns) if patterns.is_empty() => {
            // matches nothing
            out.push_str(r"[^\x00-\x{10FFFF}]");
        }
        Pattern::Or(patterns) => {
            out.push_str("(?:");
            for (index, pattern) in patterns.iter().enumerate() {
                if index > 0 {
                    out.push('|');
                }
                write_pattern(pattern, out);
            }
            out.push(')');
        }
        Pattern::Optional(pattern) => {
            out.push_str("(?:");
            write_pattern(pattern, out);
            out.push_str(")?");
        }
        Pattern::Repeat { pattern, min, max } => {
            out.push_str("(?:");
            write_pattern(pattern, out);
            match max {
                Some(max) => out.push_str(&format!("){{{min},{max}}}")),
                None => out.push_str(&format!("){{{min},}}")),
            }
        }
    }
}

fn write_token(token: &TokenPattern, out: &mut String) {
    out.push_str("(?:");
    match &token.tag {
        TagCondition::Any => out.push_str(FIELD),
        TagCondition::Exact(tag) => out.push_str(&escape_field(tag)),
        TagCondition::Prefix(tag) => {
            out.push_str(&escape_field(tag));
            out.push_str(FIELD);
        }
    }
    out.push_str(r"\x1F");
    match &token.lemma {
        Some(lemma) => out.push_str(&escape_field(lemma)),
        None => out.push_str(FIELD),
    }
    out.push_str(r"\x1E)");
}

fn escape_field(text: &str) -> String {
    let mut field = String::new();
    push_field(&mut field, text);
    regex_syntax::escape(&field)
}

fn push_field(out: &mut String, text: &str) {
    out.extend(text.chars().filter(|c| *c != TAG_END && *c != TOKEN_END));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_encoding() {
        let haystack = encode_tokens(&[
            Token::new("died", "VBD", "die"),
            Token::new("in", "IN", "in"),
        ]);
        assert_eq!(haystack, "VBD\u{1F}die\u{1E}IN\u{1F}in\u{1E}");
        assert_eq!(token_count(&haystack, haystack.len()), 2);
        assert_eq!(token_count(&haystack, 8), 1);
    }

    #[test]
    fn lowering_escapes_fields() {
        let pattern =
            Pattern::lemma_tagged("be", TagCondition::prefix("VB")).then(Pattern::tagged(
                TagCondition::exact("PRP$"),
            ));

        assert_eq!(
            regex_source(&pattern, MatchMode::Full),
            r"\A(?:(?:VB[^\x1E\x1F]*\x1Fbe\x1E)(?:PRP\$\x1F[^\x1E\x1F]*\x1E))\z"
        );
    }
}
