//! Sentence segmentation and cleaning.
//!
//! Sentence boundaries are detected naively: a corpus is split into
//! lines and every line is split on the period character. Periods of
//! abbreviations, decimal numbers or ellipses are not special-cased.

/// The field separator of the exported dataset. It must never occur
/// in a sentence.
pub(crate) const SEPARATOR: char = ',';

/// Sentences with this number of characters or less are discarded.
pub(crate) const MIN_LEN: usize = 5;

/// Returns `true` if the character is part of the (wiki) markup which
/// can precede a sentence, e.g. footnote references like `[12]`.
#[inline]
fn is_leading_artifact(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_digit()
        || matches!(c, '[' | ']' | ':' | '(' | ')')
}

/// Cleans a single sentence candidate.
///
/// Removes all separator characters and strips the leading run of
/// whitespace, digits, brackets, colons and parentheses. Returns
/// `None` if the remaining sentence has [MIN_LEN] characters or less.
pub(crate) fn clean(candidate: &str) -> Option<String> {
    let sentence: String =
        candidate.chars().filter(|c| *c != SEPARATOR).collect();
    let sentence = sentence.trim_start_matches(is_leading_artifact);

    if sentence.chars().count() > MIN_LEN {
        Some(sentence.to_string())
    } else {
        None
    }
}

/// Splits a corpus into cleaned sentences.
///
/// The sentences are returned in the order of their occurrence in the
/// corpus.
pub(crate) fn split_sentences(content: &str) -> Vec<String> {
    content
        .lines()
        .flat_map(|line| line.split('.'))
        .filter_map(clean)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_leading_artifacts() {
        assert_eq!(
            clean(" [12]: (3) Hello world"),
            Some("Hello world".into())
        );
        assert_eq!(clean("\t 1999 was a year"), Some("was a year".into()));
        assert_eq!(clean("Hello (world)"), Some("Hello (world)".into()));
    }

    #[test]
    fn clean_short_candidates() {
        assert_eq!(clean(""), None);
        assert_eq!(clean("Ca va"), None);
        assert_eq!(clean(" [1] Hello"), None);
        assert_eq!(clean("Hello!"), Some("Hello!".into()));
        assert_eq!(clean("  123456 "), None);
    }

    #[test]
    fn clean_counts_characters() {
        assert_eq!(clean("éèàùç"), None);
        assert_eq!(clean("éèàùçô"), Some("éèàùçô".into()));
    }

    #[test]
    fn clean_removes_separator() {
        assert_eq!(
            clean("Hola, mundo, que tal"),
            Some("Hola mundo que tal".into())
        );
        assert_eq!(clean("a,b,c,d,e"), None);
        // Commas are removed before the leading run is stripped, so the
        // space and digits after a leading comma are stripped as well.
        assert_eq!(clean(", 12 hello world"), Some("hello world".into()));
    }

    #[test]
    fn split_sentences_order() {
        let content = "First sentence. Second one.\n\
            [1] Third sentence. Ok.\n\n\
            Fourth, and last";

        assert_eq!(
            split_sentences(content),
            vec![
                "First sentence",
                "Second one",
                "Third sentence",
                "Fourth and last",
            ]
        );
    }

    #[test]
    fn split_sentences_naive_boundaries() {
        assert_eq!(
            split_sentences("Version 2.0 is out. Mr. Smith agrees."),
            vec!["Version 2", "is out", "Smith agrees"]
        );
    }

    #[test]
    fn split_sentences_crlf() {
        assert_eq!(
            split_sentences("Hello world\r\nHow are you\r\n"),
            vec!["Hello world", "How are you"]
        );
    }

    #[test]
    fn split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("\n\n...\n").is_empty());
    }

    #[test]
    fn cleaning_is_idempotent() {
        let content = "  (1) Lorem ipsum, dolor sit amet. 2: consectetur \
            adipiscing elit.\n[3] Sed do eiusmod, tempor. Ut, 4 labore.";

        let sentences = split_sentences(content);
        assert!(!sentences.is_empty());

        for sentence in sentences.iter() {
            assert_eq!(clean(sentence).as_ref(), Some(sentence));
            assert!(!sentence.contains(SEPARATOR));
            assert!(sentence.chars().count() > MIN_LEN);
        }

        assert_eq!(split_sentences(&sentences.join("\n")), sentences);
    }
}
