/// Turns a human title into a url slug.
///
/// Letters are lower-cased, anything that is not an ascii letter, digit,
/// whitespace, `_` or `-` is dropped, and every run of whitespace, `_` and `-`
/// becomes a single hyphen. Leading and trailing hyphens are trimmed. When
/// nothing is left the numeric `fallback_id` is used instead, so every item
/// still gets an address.
pub fn slugify(title: &str, fallback_id: u64) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        fallback_id.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_slug(value: &str) -> bool {
        !value.is_empty()
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[test]
    fn strips_punctuation_and_collapses_whitespace() {
        assert_eq!(slugify("Hello, World!  Example", 1), "hello-world-example");
    }

    #[test]
    fn empty_title_falls_back_to_id() {
        assert_eq!(slugify("", 42), "42");
        assert_eq!(slugify("   ", 7), "7");
        assert_eq!(slugify("!!! ???", 9), "9");
    }

    #[test]
    fn trims_edge_hyphens() {
        assert_eq!(slugify("  -- Remote Online Notarization --  ", 1), "remote-online-notarization");
        assert_eq!(slugify("_apostille_ services_", 1), "apostille-services");
    }

    #[test]
    fn symbols_inside_words_are_dropped_not_split() {
        assert_eq!(slugify("Don't sign & date", 1), "dont-sign-date");
        assert_eq!(slugify("Loan-signing 101", 1), "loan-signing-101");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Café Notaría", 1), "caf-notara");
    }

    #[test]
    fn slugify_is_idempotent() {
        let inputs = [
            "",
            "Hello, World!  Example",
            "  leading and trailing  ",
            "a--b__c  d",
            "ALL CAPS TITLE",
            "Ünïcödé ünd sö",
            "---",
            "already-a-slug",
            "42",
            "Tabs\tand\nnewlines",
        ];
        for input in inputs {
            let once = slugify(input, 3);
            assert_eq!(slugify(&once, 3), once, "input: {input:?}");
            assert!(is_slug(&once), "not a slug: {once:?}");
        }
    }

    #[test]
    fn is_slug_rejects_malformed_values() {
        assert!(is_slug("how-to-get-a-document-notarized"));
        assert!(!is_slug(""));
        assert!(!is_slug("-lead"));
        assert!(!is_slug("trail-"));
        assert!(!is_slug("double--hyphen"));
        assert!(!is_slug("Upper"));
    }
}
